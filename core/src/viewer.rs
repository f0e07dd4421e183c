use crate::card::{Card, CardId};

pub const MEDIUM_PREFIX: &str = "Medium: ";
pub const YEAR_PREFIX: &str = "Year: ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerKey {
    Next,
    Previous,
    Cancel,
    Other,
}

impl ViewerKey {
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowRight" => ViewerKey::Next,
            "ArrowLeft" => ViewerKey::Previous,
            "Escape" => ViewerKey::Cancel,
            _ => ViewerKey::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Text and image shown in the lightbox. `ViewerView::default()` is the
/// cleared view used while closed.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ViewerView {
    pub open: bool,
    pub image_src: String,
    pub title: String,
    pub medium: String,
    pub year: String,
    pub description: String,
}

impl ViewerView {
    pub fn from_card(card: &Card) -> Self {
        Self {
            open: true,
            image_src: card.image_src.clone(),
            title: card.title.clone(),
            medium: prefixed(MEDIUM_PREFIX, &card.medium),
            year: prefixed(YEAR_PREFIX, &card.year),
            description: card.description.clone(),
        }
    }
}

fn prefixed(prefix: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{prefix}{value}")
    }
}

/// What the caller must do after feeding an input to the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerChange {
    Unchanged,
    Show(CardId),
    Cleared,
}

#[derive(Clone, Debug, Default)]
pub struct Viewer {
    state: ViewerState,
}

impl Viewer {
    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            ViewerState::Open { index } => Some(index),
            ViewerState::Closed => None,
        }
    }

    /// Opens on the snapshot entry for `id`. Cards missing from the
    /// snapshot leave the viewer untouched.
    pub fn open(&mut self, snapshot: &[CardId], id: CardId) -> ViewerChange {
        let Some(index) = snapshot.iter().position(|candidate| *candidate == id) else {
            return ViewerChange::Unchanged;
        };
        self.state = ViewerState::Open { index };
        ViewerChange::Show(id)
    }

    pub fn close(&mut self) -> ViewerChange {
        self.state = ViewerState::Closed;
        ViewerChange::Cleared
    }

    pub fn handle_key(&mut self, snapshot: &[CardId], key: ViewerKey) -> ViewerChange {
        let ViewerState::Open { index } = self.state else {
            return ViewerChange::Unchanged;
        };
        let len = snapshot.len();
        let next = match key {
            ViewerKey::Cancel => return self.close(),
            ViewerKey::Other => return ViewerChange::Unchanged,
            _ if len == 0 => return ViewerChange::Unchanged,
            ViewerKey::Next => (index + 1) % len,
            ViewerKey::Previous => (index % len + len - 1) % len,
        };
        self.state = ViewerState::Open { index: next };
        ViewerChange::Show(snapshot[next])
    }
}
