use std::collections::{BTreeMap, HashSet};

use crate::card::{Card, CardId};
use crate::category::FilterKey;
use crate::config::GalleryConfig;
use crate::events::GalleryEvent;
use crate::manifest::ManifestGroup;
use crate::viewer::{Viewer, ViewerChange, ViewerKey, ViewerView};

/// Model behind the page: every card from the last manifest load, the
/// live subset still in the container, the navigation snapshot and the
/// viewer session.
///
/// Mutators return the events the caller should emit once it has released
/// any borrow on the model.
#[derive(Default)]
pub struct Gallery {
    config: GalleryConfig,
    cards: BTreeMap<CardId, Card>,
    live: Vec<CardId>,
    snapshot: Vec<CardId>,
    pending_loads: HashSet<CardId>,
    viewer: Viewer,
    next_id: usize,
}

impl Gallery {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Replaces the gallery contents with one card per manifest entry, in
    /// encounter order, and captures the navigation snapshot.
    pub fn load_manifest(&mut self, groups: &[ManifestGroup]) -> (Vec<Card>, Vec<GalleryEvent>) {
        self.cards.clear();
        self.live.clear();
        self.pending_loads.clear();
        self.viewer.close();

        let mut created = Vec::new();
        for group in groups {
            for entry in &group.images {
                let id = CardId(self.next_id);
                self.next_id += 1;
                let card = Card::from_entry(id, &self.config, &group.folder, &group.category, entry);
                self.live.push(id);
                self.pending_loads.insert(id);
                created.push(card.clone());
                self.cards.insert(id, card);
            }
        }
        self.snapshot = self.live.clone();

        let mut events = vec![GalleryEvent::CardsChanged];
        if self.pending_loads.is_empty() {
            events.push(GalleryEvent::ImagesSettled);
        }
        (created, events)
    }

    pub fn image_loaded(&mut self, id: CardId) -> Vec<GalleryEvent> {
        self.settle(id).into_iter().collect()
    }

    /// Drops the card from the container. It stays in the snapshot.
    pub fn image_failed(&mut self, id: CardId) -> Vec<GalleryEvent> {
        let mut events = Vec::new();
        if let Some(pos) = self.live.iter().position(|live| *live == id) {
            self.live.remove(pos);
            events.push(GalleryEvent::CardsChanged);
        }
        events.extend(self.settle(id));
        events
    }

    fn settle(&mut self, id: CardId) -> Option<GalleryEvent> {
        if !self.pending_loads.remove(&id) {
            return None;
        }
        self.pending_loads
            .is_empty()
            .then_some(GalleryEvent::ImagesSettled)
    }

    pub fn pending_loads(&self) -> usize {
        self.pending_loads.len()
    }

    /// Visibility of every live card under `key`, in container order.
    /// Filtering never changes membership.
    pub fn apply_filter(&self, key: &FilterKey) -> (Vec<(CardId, bool)>, Vec<GalleryEvent>) {
        let changes = self
            .live
            .iter()
            .filter_map(|id| self.cards.get(id))
            .map(|card| (card.id, key.matches(&card.categories)))
            .collect();
        (changes, vec![GalleryEvent::VisibilityChanged])
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn snapshot(&self) -> &[CardId] {
        &self.snapshot
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Returns the view to render, or `None` when nothing changed.
    pub fn open_card(&mut self, id: CardId) -> Option<ViewerView> {
        let change = self.viewer.open(&self.snapshot, id);
        self.render(change)
    }

    pub fn viewer_key(&mut self, key: ViewerKey) -> Option<ViewerView> {
        let change = self.viewer.handle_key(&self.snapshot, key);
        self.render(change)
    }

    /// Closing always yields the cleared view, even if already closed.
    pub fn close_viewer(&mut self) -> ViewerView {
        self.viewer.close();
        ViewerView::default()
    }

    fn render(&self, change: ViewerChange) -> Option<ViewerView> {
        match change {
            ViewerChange::Unchanged => None,
            ViewerChange::Cleared => Some(ViewerView::default()),
            ViewerChange::Show(id) => Some(
                self.cards
                    .get(&id)
                    .map(ViewerView::from_card)
                    .unwrap_or_default(),
            ),
        }
    }
}
