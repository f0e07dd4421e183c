use crate::config::{FILTER_ALL, FILTER_ALL_WORK, UMBRELLA_TAGS};

pub fn is_umbrella_tag(tag: &str) -> bool {
    UMBRELLA_TAGS.contains(&tag)
}

/// Human readable label for a card: the last non-umbrella tag, with
/// underscores turned into spaces and each word capitalized.
pub fn display_label<S: AsRef<str>>(tags: &[S]) -> String {
    let Some(tag) = tags
        .iter()
        .map(AsRef::as_ref)
        .rev()
        .find(|tag| !is_umbrella_tag(tag))
    else {
        return String::new();
    };
    capitalize_words(&tag.replace('_', " "))
}

// Word boundaries follow ASCII word characters, so `2d art` becomes `2d Art`
// and a letter after a non-ASCII character starts a new word.
fn capitalize_words(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_word = false;
    for ch in value.chars() {
        let word = ch.is_ascii_alphanumeric() || ch == '_';
        if word && !prev_word {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        prev_word = word;
    }
    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterKey {
    All,
    AllWork,
    Tag(String),
}

impl FilterKey {
    pub fn parse(value: &str) -> Self {
        match value {
            FILTER_ALL => FilterKey::All,
            FILTER_ALL_WORK => FilterKey::AllWork,
            other => FilterKey::Tag(other.to_string()),
        }
    }

    /// Matches against the full tag set, umbrella tags included.
    pub fn matches<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        match self {
            FilterKey::All | FilterKey::AllWork => true,
            FilterKey::Tag(key) => tags.iter().any(|tag| tag.as_ref() == key),
        }
    }
}
