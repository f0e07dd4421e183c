use crate::category::display_label;
use crate::config::GalleryConfig;
use crate::manifest::ImageEntry;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub image_src: String,
    pub title: String,
    pub medium: String,
    pub year: String,
    pub description: String,
    pub categories: Vec<String>,
    pub label: String,
}

impl Card {
    pub fn from_entry(
        id: CardId,
        config: &GalleryConfig,
        folder: &str,
        categories: &[String],
        entry: &ImageEntry,
    ) -> Self {
        Self {
            id,
            image_src: config.image_src(folder, &entry.file),
            title: entry.title.clone(),
            medium: entry.medium.clone().unwrap_or_default(),
            year: entry.year.clone().unwrap_or_default(),
            description: entry.description.clone().unwrap_or_default(),
            categories: categories.to_vec(),
            label: display_label(categories),
        }
    }

    /// Space separated tag list, as stored on the card element.
    pub fn category_attr(&self) -> String {
        self.categories.join(" ")
    }
}
