pub const MANIFEST_PATH: &str = "titles.json";
pub const IMAGE_ROOT: &str = "images";
pub const THEME_KEY: &str = "theme";

/// Tags that only group work for top-level filtering and never show up as
/// the card label.
pub const UMBRELLA_TAGS: &[&str] = &["all_work", "my_work", "student_work"];

pub const FILTER_ALL: &str = "all";
pub const FILTER_ALL_WORK: &str = "all_work";

pub const CARD_SELECTOR: &str = ".card";
pub const SIZER_SELECTOR: &str = ".grid-sizer";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryConfig {
    pub manifest_path: String,
    pub image_root: String,
    pub theme_key: String,
    pub card_selector: String,
    pub sizer_selector: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            manifest_path: MANIFEST_PATH.to_string(),
            image_root: IMAGE_ROOT.to_string(),
            theme_key: THEME_KEY.to_string(),
            card_selector: CARD_SELECTOR.to_string(),
            sizer_selector: SIZER_SELECTOR.to_string(),
        }
    }
}

impl GalleryConfig {
    /// Applies a manifest override, ignoring blank values.
    pub fn with_manifest_override(mut self, value: Option<&str>) -> Self {
        if let Some(value) = value {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                self.manifest_path = trimmed.to_string();
            }
        }
        self
    }

    pub fn image_src(&self, folder: &str, file: &str) -> String {
        let root = self.image_root.trim_end_matches('/');
        let folder = folder.trim_matches('/');
        if root.is_empty() {
            format!("{folder}/{file}")
        } else {
            format!("{root}/{folder}/{file}")
        }
    }
}
