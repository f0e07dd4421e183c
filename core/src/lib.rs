pub mod card;
pub mod category;
pub mod config;
pub mod events;
pub mod gallery;
pub mod manifest;
pub mod preference;
pub mod viewer;

pub use card::{Card, CardId};
pub use category::{display_label, FilterKey};
pub use config::GalleryConfig;
pub use events::{EventBus, GalleryEvent, GalleryHook, SubscriptionId};
pub use gallery::Gallery;
pub use manifest::{parse_manifest, ImageEntry, ManifestError, ManifestGroup};
pub use preference::{load_theme, persist_theme, MemoryStore, PreferenceStore, ThemeMode};
pub use viewer::{Viewer, ViewerKey, ViewerState, ViewerView};
