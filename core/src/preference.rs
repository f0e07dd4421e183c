use std::collections::HashMap;

pub const DARK_VALUE: &str = "dark";
pub const LIGHT_VALUE: &str = "light";
pub const DARK_CLASS: &str = "dark-mode";
pub const LIGHT_CLASS: &str = "light-mode";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(DARK_VALUE) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn from_checked(checked: bool) -> Self {
        if checked {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn as_stored(self) -> &'static str {
        match self {
            ThemeMode::Light => LIGHT_VALUE,
            ThemeMode::Dark => DARK_VALUE,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

pub fn load_theme(store: &dyn PreferenceStore, key: &str) -> ThemeMode {
    ThemeMode::from_stored(store.get(key).as_deref())
}

/// Persists the toggle state and returns the mode to apply.
pub fn persist_theme(store: &mut dyn PreferenceStore, key: &str, checked: bool) -> ThemeMode {
    let mode = ThemeMode::from_checked(checked);
    store.set(key, mode.as_stored());
    mode
}
