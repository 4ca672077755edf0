//! Process-local preference store, used in tests and previews.

use hashbrown::HashMap;

use crate::types::ThemePreference;

use super::{PersistResult, PreferenceStore, THEME_KEY, decode_theme, encode_theme};

/// Keeps encoded preference values in a map, like the SQLite table does.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw encoded value, bypassing validation.
    pub fn with_raw(mut self, key: &str, raw: &str) -> Self {
        self.values.insert(key.to_string(), raw.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_theme(&self) -> PersistResult<Option<ThemePreference>> {
        Ok(self.values.get(THEME_KEY).and_then(|raw| decode_theme(raw)))
    }

    fn store_theme(&mut self, theme: ThemePreference) -> PersistResult<()> {
        self.values
            .insert(THEME_KEY.to_string(), encode_theme(theme).to_string());
        Ok(())
    }

    fn clear_theme(&mut self) -> PersistResult<()> {
        self.values.remove(THEME_KEY);
        Ok(())
    }
}
