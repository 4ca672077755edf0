pub mod memory;
pub mod sqlite;

use crate::types::ThemePreference;

#[derive(Debug)]
pub enum PersistError {
    Sqlite(rusqlite::Error),
    Serde(serde_json::Error),
    Message(String),
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

pub type PersistResult<T> = Result<T, PersistError>;

/// Storage key for the theme preference, shared with the mobile app.
pub const THEME_KEY: &str = "@agetech_theme";

/// Durable home for the few user preferences that outlive a session.
pub trait PreferenceStore: Send {
    fn load_theme(&self) -> PersistResult<Option<ThemePreference>>;
    fn store_theme(&mut self, theme: ThemePreference) -> PersistResult<()>;
    fn clear_theme(&mut self) -> PersistResult<()> {
        Ok(())
    }
}

/// Encodes a theme the way the mobile app stores it: the bare word.
pub(crate) fn encode_theme(theme: ThemePreference) -> &'static str {
    theme.as_str()
}

/// Decodes a stored theme value, bare (`light`) or JSON-quoted (`"light"`).
/// Anything unrecognized means "follow the system" rather than an error.
pub(crate) fn decode_theme(raw: &str) -> Option<ThemePreference> {
    match raw {
        "light" => return Some(ThemePreference::Light),
        "dark" => return Some(ThemePreference::Dark),
        _ => {}
    }
    match serde_json::from_str::<ThemePreference>(raw) {
        Ok(theme) => Some(theme),
        Err(err) => {
            log::warn!("ignoring unrecognized stored theme {raw:?}: {err}");
            None
        }
    }
}
