//! SQLite-backed preference store.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{Connection, OptionalExtension, params};

use crate::types::ThemePreference;

use super::{PersistResult, PreferenceStore, THEME_KEY, decode_theme, encode_theme};

/// SQLite implementation of [`crate::persist::PreferenceStore`].
pub struct SqlitePreferenceStore {
    conn: Connection,
}

impl SqlitePreferenceStore {
    /// Opens or creates a preference database at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        let conn = Connection::open(path)?;
        Self::init_connection(conn)
    }

    /// Opens an in-memory preference database.
    pub fn open_in_memory() -> PersistResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> PersistResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self { conn })
    }

    /// Reads the raw encoded value stored under `key`.
    pub fn get_raw(&self, key: &str) -> PersistResult<Option<String>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(raw)
    }

    /// Upserts a raw encoded value under `key`.
    pub fn put_raw(&mut self, key: &str, raw: &str) -> PersistResult<()> {
        self.conn.execute(
            "INSERT INTO preferences(key, value, updated_ms) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_ms = excluded.updated_ms",
            params![key, raw, now_ms() as i64],
        )?;
        Ok(())
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn load_theme(&self) -> PersistResult<Option<ThemePreference>> {
        let theme = self.get_raw(THEME_KEY)?.and_then(|raw| decode_theme(&raw));
        log::debug!("loaded theme preference {theme:?}");
        Ok(theme)
    }

    fn store_theme(&mut self, theme: ThemePreference) -> PersistResult<()> {
        self.put_raw(THEME_KEY, encode_theme(theme))?;
        log::debug!("stored theme preference {theme:?}");
        Ok(())
    }

    fn clear_theme(&mut self) -> PersistResult<()> {
        self.conn
            .execute("DELETE FROM preferences WHERE key = ?1", params![THEME_KEY])?;
        Ok(())
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
