use crate::{
    persist::{PersistResult, PreferenceStore},
    types::ThemePreference,
};

/// Theme choice for one app session.
///
/// `None` follows the system palette. Once the user picks explicitly, a
/// late-arriving stored value no longer overrides the pick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeState {
    scheme: Option<ThemePreference>,
    user_has_set: bool,
}

impl ThemeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a value read from storage. Returns false if it was ignored
    /// because the user already chose.
    pub fn apply_loaded(&mut self, stored: Option<ThemePreference>) -> bool {
        if self.user_has_set {
            log::warn!("stored theme {stored:?} ignored; user already chose {:?}", self.scheme);
            return false;
        }
        self.scheme = stored;
        true
    }

    pub fn load_from(&mut self, store: &dyn PreferenceStore) -> PersistResult<bool> {
        let stored = store.load_theme()?;
        Ok(self.apply_loaded(stored))
    }

    /// Records an explicit choice and persists it.
    ///
    /// The in-session value changes even if persisting fails.
    pub fn set(
        &mut self,
        theme: ThemePreference,
        store: &mut dyn PreferenceStore,
    ) -> PersistResult<()> {
        self.user_has_set = true;
        self.scheme = Some(theme);
        store.store_theme(theme)
    }

    /// Flips the resolved palette and persists the result.
    pub fn toggle(
        &mut self,
        system: ThemePreference,
        store: &mut dyn PreferenceStore,
    ) -> PersistResult<ThemePreference> {
        let next = self.resolve(system).toggled();
        self.set(next, store)?;
        Ok(next)
    }

    pub fn scheme(&self) -> Option<ThemePreference> {
        self.scheme
    }

    pub fn resolve(&self, system: ThemePreference) -> ThemePreference {
        self.scheme.unwrap_or(system)
    }

    pub fn user_has_set(&self) -> bool {
        self.user_has_set
    }
}
