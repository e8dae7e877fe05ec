//! Persisted language preference.

use tracing::{debug, warn};

use super::lang::Lang;
use super::storage::SettingsHandle;

/// Settings key holding the language code.
pub const LANG_KEY: &str = "lang";

/// The active language plus the store it is mirrored to.
///
/// Every change is written back synchronously; storage failures are logged
/// and otherwise ignored so the page keeps working with storage disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    current: Lang,
    store: SettingsHandle,
}

impl LanguagePreference {
    /// Restore the preference from `store`, defaulting to [`Lang::Ru`] when
    /// nothing usable is stored. The resolved value is written back at once.
    pub fn load(store: SettingsHandle) -> Self {
        let current = match store.load(LANG_KEY) {
            Ok(Some(raw)) if raw.trim().is_empty() => Lang::default(),
            Ok(Some(raw)) => Lang::from_code(&raw).unwrap_or_else(|| {
                warn!(stored = %raw, "unsupported language code in settings; using default");
                Lang::default()
            }),
            Ok(None) => Lang::default(),
            Err(err) => {
                warn!(%err, "could not read language preference; using default");
                Lang::default()
            }
        };

        let pref = Self { current, store };
        pref.persist();
        pref
    }

    pub fn get(&self) -> Lang {
        self.current
    }

    /// Switch to the other language and persist it. Returns the new value.
    pub fn toggle(&mut self) -> Lang {
        self.current = self.current.toggled();
        debug!(lang = %self.current, "language toggled");
        self.persist();
        self.current
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(LANG_KEY, self.current.code()) {
            warn!(%err, "could not persist language preference");
        }
    }
}
