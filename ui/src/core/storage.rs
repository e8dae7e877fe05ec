//! Local persistence for user settings.
//!
//! Settings are plain string key/value pairs. The browser build keeps them in
//! `localStorage`; native builds write a small JSON object to the per-user
//! config directory. Callers go through [`SettingsHandle`] so the backend can
//! be swapped (tests use [`MemoryStore`]).

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("settings storage is not available")]
    Unavailable,
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage backend rejected the request: {0}")]
    Backend(String),
}

/// Key/value persistence for settings.
pub trait SettingsStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Shared, cheaply cloneable handle to a settings backend.
///
/// Two handles are equal when they point at the same backend instance, which
/// lets the handle travel as a component prop.
#[derive(Clone)]
pub struct SettingsHandle(Rc<dyn SettingsStore>);

impl SettingsHandle {
    pub fn new(store: impl SettingsStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl Deref for SettingsHandle {
    type Target = dyn SettingsStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for SettingsHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SettingsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SettingsHandle(..)")
    }
}

/// In-process store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|err| StorageError::Backend(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl SettingsStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }
}

/// JSON object file holding every setting (`{"lang": "en"}`).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    const FILE_NAME: &'static str = "settings.json";

    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `settings.json` inside the platform config directory, if one exists.
    pub fn in_config_dir() -> Option<Self> {
        directories::ProjectDirs::from("io", "AlexonMorris", "axm-portfolio")
            .map(|dirs| Self::new(dirs.config_dir().join(Self::FILE_NAME)))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SettingsStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every future write.
        // Any other read failure aborts so the existing entries survive.
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StorageError::Json(err)) => {
                tracing::warn!(%err, path = %self.path.display(), "replacing corrupt settings file");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Settings backend for the current platform.
#[cfg(target_arch = "wasm32")]
pub fn default_store() -> SettingsHandle {
    SettingsHandle::new(LocalStorage)
}

/// Settings backend for the current platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> SettingsHandle {
    match FileStore::in_config_dir() {
        Some(store) => {
            tracing::debug!(path = %store.path().display(), "using settings file");
            SettingsHandle::new(store)
        }
        None => {
            tracing::warn!("no config directory available; settings will not survive a restart");
            SettingsHandle::new(MemoryStore::default())
        }
    }
}
