//! The process-wide theme preference.
//!
//! One [`ThemeStore`] is shared by every surface that shows or changes the theme (header button,
//! overlay menu, keyboard shortcut). It reads durable storage once when created, writes back on
//! every mutation and notifies observers synchronously with the new value.
//!
//! `System` is kept as a preference in its own right; turning it into a concrete scheme needs a
//! platform answer, which [`ThemePreference::resolve`] takes as an argument.

use crate::error::{Error, Result};
use crate::listener::Subscription;
use crate::section::Glyph;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};
use std::{fs, io};

/// Storage key holding the serialised preference.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// The user's chosen display mode.
pub enum ThemePreference {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the platform colour scheme.
    #[default]
    System,
}

impl ThemePreference {
    /// Every preference in cycle order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    #[must_use]
    /// The preference after this one: light, dark, system, then light again.
    pub const fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    #[must_use]
    /// Tag written to storage.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    /// Parses a stored tag. Anything but the three exact tags is rejected.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.tag() == tag)
    }

    #[must_use]
    /// Icon shown on the theme button.
    pub const fn glyph(self) -> Glyph {
        match self {
            Self::Light => Glyph::Sun,
            Self::Dark => Glyph::Moon,
            Self::System => Glyph::Monitor,
        }
    }

    #[must_use]
    /// Concrete scheme, given whether the platform currently prefers dark.
    pub const fn resolve(self, system_is_dark: bool) -> Scheme {
        match self {
            Self::Light => Scheme::Light,
            Self::Dark => Scheme::Dark,
            Self::System => {
                if system_is_dark {
                    Scheme::Dark
                } else {
                    Scheme::Light
                }
            }
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A concrete colour scheme.
pub enum Scheme {
    /// Dark text on a light background.
    Light,
    /// Light text on a dark background.
    Dark,
}

// --- <Storage> ---

/// Durable key/value storage for preferences.
pub trait PreferenceStorage: Send + Sync {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
/// Storage that lives only as long as the process.
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Storage pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
/// On-disk layout of the state file: the theme plus whatever else shares the file.
struct StateFile {
    #[serde(
        default,
        deserialize_with = "lenient_theme",
        skip_serializing_if = "Option::is_none"
    )]
    theme: Option<ThemePreference>,
    #[serde(flatten)]
    other: Map<String, Value>,
}

/// Reads the theme field, treating an unrecognised value as absent.
fn lenient_theme<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<ThemePreference>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(ThemePreference::deserialize(&value)
        .inspect_err(|_| tracing::warn!(%value, "ignoring unknown stored theme"))
        .ok())
}

#[derive(Debug, Clone)]
/// Storage backed by a JSON object on disk; survives restarts.
///
/// The theme is a typed field of the file; other keys are preserved on write. A file that cannot
/// be parsed is replaced on the next write.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    #[must_use]
    /// Storage at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    /// Default location: `folio/state.json` under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| Path::new(&home).join(".config")))?;
        Some(base.join("folio").join("state.json"))
    }

    #[must_use]
    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_file(&self) -> Result<StateFile> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StateFile::default()),
            Err(e) => return Err(Error::io(&self.path, e)),
        };
        Ok(serde_json::from_str(&contents)?)
    }
}

impl PreferenceStorage for JsonFileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let file = self.load_file()?;
        if key == THEME_KEY {
            return Ok(file.theme.map(|theme| theme.tag().to_string()));
        }
        Ok(file.other.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut file = self.load_file().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "replacing unreadable state file");
            StateFile::default()
        });
        if key == THEME_KEY {
            file.theme = ThemePreference::from_tag(value);
        } else {
            file.other
                .insert(key.to_string(), Value::String(value.to_string()));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
        }
        let serialized = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, serialized).map_err(|e| Error::io(&self.path, e))
    }
}

// --- </Storage> ---

type Observer = Arc<dyn Fn(ThemePreference) + Send + Sync>;

static GLOBAL: OnceLock<Arc<ThemeStore>> = OnceLock::new();

/// Holds the theme preference, persists it and fans out changes.
pub struct ThemeStore {
    current: RwLock<ThemePreference>,
    storage: Box<dyn PreferenceStorage>,
    observers: Mutex<Vec<(u64, Observer)>>,
    next_observer: AtomicU64,
    fanout: Mutex<()>,
}

impl ThemeStore {
    #[must_use]
    /// Creates a store, reading the initial preference from `storage`.
    ///
    /// A missing, unreadable or unrecognised value starts the store at `System`.
    pub fn load(storage: impl PreferenceStorage + 'static) -> Self {
        let initial = match storage.read(THEME_KEY) {
            Ok(Some(tag)) => ThemePreference::from_tag(&tag).unwrap_or_else(|| {
                tracing::warn!(%tag, "ignoring unknown stored theme");
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored theme");
                ThemePreference::default()
            }
        };
        tracing::debug!(theme = %initial, "theme preference loaded");

        Self {
            current: RwLock::new(initial),
            storage: Box::new(storage),
            observers: Mutex::new(Vec::new()),
            next_observer: AtomicU64::new(0),
            fanout: Mutex::new(()),
        }
    }

    /// Initialises the process-wide store, or returns it if it already exists.
    ///
    /// `storage` is only read on the first call.
    pub fn init_global(storage: impl PreferenceStorage + 'static) -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::load(storage))))
    }

    #[must_use]
    /// The process-wide store, if [`ThemeStore::init_global`] has run.
    pub fn global() -> Option<Arc<Self>> {
        GLOBAL.get().cloned()
    }

    #[must_use]
    /// The current preference.
    pub fn get(&self) -> ThemePreference {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Assigns the preference, persists it and notifies observers.
    ///
    /// A failed write is logged; the in-memory value and notifications still go ahead.
    pub fn set(&self, theme: ThemePreference) {
        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            let previous = *current;
            tracing::debug!(from = %previous, to = %theme, "theme preference changed");
            *current = theme;
            if let Err(e) = self.storage.write(THEME_KEY, theme.tag()) {
                tracing::warn!(error = %e, "could not persist theme preference");
            }
        }
        self.notify();
    }

    /// Advances to the next preference and returns it.
    pub fn cycle(&self) -> ThemePreference {
        let next = {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            let previous = *current;
            let next = previous.next();
            tracing::debug!(from = %previous, to = %next, "theme preference cycled");
            *current = next;
            if let Err(e) = self.storage.write(THEME_KEY, next.tag()) {
                tracing::warn!(error = %e, "could not persist theme preference");
            }
            next
        };
        self.notify();
        next
    }

    /// Calls `observer` with every new preference until the guard is dropped.
    ///
    /// Observers run one delivery at a time and must not mutate the store themselves.
    pub fn subscribe<F>(self: &Arc<Self>, observer: F) -> Subscription
    where
        F: Fn(ThemePreference) + Send + Sync + 'static,
    {
        let id = self.next_observer.fetch_add(1, Ordering::Relaxed);
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(observer)));

        let store = Arc::downgrade(self);
        Subscription::new(move || {
            if let Some(store) = store.upgrade() {
                store
                    .observers
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .retain(|(other, _)| *other != id);
            }
        })
    }

    #[must_use]
    /// Number of live observers.
    pub fn observer_count(&self) -> usize {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Delivers the current value to every observer.
    ///
    /// Deliveries are serialised and each one re-reads the value, so the last value an observer
    /// sees is the store's value even when writers race.
    fn notify(&self) {
        let _fanout = self.fanout.lock().unwrap_or_else(PoisonError::into_inner);
        let theme = self.get();
        let snapshot: Vec<Observer> = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in snapshot {
            observer(theme);
        }
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.get())
            .field("observers", &self.observer_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/theme.rs"]
mod tests;
