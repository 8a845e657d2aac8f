use crate::category::Filter;
use crate::controller::ThemeStart;
use crate::prefs::{FlagStore, JsonFileStore, MemoryStore};
use crate::theme::ColorScheme;
use std::path::PathBuf;

/// Everything the interactive session needs at startup.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Preference file; `None` means the OS config directory.
    pub prefs_path: Option<PathBuf>,
    /// When false the theme toggle only lasts for the session.
    pub persist: bool,
    pub theme_override: Option<bool>,
    pub filter: Filter,
    pub search: String,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        LaunchOptions {
            prefs_path: None,
            persist: true,
            theme_override: None,
            filter: Filter::All,
            search: String::new(),
        }
    }
}

impl LaunchOptions {
    /// Opens the configured store. An unreadable preference file degrades to
    /// an in-memory store so the table still starts.
    pub fn open_store(&self) -> Box<dyn FlagStore> {
        if !self.persist {
            return Box::new(MemoryStore::new());
        }
        let opened = match &self.prefs_path {
            Some(path) => JsonFileStore::open(path),
            None => JsonFileStore::open_default(),
        };
        match opened {
            Ok(store) => Box::new(store),
            Err(e) => {
                tracing::warn!(error = %e, "preferences unavailable, using session-only store");
                Box::new(MemoryStore::new())
            }
        }
    }

    pub fn theme_start(&self, ambient: ColorScheme) -> ThemeStart {
        match self.theme_override {
            Some(dark) => ThemeStart::Override(dark),
            None => ThemeStart::Restore(ambient),
        }
    }
}
