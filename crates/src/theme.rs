//! Dark mode preference: restore, toggle and ambient detection.
//!
//! The stored value wins when it is exactly `"true"` or `"false"`. Anything
//! else (including no value) falls back to the terminal's color scheme.

use crate::prefs::FlagStore;

pub const STORAGE_KEY: &str = "darkMode";

/// Environment variable that forces the ambient scheme (`dark` or `light`).
pub const SCHEME_ENV: &str = "PTABLE_COLOR_SCHEME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    Dark,
    Light,
    #[default]
    Unknown,
}

impl ColorScheme {
    pub fn prefers_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    /// Reads the scheme from the process environment.
    pub fn detect() -> Self {
        let forced = std::env::var(SCHEME_ENV).ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        Self::from_env_values(forced.as_deref(), colorfgbg.as_deref())
    }

    pub fn from_env_values(forced: Option<&str>, colorfgbg: Option<&str>) -> Self {
        if let Some(v) = forced {
            match v.trim().to_lowercase().as_str() {
                "dark" => return ColorScheme::Dark,
                "light" => return ColorScheme::Light,
                _ => {}
            }
        }
        colorfgbg.map_or(ColorScheme::Unknown, parse_colorfgbg)
    }
}

// COLORFGBG is "fg;bg" or "fg;default;bg"; the last field is the background
// palette index.
fn parse_colorfgbg(value: &str) -> ColorScheme {
    match value.rsplit(';').next().map(str::trim).map(str::parse::<u8>) {
        Some(Ok(0..=6 | 8)) => ColorScheme::Dark,
        Some(Ok(7 | 9..=15)) => ColorScheme::Light,
        _ => ColorScheme::Unknown,
    }
}

/// Startup flag: stored preference if present and well-formed, else ambient.
pub fn restore(store: &dyn FlagStore, ambient: ColorScheme) -> bool {
    match store.get(STORAGE_KEY).as_deref() {
        Some("true") => true,
        Some("false") => false,
        _ => ambient.prefers_dark(),
    }
}

pub fn encode(dark: bool) -> &'static str {
    if dark {
        "true"
    } else {
        "false"
    }
}
