//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a folio.toml, and if present we load settings from there. This
//! provides the scroll-spy offset, the chrome thresholds, the terminal geometry mapping and the
//! shortcut modifier.

use crate::error::{Error, Result};
use crate::scroll::ChromeThresholds;
use crate::shortcuts::Modifier;
use crate::spy::TieBreak;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from folio.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 80)]
    /// Height of the fixed header in pixels; the scroll-spy band starts below it.
    pub spy_offset: u32,
    #[facet(default = 50)]
    /// Offset past which the header is drawn as scrolled.
    pub scrolled_threshold: u32,
    #[facet(default = 200)]
    /// Offset past which scrolling down hides the header.
    pub hide_threshold: u32,
    #[facet(default = 300)]
    /// Offset past which the scroll-to-top button appears.
    pub scroll_top_threshold: u32,
    #[facet(default = 16)]
    /// Pixels represented by one terminal row.
    pub row_height: u32,
    #[facet(default = 80)]
    /// Viewport widths (in columns) below this use the mobile layout.
    pub mobile_breakpoint: u32,
    #[facet(default = 3)]
    /// Rows moved per arrow-key scroll.
    pub scroll_step_rows: u32,
    #[facet(default = "alt".to_string())]
    /// Modifier that activates shortcuts: alt, ctrl or meta.
    pub shortcut_modifier: String,
    #[facet(default = "latest".to_string())]
    /// How simultaneous intersections pick the active section: latest or ratio.
    pub tie_break: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spy_offset: 80,
            scrolled_threshold: 50,
            hide_threshold: 200,
            scroll_top_threshold: 300,
            row_height: 16,
            mobile_breakpoint: 80,
            scroll_step_rows: 3,
            shortcut_modifier: "alt".to_string(),
            tie_break: "latest".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from `path`, or folio.toml if no path is given, if present.
    ///
    /// An unreadable or invalid file is logged and ignored.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            Self::default()
        })
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }

    #[must_use]
    /// Chrome thresholds in pixels.
    pub fn thresholds(&self) -> ChromeThresholds {
        ChromeThresholds {
            scrolled: self.scrolled_threshold,
            hide: self.hide_threshold,
            scroll_top: self.scroll_top_threshold,
        }
    }

    #[must_use]
    /// The shortcut modifier; unknown names fall back to Alt.
    pub fn modifier(&self) -> Modifier {
        self.shortcut_modifier.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to Alt shortcuts");
            Modifier::default()
        })
    }

    #[must_use]
    /// The intersection tie-break; unknown names fall back to the latest entry.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to latest-entry tie-break");
            TieBreak::default()
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
