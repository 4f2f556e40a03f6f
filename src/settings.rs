//! Hook collision line preferences
//!
//! Persisted as JSON next to the rest of the client configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::renderer::Rgba;
use crate::renderer::vertex::colors;

/// When a character's hook line is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShowMode {
    Off,
    /// Only while the character is aiming
    #[default]
    WhenAiming,
    /// Always, if the server allows it
    Always,
}

impl ShowMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowMode::Off => "Off",
            ShowMode::WhenAiming => "WhenAiming",
            ShowMode::Always => "Always",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "off" | "0" => Some(ShowMode::Off),
            "aiming" | "whenaiming" | "1" => Some(ShowMode::WhenAiming),
            "always" | "2" => Some(ShowMode::Always),
            _ => None,
        }
    }
}

/// Line colors per outcome class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeColors {
    /// Nothing hit, or a hook-blocking tile
    pub no_coll: Rgba,
    /// Hookable map geometry
    pub hookable_coll: Rgba,
    /// Another character
    pub tee_coll: Rgba,
}

impl Default for OutcomeColors {
    fn default() -> Self {
        Self {
            no_coll: colors::NO_COLL,
            hookable_coll: colors::HOOKABLE_COLL,
            tee_coll: colors::TEE_COLL,
        }
    }
}

/// Hook collision line settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookCollSettings {
    // === Visibility ===
    /// Own character's line
    pub show_own: ShowMode,
    /// Other characters' lines
    pub show_other: ShowMode,
    /// Own line length follows the cursor distance instead of hook length
    pub hook_length_follows_cursor: bool,

    // === Appearance ===
    /// Own line size (0 = hairline)
    pub size_own: u32,
    /// Other characters' line size (0 = hairline)
    pub size_other: u32,
    /// Line opacity, percent
    pub alpha: u32,
    /// Opacity for characters on another team, percent
    pub other_team_alpha: u32,
    pub colors: OutcomeColors,
}

impl Default for HookCollSettings {
    fn default() -> Self {
        Self {
            show_own: ShowMode::WhenAiming,
            show_other: ShowMode::WhenAiming,
            hook_length_follows_cursor: false,

            size_own: 0,
            size_other: 0,
            alpha: 100,
            other_team_alpha: 100,
            colors: OutcomeColors::default(),
        }
    }
}

impl HookCollSettings {
    /// Show mode for a character
    pub fn show_mode(&self, local: bool) -> ShowMode {
        if local { self.show_own } else { self.show_other }
    }

    /// Line size for a character
    pub fn size(&self, local: bool) -> u32 {
        if local { self.size_own } else { self.size_other }
    }

    /// Final line opacity in 0..=1
    pub fn effective_alpha(&self, other_team: bool) -> f32 {
        let team = if other_team {
            self.other_team_alpha as f32 / 100.0
        } else {
            1.0
        };
        (team * self.alpha as f32 / 100.0).clamp(0.0, 1.0)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No hook line settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded hook line settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid hook line settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Hook line settings saved");
        Ok(())
    }
}
