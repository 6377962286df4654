//! Front-end settings, read from a TOML file.
//!
//! ```toml
//! mode = "pva"
//! turn_order = "random"
//! ai_delay_ms = 1500
//! engine = "greedy"
//!
//! [game]
//! seed = 7
//! stalemate_rule = "any_face_down"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use banqi_core::{GameConfig, TurnOrder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Player against the AI
    #[default]
    Pva,
    /// Two players sharing the terminal
    Pvp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    Greedy,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: Mode,
    pub turn_order: TurnOrder,
    /// Pause before each AI turn so its moves can be followed
    pub ai_delay_ms: u64,
    pub engine: EngineKind,
    pub game: GameConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Pva,
            turn_order: TurnOrder::HumanFirst,
            ai_delay_ms: 1500,
            engine: EngineKind::Greedy,
            game: GameConfig::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid settings")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
