//! User configuration — stage tuning and terminal display settings.
//!
//! Settings live in a TOML file at
//! `$XDG_CONFIG_HOME/scroll-stage/config.toml` (default
//! `~/.config/scroll-stage/config.toml`).  Every key is optional; missing keys
//! take the built-in defaults.  Values are validated when the stage is built,
//! and a bad value is a startup error rather than something silently clamped.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::band::Sections;
use crate::core::capacity::CapacityConfig;
use crate::core::curve::{PathCurve, DEFAULT_BREAKPOINTS};
use crate::core::error::ConfigError;
use crate::core::governor::DampingConfig;
use crate::core::hysteresis::HysteresisConfig;
use crate::core::stage::StageConfig;

// ───────────────────────────────────────── sections ──────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DampingSettings {
    pub threshold_fraction: f64,
    pub window_ms: u64,
    pub step_px: f64,
}

impl Default for DampingSettings {
    fn default() -> Self {
        let d = DampingConfig::default();
        Self {
            threshold_fraction: d.threshold_fraction,
            window_ms: d.window_ms,
            step_px: d.step_px,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailSettings {
    pub min_item_px: f64,
    pub gap_px: f64,
    pub center_px: f64,
    pub max_items: usize,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            min_item_px: 80.0,
            gap_px: 16.0,
            center_px: 480.0,
            max_items: 4,
        }
    }
}

/// Terminal → pixel conversion and event-loop pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Pixels per terminal row.
    pub row_px: f64,
    /// Pixels per terminal column.
    pub col_px: f64,
    /// Rows scrolled per wheel notch or arrow key.
    pub wheel_rows: u16,
    pub tick_ms: u64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            row_px: 20.0,
            col_px: 10.0,
            wheel_rows: 3,
            tick_ms: 50,
        }
    }
}

// ───────────────────────────────────────── config ────────────

/// Everything readable from the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub section_count: usize,
    /// Custom band starts; overrides `section_count` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_starts: Option<Vec<f64>>,
    pub virtual_height_multiplier: f64,
    /// `[progress, draw]` pairs.
    pub path_breakpoints: Vec<[f64; 2]>,
    pub collapse_threshold: f64,
    pub dwell_px: f64,
    pub prompt_hide_px: f64,
    pub sticky_label_px: f64,
    pub nav_margin_px: f64,
    pub damping: DampingSettings,
    pub thumbnails: ThumbnailSettings,
    pub display: DisplaySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        let h = HysteresisConfig::default();
        Self {
            section_count: 4,
            section_starts: None,
            virtual_height_multiplier: 4.0,
            path_breakpoints: DEFAULT_BREAKPOINTS.iter().map(|&(i, o)| [i, o]).collect(),
            collapse_threshold: h.collapse_threshold,
            dwell_px: h.dwell_px,
            prompt_hide_px: h.prompt_hide_px,
            sticky_label_px: h.sticky_label_px,
            nav_margin_px: 200.0,
            damping: DampingSettings::default(),
            thumbnails: ThumbnailSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is an
    /// error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = Self::parse(&contents).with_context(|| format!("parsing {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// The effective configuration as TOML (for `--print-config`).
    pub fn serialise(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the validated stage configuration.
    pub fn stage_config(&self) -> Result<StageConfig, ConfigError> {
        let sections = match &self.section_starts {
            Some(starts) => Sections::with_starts(starts.clone())?,
            None => Sections::equal(self.section_count)?,
        };
        let curve = PathCurve::new(self.path_breakpoints.iter().map(|&[i, o]| (i, o)).collect())?;
        let hysteresis = HysteresisConfig {
            collapse_threshold: self.collapse_threshold,
            dwell_px: self.dwell_px,
            prompt_hide_px: self.prompt_hide_px,
            sticky_label_px: self.sticky_label_px,
        };
        let damping = DampingConfig {
            threshold_fraction: self.damping.threshold_fraction,
            window_ms: self.damping.window_ms,
            step_px: self.damping.step_px,
        };
        StageConfig::new(
            sections,
            self.virtual_height_multiplier,
            curve,
            hysteresis,
            damping,
        )
    }

    pub fn capacity(&self) -> Result<CapacityConfig, ConfigError> {
        let t = &self.thumbnails;
        CapacityConfig::new(t.min_item_px, t.gap_px, t.center_px, t.max_items)
    }

    /// Validate everything that is not part of the stage itself.
    pub fn validate_host(&self) -> Result<(), ConfigError> {
        let d = &self.display;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(d.row_px) || !positive(d.col_px) {
            return Err(ConfigError::CellSize {
                row_px: d.row_px,
                col_px: d.col_px,
            });
        }
        crate::core::error::check_pixels("nav_margin_px", self.nav_margin_px)?;
        self.capacity()?;
        Ok(())
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/scroll-stage/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("scroll-stage").join("config.toml")
}
