//! Engine settings
//!
//! Animation pacing, shuffle length and RNG seeding. Stored as JSON; missing
//! fields fall back to their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Animation speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AnimationPreset {
    Slow,
    #[default]
    Normal,
    Fast,
    /// Every move finishes on the tick after it starts
    Instant,
}

impl AnimationPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationPreset::Slow => "Slow",
            AnimationPreset::Normal => "Normal",
            AnimationPreset::Fast => "Fast",
            AnimationPreset::Instant => "Instant",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slow" => Some(AnimationPreset::Slow),
            "normal" | "default" => Some(AnimationPreset::Normal),
            "fast" => Some(AnimationPreset::Fast),
            "instant" | "none" => Some(AnimationPreset::Instant),
            _ => None,
        }
    }

    /// Fraction of the remaining turn (plus lerp offset) eased in per second
    pub fn rotation_speed(&self) -> f32 {
        match self {
            AnimationPreset::Slow => 5.0,
            AnimationPreset::Normal => DEFAULT_ROTATION_SPEED,
            AnimationPreset::Fast => 20.0,
            AnimationPreset::Instant => 1.0e6,
        }
    }
}

/// Failure to read or write a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Engine settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Animation speed preset
    pub preset: AnimationPreset,

    // === Animation ===
    /// Easing rate per second toward the remaining rotation
    pub rotation_speed: f32,
    /// Degrees added to the remaining rotation before easing, so turns never stall
    pub lerp_offset_degrees: f32,
    /// Remaining rotation below which a turn snaps to done
    pub snap_threshold_degrees: f32,

    // === Queue ===
    /// Merge a repeated quarter turn into a queued half turn
    pub coalesce_doubles: bool,

    // === Shuffle ===
    pub shuffle_length: usize,
    /// Seed for casual shuffles (`None` = OS entropy)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: AnimationPreset::Normal,

            rotation_speed: DEFAULT_ROTATION_SPEED,
            lerp_offset_degrees: DEFAULT_LERP_OFFSET_DEGREES,
            snap_threshold_degrees: DEFAULT_SNAP_THRESHOLD_DEGREES,

            coalesce_doubles: true,

            shuffle_length: DEFAULT_SHUFFLE_LENGTH,
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from an animation preset
    pub fn from_preset(preset: AnimationPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply an animation preset (updates the rotation speed)
    pub fn apply_preset(&mut self, preset: AnimationPreset) {
        self.preset = preset;
        self.rotation_speed = preset.rotation_speed();
    }

    /// Degrees to turn this tick for a move with `remaining` degrees left.
    ///
    /// Eases toward the remaining rotation, never overshoots, and finishes the
    /// turn once what is left would drop below the snap threshold.
    pub fn animation_step(&self, remaining: f32, dt: f32) -> f32 {
        let t = (self.rotation_speed * dt).clamp(0.0, 1.0);
        let step = ((remaining + self.lerp_offset_degrees) * t).min(remaining);
        if remaining - step < self.snap_threshold_degrees {
            remaining
        } else {
            step
        }
    }

    /// Clamp values that would stall or break the animator
    pub fn sanitize(&mut self) {
        if !(self.rotation_speed.is_finite() && self.rotation_speed > 0.0) {
            log::warn!(
                "Invalid rotation_speed {}, using {}",
                self.rotation_speed,
                self.preset.rotation_speed()
            );
            self.rotation_speed = self.preset.rotation_speed();
        }
        if !(self.lerp_offset_degrees.is_finite() && self.lerp_offset_degrees > 0.0) {
            log::warn!("Invalid lerp_offset_degrees {}", self.lerp_offset_degrees);
            self.lerp_offset_degrees = DEFAULT_LERP_OFFSET_DEGREES;
        }
        if !self.snap_threshold_degrees.is_finite() || self.snap_threshold_degrees < 0.0 {
            self.snap_threshold_degrees = DEFAULT_SNAP_THRESHOLD_DEGREES;
        }
        if self.shuffle_length > MAX_SHUFFLE_LENGTH {
            log::warn!(
                "shuffle_length {} too long, using {}",
                self.shuffle_length,
                MAX_SHUFFLE_LENGTH
            );
            self.shuffle_length = MAX_SHUFFLE_LENGTH;
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!(
                    "Using default settings ({}: {err})",
                    path.as_ref().display()
                );
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
