//! Game settings and tuning
//!
//! Read-only configuration. On the web it comes from an inline JSON block in the
//! page; nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How player input moves the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    /// Held left/right arrows move at a constant speed
    Discrete,
    /// Taps set a target the hero eases toward
    TargetSeek,
    /// Arrows and taps; an arrow press cancels a pending target
    #[default]
    Hybrid,
}

impl ControlMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlMode::Discrete => "discrete",
            ControlMode::TargetSeek => "target_seek",
            ControlMode::Hybrid => "hybrid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "discrete" | "arrows" => Some(ControlMode::Discrete),
            "target_seek" | "seek" | "tap" => Some(ControlMode::TargetSeek),
            "hybrid" => Some(ControlMode::Hybrid),
            _ => None,
        }
    }

    /// Whether left/right intents move the hero
    pub fn uses_arrows(&self) -> bool {
        matches!(self, ControlMode::Discrete | ControlMode::Hybrid)
    }

    /// Whether target taps move the hero
    pub fn uses_target(&self) -> bool {
        matches!(self, ControlMode::TargetSeek | ControlMode::Hybrid)
    }
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub control: ControlMode,

    // === Spawning ===
    /// Minimum ms between spawns (strictly greater than this fires)
    pub spawn_interval_ms: f64,
    /// Probability that a spawned item is a star
    pub star_chance: f64,
    pub fall_speed_min: f32,
    pub fall_speed_max: f32,

    // === Hero ===
    pub hero_speed: f32,
    pub seek_factor: f32,
    pub snap_distance: f32,

    // === Round ===
    pub win_score: u32,
    pub max_lives: u32,

    // === Visuals ===
    pub cloud_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            control: ControlMode::default(),

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            star_chance: STAR_CHANCE,
            fall_speed_min: FALL_SPEED_MIN,
            fall_speed_max: FALL_SPEED_MAX,

            hero_speed: HERO_SPEED,
            seek_factor: SEEK_FACTOR,
            snap_distance: SNAP_DISTANCE,

            win_score: WIN_SCORE,
            max_lives: MAX_LIVES,

            cloud_count: CLOUD_COUNT,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Clamp values that would break the simulation
    pub fn sanitized(mut self) -> Self {
        let defaults = Settings::default();

        if !self.spawn_interval_ms.is_finite() || self.spawn_interval_ms < 0.0 {
            log::warn!("Invalid spawn interval {}, using default", self.spawn_interval_ms);
            self.spawn_interval_ms = defaults.spawn_interval_ms;
        }
        if !(0.0..=1.0).contains(&self.star_chance) {
            log::warn!("Star chance {} out of range, clamping", self.star_chance);
            self.star_chance = if self.star_chance.is_nan() {
                defaults.star_chance
            } else {
                self.star_chance.clamp(0.0, 1.0)
            };
        }
        // Items must always move down or they would never leave the playfield
        if !(self.fall_speed_min > 0.0) || !(self.fall_speed_max > self.fall_speed_min) {
            log::warn!(
                "Invalid fall speed range {}..{}, using default",
                self.fall_speed_min,
                self.fall_speed_max
            );
            self.fall_speed_min = defaults.fall_speed_min;
            self.fall_speed_max = defaults.fall_speed_max;
        }
        if !(self.hero_speed >= 0.0) {
            self.hero_speed = defaults.hero_speed;
        }
        if !(self.seek_factor > 0.0 && self.seek_factor <= 1.0) {
            log::warn!("Seek factor {} out of range, using default", self.seek_factor);
            self.seek_factor = defaults.seek_factor;
        }
        if !(self.snap_distance >= 0.0) {
            self.snap_distance = defaults.snap_distance;
        }
        if self.max_lives == 0 {
            log::warn!("max_lives must be at least 1");
            self.max_lives = 1;
        }
        if self.win_score == 0 {
            log::warn!("win_score must be at least 1");
            self.win_score = 1;
        }
        self
    }

    /// Element id of the inline settings block
    #[cfg(target_arch = "wasm32")]
    const SETTINGS_ELEMENT_ID: &'static str = "game-settings";

    /// Load settings from an inline `<script type="application/json">` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::SETTINGS_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings (control: {})", settings.control.as_str());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "control": "discrete", "max_lives": 3 }"#).unwrap();
        assert_eq!(settings.control, ControlMode::Discrete);
        assert_eq!(settings.max_lives, 3);
        assert_eq!(settings.win_score, WIN_SCORE);
        assert_eq!(settings.spawn_interval_ms, SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "control": "joystick" }"#).is_err());
    }

    #[test]
    fn test_sanitize_clamps_degenerate_values() {
        let settings = Settings {
            star_chance: 3.0,
            fall_speed_min: 0.0,
            max_lives: 0,
            seek_factor: 0.0,
            ..Settings::default()
        }
        .sanitized();

        assert_eq!(settings.star_chance, 1.0);
        assert_eq!(settings.fall_speed_min, FALL_SPEED_MIN);
        assert_eq!(settings.fall_speed_max, FALL_SPEED_MAX);
        assert_eq!(settings.max_lives, 1);
        assert_eq!(settings.seek_factor, SEEK_FACTOR);
    }

    #[test]
    fn test_control_mode_names() {
        for mode in [ControlMode::Discrete, ControlMode::TargetSeek, ControlMode::Hybrid] {
            assert_eq!(ControlMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(ControlMode::from_str("TAP"), Some(ControlMode::TargetSeek));
        assert!(ControlMode::Hybrid.uses_arrows() && ControlMode::Hybrid.uses_target());
        assert!(!ControlMode::Discrete.uses_target());
        assert!(!ControlMode::TargetSeek.uses_arrows());
    }
}
