//! Cheburek Catch - a falling-item catch game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling, collisions, score)
//! - `renderer`: Canvas 2D drawing of simulation snapshots
//! - `platform`: Browser input and asset loading glue
//! - `settings`: Data-driven game tuning

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ControlMode, Settings};

use glam::Vec2;
use serde::Serialize;

/// Game configuration constants
pub mod consts {
    /// Hero sprite size
    pub const HERO_WIDTH: f32 = 100.0;
    pub const HERO_HEIGHT: f32 = 100.0;
    /// Distance from the bottom of the playfield to the hero's feet
    pub const GROUND_HEIGHT: f32 = 80.0;

    /// Falling item size (stars share the cheburek hitbox)
    pub const ITEM_WIDTH: f32 = 30.0;
    pub const ITEM_HEIGHT: f32 = 30.0;

    /// Points per collected item
    pub const CHEBUREK_POINTS: u32 = 1;
    pub const STAR_POINTS: u32 = 10;

    /// Round ends in a win at this score
    pub const WIN_SCORE: u32 = 100;
    /// Lives at the start of a round
    pub const MAX_LIVES: u32 = 10;

    /// Minimum time between spawns (ms)
    pub const SPAWN_INTERVAL_MS: f64 = 800.0;
    /// Chance that a spawned item is a star
    pub const STAR_CHANCE: f64 = 0.1;
    /// Fall speed range (pixels per tick), max exclusive
    pub const FALL_SPEED_MIN: f32 = 2.0;
    pub const FALL_SPEED_MAX: f32 = 5.0;

    /// Arrow-key hero speed (pixels per tick)
    pub const HERO_SPEED: f32 = 6.0;
    /// Fraction of the remaining distance covered per tick when seeking a target
    pub const SEEK_FACTOR: f32 = 0.2;
    /// Snap to the target once closer than this
    pub const SNAP_DISTANCE: f32 = 3.0;

    /// Background clouds
    pub const CLOUD_COUNT: usize = 3;
}

/// Axis-aligned rectangle in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.bottom() > self.top()
            && other.top() < self.bottom()
            && other.left() < self.right()
            && other.right() > self.left()
    }
}
