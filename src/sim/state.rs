//! Game state and core simulation types
//!
//! Everything a round needs lives in one owned `GameState`; the driver holds it
//! and hands it to `tick` once per frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::sky::{Cloud, spawn_clouds};
use crate::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Items falling, input accepted
    Running,
    /// Round ended; nothing changes until reset
    GameOver,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Overlay message
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Win => "You Win!",
            Outcome::Lose => "Game Over!",
        }
    }
}

/// Falling item types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemKind {
    Cheburek,
    Star,
}

impl ItemKind {
    /// Score awarded when caught
    pub fn points(&self) -> u32 {
        match self {
            ItemKind::Cheburek => CHEBUREK_POINTS,
            ItemKind::Star => STAR_POINTS,
        }
    }

    /// Whether letting it hit the ground costs a life
    pub fn costs_life(&self) -> bool {
        matches!(self, ItemKind::Cheburek)
    }
}

/// A falling item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// Top-left corner
    pub pos: Vec2,
    pub kind: ItemKind,
    /// Pixels per tick
    pub fall_speed: f32,
}

impl Item {
    pub fn new(x: f32, kind: ItemKind, fall_speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
            kind,
            fall_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, ITEM_WIDTH, ITEM_HEIGHT)
    }
}

/// Drawing surface bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    /// Degenerate dimensions (negative, NaN) clamp to zero
    pub fn new(width: f32, height: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: sane(width),
            height: sane(height),
        }
    }

    /// Rightmost x the hero may occupy
    #[inline]
    pub fn hero_max_x(&self) -> f32 {
        (self.width - HERO_WIDTH).max(0.0)
    }

    /// Rightmost x an item may spawn at
    #[inline]
    pub fn item_max_x(&self) -> f32 {
        (self.width - ITEM_WIDTH).max(0.0)
    }

    /// Top edge of the hero sprite
    #[inline]
    pub fn hero_top(&self) -> f32 {
        self.height - GROUND_HEIGHT - HERO_HEIGHT
    }

    /// Hero x that centres it horizontally
    pub fn hero_center_x(&self) -> f32 {
        (self.width / 2.0 - HERO_WIDTH / 2.0).clamp(0.0, self.hero_max_x())
    }
}

/// The player's catcher
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    pub x: f32,
    /// Pending tap target (target-seek control)
    pub target: Option<f32>,
}

impl Hero {
    pub fn centered(playfield: &Playfield) -> Self {
        Self {
            x: playfield.hero_center_x(),
            target: None,
        }
    }

    pub fn rect(&self, playfield: &Playfield) -> Rect {
        Rect::new(self.x, playfield.hero_top(), HERO_WIDTH, HERO_HEIGHT)
    }
}

/// Score, lives and the round result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub score: u32,
    pub lives: u32,
    pub outcome: Option<Outcome>,
}

impl Scoreboard {
    pub fn new(max_lives: u32) -> Self {
        Self {
            score: 0,
            lives: max_lives,
            outcome: None,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Item sprite for drawing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSprite {
    pub rect: Rect,
    pub kind: ItemKind,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub playfield: Playfield,
    pub hero: Rect,
    pub items: Vec<ItemSprite>,
    pub clouds: Vec<Cloud>,
}

/// HUD values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    pub score: u32,
    pub lives: u32,
}

/// Cloud RNG is seeded apart from gameplay so visuals never shift spawns
const CLOUD_SEED_SALT: u64 = 0x636c_6f75_6473;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub playfield: Playfield,
    pub hero: Hero,
    /// Falling items, in spawn order
    pub items: Vec<Item>,
    /// Background decoration (not gameplay-affecting)
    pub clouds: Vec<Cloud>,
    pub scoreboard: Scoreboard,
    /// Timestamp (ms) of the last spawn
    pub last_spawn_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
    pub(crate) cloud_rng: Pcg32,
}

impl GameState {
    /// Create a new round with the given seed
    pub fn new(seed: u64, settings: Settings, playfield: Playfield) -> Self {
        let settings = settings.sanitized();
        let mut cloud_rng = Pcg32::seed_from_u64(seed ^ CLOUD_SEED_SALT);
        let clouds = spawn_clouds(settings.cloud_count, &playfield, &mut cloud_rng);

        Self {
            seed,
            hero: Hero::centered(&playfield),
            items: Vec::new(),
            clouds,
            scoreboard: Scoreboard::new(settings.max_lives),
            last_spawn_ms: 0.0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            cloud_rng,
            settings,
            playfield,
        }
    }

    /// Start a fresh round on the same playfield; the RNG keeps running
    pub fn reset(&mut self) {
        self.scoreboard = Scoreboard::new(self.settings.max_lives);
        self.items.clear();
        self.hero = Hero::centered(&self.playfield);
        self.last_spawn_ms = 0.0;
        self.time_ticks = 0;
        self.clouds = spawn_clouds(self.settings.cloud_count, &self.playfield, &mut self.cloud_rng);
        log::info!("Round reset (lives: {})", self.scoreboard.lives);
    }

    /// Apply new playfield geometry: re-centre the hero and respawn clouds
    pub fn resize(&mut self, width: f32, height: f32) {
        self.playfield = Playfield::new(width, height);
        self.hero = Hero::centered(&self.playfield);
        self.clouds = spawn_clouds(self.settings.cloud_count, &self.playfield, &mut self.cloud_rng);
        log::info!("Playfield resized to {}x{}", self.playfield.width, self.playfield.height);
    }

    pub fn phase(&self) -> GamePhase {
        if self.scoreboard.is_over() {
            GamePhase::GameOver
        } else {
            GamePhase::Running
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.scoreboard.is_over()
    }

    pub fn hero_rect(&self) -> Rect {
        self.hero.rect(&self.playfield)
    }

    pub fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            playfield: self.playfield,
            hero: self.hero_rect(),
            items: self
                .items
                .iter()
                .map(|item| ItemSprite {
                    rect: item.rect(),
                    kind: item.kind,
                })
                .collect(),
            clouds: self.clouds.clone(),
        }
    }

    pub fn display_snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            score: self.scoreboard.score,
            lives: self.scoreboard.lives,
        }
    }
}
