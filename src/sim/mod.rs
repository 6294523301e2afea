//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the tick timestamp
//! - Seeded RNG only
//! - Items kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod hero;
pub mod score;
pub mod sky;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{GameEvent, advance_items};
pub use hero::{TickInput, update_hero};
pub use score::apply_events;
pub use sky::{Cloud, drift_clouds, spawn_clouds};
pub use spawn::maybe_spawn;
pub use state::{
    DisplaySnapshot, GamePhase, GameState, Hero, Item, ItemKind, ItemSprite, Outcome, Playfield,
    RenderSnapshot, Scoreboard,
};
pub use tick::{TickReport, tick};
