//! Hero movement
//!
//! Arrow intents move at a fixed speed. A tap sets a target the hero eases
//! toward by a fraction of the remaining distance, snapping once close, so it
//! never overshoots. Which of the two applies depends on the control mode.

use super::state::{Hero, Playfield};
use crate::settings::{ControlMode, Settings};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Left arrow held
    pub move_left: bool,
    /// Right arrow held
    pub move_right: bool,
    /// New tap target (hero left edge), replaces any pending target
    pub target_x: Option<f32>,
}

/// Move the hero for one tick. Keeps `hero.x` inside `[0, hero_max_x]`.
pub fn update_hero(hero: &mut Hero, input: &TickInput, playfield: &Playfield, settings: &Settings) {
    let max_x = playfield.hero_max_x();

    if settings.control.uses_target() {
        if let Some(target) = input.target_x {
            hero.target = Some(target.clamp(0.0, max_x));
        }
    } else {
        hero.target = None;
    }

    if settings.control.uses_arrows() {
        let arrows = input.move_left || input.move_right;
        // Left first, then right from the updated x
        if input.move_left {
            hero.x = (hero.x - settings.hero_speed).max(0.0);
        }
        if input.move_right {
            hero.x = (hero.x + settings.hero_speed).min(max_x);
        }
        if arrows && settings.control == ControlMode::Hybrid {
            hero.target = None;
        }
    }

    if let Some(target) = hero.target {
        // Target may be stale after a resize
        let target = target.clamp(0.0, max_x);
        let delta = target - hero.x;
        if delta.abs() < settings.snap_distance {
            hero.x = target;
            hero.target = None;
        } else {
            hero.x += delta * settings.seek_factor;
        }
    }

    hero.x = hero.x.clamp(0.0, max_x);
}
