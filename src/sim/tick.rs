//! Per-frame simulation tick
//!
//! Order within a tick matters: spawn, then fall/collide, then score, then
//! hero movement. Collisions use the hero position from the previous tick.

use super::collision::{GameEvent, advance_items};
use super::hero::{TickInput, update_hero};
use super::score::apply_events;
use super::sky::drift_clouds;
use super::spawn::maybe_spawn;
use super::state::{GameState, Outcome};

/// What a tick produced, for the driver
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Catches and misses, in item order
    pub events: Vec<GameEvent>,
    /// Set only on the tick that ends the round
    pub outcome: Option<Outcome>,
    /// Score or lives changed; refresh the HUD
    pub display_changed: bool,
}

/// Advance the game by one frame. `now_ms` is a monotonic timestamp.
///
/// Does nothing once the round is over.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) -> TickReport {
    if state.is_over() {
        return TickReport::default();
    }

    state.time_ticks += 1;
    drift_clouds(&mut state.clouds, &state.playfield, &mut state.cloud_rng);

    if let Some((item, last_spawn)) = maybe_spawn(
        now_ms,
        state.last_spawn_ms,
        &state.playfield,
        &mut state.rng,
        &state.settings,
    ) {
        state.items.push(item);
        state.last_spawn_ms = last_spawn;
    }

    let hero_rect = state.hero_rect();
    let events = advance_items(&mut state.items, &hero_rect, &state.playfield);

    let before = state.display_snapshot();
    let outcome = apply_events(&mut state.scoreboard, &events, state.settings.win_score);
    let display_changed = state.display_snapshot() != before;

    update_hero(&mut state.hero, input, &state.playfield, &state.settings);

    TickReport {
        events,
        outcome,
        display_changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::state::{GamePhase, Item, ItemKind, Playfield};

    fn new_state() -> GameState {
        GameState::new(12345, Settings::default(), Playfield::new(400.0, 600.0))
    }

    #[test]
    fn test_first_tick_spawns_item() {
        let mut state = new_state();
        let report = tick(&mut state, &TickInput::default(), 1000.0);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.last_spawn_ms, 1000.0);
        assert!(report.events.is_empty());
        assert!(!report.display_changed);
        // Spawned at y=0 and fell once in the same tick
        assert!(state.items[0].pos.y >= FALL_SPEED_MIN);
    }

    #[test]
    fn test_spawn_gate_between_ticks() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default(), 1000.0);
        tick(&mut state, &TickInput::default(), 1016.0);
        tick(&mut state, &TickInput::default(), 1800.0);
        assert_eq!(state.items.len(), 1);
        tick(&mut state, &TickInput::default(), 1800.5);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_collision_uses_previous_hero_position() {
        let mut state = new_state();
        state.last_spawn_ms = 1000.0;
        let y = state.playfield.hero_top() - ITEM_HEIGHT;
        state.items.push(Item {
            pos: glam::Vec2::new(0.0, y),
            kind: ItemKind::Cheburek,
            fall_speed: 2.0,
        });
        state.hero.x = 300.0;
        // Hero would move onto the item this tick, but collision runs first
        let input = TickInput {
            target_x: Some(0.0),
            ..Default::default()
        };
        let report = tick(&mut state, &input, 1001.0);
        assert!(report.events.is_empty());
        assert!(state.hero.x < 300.0);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = new_state();
        state.scoreboard.lives = 1;
        state.last_spawn_ms = 1000.0;
        state.items.push(Item {
            pos: glam::Vec2::new(350.0, 599.0),
            kind: ItemKind::Cheburek,
            fall_speed: 4.0,
        });
        state.hero.x = 0.0;

        let report = tick(&mut state, &TickInput::default(), 1001.0);
        assert_eq!(report.outcome, Some(Outcome::Lose));
        assert!(report.display_changed);
        assert_eq!(state.phase(), GamePhase::GameOver);

        let frozen_hero = state.hero.x;
        let frozen_clouds = state.clouds.clone();
        let ticks = state.time_ticks;
        let input = TickInput {
            move_right: true,
            ..Default::default()
        };
        let report = tick(&mut state, &input, 5000.0);
        assert_eq!(report, TickReport::default());
        assert_eq!(state.hero.x, frozen_hero);
        assert_eq!(state.clouds, frozen_clouds);
        assert_eq!(state.time_ticks, ticks);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut state = new_state();
        state.scoreboard.lives = 0;
        state.scoreboard.outcome = Some(Outcome::Lose);
        state.scoreboard.score = 37;
        state.items.push(Item::new(5.0, ItemKind::Star, 3.0));
        state.hero.x = 0.0;
        state.last_spawn_ms = 9000.0;

        state.reset();
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.scoreboard.score, 0);
        assert_eq!(state.scoreboard.lives, MAX_LIVES);
        assert!(state.items.is_empty());
        assert_eq!(state.hero.x, 150.0);
        assert_eq!(state.last_spawn_ms, 0.0);

        tick(&mut state, &TickInput::default(), 100.0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = new_state();
        let mut state2 = new_state();

        let inputs = [
            TickInput {
                target_x: Some(40.0),
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                move_right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        let mut now = 0.0;
        for i in 0..2000 {
            now += 16.6;
            let input = &inputs[i % inputs.len()];
            let r1 = tick(&mut state1, input, now);
            let r2 = tick(&mut state2, input, now);
            assert_eq!(r1, r2);
        }

        assert_eq!(state1.items, state2.items);
        assert_eq!(state1.scoreboard, state2.scoreboard);
        assert_eq!(state1.hero, state2.hero);
    }

    #[test]
    fn test_clouds_do_not_change_spawns() {
        let mut plain = GameState::new(
            7,
            Settings {
                cloud_count: 0,
                ..Settings::default()
            },
            Playfield::new(400.0, 600.0),
        );
        let mut cloudy = GameState::new(
            7,
            Settings {
                cloud_count: 12,
                ..Settings::default()
            },
            Playfield::new(400.0, 600.0),
        );
        let mut now = 0.0;
        for _ in 0..500 {
            now += 16.6;
            tick(&mut plain, &TickInput::default(), now);
            tick(&mut cloudy, &TickInput::default(), now);
        }
        assert_eq!(plain.items, cloudy.items);
    }
}
