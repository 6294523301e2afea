//! Input edge tracking
//!
//! Browser callbacks fire whenever they like; they only flip flags here. The
//! game loop samples the flags once per tick into a `TickInput`.

use crate::consts::HERO_WIDTH;
use crate::sim::TickInput;

/// Horizontal move intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Held intents plus the latest unconsumed tap
#[derive(Debug, Clone, Default)]
pub struct InputState {
    move_left: bool,
    move_right: bool,
    pending_target: Option<f32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arrow button or key went down
    pub fn press(&mut self, dir: Direction) {
        match dir {
            Direction::Left => self.move_left = true,
            Direction::Right => self.move_right = true,
        }
    }

    /// Arrow button or key went up
    pub fn release(&mut self, dir: Direction) {
        match dir {
            Direction::Left => self.move_left = false,
            Direction::Right => self.move_right = false,
        }
    }

    /// Key press; ignored while the round is over. Returns true if handled.
    pub fn key_down(&mut self, key: &str, game_over: bool) -> bool {
        if game_over {
            return false;
        }
        match Direction::from_key(key) {
            Some(dir) => {
                self.press(dir);
                true
            }
            None => false,
        }
    }

    /// Key release; always honoured so keys can't stick across a reset
    pub fn key_up(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(dir) => {
                self.release(dir);
                true
            }
            None => false,
        }
    }

    /// Tap/click on the playfield at `x`; the hero centres on it
    pub fn tap(&mut self, x: f32, game_over: bool) {
        if game_over || !x.is_finite() {
            return;
        }
        self.pending_target = Some(x - HERO_WIDTH / 2.0);
    }

    /// Drop everything (new round)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Input for the next tick. The tap is consumed; held arrows persist.
    pub fn sample(&mut self) -> TickInput {
        TickInput {
            move_left: self.move_left,
            move_right: self.move_right,
            target_x: self.pending_target.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_persist_across_samples() {
        let mut input = InputState::new();
        assert!(input.key_down("ArrowLeft", false));
        assert!(input.sample().move_left);
        assert!(input.sample().move_left);
        assert!(input.key_up("ArrowLeft"));
        assert!(!input.sample().move_left);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut input = InputState::new();
        assert!(!input.key_down("a", false));
        assert!(!input.key_up(" "));
        assert_eq!(input.sample(), TickInput::default());
    }

    #[test]
    fn test_key_down_ignored_when_over_but_key_up_clears() {
        let mut input = InputState::new();
        input.press(Direction::Right);
        assert!(!input.key_down("ArrowLeft", true));
        assert!(input.key_up("ArrowRight"));
        let sample = input.sample();
        assert!(!sample.move_left && !sample.move_right);
    }

    #[test]
    fn test_tap_is_consumed_once() {
        let mut input = InputState::new();
        input.tap(250.0, false);
        assert_eq!(input.sample().target_x, Some(200.0));
        assert_eq!(input.sample().target_x, None);

        input.tap(250.0, true);
        assert_eq!(input.sample().target_x, None);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut input = InputState::new();
        input.press(Direction::Left);
        input.press(Direction::Right);
        input.tap(10.0, false);
        input.clear();
        assert_eq!(input.sample(), TickInput::default());
    }
}
