//! Item spawning
//!
//! A plain timer gate: at most one item per call, and no catch-up for frames
//! that arrive late.

use rand::Rng;

use super::state::{Item, ItemKind, Playfield};
use crate::settings::Settings;

/// Spawn an item if more than `spawn_interval_ms` has passed since the last one.
///
/// Returns the new item and the timestamp to store as the last spawn time.
pub fn maybe_spawn(
    now_ms: f64,
    last_spawn_ms: f64,
    playfield: &Playfield,
    rng: &mut impl Rng,
    settings: &Settings,
) -> Option<(Item, f64)> {
    if now_ms - last_spawn_ms <= settings.spawn_interval_ms {
        return None;
    }

    let x = rng.random::<f32>() * playfield.item_max_x();
    let span = settings.fall_speed_max - settings.fall_speed_min;
    let fall_speed = settings.fall_speed_min + rng.random::<f32>() * span;
    let kind = if rng.random_bool(settings.star_chance) {
        ItemKind::Star
    } else {
        ItemKind::Cheburek
    };

    log::debug!("Spawned {:?} at x={:.1} speed={:.2}", kind, x, fall_speed);
    Some((Item::new(x, kind, fall_speed), now_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn pf() -> Playfield {
        Playfield::new(300.0, 600.0)
    }

    #[test]
    fn test_interval_is_strict() {
        let mut rng = Pcg32::seed_from_u64(1);
        let settings = Settings::default();
        assert!(maybe_spawn(800.0, 0.0, &pf(), &mut rng, &settings).is_none());
        assert!(maybe_spawn(1800.0, 1000.0, &pf(), &mut rng, &settings).is_none());

        let (item, last) = maybe_spawn(800.5, 0.0, &pf(), &mut rng, &settings).unwrap();
        assert_eq!(last, 800.5);
        assert_eq!(item.pos.y, 0.0);
    }

    #[test]
    fn test_late_frames_are_not_compensated() {
        let mut rng = Pcg32::seed_from_u64(1);
        let settings = Settings::default();
        // Five intervals late still yields one item and resets the gate to `now`
        let (_, last) = maybe_spawn(4001.0, 0.0, &pf(), &mut rng, &settings).unwrap();
        assert_eq!(last, 4001.0);
        assert!(maybe_spawn(4500.0, last, &pf(), &mut rng, &settings).is_none());
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(42);
        let settings = Settings::default();
        let mut stars = 0;
        for i in 0..2000 {
            let now = (i as f64 + 1.0) * 1000.0;
            let (item, _) = maybe_spawn(now, now - 900.0, &pf(), &mut rng, &settings).unwrap();
            assert!(item.pos.x >= 0.0 && item.pos.x <= 270.0);
            assert!(item.fall_speed >= 2.0 && item.fall_speed < 5.0);
            if item.kind == ItemKind::Star {
                stars += 1;
            }
        }
        // ~10% stars
        assert!((120..=280).contains(&stars), "stars = {}", stars);
    }

    #[test]
    fn test_narrow_playfield_spawns_at_zero() {
        let mut rng = Pcg32::seed_from_u64(3);
        let narrow = Playfield::new(10.0, 600.0);
        let (item, _) = maybe_spawn(1000.0, 0.0, &narrow, &mut rng, &Settings::default()).unwrap();
        assert_eq!(item.pos.x, 0.0);
    }

    #[test]
    fn test_star_chance_extremes() {
        let mut rng = Pcg32::seed_from_u64(9);
        let always = Settings {
            star_chance: 1.0,
            ..Settings::default()
        };
        let never = Settings {
            star_chance: 0.0,
            ..Settings::default()
        };
        for _ in 0..50 {
            let (a, _) = maybe_spawn(1000.0, 0.0, &pf(), &mut rng, &always).unwrap();
            let (b, _) = maybe_spawn(1000.0, 0.0, &pf(), &mut rng, &never).unwrap();
            assert_eq!(a.kind, ItemKind::Star);
            assert_eq!(b.kind, ItemKind::Cheburek);
        }
    }
}
