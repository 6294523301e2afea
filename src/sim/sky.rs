//! Background clouds
//!
//! Visual only. They drift right at a constant speed and wrap back to the left
//! edge at a new height.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::state::Playfield;

/// Band of heights clouds float in
const CLOUD_MIN_Y: f32 = 30.0;
const CLOUD_Y_RANGE: f32 = 80.0;

/// A drifting cloud (drawn as an ellipse centred on `pos`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub speed: f32,
    /// Horizontal radius; vertical radius is 40% of it
    pub size: f32,
}

fn cloud_y(rng: &mut impl Rng) -> f32 {
    CLOUD_MIN_Y + rng.random::<f32>() * CLOUD_Y_RANGE
}

/// Scatter `count` clouds across the playfield
pub fn spawn_clouds(count: usize, playfield: &Playfield, rng: &mut impl Rng) -> Vec<Cloud> {
    (0..count)
        .map(|_| Cloud {
            pos: Vec2::new(rng.random::<f32>() * playfield.width, cloud_y(rng)),
            speed: 0.2 + rng.random::<f32>() * 0.2,
            size: 80.0 + rng.random::<f32>() * 40.0,
        })
        .collect()
}

/// Advance clouds by one tick
pub fn drift_clouds(clouds: &mut [Cloud], playfield: &Playfield, rng: &mut impl Rng) {
    for cloud in clouds.iter_mut() {
        cloud.pos.x += cloud.speed;
        if cloud.pos.x - cloud.size > playfield.width {
            cloud.pos.x = -cloud.size;
            cloud.pos.y = cloud_y(rng);
        }
    }
}
