//! Falling-item integration and hero collision
//!
//! One pass over the item list: every item falls, then is either caught by the
//! hero, lost off the bottom, or kept. Catching wins over missing when both
//! would apply in the same tick.

use serde::Serialize;

use super::state::{Item, ItemKind, Playfield};
use crate::Rect;

/// Something that happened to an item this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Item overlapped the hero
    Collected(ItemKind),
    /// Item fell past the bottom of the playfield
    Missed(ItemKind),
}

/// Result of checking one item after it moved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemFate {
    Caught,
    Lost,
    Falling,
}

fn item_fate(item: &Item, hero: &Rect, playfield: &Playfield) -> ItemFate {
    if hero.overlaps(&item.rect()) {
        ItemFate::Caught
    } else if item.pos.y > playfield.height {
        ItemFate::Lost
    } else {
        ItemFate::Falling
    }
}

/// Move every item down by its fall speed and resolve catches and misses.
///
/// Removed items are dropped from `items`; the returned events keep the order
/// of the collection.
pub fn advance_items(items: &mut Vec<Item>, hero: &Rect, playfield: &Playfield) -> Vec<GameEvent> {
    let mut events = Vec::new();

    items.retain_mut(|item| {
        item.pos.y += item.fall_speed;

        match item_fate(item, hero, playfield) {
            ItemFate::Caught => {
                events.push(GameEvent::Collected(item.kind));
                false
            }
            ItemFate::Lost => {
                events.push(GameEvent::Missed(item.kind));
                false
            }
            ItemFate::Falling => true,
        }
    });

    events
}
