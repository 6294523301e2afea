//! Fallback colours for sprites whose image didn't load

use crate::sim::ItemKind;

pub const HERO_FALLBACK: &str = "blue";
pub const CLOUD_COLOR: &str = "#fff";
pub const CLOUD_ALPHA: f64 = 0.6;
/// Vertical radius of a cloud ellipse relative to its horizontal radius
pub const CLOUD_ASPECT: f32 = 0.4;

pub fn item_fallback(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Cheburek => "brown",
        ItemKind::Star => "green",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_colors_differ() {
        assert_ne!(item_fallback(ItemKind::Cheburek), item_fallback(ItemKind::Star));
        assert_ne!(item_fallback(ItemKind::Star), HERO_FALLBACK);
    }
}
