//! Sprite loading
//!
//! All images start loading at once and the caller awaits a single future.
//! A failed image is logged and left out; the renderer draws a solid shape
//! in its place.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::sim::ItemKind;

const HERO_SRC: &str = "assets/hero.png";
const CHEBUREK_SRC: &str = "assets/cheburek.png";
const STAR_SRC: &str = "assets/star.png";

/// Loaded sprites; `None` means draw the fallback shape
#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub hero: Option<HtmlImageElement>,
    pub cheburek: Option<HtmlImageElement>,
    pub star: Option<HtmlImageElement>,
}

impl Assets {
    pub fn item(&self, kind: ItemKind) -> Option<&HtmlImageElement> {
        match kind {
            ItemKind::Cheburek => self.cheburek.as_ref(),
            ItemKind::Star => self.star.as_ref(),
        }
    }
}

/// Start loading an image; the promise settles on load or error
fn start_load(src: &str) -> Result<(HtmlImageElement, js_sys::Promise), JsValue> {
    let img = HtmlImageElement::new()?;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&resolve));
    });
    img.set_src(src);
    Ok((img, promise))
}

async fn finish_load(img: HtmlImageElement, promise: js_sys::Promise, src: &str) -> Option<HtmlImageElement> {
    if let Err(e) = JsFuture::from(promise).await {
        log::error!("Failed to load image {}: {:?}", src, e);
        return None;
    }
    img.set_onload(None);
    img.set_onerror(None);

    if img.complete() && img.natural_height() != 0 {
        Some(img)
    } else {
        log::error!("Failed to load image: {}", src);
        None
    }
}

/// Load every sprite. Never fails because of a missing image.
pub async fn load_assets() -> Result<Assets, JsValue> {
    let (hero, hero_p) = start_load(HERO_SRC)?;
    let (cheburek, cheburek_p) = start_load(CHEBUREK_SRC)?;
    let (star, star_p) = start_load(STAR_SRC)?;

    let assets = Assets {
        hero: finish_load(hero, hero_p, HERO_SRC).await,
        cheburek: finish_load(cheburek, cheburek_p, CHEBUREK_SRC).await,
        star: finish_load(star, star_p, STAR_SRC).await,
    };

    let loaded = [&assets.hero, &assets.cheburek, &assets.star]
        .iter()
        .filter(|img| img.is_some())
        .count();
    log::info!("Loaded {}/3 images", loaded);
    Ok(assets)
}
