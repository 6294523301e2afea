//! Canvas 2D renderer
//!
//! Draws a `RenderSnapshot`: clouds, then the hero, then items. Each sprite
//! uses its image when loaded and a solid rectangle otherwise.

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::palette::*;
use crate::Rect;
use crate::platform::assets::Assets;
use crate::sim::{Cloud, RenderSnapshot};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    assets: Assets,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, assets: Assets) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        Ok(Self { canvas, ctx, assets })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to the element's layout size
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn render(&self, snapshot: &RenderSnapshot) -> Result<(), JsValue> {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        self.draw_clouds(&snapshot.clouds)?;
        self.draw_sprite(self.assets.hero.as_ref(), &snapshot.hero, HERO_FALLBACK)?;
        for item in &snapshot.items {
            self.draw_sprite(self.assets.item(item.kind), &item.rect, item_fallback(item.kind))?;
        }
        Ok(())
    }

    fn draw_clouds(&self, clouds: &[Cloud]) -> Result<(), JsValue> {
        self.ctx.save();
        self.ctx.set_global_alpha(CLOUD_ALPHA);
        self.ctx.set_fill_style_str(CLOUD_COLOR);
        for cloud in clouds {
            self.ctx.begin_path();
            self.ctx.ellipse(
                cloud.pos.x as f64,
                cloud.pos.y as f64,
                cloud.size as f64,
                (cloud.size * CLOUD_ASPECT) as f64,
                0.0,
                0.0,
                std::f64::consts::TAU,
            )?;
            self.ctx.fill();
        }
        self.ctx.restore();
        Ok(())
    }

    fn draw_sprite(&self, image: Option<&HtmlImageElement>, rect: &Rect, fallback: &str) -> Result<(), JsValue> {
        let (x, y) = (rect.min.x as f64, rect.min.y as f64);
        let (w, h) = (rect.size.x as f64, rect.size.y as f64);
        match image {
            Some(img) => self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h),
            None => {
                self.ctx.set_fill_style_str(fallback);
                self.ctx.fill_rect(x, y, w, h);
                Ok(())
            }
        }
    }
}
