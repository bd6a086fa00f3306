//! Raster canvas: the minimal drawing capability the engine needs.
//!
//! Text painting and page tiling only ever fill, stroke, blend, and
//! paste rectangles, so that is all [`Canvas`] exposes. Every operation
//! clips at the canvas bounds; drawing partly or fully outside is a
//! silent no-op for the clipped part.

use image::{imageops, Rgb, RgbImage};

/// Pixel-space rectangle. `x`/`y` may be negative (off-canvas).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Build from inclusive corner coordinates.
    pub fn from_corners(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self {
            x: x0,
            y: y0,
            width: (x1 - x0 + 1).max(0) as u32,
            height: (y1 - y0 + 1).max(0) as u32,
        }
    }

    /// Shrink by `amount` on every side.
    pub fn inset(&self, amount: u32) -> Self {
        let shrink = 2 * amount;
        Self {
            x: self.x + amount as i64,
            y: self.y + amount as i64,
            width: self.width.saturating_sub(shrink),
            height: self.height.saturating_sub(shrink),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

pub trait Canvas {
    fn dimensions(&self) -> (u32, u32);

    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb<u8>);

    /// Source-over blend of `color` at coverage `alpha` across `rect`.
    fn blend_rect(&mut self, rect: PixelRect, color: Rgb<u8>, alpha: u8);

    /// Copy `src` with its top-left corner at `(x, y)`.
    fn paste(&mut self, src: &RgbImage, x: i64, y: i64);

    /// Stroke the outline of `rect`, growing `width` pixels inward.
    fn stroke_rect(&mut self, rect: PixelRect, width: u32, color: Rgb<u8>) {
        for step in 0..width {
            let ring = rect.inset(step);
            if ring.is_empty() {
                break;
            }
            let right = ring.x + ring.width as i64 - 1;
            let bottom = ring.y + ring.height as i64 - 1;
            self.fill_rect(PixelRect::new(ring.x, ring.y, ring.width, 1), color);
            self.fill_rect(PixelRect::new(ring.x, bottom, ring.width, 1), color);
            self.fill_rect(PixelRect::new(ring.x, ring.y, 1, ring.height), color);
            self.fill_rect(PixelRect::new(right, ring.y, 1, ring.height), color);
        }
    }
}

impl Canvas for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbImage::dimensions(self)
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb<u8>) {
        for (x, y) in clip(rect, self.width(), self.height()) {
            self.put_pixel(x, y, color);
        }
    }

    fn blend_rect(&mut self, rect: PixelRect, color: Rgb<u8>, alpha: u8) {
        if alpha == 0 {
            return;
        }
        if alpha == u8::MAX {
            self.fill_rect(rect, color);
            return;
        }
        for (x, y) in clip(rect, self.width(), self.height()) {
            let dst = self.get_pixel_mut(x, y);
            for channel in 0..3 {
                dst.0[channel] = blend_channel(dst.0[channel], color.0[channel], alpha);
            }
        }
    }

    fn paste(&mut self, src: &RgbImage, x: i64, y: i64) {
        imageops::replace(self, src, x, y);
    }
}

/// Integer source-over: `dst + (src - dst) * a / 255`, rounded.
fn blend_channel(dst: u8, src: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

/// Pixel coordinates of `rect` that fall inside a `width`×`height` canvas.
fn clip(rect: PixelRect, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let x0 = rect.x.clamp(0, width as i64) as u32;
    let y0 = rect.y.clamp(0, height as i64) as u32;
    let x1 = (rect.x + rect.width as i64).clamp(0, width as i64) as u32;
    let y1 = (rect.y + rect.height as i64).clamp(0, height as i64) as u32;
    (y0..y1).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
}

// ===================================================================
// Tests
// ===================================================================
