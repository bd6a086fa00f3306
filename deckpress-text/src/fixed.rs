//! Fixed-advance metrics with block glyphs.
//!
//! Every character advances by the same width and every line has the
//! same height; non-whitespace characters paint as solid blocks. Layout
//! results are therefore exact and independent of installed fonts.

use deckpress_core::{Canvas, PixelRect, Rgb};

use crate::fit::{TextExtent, TextMeasure, TextPainter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedMetrics {
    pub advance: i32,
    pub line_height: i32,
}

impl FixedMetrics {
    pub fn new(advance: i32, line_height: i32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextMeasure for FixedMetrics {
    fn measure(&mut self, text: &str) -> TextExtent {
        TextExtent {
            width: text.chars().count() as i32 * self.advance,
            height: self.line_height,
        }
    }
}

impl TextPainter for FixedMetrics {
    fn draw_text<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        x: i64,
        y: i64,
        text: &str,
        color: Rgb<u8>,
    ) {
        // One pixel of spacing keeps adjacent glyph blocks distinct.
        let glyph_width = (self.advance - 1).max(1) as u32;
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let gx = x + i as i64 * self.advance as i64;
            canvas.fill_rect(
                PixelRect::new(gx, y, glyph_width, self.line_height.max(0) as u32),
                color,
            );
        }
    }
}

// ===================================================================
// Tests
// ===================================================================
