//! Card renderer: paints one fixed-size card image.
//!
//! Paint order is background, text lines, then border, so the border is
//! never covered. Text that overflows the card is clipped by the canvas,
//! not rejected.

use deckpress_core::{Canvas, Card, Category, PageGeometry, Palette, PixelRect, RgbImage};
use deckpress_text::{FittedBlock, TextFitter, TextPainter};

#[derive(Clone, Debug)]
pub struct CardRenderer {
    geometry: PageGeometry,
    palette: Palette,
    fitter: TextFitter,
}

impl CardRenderer {
    pub fn new(geometry: &PageGeometry, palette: Palette) -> Self {
        let fitter = TextFitter::new(geometry.text_width as i32, geometry.card_height as i32)
            .with_line_gap(geometry.line_gap as i32);
        Self {
            geometry: *geometry,
            palette,
            fitter,
        }
    }

    /// Wrap and position `text` without painting it.
    pub fn layout<P: TextPainter>(&self, painter: &mut P, text: &str) -> FittedBlock {
        self.fitter.fit(text, painter)
    }

    /// Render `text` in the palette for `category`.
    pub fn render<P: TextPainter>(&self, painter: &mut P, text: &str, category: Category) -> RgbImage {
        let style = self.palette.style_for(category);
        let (width, height) = (self.geometry.card_width, self.geometry.card_height);

        let block = self.layout(painter, text);
        if block.top < 0 {
            log::debug!(
                "CardRenderer: {} lines ({}px) overflow the {}px card",
                block.lines.len(),
                block.total_height,
                height,
            );
        }

        let mut image = RgbImage::from_pixel(width, height, style.background);
        for (x, y, line) in block.placements(width as i32) {
            painter.draw_text(&mut image, x as i64, y as i64, &line.text, style.foreground);
        }

        let inset = self.geometry.border_inset as i64;
        let border = PixelRect::from_corners(inset, inset, width as i64 - inset, height as i64 - inset);
        image.stroke_rect(border, self.geometry.border_width, style.border);

        image
    }

    pub fn render_card<P: TextPainter>(&self, painter: &mut P, card: &Card) -> RgbImage {
        self.render(painter, &card.text, card.category)
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use deckpress_core::{LayoutConfig, Rgb};
    use deckpress_text::FixedMetrics;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const GRAY: Rgb<u8> = Rgb([128, 128, 128]);

    fn renderer() -> CardRenderer {
        CardRenderer::new(&LayoutConfig::default().geometry().unwrap(), Palette::default())
    }

    fn metrics() -> FixedMetrics {
        FixedMetrics::new(30, 72)
    }

    #[test]
    fn test_card_has_fixed_size() {
        let r = renderer();
        let long = "word ".repeat(200);
        for text in ["", "jan", long.as_str()] {
            let card = r.render(&mut metrics(), text, Category::Response);
            assert_eq!(card.dimensions(), (637, 825));
        }
    }

    #[test]
    fn test_background_by_category() {
        let r = renderer();
        let prompt = r.render(&mut metrics(), "", Category::Prompt);
        let response = r.render(&mut metrics(), "", Category::Response);
        assert_eq!(*prompt.get_pixel(40, 40), BLACK);
        assert_eq!(*response.get_pixel(40, 40), WHITE);
    }

    #[test]
    fn test_border_inset_and_width() {
        let card = renderer().render(&mut metrics(), "", Category::Prompt);
        // Border occupies x = 5..=8 on the left and 629..=632 on the right.
        for x in 5..9 {
            assert_eq!(*card.get_pixel(x, 400), GRAY, "x={x}");
        }
        assert_eq!(*card.get_pixel(4, 400), BLACK);
        assert_eq!(*card.get_pixel(9, 400), BLACK);
        assert_eq!(*card.get_pixel(632, 400), GRAY);
        assert_eq!(*card.get_pixel(629, 400), GRAY);
        assert_eq!(*card.get_pixel(628, 400), BLACK);
        assert_eq!(*card.get_pixel(300, 5), GRAY);
        assert_eq!(*card.get_pixel(300, 820), GRAY);
    }

    #[test]
    fn test_single_line_centered() {
        let card = renderer().render(&mut metrics(), "jan", Category::Response);
        // "jan" = 90px wide: x = (637 - 90) / 2 = 273, y = (825 - 72) / 2 = 376.
        assert_eq!(*card.get_pixel(274, 380), BLACK);
        assert_eq!(*card.get_pixel(272, 380), WHITE);
        assert_eq!(*card.get_pixel(274, 375), WHITE);
        assert_eq!(*card.get_pixel(274, 376 + 71), BLACK);
        assert_eq!(*card.get_pixel(274, 376 + 72), WHITE);
    }

    #[test]
    fn test_layout_wraps_to_text_width() {
        let r = renderer();
        // 557px budget at 30px per char: 18 chars per line.
        let block = r.layout(&mut metrics(), "toki pona li pona mute tawa mi");
        assert!(block.lines.len() > 1);
        for line in &block.lines {
            assert!(line.width <= 557, "{:?}", line.text);
        }
    }

    #[test]
    fn test_overflowing_text_keeps_border() {
        let long = "nimi ".repeat(400);
        let card = renderer().render(&mut metrics(), &long, Category::Prompt);
        assert_eq!(*card.get_pixel(6, 6), GRAY);
        assert_eq!(*card.get_pixel(630, 818), GRAY);
    }

    #[test]
    fn test_render_card_uses_card_fields() {
        let r = renderer();
        let card = Card::new("pona", Category::Prompt);
        let a = r.render_card(&mut metrics(), &card);
        let b = r.render(&mut metrics(), "pona", Category::Prompt);
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
