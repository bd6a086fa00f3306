//! Text engine: measures and paints text using `cosmic-text`.
//!
//! The engine owns a `FontSystem` (font database + shaping) and a
//! `SwashCache` (glyph rasterization). Every call shapes a single
//! unconstrained line; wrapping is done by [`TextFitter`](crate::TextFitter),
//! not by cosmic-text, so line breaks depend only on measured widths.
//!
//! ## Font Integration
//!
//! A [`FontHandle`] with face data is registered in the engine's font
//! database, and every query asks for that exact face: its family plus
//! its weight, style and stretch. An installed face sharing the family
//! name (e.g. regular DejaVu Sans for a bold DejaVu file) can therefore
//! never stand in for it. The builtin handle selects the generic
//! sans-serif family from the system database instead.

use std::sync::Arc;

use cosmic_text::fontdb::Source;
use cosmic_text::{
    Attrs, Buffer, Color as CColor, Family, FontSystem, Metrics, Shaping, Stretch, Style,
    SwashCache, Weight,
};
use deckpress_core::{Canvas, PixelRect, Rgb};

use crate::fit::{TextExtent, TextMeasure, TextPainter};
use crate::fonts::{FontHandle, FontSource};

/// Core text engine wrapping cosmic-text.
pub struct TextEngine {
    font_system: FontSystem,
    swash_cache: SwashCache,
    /// Registered face to select, `None` for generic sans-serif.
    face: Option<FaceQuery>,
    metrics: Metrics,
    source: FontSource,
}

impl TextEngine {
    /// Create an engine for `font` at `font_size` pixels.
    ///
    /// The line box height equals the font size.
    pub fn new(font: &FontHandle, font_size: f32) -> Self {
        let mut font_system = FontSystem::new();
        let face = font.data().and_then(|data| register_face(&mut font_system, data));
        if font.data().is_some() && face.is_none() {
            log::warn!("TextEngine: {font} has no usable face; using sans-serif");
        }
        log::debug!(
            "TextEngine: {} faces available, using {font} at {font_size}px",
            font_system.db().faces().count(),
        );

        Self {
            font_system,
            swash_cache: SwashCache::new(),
            face,
            metrics: Metrics::new(font_size, font_size),
            source: font.source().clone(),
        }
    }

    pub fn font_size(&self) -> f32 {
        self.metrics.font_size
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// Family actually requested from the font database.
    pub fn family(&self) -> Option<&str> {
        self.face.as_ref().map(|face| face.family.as_str())
    }

    /// Shape `text` as a single line.
    fn shape(&mut self, text: &str) -> Buffer {
        let mut buffer = Buffer::new(&mut self.font_system, self.metrics);
        buffer.set_size(&mut self.font_system, None, None);
        let attrs = attrs_for(&self.face);
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }
}

/// Exact face description read back from the font database.
#[derive(Clone, Debug)]
struct FaceQuery {
    family: String,
    weight: Weight,
    style: Style,
    stretch: Stretch,
}

/// Register `data` and describe the first face it contains.
fn register_face(font_system: &mut FontSystem, data: &[u8]) -> Option<FaceQuery> {
    let ids = font_system
        .db_mut()
        .load_font_source(Source::Binary(Arc::new(data.to_vec())));
    let id = ids.first().copied()?;
    let info = font_system.db().face(id)?;
    let (family, _) = info.families.first()?;
    Some(FaceQuery {
        family: family.clone(),
        weight: info.weight,
        style: info.style,
        stretch: info.stretch,
    })
}

fn attrs_for(face: &Option<FaceQuery>) -> Attrs<'_> {
    match face {
        Some(face) => Attrs::new()
            .family(Family::Name(&face.family))
            .weight(face.weight)
            .style(face.style)
            .stretch(face.stretch),
        None => Attrs::new().family(Family::SansSerif),
    }
}

impl TextMeasure for TextEngine {
    fn measure(&mut self, text: &str) -> TextExtent {
        let buffer = self.shape(text);
        let width = buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0f32, f32::max);
        TextExtent {
            width: width.ceil() as i32,
            height: self.metrics.line_height.ceil() as i32,
        }
    }
}

impl TextPainter for TextEngine {
    fn draw_text<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        x: i64,
        y: i64,
        text: &str,
        color: Rgb<u8>,
    ) {
        let buffer = self.shape(text);
        let [r, g, b] = color.0;
        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            CColor::rgb(r, g, b),
            |gx, gy, w, h, c| {
                canvas.blend_rect(
                    PixelRect::new(x + gx as i64, y + gy as i64, w, h),
                    Rgb([c.r(), c.g(), c.b()]),
                    c.a(),
                );
            },
        );
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::tests::system_font_file;
    use crate::fonts::load_font;
    use deckpress_core::RgbImage;

    const SAMPLE: &str = "toki pona li pona mute";

    fn width_with(file: &str) -> Option<i32> {
        let handle = load_font(&system_font_file(file)?).ok()?;
        Some(TextEngine::new(&handle, 72.0).measure(SAMPLE).width)
    }

    fn engine() -> TextEngine {
        TextEngine::new(&FontHandle::builtin(), 48.0)
    }

    #[test]
    fn test_engine_creation() {
        let engine = engine();
        assert_eq!(engine.font_size(), 48.0);
        assert_eq!(engine.source(), &FontSource::Builtin);
        assert!(engine.family().is_none());
    }

    #[test]
    fn test_font_file_face_is_used() {
        let (Some(regular), Some(bold), Some(condensed)) = (
            width_with("DejaVuSans.ttf"),
            width_with("DejaVuSans-Bold.ttf"),
            width_with("DejaVuSansCondensed.ttf"),
        ) else {
            return; // DejaVu not installed
        };
        assert!(bold > regular, "bold {bold} vs regular {regular}");
        assert!(condensed < regular, "condensed {condensed} vs regular {regular}");
    }

    #[test]
    fn test_font_file_registers_family() {
        let Some(path) = system_font_file("DejaVuSans-Bold.ttf") else {
            return;
        };
        let handle = load_font(&path).unwrap();
        let engine = TextEngine::new(&handle, 72.0);
        assert_eq!(engine.family(), Some("DejaVu Sans"));
        assert_eq!(engine.source(), &FontSource::File(path));
    }

    #[test]
    fn test_measure_empty_string() {
        let extent = engine().measure("");
        assert_eq!(extent.width, 0);
        assert_eq!(extent.height, 48);
    }

    #[test]
    fn test_measure_grows_with_text() {
        let mut engine = engine();
        let short = engine.measure("toki");
        let long = engine.measure("toki pona li pona");
        // Width is monotone in appended words, even if no fonts are installed.
        assert!(long.width >= short.width);
        assert_eq!(short.height, long.height);
    }

    #[test]
    fn test_measure_is_stable() {
        let mut engine = engine();
        assert_eq!(engine.measure("jan pona"), engine.measure("jan pona"));
    }

    #[test]
    fn test_draw_stays_in_canvas() {
        let mut engine = engine();
        let mut img = RgbImage::from_pixel(200, 100, Rgb([255, 255, 255]));
        // Partly off-canvas: must clip without panicking.
        engine.draw_text(&mut img, -20, 70, "overflow", Rgb([0, 0, 0]));
        assert_eq!(img.dimensions(), (200, 100));
    }

    #[test]
    fn test_draw_marks_pixels_when_fonts_exist() {
        let mut engine = engine();
        if engine.measure("A").width == 0 {
            return; // no system fonts on this machine
        }
        let mut img = RgbImage::from_pixel(100, 80, Rgb([255, 255, 255]));
        engine.draw_text(&mut img, 10, 10, "A", Rgb([0, 0, 0]));
        assert!(img.pixels().any(|p| p.0[0] < 128), "expected inked pixels");
    }
}
