//! Layout configuration and derived page geometry.
//!
//! [`LayoutConfig`] holds physical units (inches, DPI, font size). It is
//! converted once into a [`PageGeometry`] of whole pixels, which every
//! downstream component borrows. Nothing here is mutated after startup.

use std::path::PathBuf;

use image::Rgb;
use thiserror::Error;

use crate::deck::Category;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("dpi must be positive")]
    ZeroDpi,
    #[error("grid must have at least one row and one column (got {cols}x{rows})")]
    EmptyGrid { cols: u32, rows: u32 },
    #[error("page size must be positive (got {width}x{height} in)")]
    InvalidPageSize { width: f32, height: f32 },
    #[error("font size must be positive (got {0})")]
    InvalidFontSize(f32),
    #[error("horizontal margin {margin}px leaves no room in a {card_width}px card")]
    MarginTooWide { margin: u32, card_width: u32 },
}

/// Print layout settings.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Print resolution in dots per inch.
    pub dpi: u32,
    /// Cards per row (grid columns).
    pub cards_per_row: u32,
    /// Cards per column (grid rows).
    pub cards_per_col: u32,
    /// Page width in inches.
    pub page_width_in: f32,
    /// Page height in inches.
    pub page_height_in: f32,
    /// Font size in pixels at `dpi`. [`LayoutConfig::with_dpi`] rescales it.
    pub font_size_px: f32,
    /// Total horizontal margin subtracted from the card width for wrapping.
    pub horizontal_margin_px: u32,
    /// Vertical gap between wrapped lines.
    pub line_gap_px: u32,
    /// Border inset from each card edge.
    pub border_inset_px: u32,
    /// Border stroke width.
    pub border_width_px: u32,
    /// Preferred font file (None = resolve `preferred_family`).
    pub font_path: Option<PathBuf>,
    /// Installed family tried when no font file is configured.
    pub preferred_family: String,
    /// Output document path.
    pub output_file: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            cards_per_row: 4,
            cards_per_col: 4,
            page_width_in: 8.5,
            page_height_in: 11.0,
            font_size_px: 72.0,
            horizontal_margin_px: 80,
            line_gap_px: 10,
            border_inset_px: 5,
            border_width_px: 4,
            font_path: None,
            preferred_family: "Arial".to_string(),
            output_file: PathBuf::from("kalama_ike_cards.pdf"),
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dpi == 0 {
            return Err(ConfigError::ZeroDpi);
        }
        if self.cards_per_row == 0 || self.cards_per_col == 0 {
            return Err(ConfigError::EmptyGrid {
                cols: self.cards_per_row,
                rows: self.cards_per_col,
            });
        }
        if !(self.page_width_in > 0.0 && self.page_height_in > 0.0) {
            return Err(ConfigError::InvalidPageSize {
                width: self.page_width_in,
                height: self.page_height_in,
            });
        }
        if !(self.font_size_px > 0.0) {
            return Err(ConfigError::InvalidFontSize(self.font_size_px));
        }
        let card_width = self.card_width_px();
        if self.horizontal_margin_px >= card_width {
            return Err(ConfigError::MarginTooWide {
                margin: self.horizontal_margin_px,
                card_width,
            });
        }
        Ok(())
    }

    /// Change the print resolution, scaling every pixel-valued setting by
    /// the same factor so cards keep their proportions.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        if self.dpi != 0 && dpi != self.dpi {
            let scale = dpi as f64 / self.dpi as f64;
            let px = |value: u32| (value as f64 * scale).round() as u32;
            self.font_size_px = (self.font_size_px as f64 * scale) as f32;
            self.horizontal_margin_px = px(self.horizontal_margin_px);
            self.line_gap_px = px(self.line_gap_px);
            self.border_inset_px = px(self.border_inset_px);
            self.border_width_px = px(self.border_width_px);
            log::debug!("LayoutConfig: {} → {dpi} dpi, font {}px", self.dpi, self.font_size_px);
        }
        self.dpi = dpi;
        self
    }

    /// Validate and convert to whole-pixel geometry.
    pub fn geometry(&self) -> Result<PageGeometry, ConfigError> {
        self.validate()?;
        let dpi = self.dpi as f64;
        Ok(PageGeometry {
            dpi: self.dpi,
            cols: self.cards_per_row,
            rows: self.cards_per_col,
            card_width: self.card_width_px(),
            card_height: (self.page_height_in as f64 / self.cards_per_col as f64 * dpi) as u32,
            page_width: (self.page_width_in as f64 * dpi) as u32,
            page_height: (self.page_height_in as f64 * dpi) as u32,
            text_width: self.card_width_px() - self.horizontal_margin_px,
            line_gap: self.line_gap_px,
            border_inset: self.border_inset_px,
            border_width: self.border_width_px,
        })
    }

    fn card_width_px(&self) -> u32 {
        if self.cards_per_row == 0 {
            return 0;
        }
        (self.page_width_in as f64 / self.cards_per_row as f64 * self.dpi as f64) as u32
    }
}

/// Pixel dimensions derived from a [`LayoutConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub dpi: u32,
    pub cols: u32,
    pub rows: u32,
    pub card_width: u32,
    pub card_height: u32,
    pub page_width: u32,
    pub page_height: u32,
    /// Wrap budget: card width minus the horizontal margin.
    pub text_width: u32,
    pub line_gap: u32,
    pub border_inset: u32,
    pub border_width: u32,
}

impl PageGeometry {
    pub fn cards_per_page(&self) -> u32 {
        self.cols * self.rows
    }
}

// ── Palette ─────────────────────────────────────────────────────────

/// Colors for a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
    pub border: Rgb<u8>,
}

/// Category → style lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub prompt: CardStyle,
    pub response: CardStyle,
}

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BORDER_GRAY: Rgb<u8> = Rgb([128, 128, 128]);

impl Default for Palette {
    fn default() -> Self {
        Self {
            prompt: CardStyle {
                background: BLACK,
                foreground: WHITE,
                border: BORDER_GRAY,
            },
            response: CardStyle {
                background: WHITE,
                foreground: BLACK,
                border: BORDER_GRAY,
            },
        }
    }
}

impl Palette {
    pub fn style_for(&self, category: Category) -> CardStyle {
        match category {
            Category::Prompt => self.prompt,
            Category::Response => self.response,
        }
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_letter_300dpi() {
        let geometry = LayoutConfig::default().geometry().unwrap();
        assert_eq!(geometry.page_width, 2550);
        assert_eq!(geometry.page_height, 3300);
        assert_eq!(geometry.card_width, 637);
        assert_eq!(geometry.card_height, 825);
        assert_eq!(geometry.text_width, 557);
        assert_eq!(geometry.cards_per_page(), 16);
    }

    #[test]
    fn test_cell_size_matches_page_division() {
        let geometry = LayoutConfig::default().geometry().unwrap();
        assert_eq!(geometry.card_width, geometry.page_width / geometry.cols);
        assert_eq!(geometry.card_height, geometry.page_height / geometry.rows);
    }

    #[test]
    fn test_zero_dpi_rejected() {
        let config = LayoutConfig {
            dpi: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDpi));
    }

    #[test]
    fn test_empty_grid_rejected() {
        let config = LayoutConfig {
            cards_per_col: 0,
            ..Default::default()
        };
        assert_eq!(
            config.geometry(),
            Err(ConfigError::EmptyGrid { cols: 4, rows: 0 })
        );
    }

    #[test]
    fn test_margin_wider_than_card_rejected() {
        let config = LayoutConfig {
            horizontal_margin_px: 2000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MarginTooWide { margin: 2000, .. })
        ));
    }

    #[test]
    fn test_non_positive_font_rejected() {
        let config = LayoutConfig {
            font_size_px: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidFontSize(0.0)));
    }

    #[test]
    fn test_with_dpi_scales_pixel_settings() {
        let config = LayoutConfig::default().with_dpi(150);
        assert_eq!(config.dpi, 150);
        assert_eq!(config.font_size_px, 36.0);
        assert_eq!(config.horizontal_margin_px, 40);
        assert_eq!(config.line_gap_px, 5);
        assert_eq!(config.border_width_px, 2);

        let geometry = config.geometry().unwrap();
        assert_eq!(geometry.card_width, 318);
        assert_eq!(geometry.text_width, 278);
    }

    #[test]
    fn test_with_same_dpi_is_unchanged() {
        let config = LayoutConfig::default().with_dpi(300);
        assert_eq!(config.font_size_px, 72.0);
        assert_eq!(config.horizontal_margin_px, 80);
    }

    #[test]
    fn test_with_zero_dpi_rejected() {
        let config = LayoutConfig::default().with_dpi(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDpi));
    }

    #[test]
    fn test_palette_by_category() {
        let palette = Palette::default();
        let prompt = palette.style_for(Category::Prompt);
        let response = palette.style_for(Category::Response);
        assert_eq!(prompt.background, Rgb([0, 0, 0]));
        assert_eq!(prompt.foreground, Rgb([255, 255, 255]));
        assert_eq!(response.background, Rgb([255, 255, 255]));
        assert_eq!(response.foreground, Rgb([0, 0, 0]));
        assert_eq!(prompt.border, response.border);
    }
}
