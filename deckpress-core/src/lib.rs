//! # deckpress-core
//!
//! Shared data model for the deckpress card printer.
//!
//! ## Architecture
//!
//! ```text
//! deck.json ──► Deck ──cards()──► Card { text, category }
//!                                      │
//! LayoutConfig ──geometry()──► PageGeometry (pixel sizes, grid)
//!                                      │
//! Palette ──style_for(category)──► CardStyle
//!                                      │
//!                                      ▼
//!                          Canvas (image::RgbImage)
//! ```
//!
//! - **`deck`**: Card/category model and JSON deck loading.
//! - **`config`**: Immutable layout configuration and derived geometry.
//! - **`canvas`**: Minimal raster capability used by text and tiling.

pub mod canvas;
pub mod config;
pub mod deck;

pub use canvas::{Canvas, PixelRect};
pub use config::{CardStyle, ConfigError, LayoutConfig, PageGeometry, Palette};
pub use deck::{Card, Category, Deck, DeckError};

/// 8-bit RGB pixel, re-exported so downstream crates share one color type.
pub use image::{Rgb, RgbImage};
