//! # deckpress-render
//!
//! Turns a deck into a print-ready PDF.
//!
//! ## Architecture
//!
//! ```text
//!  Deck (deckpress-core)
//!       │  cards(): prompts, then responses
//!       ▼
//!  CardRenderer.render()          ◀─── TextFitter + TextPainter (deckpress-text)
//!       │  one RgbImage per card
//!       ▼
//!  Tiling.push() / finish()       ◀─── deckpress-layout
//!       │  Vec<Page>
//!       ▼
//!  document::encode_pdf()         ◀─── pdf-writer, Flate-compressed RGB
//!       │
//!       ▼
//!  document::write_pdf()          ◀─── temp file + rename
//! ```
//!
//! ## Crate modules
//!
//! - [`card`]: paints a single card: background, centered text, border
//! - [`document`]: raster pages → PDF bytes → file
//! - [`pipeline`]: end-to-end `DeckRenderer`

pub mod card;
pub mod document;
pub mod pipeline;

// Re-exports for convenience
pub use card::CardRenderer;
pub use document::{encode_pdf, write_pdf, DocumentError};
pub use pipeline::{export_file, DeckRenderer, ExportError, ExportSummary};
