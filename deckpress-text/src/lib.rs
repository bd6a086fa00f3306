//! # deckpress-text
//!
//! Text engine for deckpress. Resolves a font, measures and paints text
//! via `cosmic-text`, and fits card text into a fixed-size box.
//!
//! ## Architecture
//!
//! ```text
//! FontHandle::resolve(path, family)   (file → system family → builtin)
//!     │
//!     ▼
//! TextEngine (cosmic-text FontSystem + SwashCache)
//!     │  implements TextMeasure + TextPainter
//!     ▼
//! TextFitter::fit(text) ──► FittedBlock { lines, total_height, top }
//! ```
//!
//! - **`fonts`**: Font loading with an explicit fallback chain.
//! - **`engine`**: Measurement and glyph painting over cosmic-text.
//! - **`fit`**: Greedy word wrap and vertical centering.
//! - **`fixed`**: Font-independent block-glyph backend.

pub mod engine;
pub mod fit;
pub mod fixed;
pub mod fonts;

// Re-exports for ergonomic use.
pub use engine::TextEngine;
pub use fit::{FittedBlock, FittedLine, TextExtent, TextFitter, TextMeasure, TextPainter};
pub use fixed::FixedMetrics;
pub use fonts::{load_font, load_system_family, FontHandle, FontResolutionFailure, FontSource};
