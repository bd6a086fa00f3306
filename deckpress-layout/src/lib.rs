//! # deckpress-layout
//!
//! Tiles fixed-size card images onto fixed-size pages.
//!
//! ```text
//!  card images ──► Tiling::push ──► full Page ──► Vec<Page>
//!                        │
//!                 Tiling::finish ──► partial Page (only if non-empty)
//! ```
//!
//! - **`grid`**: Cell arithmetic: index → (page, row, col, x, y).
//! - **`tiler`**: Page state machine that pastes cards in reading order.

pub mod grid;
pub mod tiler;

pub use grid::{CellPlacement, GridSpec};
pub use tiler::{Page, PageTiler, Tiling};
