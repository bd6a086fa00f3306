//! Uniform card grid.
//!
//! Pages are divided into `cols × rows` cells of identical pixel size.
//! Card `i` (0-based, in supplied order) always lands in the same cell:
//!
//! ```text
//! page = i / (cols × rows)
//! row  = (i / cols) mod rows
//! col  = i mod cols
//! x, y = col × card_width, row × card_height
//! ```

use deckpress_core::PageGeometry;

/// Grid dimensions in cells and pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    pub cols: u32,
    pub rows: u32,
    pub card_width: u32,
    pub card_height: u32,
    pub page_width: u32,
    pub page_height: u32,
}

/// Where a single card lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellPlacement {
    pub page: usize,
    pub row: u32,
    pub col: u32,
    pub x: u32,
    pub y: u32,
}

impl GridSpec {
    pub fn from_geometry(geometry: &PageGeometry) -> Self {
        Self {
            cols: geometry.cols,
            rows: geometry.rows,
            card_width: geometry.card_width,
            card_height: geometry.card_height,
            page_width: geometry.page_width,
            page_height: geometry.page_height,
        }
    }

    #[inline]
    pub fn cards_per_page(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Cell for the card at `index`.
    pub fn placement(&self, index: usize) -> CellPlacement {
        let cols = self.cols as usize;
        let per_page = self.cards_per_page();
        let col = (index % cols) as u32;
        let row = ((index / cols) % self.rows as usize) as u32;
        CellPlacement {
            page: index / per_page,
            row,
            col,
            x: col * self.card_width,
            y: row * self.card_height,
        }
    }

    /// Pages needed for `cards` cards. Zero cards need zero pages.
    pub fn page_count(&self, cards: usize) -> usize {
        cards.div_ceil(self.cards_per_page())
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use deckpress_core::LayoutConfig;

    fn letter_grid() -> GridSpec {
        GridSpec::from_geometry(&LayoutConfig::default().geometry().unwrap())
    }

    #[test]
    fn test_from_default_geometry() {
        let grid = letter_grid();
        assert_eq!((grid.cols, grid.rows), (4, 4));
        assert_eq!((grid.card_width, grid.card_height), (637, 825));
        assert_eq!(grid.cards_per_page(), 16);
    }

    #[test]
    fn test_placement_reading_order() {
        let grid = letter_grid();
        assert_eq!(
            grid.placement(0),
            CellPlacement { page: 0, row: 0, col: 0, x: 0, y: 0 }
        );
        assert_eq!(
            grid.placement(5),
            CellPlacement { page: 0, row: 1, col: 1, x: 637, y: 825 }
        );
        assert_eq!(
            grid.placement(15),
            CellPlacement { page: 0, row: 3, col: 3, x: 1911, y: 2475 }
        );
    }

    #[test]
    fn test_placement_wraps_to_next_page() {
        let grid = letter_grid();
        assert_eq!(
            grid.placement(16),
            CellPlacement { page: 1, row: 0, col: 0, x: 0, y: 0 }
        );
        assert_eq!(
            grid.placement(17),
            CellPlacement { page: 1, row: 0, col: 1, x: 637, y: 0 }
        );
    }

    #[test]
    fn test_cells_stay_on_page() {
        let grid = letter_grid();
        for i in 0..64 {
            let cell = grid.placement(i);
            assert!(cell.x + grid.card_width <= grid.page_width);
            assert!(cell.y + grid.card_height <= grid.page_height);
        }
    }

    #[test]
    fn test_page_count() {
        let grid = letter_grid();
        assert_eq!(grid.page_count(0), 0);
        assert_eq!(grid.page_count(1), 1);
        assert_eq!(grid.page_count(16), 1);
        assert_eq!(grid.page_count(17), 2);
        assert_eq!(grid.page_count(32), 2);
    }
}
