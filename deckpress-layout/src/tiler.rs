//! Page tiler: pastes card images onto pages in reading order.
//!
//! [`Tiling`] is the incremental state machine: each pushed card is
//! pasted at the cursor, the cursor advances left-to-right then
//! top-to-bottom, and a page is handed back the moment its grid fills.
//! [`PageTiler::tile`] drives it over a whole card sequence.
//!
//! A page is only ever emitted with at least one card on it, so an
//! empty input yields no pages and an input that exactly fills the
//! last page does not produce a trailing blank one.

use deckpress_core::{Canvas, Rgb, RgbImage};

use crate::grid::GridSpec;

const PAGE_BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// A finished page.
#[derive(Clone, Debug)]
pub struct Page {
    /// 0-based page number.
    pub index: usize,
    /// Cards pasted onto this page.
    pub card_count: usize,
    pub image: RgbImage,
}

impl Page {
    pub fn is_full(&self, grid: &GridSpec) -> bool {
        self.card_count == grid.cards_per_page()
    }
}

/// Incremental tiling state.
pub struct Tiling {
    grid: GridSpec,
    page: RgbImage,
    x: u32,
    y: u32,
    count_on_page: usize,
    pages_emitted: usize,
}

impl Tiling {
    pub fn new(grid: GridSpec) -> Self {
        Self {
            page: blank_page(&grid),
            grid,
            x: 0,
            y: 0,
            count_on_page: 0,
            pages_emitted: 0,
        }
    }

    /// Paste `card` at the cursor. Returns the page if this card filled it.
    ///
    /// The card is consumed and dropped once pasted.
    pub fn push(&mut self, card: RgbImage) -> Option<Page> {
        if card.dimensions() != (self.grid.card_width, self.grid.card_height) {
            log::warn!(
                "Tiling: card is {:?}, expected {}x{}; pasting anyway",
                card.dimensions(),
                self.grid.card_width,
                self.grid.card_height,
            );
        }

        self.page.paste(&card, self.x as i64, self.y as i64);
        self.count_on_page += 1;
        self.x += self.grid.card_width;

        if self.count_on_page % self.grid.cols as usize == 0 {
            self.x = 0;
            self.y += self.grid.card_height;
        }

        if self.count_on_page == self.grid.cards_per_page() {
            return Some(self.flush());
        }
        None
    }

    /// Cards on the page currently being filled.
    pub fn pending(&self) -> usize {
        self.count_on_page
    }

    /// Close out tiling. Returns the partial last page, if it has cards.
    pub fn finish(mut self) -> Option<Page> {
        if self.count_on_page == 0 {
            return None;
        }
        Some(self.flush())
    }

    fn flush(&mut self) -> Page {
        let image = std::mem::replace(&mut self.page, blank_page(&self.grid));
        let page = Page {
            index: self.pages_emitted,
            card_count: self.count_on_page,
            image,
        };
        log::debug!("Tiling: page {} done with {} cards", page.index, page.card_count);

        self.pages_emitted += 1;
        self.count_on_page = 0;
        self.x = 0;
        self.y = 0;
        page
    }
}

fn blank_page(grid: &GridSpec) -> RgbImage {
    RgbImage::from_pixel(grid.page_width, grid.page_height, PAGE_BACKGROUND)
}

/// Batch tiler over a whole card sequence.
#[derive(Clone, Copy, Debug)]
pub struct PageTiler {
    grid: GridSpec,
}

impl PageTiler {
    pub fn new(grid: GridSpec) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn start(&self) -> Tiling {
        Tiling::new(self.grid)
    }

    /// Tile `cards` in order. Every page but the last is full.
    pub fn tile<I>(&self, cards: I) -> Vec<Page>
    where
        I: IntoIterator<Item = RgbImage>,
    {
        let mut tiling = self.start();
        let mut pages = Vec::new();
        for card in cards {
            pages.extend(tiling.push(card));
        }
        pages.extend(tiling.finish());
        pages
    }
}

// ===================================================================
// Tests
// ===================================================================
