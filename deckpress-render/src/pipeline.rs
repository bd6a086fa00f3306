//! End-to-end deck rendering.
//!
//! `DeckRenderer` owns the text backend and streams cards straight into
//! the tiler, so at most one page of cards is held in memory at a time.
//! The whole document is encoded before anything touches the output
//! path; a failure at any stage leaves no file behind.

use std::fmt;
use std::path::{Path, PathBuf};

use deckpress_core::{Card, ConfigError, Deck, DeckError, LayoutConfig, PageGeometry, Palette, RgbImage};
use deckpress_layout::{GridSpec, Page, PageTiler};
use deckpress_text::{FontHandle, TextEngine, TextPainter};
use thiserror::Error;

use crate::card::CardRenderer;
use crate::document::{self, DocumentError};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("invalid layout: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Outcome of an export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSummary {
    pub cards: usize,
    pub pages: usize,
    /// Size of the written document.
    pub bytes: usize,
    /// Where the document was written; `None` when the deck was empty.
    pub path: Option<PathBuf>,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(
                f,
                "{} cards on {} pages, {} bytes → {}",
                self.cards,
                self.pages,
                self.bytes,
                path.display(),
            ),
            None => f.write_str("no cards; nothing written"),
        }
    }
}

/// Deck → pages → PDF.
pub struct DeckRenderer<P> {
    geometry: PageGeometry,
    cards: CardRenderer,
    tiler: PageTiler,
    painter: P,
}

impl DeckRenderer<TextEngine> {
    /// Build a renderer from configuration, resolving the font.
    ///
    /// Font problems never fail here; they fall back to the builtin font.
    pub fn from_config(config: &LayoutConfig) -> Result<Self, ExportError> {
        let geometry = config.geometry()?;
        let font = FontHandle::resolve(config.font_path.as_deref(), Some(&config.preferred_family));
        let engine = TextEngine::new(&font, config.font_size_px);
        Ok(Self::new(geometry, Palette::default(), engine))
    }
}

impl<P: TextPainter> DeckRenderer<P> {
    pub fn new(geometry: PageGeometry, palette: Palette, painter: P) -> Self {
        Self {
            cards: CardRenderer::new(&geometry, palette),
            tiler: PageTiler::new(GridSpec::from_geometry(&geometry)),
            geometry,
            painter,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn render_card(&mut self, card: &Card) -> RgbImage {
        self.cards.render_card(&mut self.painter, card)
    }

    /// Render and tile every card in deck order.
    pub fn render_pages(&mut self, deck: &Deck) -> Vec<Page> {
        let mut tiling = self.tiler.start();
        let mut pages = Vec::with_capacity(self.tiler.grid().page_count(deck.len()));

        for (i, card) in deck.cards().enumerate() {
            log::debug!("DeckRenderer: card {i} ({})", card.category);
            let image = self.cards.render_card(&mut self.painter, &card);
            pages.extend(tiling.push(image));
        }
        pages.extend(tiling.finish());
        pages
    }

    /// Render `deck` and write it to `path` as a PDF.
    pub fn export(&mut self, deck: &Deck, path: &Path) -> Result<ExportSummary, ExportError> {
        if deck.is_empty() {
            log::warn!("DeckRenderer: deck has no cards; {} not written", path.display());
            return Ok(ExportSummary {
                cards: 0,
                pages: 0,
                bytes: 0,
                path: None,
            });
        }

        let pages: Vec<RgbImage> = self
            .render_pages(deck)
            .into_iter()
            .map(|page| page.image)
            .collect();
        let bytes = document::encode_pdf(&pages, self.geometry.dpi)?;
        document::write_pdf(path, &bytes)?;

        let summary = ExportSummary {
            cards: deck.len(),
            pages: pages.len(),
            bytes: bytes.len(),
            path: Some(path.to_path_buf()),
        };
        log::info!("DeckRenderer: {summary}");
        Ok(summary)
    }
}

/// Load the deck at `deck_path` and export it to `config.output_file`.
pub fn export_file(config: &LayoutConfig, deck_path: &Path) -> Result<ExportSummary, ExportError> {
    let deck = Deck::load(deck_path)?;
    log::info!(
        "DeckRenderer: {} prompts, {} responses from {}",
        deck.prompts.len(),
        deck.responses.len(),
        deck_path.display(),
    );
    let mut renderer = DeckRenderer::from_config(config)?;
    renderer.export(&deck, &config.output_file)
}

// ===================================================================
// Tests
// ===================================================================
