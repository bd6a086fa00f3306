//! deckpress: render a JSON card deck into a printable PDF.
//!
//! ```text
//! deckpress --json cards.json [--output out.pdf] [--font face.ttf] [--dpi 300]
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for per-card
//! output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use deckpress_core::LayoutConfig;
use deckpress_render::export_file;

/// Render a deck of prompt and response cards into a print-ready PDF
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Deck file with "black" and "white" arrays of card texts
    #[arg(long = "json", value_name = "DECK")]
    deck: PathBuf,

    /// Output PDF path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TrueType/OpenType font file to render with
    #[arg(long)]
    font: Option<PathBuf>,

    /// Print resolution in dots per inch; font size and margins scale with it
    #[arg(long)]
    dpi: Option<u32>,
}

impl Args {
    fn layout(&self) -> LayoutConfig {
        let mut config = LayoutConfig::default();
        if let Some(output) = &self.output {
            config.output_file = output.clone();
        }
        if let Some(font) = &self.font {
            config.font_path = Some(font.clone());
        }
        if let Some(dpi) = self.dpi {
            config = config.with_dpi(dpi);
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.layout();

    let summary = export_file(&config, &args.deck)
        .with_context(|| format!("exporting {}", args.deck.display()))?;

    match summary.path {
        Some(path) => println!("✅ PDF created: {}", path.display()),
        None => println!("Deck {} has no cards; no PDF written.", args.deck.display()),
    }
    Ok(())
}
