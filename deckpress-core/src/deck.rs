//! Deck model: cards, categories, and JSON loading.
//!
//! A deck file is a JSON object with two optional string arrays:
//!
//! ```json
//! { "black": ["prompt one", "..."], "white": ["response one", "..."] }
//! ```
//!
//! Prompt cards (`"black"`) always precede response cards (`"white"`)
//! when iterating, each group in file order.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("failed to read deck {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed deck data: {0}")]
    DataFormat(#[from] serde_json::Error),
}

// ── Category ────────────────────────────────────────────────────────

/// Card category. Selects the rendering palette only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Category A, stored under the `"black"` key.
    #[serde(rename = "black")]
    Prompt,
    /// Category B, stored under the `"white"` key.
    #[serde(rename = "white")]
    Response,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Prompt => f.write_str("prompt"),
            Category::Response => f.write_str("response"),
        }
    }
}

// ── Card ────────────────────────────────────────────────────────────

/// One unit of printable text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub text: String,
    pub category: Category,
}

impl Card {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

// ── Deck ────────────────────────────────────────────────────────────

/// A validated deck: two ordered lists of card texts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(rename = "black", default)]
    pub prompts: Vec<String>,
    #[serde(rename = "white", default)]
    pub responses: Vec<String>,
}

impl Deck {
    pub fn new(prompts: Vec<String>, responses: Vec<String>) -> Self {
        Self { prompts, responses }
    }

    /// Parse a deck from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, DeckError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a deck from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = Self::from_json_str(&json)?;
        log::debug!(
            "Deck: loaded {} prompts and {} responses from {}",
            deck.prompts.len(),
            deck.responses.len(),
            path.display(),
        );
        Ok(deck)
    }

    /// Total number of cards.
    pub fn len(&self) -> usize {
        self.prompts.len() + self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All cards in print order: every prompt, then every response.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        let prompts = self
            .prompts
            .iter()
            .map(|text| Card::new(text.as_str(), Category::Prompt));
        let responses = self
            .responses
            .iter()
            .map(|text| Card::new(text.as_str(), Category::Response));
        prompts.chain(responses)
    }
}

// ===================================================================
// Tests
// ===================================================================
