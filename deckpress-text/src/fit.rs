//! Text fitting: greedy word wrap and vertical centering.
//!
//! Wrapping is purely width-driven: words are appended to the current
//! line while the measured width stays within budget. A word that is
//! wider than the budget on its own gets a line to itself and is never
//! split. The wrapped block is then centered vertically in the card.
//!
//! ```text
//!  top ─► ┌───────────────┐
//!         │ line 0        │ height₀
//!         ├───── gap ─────┤
//!         │ line 1        │ height₁
//!         └───────────────┘
//!  total_height = Σ heights + gap × (lines − 1)
//!  top          = ⌊(card_height − total_height) / 2⌋
//! ```

use deckpress_core::{Canvas, Rgb};

/// Default vertical gap between wrapped lines, in pixels.
pub const DEFAULT_LINE_GAP: i32 = 10;

/// Rendered size of a text run in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextExtent {
    pub width: i32,
    pub height: i32,
}

/// Text measurement capability.
pub trait TextMeasure {
    fn measure(&mut self, text: &str) -> TextExtent;
}

/// Measurement plus painting onto a [`Canvas`].
pub trait TextPainter: TextMeasure {
    /// Paint `text` with the top-left of its line box at `(x, y)`.
    fn draw_text<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        x: i64,
        y: i64,
        text: &str,
        color: Rgb<u8>,
    );
}

/// One wrapped line and its measured size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FittedLine {
    pub text: String,
    pub width: i32,
    pub height: i32,
}

/// Wrapped, vertically positioned text ready to paint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FittedBlock {
    pub lines: Vec<FittedLine>,
    /// Sum of line heights plus inter-line gaps.
    pub total_height: i32,
    /// Y offset of the first line. Negative when the block overflows.
    pub top: i32,
    line_gap: i32,
}

impl FittedBlock {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_heights(&self) -> Vec<i32> {
        self.lines.iter().map(|line| line.height).collect()
    }

    /// Top-left position of every line, centered horizontally in
    /// `card_width`.
    pub fn placements(&self, card_width: i32) -> impl Iterator<Item = (i32, i32, &FittedLine)> {
        let gap = self.line_gap;
        self.lines.iter().scan(self.top, move |y, line| {
            let x = (card_width - line.width).div_euclid(2);
            let placed = (x, *y, line);
            *y += line.height + gap;
            Some(placed)
        })
    }
}

/// Greedy wrapper for a fixed-size text box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextFitter {
    max_width: i32,
    card_height: i32,
    line_gap: i32,
}

impl TextFitter {
    pub fn new(max_width: i32, card_height: i32) -> Self {
        Self {
            max_width,
            card_height,
            line_gap: DEFAULT_LINE_GAP,
        }
    }

    pub fn with_line_gap(mut self, line_gap: i32) -> Self {
        self.line_gap = line_gap;
        self
    }

    pub fn line_gap(&self) -> i32 {
        self.line_gap
    }

    /// Break `text` into lines that fit `max_width`.
    pub fn wrap<M: TextMeasure + ?Sized>(&self, text: &str, measure: &mut M) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if measure.measure(&candidate).width <= self.max_width {
                current = candidate;
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current.push_str(word);
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    /// Wrap, measure, and vertically center `text`.
    pub fn fit<M: TextMeasure + ?Sized>(&self, text: &str, measure: &mut M) -> FittedBlock {
        let lines: Vec<FittedLine> = self
            .wrap(text, measure)
            .into_iter()
            .map(|text| {
                let extent = measure.measure(&text);
                FittedLine {
                    text,
                    width: extent.width,
                    height: extent.height,
                }
            })
            .collect();

        let gaps = self.line_gap * (lines.len() as i32 - 1).max(0);
        let total_height = lines.iter().map(|line| line.height).sum::<i32>() + gaps;
        let top = (self.card_height - total_height).div_euclid(2);

        FittedBlock {
            lines,
            total_height,
            top,
            line_gap: self.line_gap,
        }
    }
}

// ===================================================================
// Tests
// ===================================================================
