//! Cell data structures for the table grid.
//!
//! A [`Cell`] is a raw lexeme tagged by shape. Classification happens once
//! when a line is tokenized; address and formula cells are later replaced in
//! place by the resolution sweep (see [`super::grid::Grid::resolve`]).

use serde::{Deserialize, Serialize};

/// A classified cell value. Payloads keep the raw lexeme text: `Address`
/// keeps its leading `:`, `Formula` its leading `=`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Number(String),
    Text(String),
    Address(String),
    Formula(String),
}

impl Cell {
    /// Classify a raw lexeme. Strict priority order: empty, address,
    /// formula, number, text. Exactly one variant applies; unrecognized
    /// shapes fall through to `Text`.
    pub fn classify(lexeme: &str) -> Cell {
        if lexeme.is_empty() {
            return Cell::Empty;
        }
        if lexeme.starts_with(':') && lexeme.contains(';') {
            return Cell::Address(lexeme.to_string());
        }
        if lexeme.starts_with('=') {
            return Cell::Formula(lexeme.to_string());
        }
        if is_number_lexeme(lexeme) {
            return Cell::Number(lexeme.to_string());
        }
        Cell::Text(lexeme.to_string())
    }

    /// Text shown when the cell is rendered.
    pub fn display(&self) -> &str {
        match self {
            Cell::Empty => "",
            Cell::Number(s) | Cell::Text(s) | Cell::Address(s) | Cell::Formula(s) => s,
        }
    }

    /// Whether the cell still needs the resolution sweep.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Cell::Address(_) | Cell::Formula(_))
    }
}

/// The number-lexeme predicate: every character an ASCII digit or `.`.
/// Shared by the classifier and the address component checks. Note this is
/// a shape check, not a parse: `.` and `1.2.3` pass it.
pub fn is_number_lexeme(lexeme: &str) -> bool {
    lexeme.chars().all(|c| c.is_ascii_digit() || c == '.')
}
