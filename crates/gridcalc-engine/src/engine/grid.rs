//! Row-major cell storage and the resolution sweep.

use super::address::resolve_address;
use super::cell::Cell;
use super::eval::eval_formula;
use super::lexer::Lexer;

/// Owned two-dimensional store of cells, indexed `[row][column]`. Rows may
/// have different lengths; lookups outside a row's width are not-found.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new() -> Grid {
        Grid { rows: Vec::new() }
    }

    /// Build a grid from raw input text, one row per line. Lines whose
    /// first character is `#` are skipped at the row level.
    pub fn from_source(source: &str, delimiter: char) -> Grid {
        let mut grid = Grid::new();
        for line in source.lines() {
            if line.starts_with('#') {
                continue;
            }
            grid.push_row(Lexer::new(line, delimiter).collect());
        }
        grid
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column bound used by address checks: the width of row 0.
    pub fn column_bound(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(x).and_then(|row| row.get(y))
    }

    /// Resolve every address and formula cell in one row-major sweep.
    ///
    /// Each cell is dispatched on the state it holds when the sweep arrives,
    /// and replaced at most once. References read whatever the target cell
    /// currently holds: cells already visited are resolved, cells ahead of
    /// the sweep still carry their raw lexeme and are copied verbatim. There
    /// is no dependency ordering, multi-pass fixpoint, or cycle detection; a
    /// self-reference reads the cell's own pre-replacement value.
    pub fn resolve(&mut self) {
        for x in 0..self.rows.len() {
            for y in 0..self.rows[x].len() {
                // The lookup/evaluation runs against the grid as it stands;
                // the replacement lands only after it returns.
                let replacement = match self.rows[x][y].clone() {
                    Cell::Address(lexeme) => Some(resolve_address(&lexeme, self)),
                    Cell::Formula(lexeme) => Some(eval_formula(&lexeme, self)),
                    _ => None,
                };
                if let Some(cell) = replacement {
                    self.rows[x][y] = cell;
                }
            }
        }
    }
}
