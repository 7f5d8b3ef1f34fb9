//! Cell address parsing and grid lookup.
//!
//! An address lexeme has the form `:<x>;<y>`, where `x` indexes the outer
//! row sequence and `y` the column within it, in the same order they appear
//! in the lexeme.

use thiserror::Error;

use super::cell::{Cell, is_number_lexeme};
use super::grid::Grid;

/// Coordinates parsed from an address lexeme. `x` is the row, `y` the
/// column, matching the `:x;y` lexeme order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Address {
    pub x: usize,
    pub y: usize,
}

/// Why an address lexeme failed to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    #[error("[x] address can only be a number")]
    BadX,
    #[error("[y] address can only be a number")]
    BadY,
    #[error("address is missing the ';' separator")]
    MissingSeparator,
}

impl Address {
    /// Parse `:<x>;<y>`. Each half must pass the number-lexeme shape check
    /// and parse as an integer.
    pub fn parse(lexeme: &str) -> Result<Address, AddressParseError> {
        let body = lexeme.strip_prefix(':').unwrap_or(lexeme);
        let (raw_x, raw_y) = body
            .split_once(';')
            .ok_or(AddressParseError::MissingSeparator)?;

        if !is_number_lexeme(raw_x) {
            return Err(AddressParseError::BadX);
        }
        let x = raw_x.parse().map_err(|_| AddressParseError::BadX)?;

        if !is_number_lexeme(raw_y) {
            return Err(AddressParseError::BadY);
        }
        let y = raw_y.parse().map_err(|_| AddressParseError::BadY)?;

        Ok(Address { x, y })
    }
}

/// Resolve an address lexeme against the grid.
///
/// Returns a copy of whatever the target cell holds at the moment of the
/// call: the sweep runs forward, so a reference to a not-yet-visited cell
/// copies its unresolved raw form. Malformed and out-of-bounds addresses
/// degrade to `Cell::Empty` with a diagnostic; they never abort the run.
pub fn resolve_address(lexeme: &str, grid: &Grid) -> Cell {
    let address = match Address::parse(lexeme) {
        Ok(address) => address,
        Err(e) => {
            tracing::warn!("bad address {lexeme:?}: {e}");
            return Cell::Empty;
        }
    };

    // Bounds policy kept from the original: the column is checked against
    // row 0's width regardless of which row is addressed.
    if address.x < grid.row_count() && address.y < grid.column_bound() {
        grid.get(address.x, address.y)
            .cloned()
            .unwrap_or(Cell::Empty)
    } else {
        Cell::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::lexer::DEFAULT_DELIMITER;

    fn grid(source: &str) -> Grid {
        Grid::from_source(source, DEFAULT_DELIMITER)
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(Address::parse(":2;3"), Ok(Address { x: 2, y: 3 }));
        assert_eq!(Address::parse(":0;0"), Ok(Address { x: 0, y: 0 }));
    }

    #[test]
    fn test_parse_bad_x_component() {
        assert_eq!(Address::parse(":a;0"), Err(AddressParseError::BadX));
        // Shape check passes for "1.5" but integer parsing does not.
        assert_eq!(Address::parse(":1.5;0"), Err(AddressParseError::BadX));
        assert_eq!(Address::parse(":;0"), Err(AddressParseError::BadX));
    }

    #[test]
    fn test_parse_bad_y_component() {
        assert_eq!(Address::parse(":0;b"), Err(AddressParseError::BadY));
    }

    #[test]
    fn test_parse_missing_separator() {
        assert_eq!(
            Address::parse(":12"),
            Err(AddressParseError::MissingSeparator)
        );
    }

    #[test]
    fn test_resolve_returns_copy_of_target() {
        let g = grid("1,2,3\n4,5,6\n7,8,9\na,b,c\nx,y,z");
        // Row 2, column 1 in a 5-row grid.
        assert_eq!(
            resolve_address(":2;1", &g),
            Cell::Number("8".to_string())
        );
    }

    #[test]
    fn test_resolve_out_of_bounds_row() {
        let g = grid("1\n2\n3");
        assert_eq!(resolve_address(":10;0", &g), Cell::Empty);
    }

    #[test]
    fn test_resolve_malformed_component_is_empty() {
        let g = grid("1,2\n3,4");
        assert_eq!(resolve_address(":a;0", &g), Cell::Empty);
    }

    #[test]
    fn test_resolve_column_bound_is_row_zero_width() {
        // Row 1 is wider than row 0, but the bound comes from row 0.
        let g = grid("1\n2,3,4");
        assert_eq!(resolve_address(":1;2", &g), Cell::Empty);
        assert_eq!(resolve_address(":1;0", &g), Cell::Number("2".to_string()));
    }

    #[test]
    fn test_resolve_within_bound_but_short_row() {
        // In bounds per the row-0 policy, but the target row is shorter:
        // the lookup itself comes back not-found.
        let g = grid("1,2,3\n4");
        assert_eq!(resolve_address(":1;2", &g), Cell::Empty);
    }
}
