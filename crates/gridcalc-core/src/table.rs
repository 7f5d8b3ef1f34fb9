//! Table document: owns the grid for one run.

use std::path::Path;

use gridcalc_engine::engine::Grid;

use crate::error::Result;

/// One loaded table. The grid is exclusively owned for the duration of the
/// run: it is built once from the input, mutated by a single resolution
/// sweep, then read out for display.
pub struct Table {
    grid: Grid,
}

impl Table {
    /// Load a table from a file. The path is required configuration; there
    /// is no default input location.
    pub fn load(path: &Path, delimiter: char) -> Result<Table> {
        let content = std::fs::read_to_string(path)?;
        Ok(Table::from_content(&content, delimiter))
    }

    /// Build a table from raw input text.
    pub fn from_content(content: &str, delimiter: char) -> Table {
        Table {
            grid: Grid::from_source(content, delimiter),
        }
    }

    /// Run the resolution sweep, replacing address and formula cells with
    /// their final values.
    pub fn resolve(&mut self) {
        self.grid.resolve();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcalc_engine::engine::{Cell, DEFAULT_DELIMITER};

    #[test]
    fn test_from_content_builds_and_resolves() {
        let mut table = Table::from_content("1,2\n=:0;0+:0;1", DEFAULT_DELIMITER);
        table.resolve();
        assert_eq!(
            table.grid().get(1, 0),
            Some(&Cell::Number("3".to_string()))
        );
    }

    #[test]
    fn test_comment_lines_do_not_become_rows() {
        let table = Table::from_content("# header\n1\n2", DEFAULT_DELIMITER);
        assert_eq!(table.grid().row_count(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let missing = std::env::temp_dir().join("gridcalc_no_such_input.txt");
        assert!(Table::load(&missing, DEFAULT_DELIMITER).is_err());
    }
}
