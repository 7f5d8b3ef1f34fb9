//! gridcalc-engine - table cell resolution (classification, addresses, formulas).

pub mod engine;

#[cfg(test)]
mod tests {
    use crate::engine::*;

    #[test]
    fn test_classification_priority_order() {
        // Empty wins over the number shape, address over formula shape
        // never overlaps (':' vs '='), number over text.
        assert_eq!(Cell::classify(""), Cell::Empty);
        assert_eq!(Cell::classify("12.5"), Cell::Number("12.5".to_string()));
        assert_eq!(Cell::classify(":2;3"), Cell::Address(":2;3".to_string()));
        assert_eq!(Cell::classify("=2+3"), Cell::Formula("=2+3".to_string()));
        assert_eq!(Cell::classify("word"), Cell::Text("word".to_string()));
    }

    #[test]
    fn test_address_lookup_in_five_by_five_grid() {
        let mut source = String::new();
        for row in 0..5 {
            let fields: Vec<String> = (0..5).map(|col| format!("{}", row * 5 + col)).collect();
            source.push_str(&fields.join(","));
            source.push('\n');
        }
        let grid = Grid::from_source(&source, DEFAULT_DELIMITER);
        // Cell [2][3] holds 2*5+3 = 13.
        assert_eq!(resolve_address(":2;3", &grid), Cell::Number("13".to_string()));
    }

    #[test]
    fn test_full_pipeline_line_to_resolved_grid() {
        let source = "# prices\n10,20\n=:0;0+:0;1,=:1;0/2";
        let mut grid = Grid::from_source(source, DEFAULT_DELIMITER);
        grid.resolve();

        assert_eq!(grid.get(0, 0), Some(&Cell::Number("10".to_string())));
        // Sum of the two literals above.
        assert_eq!(grid.get(1, 0), Some(&Cell::Number("30".to_string())));
        // Refers to the already-resolved sum on its left.
        assert_eq!(grid.get(1, 1), Some(&Cell::Number("15".to_string())));
    }

    #[test]
    fn test_diagnosed_errors_do_not_abort_the_sweep() {
        let source = ":a;0,=2+nope,:9;9,done";
        let mut grid = Grid::from_source(source, DEFAULT_DELIMITER);
        grid.resolve();

        assert_eq!(grid.get(0, 0), Some(&Cell::Empty));
        assert_eq!(grid.get(0, 1), Some(&Cell::Number("2".to_string())));
        assert_eq!(grid.get(0, 2), Some(&Cell::Empty));
        assert_eq!(grid.get(0, 3), Some(&Cell::Text("done".to_string())));
    }
}
