//! Column-aligned text rendering of a resolved grid.

use gridcalc_engine::engine::Grid;

/// Render the grid as a padded text dump: every cell left-aligned to its
/// column's maximum display width and terminated by `|`, one line per row.
/// Column widths are computed over all rows that have that column.
pub fn render_padded(grid: &Grid) -> String {
    let mut widths: Vec<usize> = Vec::new();
    for row in grid.rows() {
        if row.len() > widths.len() {
            widths.resize(row.len(), 0);
        }
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.display().chars().count());
        }
    }

    let mut out = String::new();
    for row in grid.rows() {
        for (col, cell) in row.iter().enumerate() {
            let width = widths.get(col).copied().unwrap_or(0);
            out.push_str(&format!("{:<width$}|", cell.display()));
        }
        out.push('\n');
    }
    out
}
