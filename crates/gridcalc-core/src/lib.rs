//! gridcalc-core - table loading, resolution driving, and text rendering.

pub mod error;
pub mod render;
pub mod table;

pub use error::{GridcalcError, Result};
pub use render::render_padded;
pub use table::Table;

pub use gridcalc_engine::engine::{Cell, DEFAULT_DELIMITER, Grid};
