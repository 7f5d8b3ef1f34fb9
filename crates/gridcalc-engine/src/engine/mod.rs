//! Cell resolution engine.
//!
//! This module provides the core pieces for resolving a delimited table:
//!
//! - [`Cell`] - classified cell values (tagged by lexeme shape)
//! - [`Lexer`] - splits one line of input into classified cells
//! - [`Grid`] - row-major cell storage and the resolution sweep
//! - [`Address`], [`resolve_address`] - `:x;y` reference lookup
//! - [`eval_formula`] - stack-based formula reduction

mod address;
mod cell;
mod eval;
mod grid;
mod lexer;

pub use address::{Address, AddressParseError, resolve_address};
pub use cell::{Cell, is_number_lexeme};
pub use eval::eval_formula;
pub use grid::Grid;
pub use lexer::{DEFAULT_DELIMITER, Lexer};
