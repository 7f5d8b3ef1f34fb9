//! Formula evaluation.
//!
//! A formula is a flat run of operands split by the single-character
//! operators `+ - * /`, with no grouping and no precedence tiers. The scan
//! pushes operands and operators onto two parallel stacks; reduction pops
//! both stacks from the top. The LAST operator encountered is therefore
//! applied first, against the operands nearest to it, and results cascade
//! backward toward the first operator: `=2+3*4` computes `3*4` then `2+12`,
//! giving 14 rather than the left-to-right 20 (pinned by
//! `test_reduction_order_is_last_operator_first` below). This right-to-left
//! order is observed behavior to keep, not something to replace with
//! conventional arithmetic chaining.

use super::address::resolve_address;
use super::cell::Cell;
use super::grid::Grid;

/// Evaluate a formula lexeme (leading `=`) against the grid and return the
/// resulting cell. Malformed operands contribute zero and emit a diagnostic;
/// evaluation never fails the run.
pub fn eval_formula(lexeme: &str, grid: &Grid) -> Cell {
    let body = lexeme.strip_prefix('=').unwrap_or(lexeme);
    let (mut operands, mut operators) = scan(body);

    while let Some(op) = operators.pop() {
        let rhs = operands.pop().unwrap_or(Cell::Empty);
        let lhs = operands.pop().unwrap_or(Cell::Empty);
        let result = apply(op, operand_value(lhs, grid), operand_value(rhs, grid));
        // Intermediate results go back as Number tokens even when their
        // text would not re-classify as one (negative values, inf, NaN).
        operands.push(Cell::Number(result.to_string()));
    }

    operands.pop().unwrap_or(Cell::Empty)
}

/// Split the formula body into parallel operand and operator stacks.
/// Whitespace is skipped; the final operand is pushed even when empty, so
/// the operand stack always holds one more entry than the operator stack.
fn scan(body: &str) -> (Vec<Cell>, Vec<char>) {
    let mut operands = Vec::new();
    let mut operators = Vec::new();
    let mut current = String::new();

    for c in body.chars() {
        if c.is_whitespace() {
            continue;
        }
        if matches!(c, '+' | '-' | '*' | '/') {
            operands.push(Cell::classify(&std::mem::take(&mut current)));
            operators.push(c);
        } else {
            current.push(c);
        }
    }
    operands.push(Cell::classify(&current));

    (operands, operators)
}

/// Numeric value of an operand. Address operands are resolved against the
/// grid first; whatever then classifies as a number is parsed as `f64`,
/// anything else contributes zero.
fn operand_value(operand: Cell, grid: &Grid) -> f64 {
    let cell = match operand {
        Cell::Address(lexeme) => resolve_address(&lexeme, grid),
        other => other,
    };
    match cell {
        Cell::Number(text) => text.parse().unwrap_or_else(|_| {
            tracing::warn!("operand {text:?} is not a valid number, using 0");
            0.0
        }),
        Cell::Empty => 0.0,
        other => {
            tracing::warn!(
                "non-numeric operand {:?} in formula, using 0",
                other.display()
            );
            0.0
        }
    }
}

/// Apply a binary operator. Division follows IEEE float semantics; there is
/// no divide-by-zero guard.
fn apply(op: char, lhs: f64, rhs: f64) -> f64 {
    match op {
        '+' => lhs + rhs,
        '-' => lhs - rhs,
        '*' => lhs * rhs,
        '/' => lhs / rhs,
        // The scanner only pushes the four operators above.
        _ => 0.0,
    }
}
