//! Line lexer: splits one row of input into classified cells.
//!
//! The lexer walks a single line with a cursor. Per field it skips a leading
//! comment (`#` at the cursor runs to end of input) and leading whitespace,
//! then consumes either a quoted lexeme (up to the matching quote, plus the
//! separator that follows) or an unquoted lexeme (up to the next delimiter).
//! It is a lazy, finite iterator, consumed exactly once by the grid builder.

use std::iter::Peekable;
use std::str::Chars;

use super::cell::Cell;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';

const QUOTE: char = '"';

/// Iterator over the classified cells of one line.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    delimiter: char,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str, delimiter: char) -> Lexer<'a> {
        Lexer {
            chars: line.chars().peekable(),
            delimiter,
        }
    }

    /// End of the line: exhausted input, a carriage return, or a NUL.
    fn is_end(&mut self) -> bool {
        match self.chars.peek() {
            None => true,
            Some(&c) => c == '\r' || c == '\0',
        }
    }

    /// Advance the cursor one character, unless at end of line.
    fn advance(&mut self) -> Option<char> {
        if self.is_end() { None } else { self.chars.next() }
    }

    /// Skip a leading comment run, then leading whitespace.
    /// The comment check happens first: `#` found after the whitespace is
    /// part of the next lexeme, matching the original field grammar.
    fn skip(&mut self) {
        if self.chars.peek() == Some(&'#') {
            while self.advance().is_some() {}
        }
        while !self.is_end() && self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.is_end() {
            return None;
        }
        self.skip();

        let quoted = self.chars.peek() == Some(&QUOTE);
        let end = if quoted {
            self.chars.next();
            QUOTE
        } else {
            self.delimiter
        };

        let mut lexeme = String::new();
        while !self.is_end() {
            match self.chars.peek() {
                Some(&c) if c != end => {
                    lexeme.push(c);
                    self.chars.next();
                }
                _ => break,
            }
        }

        // Consume the closing quote, then the field separator. Both are
        // no-ops at end of line so a terminator is never eaten.
        if self.chars.peek() == Some(&QUOTE) {
            self.advance();
        }
        self.advance();

        // An exhausted cursor still yields an Empty cell for this position;
        // the caller's end check happens before the skip, not after.
        Some(Cell::classify(&lexeme))
    }
}
