//! CSS Scanner
//!
//! Character-level cursor shared by the statement and selector splitters.
//! It knows just enough CSS to step over string literals and comments.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

/// Source location in CSS
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Cursor over CSS text
pub struct Scanner<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get the current source location
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// Byte offset of the next unconsumed character
    pub fn position(&self) -> usize {
        self.position
    }

    /// Peek at the next character without consuming
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Peek at the second character without consuming
    pub fn peek_second(&self) -> Option<char> {
        let mut iter = self.input[self.position..].chars();
        iter.next();
        iter.next()
    }

    /// Consume the next character
    pub fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Step over a quoted string starting at the current quote character.
    ///
    /// A backslash consumes the character after it, so an escaped quote does
    /// not close the string. Returns `false` if input ended first.
    pub fn skip_string(&mut self) -> bool {
        let start = self.location();
        let quote = match self.advance() {
            Some(q @ ('"' | '\'')) => q,
            _ => return false,
        };

        loop {
            match self.advance() {
                Some('\\') => {
                    self.advance();
                }
                Some(c) if c == quote => return true,
                Some(_) => continue,
                None => {
                    log::debug!("Unterminated string starting at {}", start);
                    return false;
                }
            }
        }
    }

    /// Step over a `/* ... */` comment starting at the current position.
    ///
    /// Returns `false` if the comment is not closed before end of input, in
    /// which case the scanner is left at the end.
    pub fn skip_comment(&mut self) -> bool {
        if self.peek() != Some('/') || self.peek_second() != Some('*') {
            return false;
        }
        let start = self.location();
        self.advance(); // consume '/'
        self.advance(); // consume '*'

        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return true;
                }
                Some(_) => continue,
                None => {
                    log::debug!("Unterminated comment starting at {}", start);
                    return false;
                }
            }
        }
    }
}
