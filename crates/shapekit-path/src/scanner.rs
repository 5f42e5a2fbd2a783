//! Tokenizer for path data.
//!
//! The scanner works directly on the input bytes: command letters are read
//! one at a time and numbers are consumed on demand by the interpreter, so
//! there is no intermediate token list.

use shapekit_core::MalformedPathError;

pub(crate) struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

fn is_delimiter(b: u8) -> bool {
    matches!(b, b' ' | b',' | b'\t' | b'\n' | b'\r')
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_delimiters(&mut self) {
        while self.peek().is_some_and(is_delimiter) {
            self.pos += 1;
        }
    }

    /// True when the next token (after delimiters) starts a number.
    pub(crate) fn next_is_number(&mut self) -> bool {
        self.skip_delimiters();
        matches!(self.peek(), Some(b'-' | b'.' | b'0'..=b'9'))
    }

    /// Read the next command character and its byte offset.
    ///
    /// Returns `None` at end of input. The character is not validated here.
    pub(crate) fn next_command(&mut self) -> Option<(char, usize)> {
        self.skip_delimiters();
        let offset = self.pos;
        let c = self.src[offset..].chars().next()?;
        self.pos += c.len_utf8();
        Some((c, offset))
    }

    /// Read one number: optional `-`, digits, at most one `.`.
    pub(crate) fn read_number(&mut self, command: char) -> Result<f64, MalformedPathError> {
        self.skip_delimiters();
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }

        let mut digits = 0usize;
        let mut seen_point = false;
        while let Some(b) = self.peek() {
            match b {
                b'0'..=b'9' => digits += 1,
                b'.' if !seen_point => seen_point = true,
                _ => break,
            }
            self.pos += 1;
        }

        let expected = MalformedPathError::ExpectedNumber {
            command,
            offset: start,
        };
        if digits == 0 {
            self.pos = start;
            return Err(expected);
        }
        self.src[start..self.pos].parse::<f64>().map_err(|_| expected)
    }

    /// Read an arc flag. Any non-zero number counts as set.
    pub(crate) fn read_flag(&mut self, command: char) -> Result<bool, MalformedPathError> {
        Ok(self.read_number(command)? != 0.0)
    }
}
