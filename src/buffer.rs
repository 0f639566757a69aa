//! Cursor bookkeeping over the input.
//!
//! The lexer reads the whole input up front and then walks it with a single
//! forward-only cursor. The buffer does no matching of its own.

/// Input bytes plus a cursor. `cursor == input.len()` means end of input.
#[derive(Debug)]
pub(crate) struct ScanBuffer<'a> {
    input: &'a [u8],
    cursor: usize,
}

/// Whitespace, per the ASCII definition plus vertical tab.
/// These bytes never occur inside a multi-byte UTF-8 character.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

impl<'a> ScanBuffer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        ScanBuffer { input, cursor: 0 }
    }

    /// Byte offset of the cursor.
    pub fn offset(&self) -> usize {
        self.cursor
    }

    pub fn end_of_input(&self) -> bool {
        self.cursor >= self.input.len()
    }

    /// The input from the cursor to the end.
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.cursor..]
    }

    /// The byte under the cursor, or `None` at end of input.
    pub fn current_byte(&self) -> Option<u8> {
        self.input.get(self.cursor).copied()
    }

    /// `n` bytes starting at the cursor. Panics if that runs past the end.
    pub fn substring(&self, n: usize) -> &'a [u8] {
        &self.input[self.cursor..self.cursor + n]
    }

    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.cursor + n <= self.input.len());
        self.cursor += n;
    }

    /// Moves the cursor past whitespace.
    /// A newline only counts as whitespace if `skip_newline` is set.
    pub fn skip_whitespace(&mut self, skip_newline: bool) {
        let start = self.cursor;
        while let Some(b) = self.current_byte() {
            if (!skip_newline && b == b'\n') || !is_space(b) {
                break;
            }
            self.cursor += 1;
        }
        if self.cursor != start {
            tracing::trace!("skipped {} bytes of whitespace at {}", self.cursor - start, start);
        }
    }
}
