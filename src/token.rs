//! Tokens produced by the lexer.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, Range};

/// A lexeme, tagged with the pattern that matched it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Index into the pattern list the lexer was built from.
    pub pattern: usize,
    /// The matched bytes, exactly as they appear in the input.
    pub value: Vec<u8>,
    /// Byte offset of the start of the lexeme in the input.
    pub offset: usize,
}

impl Token {
    pub fn new(pattern: usize, value: impl Into<Vec<u8>>, offset: usize) -> Self {
        Token {
            pattern,
            value: value.into(),
            offset,
        }
    }

    /// The value as UTF-8, or `None` if it isn't.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }

    /// The value as text, with invalid UTF-8 replaced by U+FFFD.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }

    /// Length of the lexeme in bytes.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Byte offset one past the end of the lexeme.
    pub fn end(&self) -> usize {
        self.offset + self.len()
    }

    /// Byte range of the lexeme in the input.
    pub fn span(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

/// Tokens order by value, then pattern, then offset.
/// Only useful for display and tests; lexing never sorts.
impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.pattern.cmp(&other.pattern))
            .then_with(|| self.offset.cmp(&other.offset))
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}@{}", self.pattern, self.text(), self.offset)
    }
}

/// Ordered sequence of tokens, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.0.push(token);
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.0
    }

    /// Returns the tokens reordered by value, pattern and offset.
    pub fn sorted(mut self) -> Self {
        self.0.sort();
        self
    }
}

impl Deref for Tokens {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(value: Vec<Token>) -> Self {
        Tokens(value)
    }
}

impl From<Tokens> for Vec<Token> {
    fn from(value: Tokens) -> Self {
        value.0
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        Tokens(iter.into_iter().collect())
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, token) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{token}")?;
        }
        write!(f, "]")
    }
}
