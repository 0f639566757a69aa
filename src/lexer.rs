//! The lexer: skip whitespace, take the longest match, emit a token, repeat.

use std::io::Read;

use crate::buffer::ScanBuffer;
use crate::error::{LexError, LexResult};
use crate::pattern::{Limits, PatternSet};
use crate::token::{Token, Tokens};

/// A general-purpose lexer over an ordered list of regex patterns.
///
/// At each position the longest match wins. Among patterns tied at the
/// longest length, the one listed first wins.
///
/// Whitespace between tokens is skipped. So are newlines, unless `"\n"` is
/// itself one of the patterns, in which case each newline that no longer
/// pattern swallows becomes a token of its own.
///
/// Patterns that can match the empty string are allowed, but an empty match
/// is never taken as a token.
///
/// A `Lexer` is immutable once built and can be shared between threads.
/// Matching time is whatever the `regex` crate needs for the given patterns;
/// there is no timeout.
#[derive(Debug, Clone)]
pub struct Lexer {
    patterns: PatternSet,
}

impl Lexer {
    /// Build a lexer from the given patterns, with default limits.
    ///
    /// The index of each pattern in `patterns` is the `pattern` of the
    /// tokens it matches, so the order matters.
    pub fn new<I>(patterns: I) -> LexResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        LexerBuilder::default().build(patterns)
    }

    /// Start configuring a lexer with non-default regex limits.
    pub fn builder() -> LexerBuilder {
        LexerBuilder::default()
    }

    /// The patterns this lexer was built from, in order.
    pub fn patterns(&self) -> &[String] {
        self.patterns.sources()
    }

    /// Whether newlines are skipped as whitespace.
    pub fn skips_newline(&self) -> bool {
        self.patterns.skip_newline()
    }

    /// Read all of `input`, then lex it.
    ///
    /// Input that can't be read is an [`LexError::Input`]. The bytes need not
    /// be UTF-8.
    pub fn lex<R: Read>(&self, mut input: R) -> LexResult<Tokens> {
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;
        self.lex_bytes(&bytes)
    }

    /// Lex `input` into tokens. See [`Lexer::lex_bytes`].
    pub fn lex_str(&self, input: &str) -> LexResult<Tokens> {
        self.lex_bytes(input.as_bytes())
    }

    /// Lex `input` into tokens.
    ///
    /// Either every non-whitespace byte ends up in a token, or this returns
    /// the first offset where no pattern matches. No partial result is kept.
    pub fn lex_bytes(&self, input: &[u8]) -> LexResult<Tokens> {
        let mut buffer = ScanBuffer::new(input);
        let mut tokens = Tokens::new();

        loop {
            buffer.skip_whitespace(self.patterns.skip_newline());
            if buffer.end_of_input() {
                break;
            }
            tokens.push(self.next_token(&mut buffer)?);
        }

        tracing::trace!("lexed {} tokens from {} bytes", tokens.len(), input.len());
        Ok(tokens)
    }

    /// Match one token at the cursor and move past it.
    fn next_token(&self, buffer: &mut ScanBuffer<'_>) -> LexResult<Token> {
        let offset = buffer.offset();
        let Some(found) = self.patterns.longest_match(buffer.remaining()) else {
            tracing::debug!("no pattern matches at position {}", offset);
            return Err(LexError::Match {
                offset,
                // Only called with input left, so there is always a byte here.
                found: buffer.current_byte().unwrap_or_default(),
            });
        };

        let token = Token::new(found.winner, buffer.substring(found.len), offset);
        if found.tied.len() > 1 {
            tracing::trace!(
                "patterns {:?} tied at length {}; took {}",
                found.tied,
                found.len,
                found.winner
            );
        }
        tracing::trace!("token {}", token);
        buffer.advance(found.len);
        Ok(token)
    }
}

/// Configures the regex compiler limits for a [`Lexer`].
///
/// ```
/// let lexer = patlex::Lexer::builder()
///     .size_limit(1 << 20)
///     .build(["[[:alpha:]]+", "[[:digit:]]+"])
///     .unwrap();
/// assert_eq!(lexer.patterns().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LexerBuilder {
    limits: Limits,
}

impl LexerBuilder {
    /// A builder with the `regex` crate's default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Approximate limit, in bytes, on the size of each compiled pattern
    /// and of the combined set.
    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.limits.size_limit = Some(bytes);
        self
    }

    /// Approximate limit, in bytes, on the cache for lazy DFA matching.
    pub fn dfa_size_limit(mut self, bytes: usize) -> Self {
        self.limits.dfa_size_limit = Some(bytes);
        self
    }

    /// Limit on the nesting depth of each pattern's syntax.
    pub fn nest_limit(mut self, depth: u32) -> Self {
        self.limits.nest_limit = Some(depth);
        self
    }

    /// Compile the patterns into a lexer.
    ///
    /// Fails with [`LexError::Pattern`] if any pattern doesn't compile.
    pub fn build<I>(&self, patterns: I) -> LexResult<Lexer>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let patterns = PatternSet::compile(patterns, self.limits)?;
        tracing::debug!(
            "compiled lexer with {} patterns (skip newline: {})",
            patterns.sources().len(),
            patterns.skip_newline()
        );
        Ok(Lexer { patterns })
    }
}
