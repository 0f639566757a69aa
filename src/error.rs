//! Errors returned while building a lexer or lexing input.
//!
//! The three kinds are kept apart so a caller can tell a broken pattern set
//! (fix it in code) from a failing input source (maybe retry) from input that
//! simply doesn't fit the patterns (report the offset).

use thiserror::Error;

/// Error type for construction and lexing.
#[derive(Debug, Error)]
pub enum LexError {
    /// The pattern set could not be compiled. Only returned at construction.
    #[error("couldn't compile {}: {source}", describe_pattern(.index))]
    Pattern {
        /// Position of the offending pattern, if a single pattern was at fault.
        /// `None` when the patterns compile alone but not as a set.
        index: Option<usize>,
        #[source]
        source: PatternError,
    },

    /// The input could not be read in full.
    #[error("couldn't get input: {0}")]
    Input(#[from] std::io::Error),

    /// No pattern matches the input at `offset`; `found` is the byte there.
    #[error("couldn't match input at position {offset} (found byte {found:#04x})")]
    Match { offset: usize, found: u8 },
}

/// The compiler diagnostic behind a [`LexError::Pattern`].
#[derive(Debug, Error)]
pub enum PatternError {
    /// Bad syntax, or a pattern over the configured limits.
    #[error(transparent)]
    Syntax(#[from] regex::Error),
    /// The longest-match engine couldn't be built for the pattern.
    #[error(transparent)]
    Build(#[from] regex_automata::meta::BuildError),
}

fn describe_pattern(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("pattern {i}"),
        None => "pattern set".to_owned(),
    }
}

impl LexError {
    /// Byte offset of the unmatched input, for match errors.
    pub fn offset(&self) -> Option<usize> {
        match self {
            LexError::Match { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

/// The main result type for this crate.
pub type LexResult<T> = Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn match_error_reports_offset() {
        let err = LexError::Match {
            offset: 8,
            found: b'a',
        };
        assert_eq!(err.offset(), Some(8));
        assert_eq!(
            err.to_string(),
            "couldn't match input at position 8 (found byte 0x61)"
        );
    }

    #[test]
    fn pattern_error_names_index() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = LexError::Pattern {
            index: Some(3),
            source: source.into(),
        };
        assert!(err.to_string().starts_with("couldn't compile pattern 3: "));
        assert_eq!(err.offset(), None);

        let source = regex::Regex::new(")").unwrap_err();
        let err = LexError::Pattern {
            index: None,
            source: source.into(),
        };
        assert!(err.to_string().starts_with("couldn't compile pattern set: "));
    }

    #[test]
    fn input_error_from_io() {
        let err: LexError = std::io::Error::new(ErrorKind::UnexpectedEof, "closed").into();
        assert!(matches!(err, LexError::Input(_)));
        assert_eq!(err.to_string(), "couldn't get input: closed");
    }
}
