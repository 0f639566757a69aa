//! Compiling an ordered list of patterns into one matcher.
//!
//! ## Design
//!
//! -   A `RegexSet` over all the anchored patterns reports, in one pass,
//!     which patterns match at the cursor at all.
//! -   Each candidate's own `regex-automata` regex, built with
//!     `MatchKind::All` and searched anchored, then measures the longest match
//!     that pattern can make there. `regex` alone only gives leftmost-first
//!     matches, which stop early on `=|==` or `[a-z]+?`.
//!
//! Patterns are identified by their position in the set, never by capture
//! groups, so groups inside a user's pattern can't be mistaken for a
//! lexeme boundary.
//!
//! Everything works on bytes: input doesn't have to be UTF-8.

use regex::bytes::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};
use regex_automata::util::syntax;
use regex_automata::{meta, Anchored, Input, MatchKind};

use crate::error::{LexError, LexResult, PatternError};

/// Limits forwarded to the regex compiler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Limits {
    pub size_limit: Option<usize>,
    pub dfa_size_limit: Option<usize>,
    pub nest_limit: Option<u32>,
}

/// `RegexBuilder` and `RegexSetBuilder` share these setters but no trait.
macro_rules! apply_limits {
    ($limits:expr, $builder:expr) => {{
        let limits: &Limits = $limits;
        let builder = $builder;
        if let Some(limit) = limits.size_limit {
            builder.size_limit(limit);
        }
        if let Some(limit) = limits.dfa_size_limit {
            builder.dfa_size_limit(limit);
        }
        if let Some(limit) = limits.nest_limit {
            builder.nest_limit(limit);
        }
    }};
}

impl Limits {
    fn regex(&self, pattern: &str) -> Result<Regex, regex::Error> {
        let mut builder = RegexBuilder::new(pattern);
        apply_limits!(self, &mut builder);
        builder.build()
    }

    fn set(&self, patterns: &[String]) -> Result<RegexSet, regex::Error> {
        let mut builder = RegexSetBuilder::new(patterns);
        apply_limits!(self, &mut builder);
        builder.build()
    }

    /// A regex reporting the longest match rather than the leftmost-first one.
    fn longest(&self, pattern: &str) -> Result<meta::Regex, meta::BuildError> {
        let mut config = meta::Config::new().match_kind(MatchKind::All);
        if let Some(limit) = self.size_limit {
            config = config.nfa_size_limit(Some(limit));
        }
        if let Some(limit) = self.dfa_size_limit {
            config = config
                .dfa_size_limit(Some(limit))
                .hybrid_cache_capacity(limit);
        }
        // Same syntax as `regex::bytes`: patterns may match invalid UTF-8.
        let mut syntax = syntax::Config::new().utf8(false);
        if let Some(limit) = self.nest_limit {
            syntax = syntax.nest_limit(limit);
        }
        meta::Builder::new()
            .configure(config)
            .syntax(syntax)
            .build(pattern)
    }
}

/// The longest match at a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestMatch {
    /// Length of the match in bytes. Never zero.
    pub len: usize,
    /// The earliest pattern among those tied at `len`.
    pub winner: usize,
    /// Every pattern that matched exactly `len` bytes, in ascending order.
    /// Always starts with `winner`.
    pub tied: Vec<usize>,
}

impl LongestMatch {
    fn new(index: usize, len: usize) -> Self {
        LongestMatch {
            len,
            winner: index,
            tied: vec![index],
        }
    }
}

/// An ordered pattern set, compiled for matching at a fixed position.
#[derive(Debug, Clone)]
pub(crate) struct PatternSet {
    sources: Vec<String>,
    set: RegexSet,
    longest: Vec<meta::Regex>,
    skip_newline: bool,
}

/// Wraps a pattern so it only matches at the start of the haystack.
fn anchor(pattern: &str) -> String {
    format!(r"\A(?:{pattern})")
}

impl PatternSet {
    /// Compiles `patterns`, in order. Fails on the first pattern that doesn't compile.
    pub fn compile<I>(patterns: I, limits: Limits) -> LexResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let sources: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_owned())
            .collect();

        let mut anchored = Vec::with_capacity(sources.len());
        let mut longest = Vec::with_capacity(sources.len());
        for (index, source) in sources.iter().enumerate() {
            let failed = |err: PatternError| LexError::Pattern {
                index: Some(index),
                source: err,
            };
            // Validate the bare pattern first: a fragment like "a)|(b" only
            // parses once wrapped, and must not be accepted as something else.
            limits.regex(source).map_err(|err| failed(err.into()))?;
            longest.push(limits.longest(source).map_err(|err| failed(err.into()))?);
            anchored.push(anchor(source));
        }

        let set = limits.set(&anchored).map_err(|err| LexError::Pattern {
            index: None,
            source: err.into(),
        })?;

        // Newlines are whitespace unless one of the patterns is a bare newline.
        let skip_newline = !sources.iter().any(|s| s == "\n");

        Ok(PatternSet {
            sources,
            set,
            longest,
            skip_newline,
        })
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn skip_newline(&self) -> bool {
        self.skip_newline
    }

    /// Finds the longest non-empty match at the start of `haystack`.
    ///
    /// Returns `None` if no pattern produces a non-empty match there.
    pub fn longest_match(&self, haystack: &[u8]) -> Option<LongestMatch> {
        let mut best: Option<LongestMatch> = None;
        // SetMatches iterates in ascending pattern order, so ties accumulate sorted.
        for index in self.set.matches(haystack).iter() {
            let input = Input::new(haystack).anchored(Anchored::Yes);
            let Some(found) = self.longest[index].search(&input) else {
                continue;
            };
            let len = found.end();
            if len == 0 {
                continue;
            }
            let best_len = best.as_ref().map_or(0, |m| m.len);
            if len > best_len {
                best = Some(LongestMatch::new(index, len));
            } else if len == best_len {
                if let Some(current) = best.as_mut() {
                    current.tied.push(index);
                }
            }
        }
        best
    }
}
