//! Property tests for whitespace handling and offsets.

use patlex::{Lexer, Token};
use proptest::prelude::*;

const WORDS: &[&str] = &["[[:alpha:]]+", "[[:digit:]]+"];

/// Lexemes paired with the whitespace that follows each one.
fn words_and_gaps(gap: &'static str) -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec(("[a-z]{1,6}|[0-9]{1,6}", gap), 0..24)
}

fn join(items: &[(String, String)]) -> String {
    items.iter().map(|(word, gap)| format!("{word}{gap}")).collect()
}

fn kinds_and_values(tokens: &[Token]) -> Vec<(usize, Vec<u8>)> {
    tokens.iter().map(|t| (t.pattern, t.value.clone())).collect()
}

proptest! {
    #[test]
    fn whitespace_runs_only_move_offsets(
        items in words_and_gaps("[ \t\r\n]{1,4}"),
        gaps in proptest::collection::vec("[ \t\x0B\x0C]{1,4}", 24),
        lead in "[ \n]{0,3}",
    ) {
        let lexer = Lexer::new(WORDS).unwrap();
        let original = lexer.lex_str(&join(&items)).unwrap();

        let respaced: String = lead.clone()
            + &items
                .iter()
                .zip(&gaps)
                .map(|((word, _), gap)| format!("{word}{gap}"))
                .collect::<String>();
        let respaced = lexer.lex_str(&respaced).unwrap();

        prop_assert_eq!(kinds_and_values(&original), kinds_and_values(&respaced));
        prop_assert_eq!(original.len(), items.len());
    }

    #[test]
    fn offsets_point_at_values(items in words_and_gaps("[ \t\n]{1,3}")) {
        let input = join(&items);
        let lexer = Lexer::new(WORDS).unwrap();
        for token in &lexer.lex_str(&input).unwrap() {
            prop_assert_eq!(&input.as_bytes()[token.span()], &token.value[..]);
        }
    }

    #[test]
    fn newline_pattern_yields_one_token_per_newline(items in words_and_gaps("[ \t\n]{1,3}")) {
        let input = join(&items);
        let skipping = Lexer::new(WORDS).unwrap();
        let counting = Lexer::new(["[[:alpha:]]+", "[[:digit:]]+", "\n"]).unwrap();
        prop_assert!(skipping.skips_newline());
        prop_assert!(!counting.skips_newline());

        let words = skipping.lex_str(&input).unwrap();
        let with_newlines = counting.lex_str(&input).unwrap();

        let newline_count = with_newlines.iter().filter(|t| t.pattern == 2).count();
        prop_assert_eq!(newline_count, input.matches('\n').count());
        prop_assert!(with_newlines
            .iter()
            .filter(|t| t.pattern == 2)
            .all(|t| t.value == b"\n"));

        let without_newlines: Vec<Token> = with_newlines
            .into_iter()
            .filter(|t| t.pattern != 2)
            .collect();
        prop_assert_eq!(words.into_vec(), without_newlines);
    }

    #[test]
    fn first_unmatched_offset_is_reported(
        items in words_and_gaps("[ ]{1,2}"),
        junk in "[?!%]",
        tail in "[a-z ]{0,8}",
    ) {
        let prefix = join(&items);
        let input = format!("{prefix}{junk}{tail}");
        let lexer = Lexer::new(WORDS).unwrap();
        let err = lexer.lex_str(&input).unwrap_err();
        prop_assert_eq!(err.offset(), Some(prefix.len()));
    }
}
