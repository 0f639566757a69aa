//! Lex stdin with the patterns given as arguments, and print the tokens.
//!
//! Each token is printed on its own line as
//! `<pattern index> <offset> <value, debug-quoted>`. Bytes that aren't UTF-8
//! print as U+FFFD.
//!
//! ```ignore
//! <input.txt lex_to_debug '[[:alpha:]]+' '[[:digit:]]+' '[\.,]'
//! ```

use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let patterns: Vec<String> = std::env::args().skip(1).collect();
    let lexer = match patlex::Lexer::new(&patterns) {
        Ok(lexer) => lexer,
        Err(err) => {
            eprintln!("error: couldn't create lexer: {err}");
            return ExitCode::FAILURE;
        }
    };

    let tokens = match lexer.lex(std::io::stdin().lock()) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("error: couldn't lex input: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    for token in &tokens {
        if let Err(err) = writeln!(stdout, "{} {} {:?}", token.pattern, token.offset, token.text()) {
            eprintln!("error: couldn't write output: {err}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
