//! PGN movetext tokenizer.
//!
//! Move numbers (`1.`, `12...`) are stripped from the front of each
//! whitespace-delimited run and game-result markers (`1-0`, `0-1`,
//! `1/2-1/2`, `*`) are dropped. Everything else is a SAN token, emitted
//! verbatim with any `+`/`#` suffix attached.

use crate::types::GameResult;

/// Restartable iterator over the SAN tokens of a movetext blob.
/// Cloning it restarts from the clone point.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    runs: std::str::SplitWhitespace<'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        for run in self.runs.by_ref() {
            if GameResult::from_marker(run).is_some() {
                continue;
            }

            let token = run.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.');
            if !token.is_empty() {
                return Some(token);
            }
        }

        None
    }
}

pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens {
        runs: text.split_whitespace(),
    }
}

pub fn tokenize(text: &str) -> Vec<String> {
    tokens(text).map(str::to_string).collect()
}

pub fn count_tokens(text: &str) -> usize {
    tokens(text).count()
}

/// The result marker closing the movetext, if there is one
pub fn result(text: &str) -> Option<GameResult> {
    text.split_whitespace().next_back().and_then(GameResult::from_marker)
}
