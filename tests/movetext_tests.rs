
use chess_notation::movetext::{count_tokens, tokenize, tokens};
use proptest::prelude::*;
use test_utils::*;

#[test]
fn test_token_counts() {
    assert_eq!(count_tokens("1."), 0);
    assert_eq!(count_tokens("1. e4"), 1);
    assert_eq!(count_tokens("1. e4 e5"), 2);
}

#[test]
fn test_full_game_tokens() {
    let tokens = tokenize(SEVENTEEN_PLY_GAME);

    assert_eq!(tokens.len(), 17);
    assert_eq!(count_tokens(SEVENTEEN_PLY_GAME), 17);
    assert_eq!(tokens.first().map(String::as_str), Some("e4"));
    assert_eq!(tokens.last().map(String::as_str), Some("h3"));
    assert!(tokens.iter().any(|token| token == "O-O"));
}

#[test]
fn test_multiline_movetext_with_result() {
    let text = "1. d4 Nf6 2. c4 e6\n3. Nc3 Bb4 4. Qc2 O-O\n5. a3 Bxc3+ 6. Qxc3 1/2-1/2\n";

    assert_eq!(
        tokenize(text),
        vec!["d4", "Nf6", "c4", "e6", "Nc3", "Bb4", "Qc2", "O-O", "a3", "Bxc3+", "Qxc3"]
    );
}

#[test]
fn test_zero_castling_loses_leading_digit() {
    // Leading digits are move-number noise, even in 0-0
    assert_eq!(tokenize("5. 0-0 0-0-0"), vec!["-0", "-0-0"]);
    assert_eq!(tokenize("5. O-O O-O-O"), vec!["O-O", "O-O-O"]);
}

fn movetext_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("1.".to_string()),
        Just("12...".to_string()),
        Just("e4".to_string()),
        Just("Nxf3+".to_string()),
        Just("O-O-O#".to_string()),
        Just("1-0".to_string()),
        Just("*".to_string()),
        "[a-hNBRQKx1-8.=+#-]{0,6}",
        "[ \t\n]{1,3}",
    ]
}

proptest! {
    #[test]
    fn prop_count_matches_sequence(text in ".{0,80}") {
        prop_assert_eq!(tokenize(&text).len(), count_tokens(&text));
    }

    #[test]
    fn prop_count_matches_sequence_on_movetext(
        fragments in proptest::collection::vec(movetext_fragment(), 0..24),
    ) {
        let text = fragments.join(" ");
        let collected = tokenize(&text);

        prop_assert_eq!(collected.len(), count_tokens(&text));
        prop_assert_eq!(
            tokens(&text).map(str::to_string).collect::<Vec<_>>(),
            collected.clone()
        );
        for token in &collected {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }
}
