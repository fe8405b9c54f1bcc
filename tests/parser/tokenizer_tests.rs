//! Integration tests for the tokenizer

use twodm_parser::tokenize;

#[test]
fn splits_on_runs_of_whitespace() {
    assert_eq!(tokenize("ND  1\t2.0 \t 3.0 4.0"), vec!["ND", "1", "2.0", "3.0", "4.0"]);
}

#[test]
fn trims_line_terminators() {
    assert_eq!(tokenize("E2L 1 2 3 1\r\n"), vec!["E2L", "1", "2", "3", "1"]);
    assert_eq!(tokenize("\x0bNS\x0c1 -2"), vec!["NS", "1", "-2"]);
}

#[test]
fn drops_comments() {
    assert_eq!(tokenize("ND 1 0 0 0 # a node"), vec!["ND", "1", "0", "0", "0"]);
    assert_eq!(tokenize("ND 1 0 0 0#glued"), vec!["ND", "1", "0", "0", "0"]);
    assert!(tokenize("# only a comment").is_empty());
}

#[test]
fn empty_lines() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\r\n").is_empty());
}

#[test]
fn non_ascii_whitespace_is_not_a_separator() {
    assert_eq!(tokenize("a\u{a0}b"), vec!["a\u{a0}b"]);
}

mod properties {
    use proptest::prelude::*;
    use twodm_parser::tokenize;

    proptest! {
        #[test]
        fn tokens_never_contain_separators_or_comments(line in "\\PC{0,60}") {
            for token in tokenize(&line) {
                prop_assert!(!token.is_empty());
                prop_assert!(!token.contains([' ', '\t', '\n', '\r', '\x0b', '\x0c', '#']));
            }
        }
    }
}
