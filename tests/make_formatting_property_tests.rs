//! Property-based tests for the reformatter.
//!
//! These check invariants that should hold across a wide range of
//! generated port `Makefile` fragments, rather than fixed examples.

#![allow(clippy::unwrap_used)]

use portfmt::builder::parse_str;
use portfmt::edit::run_mandatory_passes;
use portfmt::format::print;
use portfmt::settings::ParserSettings;
use proptest::prelude::*;

fn reformat(text: &str, settings: &ParserSettings) -> String {
    let mut ast = parse_str(text).unwrap();
    run_mandatory_passes(&mut ast).unwrap();
    print(&ast, settings)
}

/// A single `NAME=value value...` line using a knowledge-base-unknown
/// variable name, so sorting/dedup/wrap policy stays the generic default.
fn variable_line_strategy() -> impl Strategy<Value = String> {
    (
        "[A-Z][A-Z_]{2,12}",
        prop::collection::vec("[a-z][a-z0-9]{1,8}", 1..6),
    )
        .prop_map(|(name, words)| format!("{name}=\t{}\n", words.join(" ")))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn reformatting_is_idempotent(line in variable_line_strategy()) {
        let settings = ParserSettings::default();
        let once = reformat(&line, &settings);
        let twice = reformat(&once, &settings);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn every_assignment_line_uses_a_tab_after_the_operator(line in variable_line_strategy()) {
        let settings = ParserSettings::default();
        let output = reformat(&line, &settings);
        for printed_line in output.lines() {
            if let Some(idx) = printed_line.find('=') {
                let after = &printed_line[idx + 1..];
                prop_assert!(after.is_empty() || after.starts_with('\t') || after.starts_with(' '));
            }
        }
    }

    #[test]
    fn wrapping_never_drops_a_word(line in variable_line_strategy(), wrapcol in 10usize..100usize) {
        let mut settings = ParserSettings::default();
        settings.wrapcol = wrapcol;
        let output = reformat(&line, &settings);

        let original_words: Vec<&str> = line.split_whitespace().skip(1).collect();
        for word in original_words {
            prop_assert!(output.contains(word));
        }
    }
}
