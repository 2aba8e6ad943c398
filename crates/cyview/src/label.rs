//! Label text cleanup.
//!
//! Layout engines embed their own markup in labels: `\l` ends a
//! left-justified line, and `-[`/`]-` stand in for literal braces, which the
//! layout's record syntax would otherwise interpret.

/// Line-break marker emitted by the layout engine.
const LINE_BREAK: &str = "\\l";
const OPEN_BRACE: &str = "-[";
const CLOSE_BRACE: &str = "]-";

/// Replaces layout markup with the text it stands for.
///
/// # Examples
///
/// ```
/// use cyview::label::sanitize_label;
///
/// assert_eq!(sanitize_label("-[A]-"), "{A}");
/// assert_eq!(sanitize_label("a\\lb"), "a\nb");
/// assert_eq!(sanitize_label("plain"), "plain");
/// ```
pub fn sanitize_label(text: &str) -> String {
    text.replace(LINE_BREAK, "\n")
        .replace(OPEN_BRACE, "{")
        .replace(CLOSE_BRACE, "}")
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn label_strategy() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just("\\".to_string()),
                Just("l".to_string()),
                Just("-".to_string()),
                Just("[".to_string()),
                Just("]".to_string()),
                Just("\\l".to_string()),
                Just("-[".to_string()),
                Just("]-".to_string()),
                "[a-z ]{0,3}",
            ],
            0..16,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(text in label_strategy()) {
            let once = sanitize_label(&text);
            prop_assert_eq!(sanitize_label(&once), once);
        }

        #[test]
        fn sanitized_text_has_no_markup(text in label_strategy()) {
            let clean = sanitize_label(&text);
            prop_assert!(!clean.contains(LINE_BREAK));
            prop_assert!(!clean.contains(OPEN_BRACE));
            prop_assert!(!clean.contains(CLOSE_BRACE));
        }
    }
}
