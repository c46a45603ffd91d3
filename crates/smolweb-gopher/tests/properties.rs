//! Property tests for Gopher menu parsing.

use proptest::prelude::*;

use smolweb_gopher::{GopherLine, ItemType, parse};

fn menu_line() -> impl Strategy<Value = String> {
    prop_oneof![
        // Well-formed entries
        ("[0-9ghIT+?i]", "[ -~]{0,20}", "/[a-z/]{0,10}", "[a-z.]{1,12}", "[0-9]{1,5}")
            .prop_map(|(t, d, s, h, p)| format!("{t}{d}\t{s}\t{h}\t{p}")),
        // Free text and partial lines
        "[ -~\t]{1,40}",
    ]
}

proptest! {
    #[test]
    fn one_line_per_non_empty_input_line(lines in prop::collection::vec(menu_line(), 0..30)) {
        let response = lines.join("\r\n");
        let expected = response.lines().filter(|l| !l.is_empty()).count();
        prop_assert_eq!(parse(&response).len(), expected);
    }

    #[test]
    fn blank_lines_do_not_count(lines in prop::collection::vec(menu_line(), 0..10)) {
        let spaced = lines.join("\r\n\r\n\r\n");
        let compact = lines.join("\r\n");
        prop_assert_eq!(parse(&spaced), parse(&compact));
    }

    #[test]
    fn parse_is_deterministic(response in "\\PC{0,300}") {
        prop_assert_eq!(parse(&response), parse(&response));
    }

    #[test]
    fn unknown_lines_keep_their_text(line in "[^\r\n\t]{1,40}") {
        let parsed = GopherLine::parse(&line);
        if parsed.type_char != 'i' {
            prop_assert_eq!(parsed.item_type, ItemType::Unknown);
            prop_assert_eq!(parsed.description, line);
        }
    }

    #[test]
    fn url_never_panics(line in "\\PC{0,80}") {
        let _ = GopherLine::parse(&line).url();
    }
}
