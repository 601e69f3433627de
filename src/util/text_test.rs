use super::*;

#[test]
fn single_line_is_one_chunk() {
    assert_eq!(message_lines("You enter the bar."), ["You enter the bar."]);
}

#[test]
fn newlines_split_and_blank_lines_survive() {
    assert_eq!(message_lines("one\n\ntwo"), ["one", "", "two"]);
}

#[test]
fn carriage_returns_are_dropped() {
    assert_eq!(message_lines("one\r\ntwo"), ["one", "two"]);
}

#[test]
fn markup_is_kept_as_plain_text() {
    assert_eq!(message_lines("<b>hi</b>"), ["<b>hi</b>"]);
}
