use crate::{LineIndex, Position};

fn pos(line: u32, column: u32) -> Position {
    Position { line, column }
}

#[test]
fn single_line_offsets() {
    let index = LineIndex::new("A OUT -> IN B");
    assert_eq!(index.position(0), pos(1, 1));
    assert_eq!(index.position(2), pos(1, 3));
    assert_eq!(index.position(13), pos(1, 14));
}

#[test]
fn offsets_after_newlines() {
    let index = LineIndex::new("a\nbc\n\nd");
    assert_eq!(index.position(1), pos(1, 2));
    assert_eq!(index.position(2), pos(2, 1));
    assert_eq!(index.position(4), pos(2, 3));
    assert_eq!(index.position(5), pos(3, 1));
    assert_eq!(index.position(6), pos(4, 1));
}

#[test]
fn columns_count_characters() {
    let index = LineIndex::new("'héllo' -> IN X");
    // 'é' is two bytes
    assert_eq!(index.position(2), pos(1, 3));
    assert_eq!(index.position(4), pos(1, 4));
    assert_eq!(index.position(8), pos(1, 8));
}

#[test]
fn offset_past_end_clamps() {
    let index = LineIndex::new("ab");
    assert_eq!(index.position(100), pos(1, 3));
}

#[test]
fn crlf_counts_carriage_return_as_column() {
    let index = LineIndex::new("ab\r\ncd");
    assert_eq!(index.position(2), pos(1, 3));
    assert_eq!(index.position(4), pos(2, 1));
}

#[test]
fn position_display() {
    insta::assert_snapshot!(pos(3, 7).to_string(), @"line 3 col 7");
}
