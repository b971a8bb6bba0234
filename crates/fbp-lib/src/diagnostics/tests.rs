use fbp_core::LineIndex;

use super::*;
use crate::engine::{MatchRecord, Rule};

const SOURCE: &str = "A OUT -> IN B\n?";

fn unexpected_and_near() -> Diagnostics {
    let index = LineIndex::new(SOURCE);
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(DiagnosticMessage::unexpected(SOURCE, &index, 14));
    diagnostics.push(DiagnosticMessage::near(
        SOURCE,
        &index,
        &MatchRecord::new(Rule::Connection, 0, 13, 2),
    ));
    diagnostics
}

#[test]
fn kind_fallback_messages() {
    insta::assert_snapshot!(DiagnosticKind::UnexpectedInput.fallback_message(), @"unexpected input");
    insta::assert_snapshot!(DiagnosticKind::NearRule.fallback_message(), @"parse error");
}

#[test]
fn message_display() {
    let diagnostics = unexpected_and_near();
    let lines: Vec<_> = diagnostics.iter().map(ToString::to_string).collect();

    assert_eq!(
        lines,
        [
            "unexpected '?' at line 2 col 1",
            "parse error near connection (line 1 col 1 - line 1 col 14): \"A OUT -> IN B\"",
        ]
    );
}

#[test]
fn unexpected_past_end_clamps() {
    let index = LineIndex::new("ab");
    let msg = DiagnosticMessage::unexpected("ab", &index, 10);

    assert_eq!(msg.message(), "unexpected end of input");
    assert_eq!(msg.range(), 2..2);
    assert_eq!(msg.text(), "");
}

#[test]
fn collection_methods() {
    let diagnostics = unexpected_and_near();

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.error_count(), 2);
    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.primary().map(|d| d.range()), Some(14..15));
    assert_eq!(diagnostics.as_slice()[1].rule(), Some(Rule::Connection));
    assert_eq!(diagnostics.as_slice()[1].depth(), Some(2));

    let kinds: Vec<_> = (&diagnostics).into_iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, [DiagnosticKind::UnexpectedInput, DiagnosticKind::NearRule]);
}

#[test]
fn from_failure_skips_actions_and_trivia() {
    let source = "A OUT";
    let explored = [
        MatchRecord::new(Rule::Text, 0, 1, 3),
        MatchRecord::new(Rule::CaptureNodeName, 1, 1, 2),
        MatchRecord::new(Rule::Node, 0, 1, 2),
        MatchRecord::new(Rule::Ws, 1, 2, 2),
        MatchRecord::new(Rule::Leftlet, 0, 5, 1),
    ];
    let diagnostics = Diagnostics::from_failure(source, &explored, 5);

    let summary: Vec<_> = diagnostics
        .iter()
        .map(|d| (d.kind(), d.rule(), d.depth()))
        .collect();
    assert_eq!(
        summary,
        [
            (DiagnosticKind::UnexpectedInput, None, None),
            (DiagnosticKind::NearRule, Some(Rule::Text), Some(3)),
            (DiagnosticKind::NearRule, Some(Rule::Node), Some(2)),
            (DiagnosticKind::NearRule, Some(Rule::Leftlet), Some(1)),
        ]
    );
}

#[test]
fn printer_without_source_is_plain() {
    let diagnostics = unexpected_and_near();
    let result = diagnostics.printer().render();

    insta::assert_snapshot!(result, @r#"
    unexpected '?' at line 2 col 1
    parse error near connection (line 1 col 1 - line 1 col 14): "A OUT -> IN B"
    "#);
}

#[test]
fn printer_with_source() {
    let diagnostics = unexpected_and_near();
    let result = diagnostics.render(SOURCE);

    insta::assert_snapshot!(result, @r"
    error: unexpected '?'
      |
    2 | ?
      | ^

    error: parse error near connection
      |
    1 | A OUT -> IN B
      | ^^^^^^^^^^^^^
    ");
}

#[test]
fn printer_with_path() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(DiagnosticMessage::unexpected(
        "A OUT",
        &LineIndex::new("A OUT"),
        2,
    ));

    let result = diagnostics.printer().source("A OUT").path("test.fbp").render();
    insta::assert_snapshot!(result, @r"
    error: unexpected 'O'
     --> test.fbp:1:3
      |
    1 | A OUT
      |   ^
    ");
}

#[test]
fn printer_colored() {
    let diagnostics = unexpected_and_near();

    assert!(diagnostics.render_colored(SOURCE, true).contains('\x1b'));
    assert!(!diagnostics.render_colored(SOURCE, false).contains('\x1b'));
}

#[test]
fn empty_diagnostics_render_nothing() {
    let diagnostics = Diagnostics::new();

    assert!(diagnostics.is_empty());
    assert_eq!(diagnostics.render("A OUT -> IN B"), "");
    assert_eq!(diagnostics.printer().render(), "");
}

#[test]
fn zero_width_span_before_multibyte_char() {
    let source = "A OUT -> IN Bé";
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(DiagnosticMessage::near(
        source,
        &LineIndex::new(source),
        &MatchRecord::new(Rule::LineTerminator, 13, 13, 2),
    ));

    let result = diagnostics.render(source);
    insta::assert_snapshot!(result, @r"
    error: parse error near LineTerminator
      |
    1 | A OUT -> IN Bé
      |              ^
    ");
}

#[test]
fn failure_before_multibyte_char_renders() {
    let source = "A OUT -> IN Bé";
    let err = crate::Parser::new(source).parse().unwrap_err();
    let diagnostics = err.diagnostics().unwrap();

    let primary = diagnostics.primary().unwrap();
    assert_eq!(primary.message(), "unexpected 'é'");
    assert_eq!(primary.range(), 13..15);

    let rendered = diagnostics.render(source);
    assert!(rendered.starts_with("error: unexpected 'é'"), "{rendered}");
    assert_eq!(rendered.matches("error:").count(), diagnostics.len());
}
