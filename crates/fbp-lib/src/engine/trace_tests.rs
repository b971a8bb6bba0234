use indoc::indoc;

use super::{Matcher, PrintTracer, Rule, Tracer, Verbosity};

#[test]
fn default_verbosity_shows_matches_and_failures() {
    let source = "A1";
    let mut tracer = PrintTracer::new(source);
    {
        let mut m = Matcher::new(source, &mut tracer);
        m.rule(Rule::Node, |m| {
            m.text(|m| m.plus(|m| m.class(|c| c.is_ascii_alphanumeric())))
                && m.action(Rule::CaptureNodeName)
                && m.opt(|m| m.rule(Rule::Component, |m| m.char('(')))
        });
    }

    assert_eq!(
        tracer.lines(),
        [
            r#"  + Text 1:1 "A1""#,
            "  - component 1:3",
            r#"+ node 1:1 "A1""#,
        ]
    );
}

#[test]
fn verbose_shows_entries_actions_and_backtracks() {
    let source = "ab";
    let mut tracer = PrintTracer::new(source).verbosity(Verbosity::Verbose);
    {
        let mut m = Matcher::new(source, &mut tracer);
        m.rule(Rule::Line, |m| {
            m.attempt(|m| m.char('a') && m.char('x')) || m.action(Rule::CloseChain)
        });
    }

    let expected = indoc! {r#"
        > line 1:1
          < 1:2 -> 1:1
          . CloseChain 1:1
        + line 1:1 """#};
    assert_eq!(tracer.lines().join("\n"), expected);
}

#[test]
fn long_text_is_truncated() {
    let source = "x".repeat(40);
    let mut tracer = PrintTracer::new(&source);
    tracer.trace_match(Rule::Comment, 0, 40);

    let line = &tracer.lines()[0];
    assert!(line.ends_with("…\""));
    assert_eq!(line.matches('x').count(), 32);
}

#[test]
fn colored_output_uses_ansi_codes() {
    let mut tracer = PrintTracer::new("a").colored(true);
    tracer.trace_fail(Rule::Port, 0);
    assert!(tracer.lines()[0].contains("\x1b[31mport\x1b[0m"));
}
