use crate::diagnostics::DiagnosticKind;
use crate::engine::{PrintTracer, Rule};
use crate::{Error, Graph, Parser};

fn parse_error(source: &str) -> Error {
    match Parser::new(source).parse() {
        Ok(_) => panic!("expected parse failure for {source:?}"),
        Err(err) => err,
    }
}

#[test]
fn empty_document_is_empty_graph() {
    let graph = crate::parse("").unwrap();
    assert!(graph.is_empty());
}

#[test]
fn records_end_with_root() {
    let parsed = Parser::new("A OUT -> IN B").parse().unwrap();
    let root = parsed.records().last().copied().unwrap();

    assert_eq!(root.rule, Rule::Start);
    assert_eq!(root.depth, 0);
    let tree = parsed.tree();
    let top = tree.root().map(|id| tree.node(id).rule);
    assert_eq!(top, Some(Rule::Start));
    assert_eq!(parsed.depth_order()[0].len(), 1);
}

#[test]
fn reparse_starts_clean() {
    let mut parser = Parser::new("'x' -> IN A\nA OUT -> IN B");
    let first = parser.parse().unwrap();
    let second = parser.parse().unwrap();

    assert_eq!(first.records(), second.records());
    assert_eq!(first.graph(), second.graph());
}

#[test]
fn failure_points_at_offending_char() {
    let err = parse_error("A OUT -> IN B\n?");
    let diagnostics = err.diagnostics().unwrap();
    let primary = diagnostics.primary().unwrap();

    assert_eq!(primary.message(), "unexpected '?'");
    assert_eq!(primary.begin().line, 2);
    assert_eq!(primary.begin().column, 1);
    assert_eq!(primary.range(), 14..15);
}

#[test]
fn failure_at_end_of_input() {
    let err = parse_error("'abc");
    let primary = err.diagnostics().unwrap().primary().unwrap();

    assert_eq!(primary.message(), "unexpected end of input");
    assert_eq!(primary.begin().line, 1);
    assert_eq!(primary.begin().column, 5);
    assert!(primary.range().is_empty());
}

#[test]
fn near_rules_run_deepest_first() {
    let err = parse_error("A(Comp OUT -> IN B");
    let diagnostics = err.diagnostics().unwrap();

    let mut iter = diagnostics.iter();
    assert_eq!(iter.next().unwrap().kind(), DiagnosticKind::UnexpectedInput);

    let near: Vec<_> = iter.collect();
    assert!(!near.is_empty());
    assert!(near.iter().all(|d| d.kind() == DiagnosticKind::NearRule));
    assert!(near.windows(2).all(|w| w[0].depth() > w[1].depth()));
    for d in &near {
        let rule = d.rule().unwrap();
        assert!(!rule.is_action(), "{rule} is an action");
        assert!(!rule.is_trivia(), "{rule} is trivia");
        assert!(d.message().starts_with("parse error near "));
    }
}

#[test]
fn parse_error_display_counts_diagnostics() {
    let err = parse_error("a -> b");
    let count = err.diagnostics().unwrap().len();

    assert_eq!(err.to_string(), format!("parsing failed with {count} errors"));
}

#[test]
fn custom_validator_rejects_graph() {
    let parsed = Parser::new("'x' -> IN A").parse().unwrap();
    let needs_links = |graph: &Graph| {
        if graph.connections().iter().any(|c| c.source_endpoint().is_some()) {
            Ok(())
        } else {
            Err("no process-to-process link".to_string())
        }
    };

    let err = parsed.validate(&needs_links).unwrap_err();
    assert!(matches!(err, Error::ValidationError(_)));
    assert_eq!(
        err.to_string(),
        "graph validation failed: no process-to-process link"
    );
    assert!(err.diagnostics().is_none());
}

#[test]
fn default_validation_passes() {
    let graph = Parser::new("A OUT -> IN B").parse().unwrap().validated().unwrap();
    assert_eq!(graph.connections().len(), 1);
}

#[test]
fn subgraph_prefix_applies_to_every_process() {
    let graph = crate::parse_subgraph("A OUT -> IN B(Comp)", "Sub").unwrap();
    let names: Vec<_> = graph.processes().map(|p| p.name.as_str()).collect();

    assert_eq!(names, ["Sub_B"]);
    let source = graph.connections()[0].source_endpoint().unwrap();
    assert_eq!(source.process, "Sub_A");
}

#[test]
fn tracer_sees_the_root_last() {
    let source = "A OUT -> IN B";
    let mut parser = Parser::new(source).with_tracer(PrintTracer::new(source));
    parser.parse().unwrap();

    let lines = parser.into_tracer().into_lines();
    let last = lines.last().unwrap();
    assert!(last.starts_with("+ start 1:1"), "{last}");
}
