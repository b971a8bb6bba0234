use std::path::Path;

use super::source_loader::load_graph_source;

#[test]
fn inline_text_wins() {
    let source = load_graph_source(Some(Path::new("missing.fbp")), Some("A OUT -> IN B")).unwrap();

    assert_eq!(source.text, "A OUT -> IN B");
    assert_eq!(source.path, None);
}

#[test]
fn missing_input_is_an_error() {
    let err = load_graph_source(None, None).unwrap_err();
    insta::assert_snapshot!(err, @"graph is required: use positional argument, - for stdin, or -g/--graph");
}

#[test]
fn missing_file_names_the_path() {
    let err = load_graph_source(Some(Path::new("does/not/exist.fbp")), None).unwrap_err();
    assert!(err.starts_with("failed to read 'does/not/exist.fbp'"), "{err}");
}

#[test]
fn file_keeps_its_path() {
    let path = std::env::temp_dir().join(format!("fbp-loader-{}.fbp", std::process::id()));
    std::fs::write(&path, "'x' -> IN A\n").unwrap();

    let source = load_graph_source(Some(&path), None).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(source.text, "'x' -> IN A\n");
    assert_eq!(source.path.as_deref(), Some(path.to_string_lossy().as_ref()));
}
