// tests/graph_file.rs

use std::io::Write;

use depsort::config::load_and_validate;
use depsort::dag::{is_dependency_order, topological_sort};
use depsort::types::UndeclaredPolicy;
use depsort_test_utils::builders::GraphFileBuilder;
use depsort_test_utils::{init_tracing, position_of};
use tempfile::NamedTempFile;

fn write_graph(builder: &GraphFileBuilder) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", builder.to_toml()).unwrap();
    file
}

#[test]
fn node_sections_keep_document_order() {
    init_tracing();

    let builder = GraphFileBuilder::new()
        .with_node("zeta", &[])
        .with_node("alpha", &[])
        .with_node("mid", &[]);
    let file = write_graph(&builder);

    let graph = load_and_validate(file.path()).unwrap().to_graph();
    let order = topological_sort(&graph).unwrap();

    // Independent nodes are ordered by declaration, not alphabetically.
    assert_eq!(order, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn diamond_from_file_respects_dependencies() {
    init_tracing();

    let builder = GraphFileBuilder::new()
        .with_node("A", &["B", "C"])
        .with_node("B", &["D"])
        .with_node("C", &["D"])
        .with_node("D", &[]);
    let file = write_graph(&builder);

    let graph = load_and_validate(file.path()).unwrap().to_graph();
    let order = topological_sort(&graph).unwrap();

    let d = position_of(&order, &"D".to_string());
    let b = position_of(&order, &"B".to_string());
    let c = position_of(&order, &"C".to_string());
    let a = position_of(&order, &"A".to_string());
    assert!(d < b && d < c);
    assert!(b < a && c < a);
    assert!(is_dependency_order(&graph, &order));
}

#[test]
fn undeclared_dependencies_are_ordered_by_default() {
    init_tracing();

    let builder = GraphFileBuilder::new().with_node("app", &["lib", "runtime"]);
    let file = write_graph(&builder);

    let graph = load_and_validate(file.path()).unwrap().to_graph();
    assert_eq!(graph.undeclared_nodes().len(), 2);

    let order = topological_sort(&graph).unwrap();
    assert_eq!(order, vec!["lib", "runtime", "app"]);
}

#[test]
fn reject_policy_accepts_fully_declared_graph() {
    let builder = GraphFileBuilder::new()
        .undeclared(UndeclaredPolicy::Reject)
        .with_node("A", &["B"])
        .with_node("B", &[]);
    let file = write_graph(&builder);

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.config.undeclared, UndeclaredPolicy::Reject);
    assert_eq!(topological_sort(&cfg.to_graph()).unwrap(), vec!["B", "A"]);
}

#[test]
fn bare_node_section_has_no_dependencies() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[node.only]\n").unwrap();

    let graph = load_and_validate(file.path()).unwrap().to_graph();
    assert_eq!(topological_sort(&graph).unwrap(), vec!["only"]);
}

#[test]
fn empty_file_gives_empty_order() {
    let file = NamedTempFile::new().unwrap();

    let graph = load_and_validate(file.path()).unwrap().to_graph();
    assert!(graph.is_empty());
    assert!(topological_sort(&graph).unwrap().is_empty());
}

#[test]
fn non_ascii_names_survive_the_file_format() {
    let builder = GraphFileBuilder::new()
        .with_node("café", &["crème \"brûlée\""])
        .with_node("crème \"brûlée\"", &["tab\there"]);
    let file = write_graph(&builder);

    let graph = load_and_validate(file.path()).unwrap().to_graph();
    assert_eq!(
        topological_sort(&graph).unwrap(),
        vec!["tab\there", "crème \"brûlée\"", "café"]
    );
}

#[test]
fn builder_graph_matches_loaded_graph() {
    let builder = GraphFileBuilder::new()
        .with_node("A", &["B"])
        .with_node("B", &[]);
    let file = write_graph(&builder);

    let loaded = load_and_validate(file.path()).unwrap().to_graph();
    assert_eq!(builder.build().to_graph(), loaded);
}
