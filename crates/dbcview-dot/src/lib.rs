//! Graph rendering for dbcview.
//!
//! Turns a [`CommGraph`] into DOT source and, through Graphviz, into a
//! document in the output directory.
//!
//! # Module Structure
//!
//! - [`dot`]: DOT format utilities and the [`DotBuilder`]
//! - [`artifact`]: writing the source, running `dot`, opening a viewer

pub mod artifact;
mod dot;

use dbcview_core::CommGraph;

pub use artifact::{Artifact, OutputFormat, open_in_viewer, write_artifact};
pub use dot::{DotBuilder, escape_label, sanitize_file_stem};

/// Render the graph to DOT source: one colored, labelled line per edge.
pub fn render_graph(graph: &CommGraph<'_>) -> String {
    let mut dot = DotBuilder::new(&graph.title);
    dot.attr("label", &graph.title)
        .attr("labelloc", "t")
        .node_style("shape=box, fontname=\"Helvetica\"")
        .blank();

    for edge in graph.styled_edges() {
        let color = edge.color.to_string();
        dot.edge_with_attrs(
            edge.tail,
            edge.head,
            &[
                ("label", edge.label.as_str()),
                ("color", color.as_str()),
                ("fontcolor", color.as_str()),
            ],
        );
    }

    dot.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    use dbcview_core::{Database, Message, Node, SelectionConfig, Signal, select};

    #[test]
    fn test_render_graph() {
        let db = Database::new(
            vec![Node::new("MOT"), Node::new("VCU")],
            vec![Message::new(0x0C0, "MotorStatus", &["MOT"])
                .with_signal(Signal::new("Rpm", &["VCU"]))],
        );
        let config = SelectionConfig::default();
        let source = Path::new("pt.dbc");
        let selection = select(&db, source, &config).unwrap();
        let graph = CommGraph::build(&db, &selection, source, &config);

        let out = render_graph(&graph);
        assert!(out.starts_with("digraph \"pt\" {\n"));
        let edge = concat!(
            r#""MOT" -> "VCU" [label="MotorStatus\n0xc0 (192)", "#,
            r##"color="#7f007f", fontcolor="#7f007f"];"##,
        );
        assert!(out.contains(edge), "{out}");
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn test_render_empty_graph() {
        let db = Database::new(vec![Node::new("A")], Vec::new());
        let config = SelectionConfig::default();
        let source = Path::new("lonely.dbc");
        let selection = select(&db, source, &config).unwrap();
        let graph = CommGraph::build(&db, &selection, source, &config);

        let expected = r#"digraph "lonely" {
  label="lonely";
  labelloc="t";
  node [shape=box, fontname="Helvetica"];

}
"#;
        assert_eq!(render_graph(&graph), expected);
    }
}
