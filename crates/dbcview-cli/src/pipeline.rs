//! Core processing pipeline: load → validate → select → extract edges → render DOT.

use std::path::Path;
use std::time::Instant;

use tracing::info;

use dbcview_core::{CommGraph, Result, SelectionConfig, select};
use dbcview_dot::render_graph;

/// DOT source for one database plus what went into it.
#[derive(Debug, Clone)]
pub struct RenderedGraph {
    pub title: String,
    pub dot: String,
    pub edge_count: usize,
    pub senders: Vec<String>,
    pub receivers: Vec<String>,
}

/// Load `path` and render the graph selected by `config`.
///
/// This is the core pipeline:
/// 1. Parse the DBC file
/// 2. Validate filter names and resolve sender/receiver sets
/// 3. Compute edges and their priority colors
/// 4. Render DOT source
pub fn build_dot(path: &Path, config: &SelectionConfig) -> Result<RenderedGraph> {
    // 1. Parse
    let db = dbcview_dbc::load_file(path)?;

    // 2. Select
    let selection = select(&db, path, config)?;

    // 3. Edges
    let extract_start = Instant::now();
    let graph = CommGraph::build(&db, &selection, path, config);
    info!(
        edges = graph.edges.len(),
        secs = extract_start.elapsed().as_secs_f64(),
        "edge extraction"
    );

    // 4. Render
    let dot = render_graph(&graph);

    Ok(RenderedGraph {
        title: graph.title.clone(),
        edge_count: graph.edges.len(),
        dot,
        senders: selection.senders.clone(),
        receivers: selection.receivers.clone(),
    })
}
