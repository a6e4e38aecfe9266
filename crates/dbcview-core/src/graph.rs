//! The selection -> edges -> styling pipeline.

use std::path::Path;

use tracing::{info, warn};

use dbcview_error::{ErrorKind, Result};

use crate::catalog::{ensure_selectable, known_nodes};
use crate::color::{Color, PriorityColorMapper};
use crate::edges::{Edge, compute_all_edges};
use crate::model::Database;
use crate::naming::name_for;
use crate::selection::{Selection, SelectionConfig, resolve};

/// Validate `config` against the database and resolve it into node sets.
///
/// Fails with `EmptyCatalog` or `UnknownNodeName`; nothing is computed then.
pub fn select(db: &Database, source: &Path, config: &SelectionConfig) -> Result<Selection> {
    let known = known_nodes(db);
    ensure_selectable(&source.display().to_string(), &known, config)?;

    let selection = resolve(config, &known);
    info!(
        mode = ?selection.mode,
        senders = selection.senders.len(),
        receivers = selection.receivers.len(),
        "resolved selection"
    );
    Ok(selection)
}

/// Edge as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledEdge<'a> {
    pub tail: &'a str,
    pub head: &'a str,
    pub label: String,
    pub color: Color,
}

/// Titled edge list with colors scaled to its own frame id range.
#[derive(Debug, Clone)]
pub struct CommGraph<'db> {
    pub title: String,
    pub edges: Vec<Edge<'db>>,
    colors: Option<PriorityColorMapper>,
}

impl<'db> CommGraph<'db> {
    /// Compute the edges for `selection`. `config` only feeds the title.
    ///
    /// An empty result is logged, not treated as an error.
    pub fn build(
        db: &'db Database,
        selection: &'db Selection,
        source: &Path,
        config: &SelectionConfig,
    ) -> Self {
        let edges = compute_all_edges(db, &selection.senders, &selection.receivers);
        if edges.is_empty() {
            warn!(
                kind = %ErrorKind::NoMatchingEdges,
                senders = ?selection.senders,
                receivers = ?selection.receivers,
                "no edges found"
            );
        }

        Self {
            title: name_for(source, &config.senders, &config.receivers),
            colors: PriorityColorMapper::for_edges(&edges),
            edges,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn styled_edges(&self) -> impl Iterator<Item = StyledEdge<'db>> + '_ {
        // colors is only None when there are no edges
        let colors = self.colors;
        self.edges.iter().filter_map(move |edge| {
            let colors = colors?;
            Some(StyledEdge {
                tail: edge.sender,
                head: edge.receiver,
                label: edge.message.label(),
                color: colors.color_for(edge.message),
            })
        })
    }
}
