//! Known node names and validation of user-supplied filters.

use std::collections::BTreeSet;

use dbcview_error::{Error, Result};

use crate::model::Database;
use crate::selection::SelectionConfig;

/// The distinct node names declared in the database, sorted.
pub fn known_nodes(db: &Database) -> BTreeSet<String> {
    db.nodes.iter().map(|n| n.name.clone()).collect()
}

/// Every requested name missing from `known`, in request order, each once.
pub fn validate<'a, I>(requested: I, known: &BTreeSet<String>) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut invalid: Vec<String> = Vec::new();
    for name in requested {
        if !known.contains(name) && !invalid.iter().any(|n| n == name) {
            invalid.push(name.to_string());
        }
    }
    invalid
}

/// Abort conditions checked before any edge is computed.
///
/// `source_name` only ends up in the diagnostic.
pub fn ensure_selectable(
    source_name: &str,
    known: &BTreeSet<String>,
    config: &SelectionConfig,
) -> Result<()> {
    if known.is_empty() {
        return Err(Error::empty_catalog(source_name).with_operation("catalog::ensure_selectable"));
    }

    let invalid = validate(config.requested_names(), known);
    if !invalid.is_empty() {
        return Err(Error::unknown_node_names(&invalid, known)
            .with_context("file", source_name)
            .with_operation("catalog::ensure_selectable"));
    }

    Ok(())
}
