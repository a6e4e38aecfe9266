//! Resolution of user filters into concrete sender and receiver sets.
//!
//! Three modes, checked in order:
//!
//! 1. **Node list** (`nodes` non-empty): senders and receivers both become the
//!    union of the listed nodes with every non-ignored known node. This does not
//!    narrow the graph; it only guarantees the listed nodes take part.
//! 2. **Sender/receiver** (`senders` or `receivers` non-empty): each side is the
//!    given list, or every non-ignored known node when that side is empty.
//! 3. **All**: both sides are every non-ignored known node.
//!
//! `ignore` only shrinks the fallback pool. A node named explicitly stays in
//! even when it is also ignored.

use std::collections::BTreeSet;

/// User-facing filter lists. All empty means "show everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionConfig {
    pub nodes: Vec<String>,
    pub senders: Vec<String>,
    pub receivers: Vec<String>,
    pub ignore: Vec<String>,
}

impl SelectionConfig {
    /// Every name the user typed, across all four lists.
    pub fn requested_names(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .chain(&self.senders)
            .chain(&self.receivers)
            .chain(&self.ignore)
            .map(String::as_str)
    }

    pub fn mode(&self) -> SelectionMode {
        if !self.nodes.is_empty() {
            SelectionMode::NodeList
        } else if !self.senders.is_empty() || !self.receivers.is_empty() {
            SelectionMode::SenderReceiver
        } else {
            SelectionMode::All
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    NodeList,
    SenderReceiver,
    All,
}

/// Resolved sender and receiver sets, in the order edges are generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub mode: SelectionMode,
    pub senders: Vec<String>,
    pub receivers: Vec<String>,
}

/// Resolve `config` against the catalog. Names are assumed already validated.
pub fn resolve(config: &SelectionConfig, known: &BTreeSet<String>) -> Selection {
    let pool: Vec<String> = known
        .iter()
        .filter(|n| !config.ignore.contains(n))
        .cloned()
        .collect();

    let mode = config.mode();
    let (senders, receivers) = match mode {
        SelectionMode::NodeList => {
            let union: BTreeSet<String> = config.nodes.iter().chain(&pool).cloned().collect();
            let union: Vec<String> = union.into_iter().collect();
            (union.clone(), union)
        }
        SelectionMode::SenderReceiver => (
            explicit_or(&config.senders, &pool),
            explicit_or(&config.receivers, &pool),
        ),
        SelectionMode::All => (pool.clone(), pool),
    };

    Selection {
        mode,
        senders,
        receivers,
    }
}

/// The user's list with repeats dropped, or the fallback pool when empty.
fn explicit_or(given: &[String], pool: &[String]) -> Vec<String> {
    if given.is_empty() {
        return pool.to_vec();
    }
    let mut out: Vec<String> = Vec::with_capacity(given.len());
    for name in given {
        if !out.contains(name) {
            out.push(name.clone());
        }
    }
    out
}
