//! Filter options shared by the dbcview binary.

use clap::Args;

use dbcview_core::SelectionConfig;

/// Sender/receiver/ignore filters, each a comma separated list.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Comma separated list of sending nodes
    #[arg(short = 's', long = "senders", value_name = "LIST")]
    pub senders: Option<String>,

    /// Comma separated list of receiving nodes
    #[arg(short = 'r', long = "receivers", value_name = "LIST")]
    pub receivers: Option<String>,

    /// Comma separated list of nodes to ignore
    #[arg(short = 'i', long = "ignore", value_name = "LIST")]
    pub ignore: Option<String>,
}

impl SelectionArgs {
    /// Combine with the positional node arguments into a [`SelectionConfig`].
    pub fn into_config(self, nodes: &[String]) -> SelectionConfig {
        SelectionConfig {
            nodes: nodes.iter().flat_map(|n| split_list(n)).collect(),
            senders: self.senders.as_deref().map(split_list).unwrap_or_default(),
            receivers: self.receivers.as_deref().map(split_list).unwrap_or_default(),
            ignore: self.ignore.as_deref().map(split_list).unwrap_or_default(),
        }
    }
}

/// Split `"A, B,,C"` into `["A", "B", "C"]`.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
