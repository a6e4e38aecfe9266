//! Graph titles.

use std::collections::BTreeSet;
use std::path::Path;

/// Title for the graph of `source`, e.g. `bus from ECU1 to ECU2`.
///
/// `senders` and `receivers` are the lists the user typed, not the resolved
/// sets. Clauses are only added when the two lists differ as sets, and each
/// clause only when its list is non-empty.
pub fn name_for(source: &Path, senders: &[String], receivers: &[String]) -> String {
    let mut title = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());

    let sender_set: BTreeSet<&String> = senders.iter().collect();
    let receiver_set: BTreeSet<&String> = receivers.iter().collect();
    if sender_set != receiver_set {
        if !senders.is_empty() {
            title.push_str(" from ");
            title.push_str(&senders.join(" "));
        }
        if !receivers.is_empty() {
            title.push_str(" to ");
            title.push_str(&receivers.join(" "));
        }
    }

    title
}
