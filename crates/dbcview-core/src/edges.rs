//! Extraction of (sender, receiver, message) edges.

use tracing::debug;

use crate::model::{Database, Message};
use crate::order::sort_by_frame_id;

/// One drawn line: `message` travels from `sender` to `receiver`.
///
/// A message with several matching receivers produces one edge per receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'db> {
    pub sender: &'db str,
    pub receiver: &'db str,
    pub message: &'db Message,
}

/// Messages sent by any of `senders` and received by any of `receivers`.
///
/// Input order is kept and each message is returned at most once.
pub fn edges_for<'db, S>(
    messages: &[&'db Message],
    senders: &[S],
    receivers: &[S],
) -> Vec<&'db Message>
where
    S: AsRef<str>,
{
    messages
        .iter()
        .copied()
        .filter(|msg| senders.iter().any(|s| msg.is_sent_by(s.as_ref())))
        .filter(|msg| receivers.iter().any(|r| msg.is_received_by(r.as_ref())))
        .collect()
}

/// Every edge between `senders` and `receivers`.
///
/// Pairs are visited sender-major in the order given; within a pair the
/// messages come out by ascending frame id.
pub fn compute_all_edges<'db>(
    db: &'db Database,
    senders: &'db [String],
    receivers: &'db [String],
) -> Vec<Edge<'db>> {
    let sorted = sort_by_frame_id(&db.messages);

    let mut edges = Vec::new();
    for sender in senders {
        for receiver in receivers {
            for message in edges_for(&sorted, &[sender], &[receiver]) {
                edges.push(Edge {
                    sender,
                    receiver,
                    message,
                });
            }
        }
    }

    debug!(
        senders = senders.len(),
        receivers = receivers.len(),
        edges = edges.len(),
        "computed edges"
    );
    edges
}

/// Lowest and highest frame id among `edges`, `None` when empty.
pub fn id_range(edges: &[Edge<'_>]) -> Option<(u32, u32)> {
    let min = edges.iter().map(|e| e.message.frame_id).min()?;
    let max = edges.iter().map(|e| e.message.frame_id).max()?;
    Some((min, max))
}
