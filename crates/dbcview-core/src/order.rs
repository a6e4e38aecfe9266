//! Message ordering by frame id.
//!
//! Only used so that labels and colors come out the same way on every run.

use crate::model::Message;

/// Messages in ascending `frame_id` order. Equal ids keep database order.
pub fn sort_by_frame_id(messages: &[Message]) -> Vec<&Message> {
    let mut sorted: Vec<&Message> = messages.iter().collect();
    sorted.sort_by_key(|m| m.frame_id);
    sorted
}
