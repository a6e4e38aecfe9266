//! Priority coloring of edges.
//!
//! Lower frame ids win arbitration, so they are drawn red; the highest id in
//! view is drawn blue. The scale is taken from the edges being drawn, not from
//! the whole database, so a message can change color when filters change.

use std::fmt;

use crate::edges::{Edge, id_range};
use crate::model::Message;

/// An RGB color printed as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Maps frame ids onto the red..blue scale for one edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityColorMapper {
    min_id: u32,
    max_id: u32,
}

impl PriorityColorMapper {
    pub fn new(min_id: u32, max_id: u32) -> Self {
        Self { min_id, max_id }
    }

    /// Scale spanning the ids present in `edges`; `None` for an empty list.
    pub fn for_edges(edges: &[Edge<'_>]) -> Option<Self> {
        id_range(edges).map(|(min, max)| Self::new(min, max))
    }

    pub fn color_for(&self, message: &Message) -> Color {
        color_for(message, self.min_id, self.max_id)
    }
}

/// Color for `message` given the id range currently on display.
pub fn color_for(message: &Message, min_id: u32, max_id: u32) -> Color {
    let norm = if max_id > min_id {
        let offset = f64::from(message.frame_id.saturating_sub(min_id));
        (offset / f64::from(max_id - min_id)).min(1.0)
    } else {
        0.5
    };

    Color {
        red: channel(1.0 - norm),
        green: 0,
        blue: channel(norm),
    }
}

/// Channel intensity, truncated toward zero.
fn channel(fraction: f64) -> u8 {
    (fraction * 255.0) as u8
}
