//! Core of dbcview: turns a flat list of CAN message definitions into the
//! sender -> receiver edges that get drawn.
//!
//! # Module Structure
//!
//! - [`model`]: Node, Message, Signal and Database records
//! - [`catalog`]: known node names and filter validation
//! - [`selection`]: filter modes resolved into sender/receiver sets
//! - [`order`]: messages ordered by frame id
//! - [`edges`]: (sender, receiver, message) extraction
//! - [`color`]: priority color relative to the displayed edges
//! - [`naming`]: graph title from file name and filters
//! - [`graph`]: the pipeline tying the above together

pub mod catalog;
pub mod color;
pub mod edges;
pub mod graph;
pub mod model;
pub mod naming;
pub mod order;
pub mod selection;

pub use catalog::{ensure_selectable, known_nodes, validate};
pub use color::{Color, PriorityColorMapper};
pub use edges::{Edge, compute_all_edges, edges_for};
pub use graph::{CommGraph, StyledEdge, select};
pub use model::{Database, Message, Node, Signal};
pub use naming::name_for;
pub use selection::{Selection, SelectionConfig, SelectionMode, resolve};

pub use dbcview_error::{Error, ErrorKind, Result};
