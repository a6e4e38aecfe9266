//! # dbcview-error
//!
//! Unified error handling for dbcview.
//!
//! - **ErrorKind**: what went wrong (e.g. `UnknownNodeName`, `ParseFailed`)
//! - **Error context**: key/value pairs that help locate the cause
//! - **Error source**: the wrapped lower-level error, if any
//!
//! ```rust
//! use dbcview_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ParseFailed, "expected message id")
//!         .with_operation("dbc::parse_message")
//!         .with_context("line", "42"))
//! }
//! ```

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the dbcview Error
pub type Result<T> = std::result::Result<T, Error>;
