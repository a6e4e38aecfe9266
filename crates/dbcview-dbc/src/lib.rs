//! DBC reader for dbcview.
//!
//! Only the statements that describe who sends and who receives are read:
//! `BU_` (nodes), `BO_` (messages), `SG_` (signals) and `BO_TX_BU_` (extra
//! senders). Everything else in the file is skipped.

mod parse;

use std::path::Path;
use std::time::Instant;

use tracing::info;

use dbcview_core::Database;
use dbcview_error::{Error, Result};

pub use parse::{DbcParser, EXTENDED_ID_FLAG, PLACEHOLDER_NODE};

/// Parse DBC text.
pub fn parse_str(source: &str) -> Result<Database> {
    DbcParser::new()?.parse(source)
}

/// Read and parse a DBC file.
pub fn load_file(path: &Path) -> Result<Database> {
    let start = Instant::now();
    let bytes = std::fs::read(path).map_err(|e| {
        Error::from(e)
            .with_operation("dbc::load_file")
            .with_context("path", path.display().to_string())
    })?;
    // DBC files in the wild are often Latin-1 rather than UTF-8
    let source = String::from_utf8_lossy(&bytes);

    let db = parse_str(&source).map_err(|e| {
        e.with_operation("dbc::load_file")
            .with_context("path", path.display().to_string())
    })?;

    info!(
        path = %path.display(),
        nodes = db.nodes.len(),
        messages = db.messages.len(),
        secs = start.elapsed().as_secs_f64(),
        "loaded database"
    );
    Ok(db)
}
