//! Output location and artifact emission.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use dbcview_dot::{Artifact, OutputFormat, open_in_viewer, write_artifact};
use dbcview_error::{Error, Result};

/// `requested` if it is an existing directory, else a fresh temp directory.
///
/// The temp directory is kept after the run so a viewer can still open it.
pub fn resolve_output_dir(requested: Option<&Path>) -> Result<PathBuf> {
    match requested {
        Some(dir) if dir.is_dir() => return Ok(dir.to_path_buf()),
        Some(dir) => warn!(path = %dir.display(), "output directory missing, using a temp dir"),
        None => {}
    }

    let dir = tempfile::Builder::new()
        .prefix("dbcview-")
        .tempdir()
        .map_err(|e| Error::from(e).with_operation("output::resolve_output_dir"))?;
    Ok(dir.keep())
}

/// Write and render the graph into `dir`, then optionally open it.
pub fn emit(
    dir: &Path,
    title: &str,
    dot: &str,
    format: OutputFormat,
    view: bool,
) -> Result<Artifact> {
    let artifact = write_artifact(dir, title, dot, format)?;
    info!(path = %artifact.primary().display(), "graph written");

    if view {
        if let Err(e) = open_in_viewer(artifact.primary()) {
            warn!(error = %e, "could not open viewer");
        }
    }
    Ok(artifact)
}
