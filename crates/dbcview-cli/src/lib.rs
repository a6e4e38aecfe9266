//! dbcview command-line interface.
//!
pub mod options;
pub mod output;
pub mod pipeline;

use std::path::PathBuf;

use dbcview_core::SelectionConfig;
use dbcview_dot::{Artifact, OutputFormat};
use dbcview_error::{Error, Result};

pub use options::{SelectionArgs, split_list};
pub use pipeline::build_dot;

/// Options for one dbcview run.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub filename: PathBuf,
    pub selection: SelectionConfig,
    /// Used when it names an existing directory; otherwise a temp dir is made.
    pub output_dir: Option<PathBuf>,
    pub format: OutputFormat,
    pub view: bool,
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub title: String,
    pub edge_count: usize,
    pub senders: Vec<String>,
    pub receivers: Vec<String>,
    pub artifact: Artifact,
}

/// Main entry point
pub fn run_main(opts: &ViewOptions) -> Result<RunReport> {
    if opts.filename.is_dir() {
        return Err(Error::invalid_argument(format!(
            "expected a DBC file, got directory '{}'",
            opts.filename.display()
        ))
        .with_operation("cli::run_main"));
    }
    if !opts.filename.is_file() {
        return Err(Error::file_not_found(opts.filename.display().to_string())
            .with_operation("cli::run_main"));
    }

    let rendered = build_dot(&opts.filename, &opts.selection)?;

    let dir = output::resolve_output_dir(opts.output_dir.as_deref())?;
    let artifact = output::emit(&dir, &rendered.title, &rendered.dot, opts.format, opts.view)?;

    Ok(RunReport {
        title: rendered.title,
        edge_count: rendered.edge_count,
        senders: rendered.senders,
        receivers: rendered.receivers,
        artifact,
    })
}
