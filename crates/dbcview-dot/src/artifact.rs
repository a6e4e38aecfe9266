//! Writing DOT source to disk and turning it into a document with Graphviz.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use strum_macros::{Display, EnumString, IntoStaticStr};
use tracing::{debug, info};

use dbcview_error::{Error, Result};

use crate::dot::sanitize_file_stem;

/// Document format produced by Graphviz; `Dot` keeps just the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pdf,
    Svg,
    Png,
    Dot,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match *self {
            OutputFormat::Dot => "gv",
            other => other.into(),
        }
    }
}

/// Files produced for one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// The DOT source.
    pub source: PathBuf,
    /// The Graphviz output, absent for [`OutputFormat::Dot`].
    pub rendered: Option<PathBuf>,
}

impl Artifact {
    /// The file worth showing to a user.
    pub fn primary(&self) -> &Path {
        self.rendered.as_deref().unwrap_or(&self.source)
    }
}

/// Write `dot_source` into `dir` and render it in `format`.
///
/// File names derive from `title` with anything but letters, digits, '-' and
/// '_' replaced by '_'.
pub fn write_artifact(
    dir: &Path,
    title: &str,
    dot_source: &str,
    format: OutputFormat,
) -> Result<Artifact> {
    let stem = sanitize_file_stem(title);
    let source = dir.join(format!("{stem}.gv"));
    std::fs::write(&source, dot_source).map_err(|e| {
        Error::from(e)
            .with_operation("artifact::write_artifact")
            .with_context("path", source.display().to_string())
    })?;
    debug!(path = %source.display(), "wrote dot source");

    if format == OutputFormat::Dot {
        return Ok(Artifact {
            source,
            rendered: None,
        });
    }

    let rendered = dir.join(format!("{stem}.{}", format.extension()));
    run_graphviz(&source, &rendered, format)?;
    Ok(Artifact {
        source,
        rendered: Some(rendered),
    })
}

fn run_graphviz(source: &Path, target: &Path, format: OutputFormat) -> Result<()> {
    let start = Instant::now();
    let output = Command::new("dot")
        .arg(format!("-T{format}"))
        .arg("-o")
        .arg(target)
        .arg(source)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            Error::render_failed("could not run graphviz `dot`; is Graphviz installed?")
                .with_operation("artifact::run_graphviz")
                .set_source(e)
        })?;

    if !output.status.success() {
        return Err(Error::render_failed(format!("`dot` exited with {}", output.status))
            .with_operation("artifact::run_graphviz")
            .with_context("source", source.display().to_string())
            .with_context("stderr", String::from_utf8_lossy(&output.stderr).trim().to_string()));
    }

    info!(
        path = %target.display(),
        secs = start.elapsed().as_secs_f64(),
        "rendered graph"
    );
    Ok(())
}

/// Open `path` with the platform's default application. Does not wait.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };

    cmd.arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            Error::render_failed("could not launch a viewer")
                .with_operation("artifact::open_in_viewer")
                .with_context("path", path.display().to_string())
                .set_source(e)
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_str("svg").unwrap(), OutputFormat::Svg);
        assert_eq!(OutputFormat::Pdf.to_string(), "pdf");
        assert_eq!(OutputFormat::Dot.extension(), "gv");
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert!(OutputFormat::from_str("jpeg").is_err());
    }

    #[test]
    fn test_dot_format_only_writes_source() {
        let dir = tempfile::tempdir().unwrap();
        let artifact =
            write_artifact(dir.path(), "bus from A", "digraph \"x\" {\n}\n", OutputFormat::Dot)
                .unwrap();

        assert_eq!(artifact.source, dir.path().join("bus_from_A.gv"));
        assert_eq!(artifact.rendered, None);
        assert_eq!(artifact.primary(), artifact.source.as_path());
        assert_eq!(
            std::fs::read_to_string(&artifact.source).unwrap(),
            "digraph \"x\" {\n}\n"
        );
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_artifact(&dir.path().join("nope"), "t", "", OutputFormat::Dot).unwrap_err();
        assert_eq!(err.kind(), dbcview_error::ErrorKind::FileNotFound);
    }
}
