//! The main Error type for dbcview.

use crate::ErrorKind;
use std::fmt;

/// Unified error type for all dbcview operations.
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Look up a context value by key.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get the source error (if any).
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_ref().map(|e| e.as_ref())
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at {}", self.kind, self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

impl Error {
    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create an EmptyCatalog error
    pub fn empty_catalog(source_name: impl Into<String>) -> Self {
        let source_name = source_name.into();
        Self::new(
            ErrorKind::EmptyCatalog,
            format!("no nodes found in '{}'", source_name),
        )
        .with_context("file", source_name)
    }

    /// Create an UnknownNodeName error listing the offending and the valid names.
    pub fn unknown_node_names<I, K>(invalid: &[String], known: K) -> Self
    where
        K: IntoIterator<Item = I>,
        I: AsRef<str>,
    {
        let invalid = invalid.join(", ");
        let known = known
            .into_iter()
            .map(|n| n.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(
            ErrorKind::UnknownNodeName,
            format!("specified nodes [{}] not found; nodes in this file: [{}]", invalid, known),
        )
        .with_context("invalid", invalid)
        .with_context("known", known)
    }

    /// Create a ParseFailed error pointing at a line of the input.
    pub fn parse_failed(line: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseFailed, message).with_context("line", line.to_string())
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(ErrorKind::FileNotFound, format!("file '{}' not found", path))
            .with_context("path", path)
    }

    /// Create a RenderFailed error
    pub fn render_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RenderFailed, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::ParseFailed, "unexpected token");
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
        assert_eq!(err.message(), "unexpected token");
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::new(ErrorKind::ParseFailed, "failed")
            .with_operation("dbc::parse_signal")
            .with_operation("dbc::parse");

        assert_eq!(err.operation(), "dbc::parse");
        assert_eq!(err.context().len(), 1);
        assert_eq!(err.context()[0], ("called", "dbc::parse_signal".to_string()));
    }

    #[test]
    fn test_unknown_node_names_lists_both_sides() {
        let err = Error::unknown_node_names(&["D".to_string()], ["A", "B", "C"]);
        assert_eq!(err.kind(), ErrorKind::UnknownNodeName);
        assert_eq!(err.context_value("invalid"), Some("D"));
        assert_eq!(err.context_value("known"), Some("A, B, C"));
        assert!(err.message().contains("[D]"));
        assert!(err.message().contains("[A, B, C]"));
    }

    #[test]
    fn test_display() {
        let err = Error::parse_failed(42, "malformed BO_ line").with_operation("dbc::parse");

        let display = format!("{}", err);
        assert!(display.contains("ParseFailed"));
        assert!(display.contains("dbc::parse"));
        assert!(display.contains("line: 42"));
        assert!(display.ends_with("=> malformed BO_ line"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io_err.into();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(err.source_ref().is_some());
    }
}
