//! Error kinds for dbcview operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on the kind to decide whether a run should abort quietly
/// (bad user input) or surface a fault (I/O, parse, render).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid argument passed on the command line or to a function
    InvalidArgument,

    // =========================================================================
    // Selection errors
    // =========================================================================
    /// The database declares no nodes at all
    EmptyCatalog,

    /// A filter names a node the database does not declare
    UnknownNodeName,

    /// The resolved sender/receiver sets share no traffic
    NoMatchingEdges,

    // =========================================================================
    // Parse errors
    // =========================================================================
    /// Failed to parse the database file
    ParseFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Render errors
    // =========================================================================
    /// The graph renderer could not be run or reported a failure
    RenderFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether the kind stems from user input rather than a fault.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::EmptyCatalog
                | ErrorKind::UnknownNodeName
                | ErrorKind::NoMatchingEdges
                | ErrorKind::InvalidArgument
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::ParseFailed.to_string(), "ParseFailed");
        assert_eq!(ErrorKind::UnknownNodeName.as_str(), "UnknownNodeName");
    }

    #[test]
    fn test_is_user_error() {
        assert!(ErrorKind::EmptyCatalog.is_user_error());
        assert!(ErrorKind::UnknownNodeName.is_user_error());
        assert!(!ErrorKind::IoFailed.is_user_error());
        assert!(!ErrorKind::RenderFailed.is_user_error());
    }
}
