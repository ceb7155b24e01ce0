use std::fmt;

use crate::graph::VertexId;

/// Machine-readable error codes for scripted consumers of the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    VertexOutOfRange,
    SelfLoop,
    MissingEdge,
    ConfigParseError,
    InteractionLogParseError,
    ExportWriteFailed,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::VertexOutOfRange => "E1001",
            Self::SelfLoop => "E1002",
            Self::MissingEdge => "E1003",
            Self::ConfigParseError => "E2001",
            Self::InteractionLogParseError => "E2002",
            Self::ExportWriteFailed => "E5001",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::VertexOutOfRange => "Vertex index out of range",
            Self::SelfLoop => "Self-loop not allowed in a simple graph",
            Self::MissingEdge => "Edge does not exist",
            Self::ConfigParseError => "Config file parse error",
            Self::InteractionLogParseError => "Interaction log parse error",
            Self::ExportWriteFailed => "Export file write failed",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::VertexOutOfRange => Some("Vertex ids are dense and zero-based: use 0..vertex_count."),
            Self::SelfLoop => Some("Skip interactions where source and target are the same user."),
            Self::MissingEdge => Some("Call add_edge before reading or updating its weight."),
            Self::ConfigParseError => Some("Fix syntax in collab.toml and retry."),
            Self::InteractionLogParseError => {
                Some("Expected a JSON object with an `events` array of {type, source, target}.")
            }
            Self::ExportWriteFailed => Some("Check disk space and write permissions."),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Graph-contract violations.
///
/// Every one of these is raised at the boundary of a [`crate::Graph`]
/// operation before any state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex argument is outside `[0, vertex_count)`.
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    OutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// An edge operation was requested with `u == v`.
    #[error("self-loop on vertex {vertex} is not allowed")]
    InvalidEdge { vertex: VertexId },

    /// The edge `(from, to)` does not exist.
    #[error("edge {from} -> {to} does not exist")]
    MissingEdge { from: VertexId, to: VertexId },
}

impl GraphError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(self) -> ErrorCode {
        match self {
            Self::OutOfRange { .. } => ErrorCode::VertexOutOfRange,
            Self::InvalidEdge { .. } => ErrorCode::SelfLoop,
            Self::MissingEdge { .. } => ErrorCode::MissingEdge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorCode, GraphError};
    use std::collections::HashSet;

    const ALL: [ErrorCode; 7] = [
        ErrorCode::VertexOutOfRange,
        ErrorCode::SelfLoop,
        ErrorCode::MissingEdge,
        ErrorCode::ConfigParseError,
        ErrorCode::InteractionLogParseError,
        ErrorCode::ExportWriteFailed,
        ErrorCode::InternalUnexpected,
    ];

    #[test]
    fn all_codes_are_unique() {
        let mut seen = HashSet::new();
        for code in ALL {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        for code in ALL {
            let s = code.code();
            assert_eq!(s.len(), 5);
            assert!(s.starts_with('E'));
            assert!(s.chars().skip(1).all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn graph_errors_map_to_codes() {
        let err = GraphError::OutOfRange {
            vertex: 9,
            vertex_count: 3,
        };
        assert_eq!(err.error_code(), ErrorCode::VertexOutOfRange);
        assert_eq!(
            err.to_string(),
            "vertex 9 out of range for graph with 3 vertices"
        );

        let err = GraphError::InvalidEdge { vertex: 2 };
        assert_eq!(err.error_code(), ErrorCode::SelfLoop);

        let err = GraphError::MissingEdge { from: 0, to: 1 };
        assert_eq!(err.error_code(), ErrorCode::MissingEdge);
        assert!(err.to_string().contains("0 -> 1"));
    }
}
