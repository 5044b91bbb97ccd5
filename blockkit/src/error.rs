//! Error types for conversion

use std::fmt;

/// Errors that can occur while converting a Markdown tree into a layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The tree contains a node kind the converter has no handling for.
    ///
    /// This means the parser was configured with an extension whose nodes the
    /// converter does not understand. The conversion is aborted, no partial
    /// layout is produced.
    UnsupportedNode { kind: &'static str },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnsupportedNode { kind } => write!(f, "Unknown node type '{kind}'"),
        }
    }
}

impl std::error::Error for ConvertError {}
