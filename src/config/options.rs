//! Display options for matrices.
//!
//! This module provides the `FormatOptions` struct, which controls how a
//! matrix is laid out when rendered as a multi-line block. The defaults
//! reproduce the standard `Display` output.

/// Matrix rendering parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Number of spaces written before each row
    pub indent: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}
