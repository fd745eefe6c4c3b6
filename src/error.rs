use thiserror::Error;

// Unified error type for vecmat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    #[error("{what} of unequal size ({left} and {right})")]
    DimensionMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, VmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_embed_sizes() {
        let e = VmError::DimensionMismatch { what: "Vectors", left: 2, right: 3 };
        assert_eq!(e.to_string(), "Vectors of unequal size (2 and 3)");
        let e = VmError::IndexOutOfBounds { index: 5, len: 3 };
        assert_eq!(e.to_string(), "index 5 out of bounds for length 3");
    }
}
