use thiserror::Error;

/// Malformed input handed to the graph. Absent nodes are not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbgError {
    #[error("invalid base {base:?} at offset {offset} in k-mer {kmer:?}")]
    InvalidBase {
        base: char,
        offset: usize,
        kmer: String,
    },
    #[error("k-mer {kmer:?} has length {actual}, expected {expected}")]
    KmerLength {
        expected: usize,
        actual: usize,
        kmer: String,
    },
    #[error("k must be at least 1, got {0}")]
    InvalidK(usize),
}

pub type Result<T> = std::result::Result<T, DbgError>;
