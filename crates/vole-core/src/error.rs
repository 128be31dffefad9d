/// All errors that can occur within Vole.
///
/// This enum captures every failure mode: out-of-range split points and class
/// indices, a zero batch size, malformed 2D input, a zero scale divisor, and
/// decoding an empty vector. Using a single error type across the library
/// simplifies error propagation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Split point beyond the end of the dataset.
    #[error("split point {point} out of range for dataset of {len} samples")]
    SplitOutOfRange { point: usize, len: usize },

    /// Class index does not fit in the requested one-hot vector.
    #[error("class {class} out of range for {classes} classes")]
    ClassOutOfRange { class: usize, classes: usize },

    /// Batches must hold at least one sample.
    #[error("batch size must be at least 1")]
    ZeroBatchSize,

    /// Flat buffer length does not match the requested dimensions.
    #[error("element count mismatch: {rows}x{cols} requires {expected} elements, got {got}")]
    ElementCountMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        got: usize,
    },

    /// Nested-row input with uneven row widths.
    #[error("ragged rows: row {row} has {got} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Scaling a column vector by zero.
    #[error("scale divisor must be nonzero")]
    ZeroScale,

    /// Tried to decode a zero-length column vector.
    #[error("cannot read a class from an empty vector")]
    EmptyVector,
}

/// Convenience Result type used throughout Vole.
pub type Result<T> = std::result::Result<T, Error>;
