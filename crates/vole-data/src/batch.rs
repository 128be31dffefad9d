// Batcher: fixed-size contiguous runs, remainder dropped

use vole_core::{Error, Result};

use crate::dataset::Sample;

/// Regroup a sequence of samples into batches of exactly `size`.
///
/// Batches are contiguous, non-overlapping runs in the original order,
/// starting at index 0. Trailing samples that do not fill a complete batch
/// are dropped, so the result holds `samples.len() / size` batches; a size
/// larger than the sequence gives no batches at all.
pub fn split_to_batch(samples: &[Sample], size: usize) -> Result<Vec<Vec<Sample>>> {
    if size == 0 {
        return Err(Error::ZeroBatchSize);
    }
    Ok(samples.chunks_exact(size).map(<[Sample]>::to_vec).collect())
}
