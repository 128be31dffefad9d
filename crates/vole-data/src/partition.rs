// Partitioner: split at a fixed index, shuffle each side independently

use rand::seq::SliceRandom;
use rand::Rng;

use vole_core::{Error, Result};

use crate::dataset::{Dataset, Sample};

/// Split a dataset into a training and an evaluation partition at `point`.
///
/// Positions `[0, point)` go to the training partition and `[point, len)`
/// to the evaluation partition; the boundary is fixed by `point` and
/// identical across calls. Each partition is then shuffled independently
/// with the caller's `rng`, so within-partition order is only reproducible
/// when the RNG is seeded.
///
/// `point == len` is valid and yields an empty evaluation partition.
pub fn split_set<R: Rng>(
    dataset: &dyn Dataset,
    point: usize,
    rng: &mut R,
) -> Result<(Vec<Sample>, Vec<Sample>)> {
    let len = dataset.len();
    if point > len {
        return Err(Error::SplitOutOfRange { point, len });
    }

    let mut train: Vec<Sample> = (0..point).map(|i| dataset.get(i)).collect();
    let mut eval: Vec<Sample> = (point..len).map(|i| dataset.get(i)).collect();
    train.shuffle(rng);
    eval.shuffle(rng);

    Ok((train, eval))
}
