// Loader: split -> batch -> optional evaluation cap

use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use vole_core::Result;

use crate::batch::split_to_batch;
use crate::dataset::{Dataset, Sample};
use crate::partition::split_set;

/// Configuration for [`load`].
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Index where the training partition ends and evaluation begins.
    pub split_point: usize,
    /// Number of samples per training batch.
    pub batch_size: usize,
    /// Cap on the evaluation partition length (primarily for speed).
    pub eval_cap: Option<usize>,
    /// Optional random seed for reproducible shuffling.
    pub seed: Option<u64>,
}

impl LoadConfig {
    pub fn new(split_point: usize, batch_size: usize) -> Self {
        Self {
            split_point,
            batch_size,
            eval_cap: None,
            seed: None,
        }
    }

    pub fn eval_cap(mut self, cap: usize) -> Self {
        self.eval_cap = Some(cap);
        self
    }

    pub fn seed(mut self, s: u64) -> Self {
        self.seed = Some(s);
        self
    }
}

/// Prepare a dataset for training: split it at the configured point, batch
/// the training partition, and optionally truncate the evaluation partition.
///
/// Returns `split_point / batch_size` batches and an evaluation partition of
/// `min(dataset.len() - split_point, eval_cap)` samples. Errors from the
/// partitioner and batcher propagate unchanged.
pub fn load(
    dataset: &dyn Dataset,
    config: &LoadConfig,
) -> Result<(Vec<Vec<Sample>>, Vec<Sample>)> {
    let (train, mut eval) = match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            split_set(dataset, config.split_point, &mut rng)?
        }
        None => {
            let mut rng = thread_rng();
            split_set(dataset, config.split_point, &mut rng)?
        }
    };

    let batches = split_to_batch(&train, config.batch_size)?;
    if let Some(cap) = config.eval_cap {
        eval.truncate(cap);
    }

    Ok((batches, eval))
}
