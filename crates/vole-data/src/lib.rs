//! # vole-data
//!
//! Dataset splitting, batching, and loading for Vole.
//!
//! This crate provides:
//! - [`Dataset`] trait - unified interface for any labeled image source
//! - [`DigitsDataset`] - in-memory 8x8 handwritten-digit provider
//! - [`split_set`] - split-at-index partitioning with per-partition shuffling
//! - [`split_to_batch`] - fixed-size batching with silent remainder drop
//! - [`load`] / [`LoadConfig`] - the composition of the above

pub mod batch;
pub mod dataset;
pub mod digits;
pub mod loader;
pub mod partition;

pub use batch::split_to_batch;
pub use dataset::{Dataset, Sample};
pub use digits::{DigitsDataset, DigitsError, DIGIT_CLASSES, DIGIT_COLS, DIGIT_ROWS};
pub use loader::{load, LoadConfig};
pub use partition::split_set;
