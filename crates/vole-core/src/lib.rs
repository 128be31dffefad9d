//! # vole-core
//!
//! Core containers and error types for Vole.
//!
//! This crate provides:
//! - [`Matrix`] - immutable 2D array, row-major flat storage with explicit dims
//! - [`ColumnVector`] - the (N, 1) vector shape used for inputs and targets,
//!   with one-hot encoding and argmax decoding
//! - [`Error`] / [`Result`] - the failure modes of splitting, batching, and
//!   encoding

pub mod column;
pub mod error;
pub mod matrix;

pub use column::ColumnVector;
pub use error::{Error, Result};
pub use matrix::Matrix;
