// ColumnVector: the (N, 1) shape consumed by the learning side

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// A column vector of length N, the canonical shape for both encoded inputs
/// and one-hot targets.
///
/// Columns are stored bottom-up relative to their source: row `i` holds the
/// source element `len - 1 - i`. Downstream consumers address columns under
/// this layout, so [`ColumnVector::one_hot`] and [`ColumnVector::read_class`]
/// use it as well.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnVector(Vec<f64>);

impl ColumnVector {
    /// Flatten a matrix row-major into a column, dividing every element by
    /// `scale`.
    ///
    /// The output length is always `rows * cols`, including 0 for a
    /// degenerate matrix. Pass a scale of 1.0 to keep values as-is.
    pub fn from_matrix(m: &Matrix, scale: f64) -> Result<Self> {
        if scale == 0.0 {
            return Err(Error::ZeroScale);
        }
        let data = m.as_slice().iter().rev().map(|&v| v / scale).collect();
        Ok(ColumnVector(data))
    }

    /// Turn a 1D sequence into a column, without scaling.
    pub fn from_slice(xs: &[f64]) -> Self {
        ColumnVector(xs.iter().rev().copied().collect())
    }

    /// One-hot target column for `class` out of `classes`.
    ///
    /// Under the bottom-up layout the hot row lands at `classes - 1 - class`.
    pub fn one_hot(class: usize, classes: usize) -> Result<Self> {
        if class >= classes {
            return Err(Error::ClassOutOfRange { class, classes });
        }
        let mut flat = vec![0.0; classes];
        flat[class] = 1.0;
        Ok(Self::from_slice(&flat))
    }

    /// Read the class index encoded by this column: the position of its
    /// maximum, counted from the last row.
    ///
    /// Ties go to the maximum nearest the end of the column, so the first
    /// maximum met while scanning last-to-first wins. Inverts
    /// [`ColumnVector::one_hot`] for any valid class.
    pub fn read_class(&self) -> Result<usize> {
        if self.0.is_empty() {
            return Err(Error::EmptyVector);
        }
        let mut class = 0;
        let mut best = self.0[self.0.len() - 1];
        for (pos, &v) in self.0.iter().rev().enumerate().skip(1) {
            if v > best {
                class = pos;
                best = v;
            }
        }
        Ok(class)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the column has zero rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Element at row `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    pub fn get(&self, i: usize) -> f64 {
        self.0[i]
    }

    /// The column contents, top row first.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}
