// Matrix: immutable 2D array with row-major flat storage

use crate::error::{Error, Result};

/// A 2D `f64` array of fixed shape.
///
/// Storage is a flat row-major buffer with the dimensions kept beside it.
/// A `Matrix` is never mutated after construction; the splitting and
/// batching layers only move whole matrices around.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a matrix from a flat row-major buffer.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(Error::ElementCountMismatch {
                rows,
                cols,
                expected,
                got: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from nested rows.
    ///
    /// Every row must have the same width. An empty row list is a valid
    /// 0x0 matrix.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedRows {
                    row: i,
                    expected: width,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols: width,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements.
    pub fn elem_count(&self) -> usize {
        self.data.len()
    }

    /// Element at (row, col).
    ///
    /// # Panics
    /// Panics if the position is out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// The flat row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_checks_element_count() {
        let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(1, 2), 6.0);

        let err = Matrix::from_vec(vec![1.0, 2.0], 2, 3).unwrap_err();
        assert!(matches!(err, Error::ElementCountMismatch { got: 2, .. }));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn empty_matrix_is_valid() {
        let m = Matrix::from_rows(&[]).unwrap();
        assert_eq!(m.rows(), 0);
        assert_eq!(m.cols(), 0);
        assert_eq!(m.elem_count(), 0);
    }
}
