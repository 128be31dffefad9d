// Digits dataset: in-memory 8x8 handwritten digits
//
// The classic digits collection: 8x8 grayscale images with pixel
// intensities 0-16 and labels 0-9 (1797 samples in the standard set).
// Everything lives in memory; there is no file format to parse.

use rand::Rng;

use vole_core::Matrix;

use crate::dataset::{Dataset, Sample};

/// Image height of a digit sample.
pub const DIGIT_ROWS: usize = 8;
/// Image width of a digit sample.
pub const DIGIT_COLS: usize = 8;
/// Number of digit classes.
pub const DIGIT_CLASSES: usize = 10;

/// Largest pixel intensity in the digits collection.
const MAX_INTENSITY: u8 = 16;

/// Error type for building a digits dataset.
#[derive(Debug)]
pub enum DigitsError {
    /// Pixel buffer does not divide evenly into images of the given dims.
    ElementCountMismatch { per_image: usize, got: usize },
    /// Image count and label count disagree.
    CountMismatch { images: usize, labels: usize },
    /// A label outside `[0, DIGIT_CLASSES)`.
    BadLabel { index: usize, label: u8 },
}

impl std::fmt::Display for DigitsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigitsError::ElementCountMismatch { per_image, got } => write!(
                f,
                "digits pixel buffer of {got} bytes is not a multiple of {per_image} per image"
            ),
            DigitsError::CountMismatch { images, labels } => {
                write!(f, "digits count mismatch: {images} images vs {labels} labels")
            }
            DigitsError::BadLabel { index, label } => {
                write!(f, "digits label {label} at position {index} is not a digit")
            }
        }
    }
}

impl std::error::Error for DigitsError {}

/// A digits dataset stored entirely in memory.
///
/// Images are `Vec<u8>` pixel buffers (rows * cols bytes each, row-major);
/// labels are `u8` values 0-9.
#[derive(Debug)]
pub struct DigitsDataset {
    images: Vec<Vec<u8>>,
    labels: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl DigitsDataset {
    /// Build a dataset from a flat pixel buffer and a label buffer.
    ///
    /// `pixels` holds the images back-to-back, row-major, `rows * cols`
    /// bytes each; `labels` holds one digit per image.
    pub fn from_raw(
        pixels: &[u8],
        labels: &[u8],
        rows: usize,
        cols: usize,
    ) -> Result<Self, DigitsError> {
        let per_image = rows * cols;
        if per_image == 0 || pixels.len() % per_image != 0 {
            return Err(DigitsError::ElementCountMismatch {
                per_image,
                got: pixels.len(),
            });
        }
        let count = pixels.len() / per_image;
        if count != labels.len() {
            return Err(DigitsError::CountMismatch {
                images: count,
                labels: labels.len(),
            });
        }
        for (index, &label) in labels.iter().enumerate() {
            if label as usize >= DIGIT_CLASSES {
                return Err(DigitsError::BadLabel { index, label });
            }
        }

        let images = pixels.chunks_exact(per_image).map(<[u8]>::to_vec).collect();
        Ok(Self {
            images,
            labels: labels.to_vec(),
            rows,
            cols,
        })
    }

    /// Create a synthetic digits-like dataset for tests and experiments.
    ///
    /// Generates `n` random 8x8 images with random labels.
    pub fn synthetic(n: usize) -> Self {
        let mut rng = rand::thread_rng();
        let mut images = Vec::with_capacity(n);
        let mut labels = Vec::with_capacity(n);

        for _ in 0..n {
            let mut img = vec![0u8; DIGIT_ROWS * DIGIT_COLS];
            for px in &mut img {
                *px = rng.gen_range(0..=MAX_INTENSITY);
            }
            images.push(img);
            labels.push(rng.gen_range(0..DIGIT_CLASSES as u8));
        }

        Self {
            images,
            labels,
            rows: DIGIT_ROWS,
            cols: DIGIT_COLS,
        }
    }

    /// Take only the first `n` samples (useful for quick experiments).
    pub fn take(mut self, n: usize) -> Self {
        let n = n.min(self.images.len());
        self.images.truncate(n);
        self.labels.truncate(n);
        self
    }

    /// Total number of samples.
    pub fn num_samples(&self) -> usize {
        self.images.len()
    }

    /// Get the raw pixel values for sample `i`.
    pub fn image_u8(&self, i: usize) -> &[u8] {
        &self.images[i]
    }

    /// Get the label for sample `i`.
    pub fn label(&self, i: usize) -> u8 {
        self.labels[i]
    }
}

impl Dataset for DigitsDataset {
    fn len(&self) -> usize {
        self.images.len()
    }

    fn get(&self, index: usize) -> Sample {
        let pixels: Vec<f64> = self.images[index].iter().map(|&p| p as f64).collect();
        let image = Matrix::from_vec(pixels, self.rows, self.cols)
            .expect("stored image buffers match the dataset dims");
        Sample {
            image,
            label: self.labels[index] as usize,
        }
    }

    fn image_dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn num_classes(&self) -> usize {
        DIGIT_CLASSES
    }

    fn name(&self) -> &str {
        "digits"
    }
}
