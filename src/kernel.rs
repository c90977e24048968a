//! Convolution kernels: small 2D grids of floating-point weights.
use crate::error::{Error, Result};

/// Weights of the normalized 3x3 Gaussian blur `[1 2 1; 2 4 2; 1 2 1] / 16`.
pub const GAUSSIAN_3X3: [[f32; 3]; 3] = [
    [0.0625, 0.125, 0.0625],
    [0.125, 0.25, 0.125],
    [0.0625, 0.125, 0.0625],
];

/// Weights of a 3x3 sharpening filter (unit impulse plus edge emphasis).
pub const SHARPEN_3X3: [[f32; 3]; 3] = [
    [0.0, -1.0, 0.0],
    [-1.0, 5.0, -1.0],
    [0.0, -1.0, 0.0],
];

/// Immutable row-major grid of filter weights.
///
/// Lookups outside the grid return 0, so the convolution loop may treat any
/// kernel as zero everywhere beyond its support. This zero default is a
/// property of the kernel alone; image boundaries use clamp-to-edge instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    w: usize,
    h: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Build a kernel by copying `rows`.
    ///
    /// Fails with [`Error::DimensionMismatch`] when `rows` is empty, a row is
    /// empty, or the rows are not all the same length.
    pub fn from_rows(rows: &[&[f32]]) -> Result<Self> {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.len());
        if h == 0 || w == 0 {
            return Err(Error::DimensionMismatch(
                "kernel requires at least one row and one column".to_string(),
            ));
        }
        let mut weights = Vec::with_capacity(w * h);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != w {
                return Err(Error::DimensionMismatch(format!(
                    "kernel row {} has {} weights, expected {}",
                    y,
                    row.len(),
                    w
                )));
            }
            weights.extend_from_slice(row);
        }
        Ok(Self { w, h, weights })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// True when both dimensions are odd (a well-defined center tap exists).
    #[inline]
    pub fn has_center(&self) -> bool {
        self.w % 2 == 1 && self.h % 2 == 1
    }

    /// Weight at (row, col), or 0 for any coordinate outside the grid.
    #[inline]
    pub fn get(&self, row: isize, col: isize) -> f32 {
        if row < 0 || row as usize >= self.h || col < 0 || col as usize >= self.w {
            return 0.0;
        }
        self.weights[row as usize * self.w + col as usize]
    }

    /// The 1x1 identity kernel.
    pub fn identity() -> Self {
        Self {
            w: 1,
            h: 1,
            weights: vec![1.0],
        }
    }

    /// The normalized 3x3 Gaussian blur.
    pub fn gaussian_3x3() -> Self {
        Self::from_table(&GAUSSIAN_3X3)
    }

    /// A 3x3 sharpening filter.
    pub fn sharpen_3x3() -> Self {
        Self::from_table(&SHARPEN_3X3)
    }

    /// A `size` x `size` box blur with uniform weights `1 / size^2`.
    ///
    /// `size` must be odd; an even size fails with [`Error::InvalidKernel`].
    pub fn box_blur(size: usize) -> Result<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(Error::InvalidKernel {
                width: size,
                height: size,
            });
        }
        let weight = 1.0 / (size * size) as f32;
        Ok(Self {
            w: size,
            h: size,
            weights: vec![weight; size * size],
        })
    }

    fn from_table(table: &[[f32; 3]; 3]) -> Self {
        Self {
            w: 3,
            h: 3,
            weights: table.iter().flatten().copied().collect(),
        }
    }
}
