//! 3-dimensional lookup table (color cube).
//!
//! The cube is stored as one flat buffer. Cell `[r][g][b]` lives at
//! `(b * n + g) * n + r`, so red varies fastest, exactly as rows appear in a
//! `.cube` file. Writing and normalization walk [`Table3D::cells`]; the parser
//! fills cells with the same blue, green, red nested loop.

use crate::lut1d::MIN_SIZE;
use crate::{LutError, LutResult, Rgb};

/// Exclusive upper bound for `LUT_3D_SIZE`.
pub const MAX_3D_SIZE: usize = 256;

/// A 3D lookup table with `size` samples per axis.
///
/// # Example
///
/// ```rust
/// use cube_lut::Table3D;
///
/// let mut lut = Table3D::new(17).unwrap();
/// lut.set(1, 2, 3, [0.25, 0.5, 0.75]);
/// assert_eq!(lut.get(1, 2, 3), [0.25, 0.5, 0.75]);
/// assert_eq!(lut.entry_count(), 17 * 17 * 17);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table3D {
    /// Flattened as: [(r0,g0,b0), (r1,g0,b0), ..., (rN,gN,bN)]
    data: Vec<Rgb>,
    size: usize,
}

impl Table3D {
    /// Allocates a zero-filled cube of `size`³ cells.
    ///
    /// Fails with [`LutError::SizeOutOfRange`] unless `2 < size < 256`.
    pub fn new(size: usize) -> LutResult<Self> {
        check_size(size)?;
        Ok(Self {
            data: vec![[0.0; 3]; size * size * size],
            size,
        })
    }

    /// Creates an identity (pass-through) cube.
    pub fn identity(size: usize) -> LutResult<Self> {
        let mut lut = Self::new(size)?;
        let step = 1.0 / (size - 1) as f32;
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    lut.set(r, g, b, [r as f32 * step, g as f32 * step, b as f32 * step]);
                }
            }
        }
        Ok(lut)
    }

    /// Samples per axis.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size`³).
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.data.len()
    }

    /// Flat offset of cell `[r][g][b]`.
    #[inline]
    pub fn index(&self, r: usize, g: usize, b: usize) -> usize {
        (b * self.size + g) * self.size + r
    }

    /// Cell `[r][g][b]`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is `>= size()`.
    #[inline]
    pub fn get(&self, r: usize, g: usize, b: usize) -> Rgb {
        self.data[self.index(r, g, b)]
    }

    /// Overwrites cell `[r][g][b]`.
    #[inline]
    pub fn set(&mut self, r: usize, g: usize, b: usize, rgb: Rgb) {
        let idx = self.index(r, g, b);
        self.data[idx] = rgb;
    }

    /// Raw cells in red-fastest order.
    #[inline]
    pub fn data(&self) -> &[Rgb] {
        &self.data
    }

    /// Iterates `(r, g, b, value)` with blue outermost and red innermost.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, usize, Rgb)> + '_ {
        let n = self.size;
        (0..n).flat_map(move |b| {
            (0..n).flat_map(move |g| (0..n).map(move |r| (r, g, b, self.get(r, g, b))))
        })
    }
}

fn check_size(size: usize) -> LutResult<()> {
    if size <= MIN_SIZE || size >= MAX_3D_SIZE {
        return Err(LutError::SizeOutOfRange(format!(
            "LUT_3D_SIZE {} outside {}..{} (exclusive)",
            size, MIN_SIZE, MAX_3D_SIZE
        )));
    }
    Ok(())
}
