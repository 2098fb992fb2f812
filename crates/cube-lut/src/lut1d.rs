//! 1-dimensional lookup table.
//!
//! A 1D table maps each channel independently through `size` entries.
//! It parses fine, but the color-cube consumers downstream only apply 3D
//! tables, see [`LutModel::require_3d`](crate::LutModel::require_3d).

use crate::{LutError, LutResult, Rgb};

/// Exclusive lower bound shared by `LUT_1D_SIZE` and `LUT_3D_SIZE`.
pub const MIN_SIZE: usize = 2;

/// Exclusive upper bound for `LUT_1D_SIZE`.
pub const MAX_1D_SIZE: usize = 65536;

/// A 1D lookup table: `size` RGB entries in increasing input order.
///
/// # Example
///
/// ```rust
/// use cube_lut::Table1D;
///
/// let lut = Table1D::new(1024).unwrap();
/// assert_eq!(lut.size(), 1024);
/// assert_eq!(lut.get(0), [0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table1D {
    entries: Vec<Rgb>,
}

impl Table1D {
    /// Allocates a zero-filled table of `size` entries.
    ///
    /// Fails with [`LutError::SizeOutOfRange`] unless `2 < size < 65536`.
    pub fn new(size: usize) -> LutResult<Self> {
        check_size(size)?;
        Ok(Self {
            entries: vec![[0.0; 3]; size],
        })
    }

    /// Creates an identity (pass-through) table.
    pub fn identity(size: usize) -> LutResult<Self> {
        check_size(size)?;
        let step = 1.0 / (size - 1) as f32;
        let entries = (0..size)
            .map(|i| {
                let v = i as f32 * step;
                [v, v, v]
            })
            .collect();
        Ok(Self { entries })
    }

    /// Number of entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`.
    #[inline]
    pub fn get(&self, index: usize) -> Rgb {
        self.entries[index]
    }

    /// Overwrites the entry at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, rgb: Rgb) {
        self.entries[index] = rgb;
    }

    /// All entries in order.
    #[inline]
    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }
}

fn check_size(size: usize) -> LutResult<()> {
    if size <= MIN_SIZE || size >= MAX_1D_SIZE {
        return Err(LutError::SizeOutOfRange(format!(
            "LUT_1D_SIZE {} outside {}..{} (exclusive)",
            size, MIN_SIZE, MAX_1D_SIZE
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_exclusive() {
        assert!(Table1D::new(2).is_err());
        assert!(Table1D::new(3).is_ok());
        assert!(Table1D::new(65535).is_ok());
        assert!(matches!(
            Table1D::new(65536),
            Err(LutError::SizeOutOfRange(_))
        ));
    }

    #[test]
    fn identity_ramp() {
        let lut = Table1D::identity(5).unwrap();
        assert_eq!(lut.get(0), [0.0; 3]);
        assert_eq!(lut.get(2), [0.5; 3]);
        assert_eq!(lut.get(4), [1.0; 3]);
    }

    #[test]
    fn set_and_get() {
        let mut lut = Table1D::new(3).unwrap();
        lut.set(1, [0.1, 0.2, 0.3]);
        assert_eq!(lut.entries(), &[[0.0; 3], [0.1, 0.2, 0.3], [0.0; 3]]);
    }
}
