//! Table to flat RGBA buffer conversion.
//!
//! The buffer is what a platform color-cube filter consumes: `dimension`³
//! RGBA float samples (or `dimension` for 1D), red varying fastest, every
//! channel rescaled from the file's domain into `[0, 1]`.

#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::cube::check_domain_order;
use crate::{CubeFile, LutError, LutResult, LutTable, Rgb, TableKind};

/// Alpha written for every sample.
pub const ALPHA: f32 = 1.0;

/// Floats per emitted sample (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Normalized, interleaved RGBA buffer plus its cube dimension.
///
/// # Example
///
/// ```rust
/// use cube_lut::{cube, normalize};
///
/// let text = "LUT_3D_SIZE 3\n".to_string() + &"0.5 0.5 0.5\n".repeat(27);
/// let model = normalize(&cube::parse(&text).unwrap()).unwrap();
/// assert_eq!(model.dimension, 3);
/// assert_eq!(model.data.len(), 4 * 27);
/// assert_eq!(&model.data[..4], &[0.5, 0.5, 0.5, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LutModel {
    /// RGBA samples, 4 floats each
    pub data: Vec<f32>,
    /// Entry count (1D) or side length (3D)
    pub dimension: usize,
    /// Source table kind
    pub kind: TableKind,
}

impl LutModel {
    /// Number of RGBA samples.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// RGBA sample at `index`.
    #[inline]
    pub fn sample(&self, index: usize) -> [f32; 4] {
        let o = index * CHANNELS;
        [self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3]]
    }

    /// Buffer as native-endian bytes, the layout color-cube filters expect.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|v| v.to_ne_bytes()).collect()
    }

    /// Returns `self` if it can drive a color cube.
    ///
    /// Fails with [`LutError::NotSupportedSize`] for 1D tables: they parse and
    /// normalize, but cannot be applied as a cube.
    pub fn require_3d(&self) -> LutResult<&Self> {
        match self.kind {
            TableKind::ThreeD => Ok(self),
            TableKind::OneD => Err(LutError::NotSupportedSize(format!(
                "1D LUT of {} entries cannot be applied as a color cube",
                self.dimension
            ))),
        }
    }
}

/// Normalizes a parsed file into a [`LutModel`].
pub fn normalize(file: &CubeFile) -> LutResult<LutModel> {
    normalize_table(&file.table, &file.domain_min, &file.domain_max)
}

/// Normalizes `table` against the given domain bounds.
///
/// Fails with [`LutError::DomainBoundsReversed`] or
/// [`LutError::DegenerateDomain`] before touching the table, so the output
/// never holds non-finite values produced by the rescale.
pub fn normalize_table(table: &LutTable, min: &Rgb, max: &Rgb) -> LutResult<LutModel> {
    check_domain_order(min, max)?;
    for channel in 0..3 {
        if min[channel] == max[channel] {
            return Err(LutError::DegenerateDomain {
                channel,
                value: min[channel],
            });
        }
    }
    let range = [max[0] - min[0], max[1] - min[1], max[2] - min[2]];

    let mut data = Vec::with_capacity(table.entry_count() * CHANNELS);
    let mut push = |rgb: Rgb| {
        data.push((rgb[0] - min[0]) / range[0]);
        data.push((rgb[1] - min[1]) / range[1]);
        data.push((rgb[2] - min[2]) / range[2]);
        data.push(ALPHA);
    };

    match table {
        LutTable::OneD(lut) => {
            for i in 0..lut.size() {
                push(lut.get(i));
            }
        }
        LutTable::ThreeD(lut) => {
            for (_, _, _, rgb) in lut.cells() {
                push(rgb);
            }
        }
    }

    let model = LutModel {
        data,
        dimension: table.dimension(),
        kind: table.kind(),
    };
    debug!(
        kind = ?model.kind,
        dimension = model.dimension,
        samples = model.sample_count(),
        "normalized LUT"
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_DOMAIN_MAX, DEFAULT_DOMAIN_MIN, Table1D, Table3D};
    use approx::assert_relative_eq;

    #[test]
    fn default_domain_is_identity() {
        let lut = Table3D::identity(5).unwrap();
        let table = LutTable::ThreeD(lut.clone());
        let model = normalize_table(&table, &DEFAULT_DOMAIN_MIN, &DEFAULT_DOMAIN_MAX).unwrap();

        for (i, (_, _, _, rgb)) in lut.cells().enumerate() {
            assert_eq!(model.sample(i), [rgb[0], rgb[1], rgb[2], 1.0]);
        }
    }

    #[test]
    fn offsets_follow_red_fastest_order() {
        let n = 4;
        let mut lut = Table3D::new(n).unwrap();
        for b in 0..n {
            for g in 0..n {
                for r in 0..n {
                    lut.set(r, g, b, [r as f32, g as f32, b as f32]);
                }
            }
        }
        let model = normalize_table(&LutTable::ThreeD(lut), &[0.0; 3], &[1.0; 3]).unwrap();
        assert_eq!(model.data.len(), 4 * n * n * n);
        for b in 0..n {
            for g in 0..n {
                for r in 0..n {
                    let o = 4 * (b * n * n + g * n + r);
                    assert_eq!(&model.data[o..o + 4], &[r as f32, g as f32, b as f32, 1.0]);
                }
            }
        }
    }

    #[test]
    fn rescales_per_channel() {
        let mut lut = Table1D::new(3).unwrap();
        lut.set(0, [-1.0, 0.0, 10.0]);
        lut.set(1, [0.0, 2.0, 15.0]);
        lut.set(2, [1.0, 4.0, 20.0]);
        let model = normalize_table(&LutTable::OneD(lut), &[-1.0, 0.0, 10.0], &[1.0, 4.0, 20.0])
            .unwrap();
        assert_eq!(model.dimension, 3);
        assert_eq!(model.kind, TableKind::OneD);
        assert_relative_eq!(model.sample(0)[0], 0.0);
        assert_relative_eq!(model.sample(1)[0], 0.5);
        assert_relative_eq!(model.sample(1)[1], 0.5);
        assert_relative_eq!(model.sample(1)[2], 0.5);
        assert_relative_eq!(model.sample(2)[2], 1.0);
        assert_eq!(model.sample(2)[3], ALPHA);
    }

    #[test]
    fn degenerate_domain_is_rejected() {
        let table = LutTable::OneD(Table1D::new(3).unwrap());
        let err = normalize_table(&table, &[0.0, 0.5, 0.0], &[1.0, 0.5, 1.0]).unwrap_err();
        assert!(matches!(err, LutError::DegenerateDomain { channel: 1, .. }));
    }

    #[test]
    fn reversed_domain_is_rejected() {
        let table = LutTable::OneD(Table1D::new(3).unwrap());
        let err = normalize_table(&table, &[0.0, 0.0, 1.0], &[1.0, 1.0, 0.0]).unwrap_err();
        assert!(matches!(err, LutError::DomainBoundsReversed { channel: 2, .. }));
    }

    #[test]
    fn one_d_cannot_drive_a_cube() {
        let table = LutTable::OneD(Table1D::new(8).unwrap());
        let model = normalize_table(&table, &DEFAULT_DOMAIN_MIN, &DEFAULT_DOMAIN_MAX).unwrap();
        assert_eq!(model.sample_count(), 8);
        assert!(matches!(model.require_3d(), Err(LutError::NotSupportedSize(_))));

        let table = LutTable::ThreeD(Table3D::new(3).unwrap());
        let model = normalize_table(&table, &DEFAULT_DOMAIN_MIN, &DEFAULT_DOMAIN_MAX).unwrap();
        assert!(model.require_3d().is_ok());
    }

    #[test]
    fn bytes_are_native_floats() {
        let table = LutTable::ThreeD(Table3D::new(3).unwrap());
        let model = normalize_table(&table, &DEFAULT_DOMAIN_MIN, &DEFAULT_DOMAIN_MAX).unwrap();
        let bytes = model.as_bytes();
        assert_eq!(bytes.len(), 27 * 4 * 4);
        assert_eq!(&bytes[12..16], &1.0f32.to_ne_bytes());
    }
}
