//! # cube-lut
//!
//! Parser and normalizer for `.cube` color lookup tables.
//!
//! A `.cube` file declares either a 1D table (`LUT_1D_SIZE`) or a 3D color
//! cube (`LUT_3D_SIZE`), an optional title and input domain, then one RGB row
//! per table cell. This crate parses that text into a [`CubeFile`] and
//! flattens the table into the normalized RGBA float buffer that platform
//! color-cube filters take as input.
//!
//! # Pipeline
//!
//! ```text
//! text -> LineSeparator::detect -> header scan -> row population -> CubeFile
//! CubeFile -> normalize -> LutModel { data, dimension }
//! ```
//!
//! # Usage
//!
//! ```rust
//! use cube_lut::{cube, normalize, TableKind};
//!
//! let mut text = String::from("TITLE \"Warm\"\nLUT_3D_SIZE 3\n");
//! for _ in 0..27 {
//!     text.push_str("0.25 0.5 0.75\n");
//! }
//!
//! let file = cube::parse(&text)?;
//! assert_eq!(file.title.as_deref(), Some("Warm"));
//!
//! let model = normalize(&file)?;
//! assert_eq!(model.kind, TableKind::ThreeD);
//! assert_eq!(model.data.len(), 4 * 3 * 3 * 3);
//! # Ok::<(), cube_lut::LutError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Parse diagnostics
//!
//! # Used By
//!
//! - `cube-cli` - `cubelut` command line tool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod keyword;
mod lut1d;
mod lut3d;
mod model;
mod separator;
pub mod cube;

pub use cube::{CubeFile, CubeParser, LutTable, TableKind};
pub use error::{LutError, LutResult};
pub use keyword::{Keyword, ParseState, is_data_start};
pub use lut1d::{MAX_1D_SIZE, MIN_SIZE, Table1D};
pub use lut3d::{MAX_3D_SIZE, Table3D};
pub use model::{ALPHA, CHANNELS, LutModel, normalize, normalize_table};
pub use separator::{LineSeparator, SEPARATOR_SCAN_LIMIT};

/// RGB triple of 32-bit floats.
pub type Rgb = [f32; 3];

/// Default `DOMAIN_MIN`.
pub const DEFAULT_DOMAIN_MIN: Rgb = [0.0, 0.0, 0.0];

/// Default `DOMAIN_MAX`.
pub const DEFAULT_DOMAIN_MAX: Rgb = [1.0, 1.0, 1.0];
