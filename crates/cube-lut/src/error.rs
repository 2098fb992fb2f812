//! LUT error types.
//!
//! Every failure is fatal to the parse or normalization that raised it.
//! There is no partial-result mode: callers should report any [`LutError`]
//! as an invalid LUT file and never apply a half-built table.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while parsing or normalizing a `.cube` LUT.
#[derive(Debug, Error)]
pub enum LutError {
    /// No `\n`, `\r` or `\r\n` within the scanned prefix of the file.
    #[error("non-compliant line separator: no line terminator in the first {scanned} characters")]
    NonCompliantLineSeparator {
        /// Number of characters inspected
        scanned: usize,
    },

    /// `TITLE` keyword without a well-formed quoted value.
    #[error("incorrect title format on line {line}: {text:?}")]
    IncorrectTitleFormat {
        /// 1-based line number
        line: usize,
        /// Offending line
        text: String,
    },

    /// A numeric token could not be parsed, or a row does not hold three values.
    #[error("incorrect value format on line {line}: {reason}")]
    IncorrectValueFormat {
        /// 1-based line number
        line: usize,
        /// What went wrong
        reason: String,
    },

    /// Declared size out of bounds, size keyword missing, or too few data rows.
    #[error("size out of range: {0}")]
    SizeOutOfRange(String),

    /// A channel's `DOMAIN_MIN` exceeds its `DOMAIN_MAX`.
    #[error("domain bounds reversed on channel {channel}: min {min} > max {max}")]
    DomainBoundsReversed {
        /// Channel index (0 = R, 1 = G, 2 = B)
        channel: usize,
        /// Domain minimum
        min: f32,
        /// Domain maximum
        max: f32,
    },

    /// `DOMAIN_MIN` equals `DOMAIN_MAX` on a channel, so values cannot be rescaled.
    #[error("degenerate domain on channel {channel}: min == max == {value}")]
    DegenerateDomain {
        /// Channel index (0 = R, 1 = G, 2 = B)
        channel: usize,
        /// Shared bound value
        value: f32,
    },

    /// The table kind cannot be used for the requested operation.
    #[error("size not supported: {0}")]
    NotSupportedSize(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
