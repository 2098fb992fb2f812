//! Line separator detection.
//!
//! `.cube` files come out of many tools, so the terminator is sniffed from
//! the start of the text instead of being assumed.

use crate::{LutError, LutResult};

/// Number of leading characters inspected for a line terminator.
pub const SEPARATOR_SCAN_LIMIT: usize = 255;

/// Line terminator used by a `.cube` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineSeparator {
    /// `\n` (Unix)
    Lf,
    /// `\r` (classic Mac)
    Cr,
    /// `\r\n` (Windows)
    CrLf,
}

impl LineSeparator {
    /// Detects the separator from the first [`SEPARATOR_SCAN_LIMIT`] characters.
    ///
    /// The first terminator character wins. A `\r` directly followed by `\n`
    /// is reported as [`LineSeparator::CrLf`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use cube_lut::LineSeparator;
    ///
    /// let sep = LineSeparator::detect("LUT_3D_SIZE 3\r\n0 0 0").unwrap();
    /// assert_eq!(sep, LineSeparator::CrLf);
    /// ```
    pub fn detect(text: &str) -> LutResult<Self> {
        let mut chars = text.chars().take(SEPARATOR_SCAN_LIMIT).peekable();
        let mut scanned = 0;
        while let Some(c) = chars.next() {
            scanned += 1;
            match c {
                '\n' => return Ok(Self::Lf),
                '\r' if chars.peek() == Some(&'\n') => return Ok(Self::CrLf),
                '\r' => return Ok(Self::Cr),
                _ => {}
            }
        }
        Err(LutError::NonCompliantLineSeparator { scanned })
    }

    /// Returns the terminator as a string slice.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Cr => "\r",
            Self::CrLf => "\r\n",
        }
    }

    /// Splits `text` into lines on this separator.
    pub fn split(self, text: &str) -> Vec<&str> {
        text.split(self.as_str()).collect()
    }
}
