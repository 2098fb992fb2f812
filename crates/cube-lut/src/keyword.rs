//! Header keywords and the per-parse keyword state.
//!
//! Each keyword is honored only on its first occurrence; later repeats are
//! skipped without error. The two size keywords share one flag, so a file
//! declares exactly one table kind.

use std::fmt;
use std::str::SplitWhitespace;

use crate::{LutError, LutResult, Rgb};

/// Header keyword recognized by the `.cube` grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `TITLE "text"`
    Title,
    /// `DOMAIN_MIN r g b`
    DomainMin,
    /// `DOMAIN_MAX r g b`
    DomainMax,
    /// `LUT_1D_SIZE n`
    Lut1DSize,
    /// `LUT_3D_SIZE n`
    Lut3DSize,
}

impl Keyword {
    /// Matches the first token of a header line.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "TITLE" => Some(Self::Title),
            "DOMAIN_MIN" => Some(Self::DomainMin),
            "DOMAIN_MAX" => Some(Self::DomainMax),
            "LUT_1D_SIZE" => Some(Self::Lut1DSize),
            "LUT_3D_SIZE" => Some(Self::Lut3DSize),
            _ => None,
        }
    }

    /// Spelling used in `.cube` files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::DomainMin => "DOMAIN_MIN",
            Self::DomainMax => "DOMAIN_MAX",
            Self::Lut1DSize => "LUT_1D_SIZE",
            Self::Lut3DSize => "LUT_3D_SIZE",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which keywords a parse has already consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseState {
    /// `TITLE` seen
    pub title: bool,
    /// `LUT_1D_SIZE` or `LUT_3D_SIZE` seen
    pub size: bool,
    /// `DOMAIN_MIN` seen
    pub domain_min: bool,
    /// `DOMAIN_MAX` seen
    pub domain_max: bool,
}

impl ParseState {
    /// Returns true if `keyword` (or its size sibling) was already applied.
    pub fn seen(&self, keyword: Keyword) -> bool {
        match keyword {
            Keyword::Title => self.title,
            Keyword::DomainMin => self.domain_min,
            Keyword::DomainMax => self.domain_max,
            Keyword::Lut1DSize | Keyword::Lut3DSize => self.size,
        }
    }

    /// Records that `keyword` was applied.
    pub fn mark(&mut self, keyword: Keyword) {
        match keyword {
            Keyword::Title => self.title = true,
            Keyword::DomainMin => self.domain_min = true,
            Keyword::DomainMax => self.domain_max = true,
            Keyword::Lut1DSize | Keyword::Lut3DSize => self.size = true,
        }
    }

    /// Number of applied `TITLE` keywords (0 or 1).
    #[inline]
    pub fn title_count(&self) -> usize {
        usize::from(self.title)
    }

    /// Number of applied size keywords (0 or 1).
    #[inline]
    pub fn size_count(&self) -> usize {
        usize::from(self.size)
    }

    /// Number of applied `DOMAIN_MIN` keywords (0 or 1).
    #[inline]
    pub fn min_count(&self) -> usize {
        usize::from(self.domain_min)
    }

    /// Number of applied `DOMAIN_MAX` keywords (0 or 1).
    #[inline]
    pub fn max_count(&self) -> usize {
        usize::from(self.domain_max)
    }
}

/// Returns true if a line starting with `c` opens the table data.
///
/// The accepted range sits strictly between `+` and `:`: signs, the decimal
/// point, `/` and digits.
#[inline]
pub fn is_data_start(c: char) -> bool {
    '+' < c && c < ':'
}

/// Extracts the text between the first and last `"` of a `TITLE` line.
pub(crate) fn parse_title(rest: &str, line: usize) -> LutResult<String> {
    match (rest.find('"'), rest.rfind('"')) {
        (Some(open), Some(close)) if open < close => Ok(rest[open + 1..close].to_string()),
        _ => Err(LutError::IncorrectTitleFormat {
            line,
            text: rest.trim().to_string(),
        }),
    }
}

/// Parses one float, rejecting `inf` and `nan` spellings.
pub(crate) fn parse_value(token: &str, line: usize) -> LutResult<f32> {
    match token.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(LutError::IncorrectValueFormat {
            line,
            reason: format!("non-finite value {:?}", token),
        }),
        Err(_) => Err(LutError::IncorrectValueFormat {
            line,
            reason: format!("invalid value {:?}", token),
        }),
    }
}

/// Parses exactly three finite floats.
pub(crate) fn parse_triple(tokens: SplitWhitespace<'_>, line: usize) -> LutResult<Rgb> {
    let parts: Vec<&str> = tokens.collect();
    if parts.len() != 3 {
        return Err(LutError::IncorrectValueFormat {
            line,
            reason: format!("expected 3 values, found {}", parts.len()),
        });
    }
    let mut rgb = [0.0_f32; 3];
    for (value, token) in rgb.iter_mut().zip(parts) {
        *value = parse_value(token, line)?;
    }
    Ok(rgb)
}

/// Parses the single integer after a size keyword.
pub(crate) fn parse_size(mut tokens: SplitWhitespace<'_>, keyword: Keyword) -> LutResult<usize> {
    let value = tokens.next();
    let size = match (value, tokens.next()) {
        (Some(v), None) => v.parse::<usize>().ok(),
        _ => None,
    };
    size.ok_or_else(|| {
        LutError::SizeOutOfRange(format!(
            "{} expects one integer, got {:?}",
            keyword,
            value.unwrap_or("")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_tokens() {
        let all = [
            Keyword::Title,
            Keyword::DomainMin,
            Keyword::DomainMax,
            Keyword::Lut1DSize,
            Keyword::Lut3DSize,
        ];
        for kw in all {
            assert_eq!(Keyword::from_token(kw.as_str()), Some(kw));
        }
        assert_eq!(Keyword::from_token("LUT_3D_INPUT_RANGE"), None);
        assert_eq!(Keyword::from_token("title"), None);
    }

    #[test]
    fn size_keywords_share_a_flag() {
        let mut state = ParseState::default();
        assert!(!state.seen(Keyword::Lut1DSize));
        state.mark(Keyword::Lut3DSize);
        assert!(state.seen(Keyword::Lut1DSize));
        assert!(state.seen(Keyword::Lut3DSize));
        assert_eq!(state.size_count(), 1);
        assert_eq!(state.title_count(), 0);
    }

    #[test]
    fn data_start_chars() {
        for c in ['0', '9', '-', '.', ','] {
            assert!(is_data_start(c), "{c}");
        }
        for c in ['+', ':', 'T', 'L', 'D', '#', ' '] {
            assert!(!is_data_start(c), "{c}");
        }
    }

    #[test]
    fn title_between_outer_quotes() {
        assert_eq!(parse_title(r#" "Nah""#, 1).unwrap(), "Nah");
        assert_eq!(parse_title(r#" "say "hi"" "#, 1).unwrap(), r#"say "hi""#);
        assert_eq!(parse_title(r#" """#, 1).unwrap(), "");
    }

    #[test]
    fn malformed_titles() {
        for rest in ["", " Nah", r#" "Nah"#, r#" Nah""#] {
            let err = parse_title(rest, 7).unwrap_err();
            assert!(matches!(err, LutError::IncorrectTitleFormat { line: 7, .. }), "{rest}");
        }
    }

    #[test]
    fn triples() {
        assert_eq!(parse_triple("0.5 -1 2e-1".split_whitespace(), 1).unwrap(), [0.5, -1.0, 0.2]);
        assert!(matches!(
            parse_triple("0 0".split_whitespace(), 3),
            Err(LutError::IncorrectValueFormat { line: 3, .. })
        ));
        assert!(parse_triple("0 0 0 0".split_whitespace(), 1).is_err());
        assert!(parse_triple("0 x 0".split_whitespace(), 1).is_err());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for row in ["inf 0 0", "0 NaN 0", "0 0 -Infinity"] {
            let err = parse_triple(row.split_whitespace(), 4).unwrap_err();
            match err {
                LutError::IncorrectValueFormat { line: 4, reason } => {
                    assert!(reason.contains("non-finite"), "{reason}")
                }
                other => panic!("unexpected error for {row}: {other}"),
            }
        }
    }

    #[test]
    fn sizes() {
        assert_eq!(parse_size("33".split_whitespace(), Keyword::Lut3DSize).unwrap(), 33);
        for bad in ["", "33.0", "-4", "33 33", "abc"] {
            assert!(matches!(
                parse_size(bad.split_whitespace(), Keyword::Lut3DSize),
                Err(LutError::SizeOutOfRange(_))
            ));
        }
    }
}
