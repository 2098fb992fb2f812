//! Adobe/Resolve .cube LUT format support.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "LUT Name"
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! Keywords end at the first line that starts like a number. From there on
//! every non-blank, non-comment line fills one table cell, red varying
//! fastest for 3D tables.
//!
//! # Example
//!
//! ```rust
//! use cube_lut::cube;
//!
//! let text = "LUT_1D_SIZE 3\n0 0 0\n0.5 0.5 0.5\n1 1 1\n";
//! let file = cube::parse(text).unwrap();
//! assert_eq!(file.table.dimension(), 3);
//! ```

use std::cmp::Ordering;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::keyword::{is_data_start, parse_size, parse_title, parse_triple};
use crate::{
    Keyword, LineSeparator, LutError, LutResult, ParseState, Rgb, Table1D, Table3D,
    DEFAULT_DOMAIN_MAX, DEFAULT_DOMAIN_MIN,
};

/// Kind of table declared by a `.cube` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableKind {
    /// `LUT_1D_SIZE`
    OneD,
    /// `LUT_3D_SIZE`
    ThreeD,
}

/// The table a `.cube` file declared: exactly one of 1D or 3D.
#[derive(Debug, Clone, PartialEq)]
pub enum LutTable {
    /// 1D table
    OneD(Table1D),
    /// 3D table
    ThreeD(Table3D),
}

impl LutTable {
    /// Table kind.
    pub fn kind(&self) -> TableKind {
        match self {
            Self::OneD(_) => TableKind::OneD,
            Self::ThreeD(_) => TableKind::ThreeD,
        }
    }

    /// Entry count for 1D, side length for 3D.
    pub fn dimension(&self) -> usize {
        match self {
            Self::OneD(t) => t.size(),
            Self::ThreeD(t) => t.size(),
        }
    }

    /// Number of RGB cells.
    pub fn entry_count(&self) -> usize {
        match self {
            Self::OneD(t) => t.size(),
            Self::ThreeD(t) => t.entry_count(),
        }
    }
}

/// A parsed `.cube` file.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeFile {
    /// `TITLE` value, if any
    pub title: Option<String>,
    /// Input domain minimum (per channel)
    pub domain_min: Rgb,
    /// Input domain maximum (per channel)
    pub domain_max: Rgb,
    /// Populated table
    pub table: LutTable,
    /// Keywords consumed while parsing
    pub state: ParseState,
}

impl CubeFile {
    /// Wraps a table with default domain and no title.
    pub fn new(table: LutTable) -> Self {
        Self {
            title: None,
            domain_min: DEFAULT_DOMAIN_MIN,
            domain_max: DEFAULT_DOMAIN_MAX,
            table,
            state: ParseState::default(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the input domain.
    pub fn with_domain(mut self, min: Rgb, max: Rgb) -> Self {
        self.domain_min = min;
        self.domain_max = max;
        self
    }
}

/// Single-use `.cube` parser.
///
/// Owns the source text; [`CubeParser::parse`] consumes the parser, so its
/// keyword state can never leak into a second parse.
#[derive(Debug)]
pub struct CubeParser {
    text: String,
    state: ParseState,
    title: Option<String>,
    domain_min: Rgb,
    domain_max: Rgb,
    table: Option<LutTable>,
}

impl CubeParser {
    /// Creates a parser over the full text of a `.cube` file.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: ParseState::default(),
            title: None,
            domain_min: DEFAULT_DOMAIN_MIN,
            domain_max: DEFAULT_DOMAIN_MAX,
            table: None,
        }
    }

    /// Parses header and table data.
    pub fn parse(mut self) -> LutResult<CubeFile> {
        let owned = std::mem::take(&mut self.text);
        let text = owned.strip_prefix('\u{FEFF}').unwrap_or(owned.as_str());
        let separator = LineSeparator::detect(text)?;
        let lines = separator.split(text);
        trace!(?separator, lines = lines.len(), "split cube text");

        let data_start = self.scan_header(&lines)?;

        if !self.state.size {
            return Err(LutError::SizeOutOfRange(
                "missing LUT_1D_SIZE or LUT_3D_SIZE".into(),
            ));
        }
        check_domain_order(&self.domain_min, &self.domain_max)?;

        let mut table = self.table.take().ok_or_else(|| {
            LutError::SizeOutOfRange("no table allocated for declared size".into())
        })?;
        populate(&mut table, &lines, data_start)?;

        debug!(
            title = self.title.as_deref().unwrap_or(""),
            kind = ?table.kind(),
            dimension = table.dimension(),
            "parsed cube"
        );

        Ok(CubeFile {
            title: self.title,
            domain_min: self.domain_min,
            domain_max: self.domain_max,
            table,
            state: self.state,
        })
    }

    /// Applies keyword lines until the first data line, returning its index.
    fn scan_header(&mut self, lines: &[&str]) -> LutResult<usize> {
        for (i, raw) in lines.iter().enumerate() {
            let line = raw.trim_start();
            let Some(first) = line.chars().next() else {
                continue;
            };
            if first == '#' {
                continue;
            }
            if is_data_start(first) || starts_with_number(line) {
                return Ok(i);
            }
            self.apply_keyword(line, i + 1)?;
        }
        Ok(lines.len())
    }

    fn apply_keyword(&mut self, line: &str, line_no: usize) -> LutResult<()> {
        let mut tokens = line.split_whitespace();
        let Some(token) = tokens.next() else {
            return Ok(());
        };
        let Some(keyword) = Keyword::from_token(token) else {
            trace!(line = line_no, token, "skipping unrecognized keyword");
            return Ok(());
        };
        if self.state.seen(keyword) {
            trace!(line = line_no, %keyword, "ignoring repeated keyword");
            return Ok(());
        }

        match keyword {
            Keyword::Title => {
                self.title = Some(parse_title(&line[token.len()..], line_no)?);
            }
            Keyword::DomainMin => self.domain_min = parse_triple(tokens, line_no)?,
            Keyword::DomainMax => self.domain_max = parse_triple(tokens, line_no)?,
            Keyword::Lut1DSize => {
                let size = parse_size(tokens, keyword)?;
                self.table = Some(LutTable::OneD(Table1D::new(size)?));
            }
            Keyword::Lut3DSize => {
                let size = parse_size(tokens, keyword)?;
                self.table = Some(LutTable::ThreeD(Table3D::new(size)?));
            }
        }
        trace!(line = line_no, %keyword, "applied keyword");
        self.state.mark(keyword);
        Ok(())
    }
}

/// Returns true if the first token reads as a float even though its first
/// character is outside the data-start range (`+1`, `inf`, `NaN`).
fn starts_with_number(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|token| token.parse::<f32>().is_ok())
}

/// Parses `.cube` text.
pub fn parse(text: &str) -> LutResult<CubeFile> {
    CubeParser::new(text).parse()
}

/// Reads and parses a `.cube` file.
///
/// # Example
///
/// ```rust,ignore
/// let file = cube::read("grade.cube")?;
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> LutResult<CubeFile> {
    let text = fs::read_to_string(path.as_ref())?;
    debug!(path = %path.as_ref().display(), bytes = text.len(), "read cube file");
    CubeParser::new(text).parse()
}

/// Parses one data row of exactly three floats.
pub fn parse_row(line: &str, line_no: usize) -> LutResult<Rgb> {
    parse_triple(line.split_whitespace(), line_no)
}

/// Fails with [`LutError::DomainBoundsReversed`] if any `min[c] > max[c]`.
///
/// NaN bounds compare as reversed.
pub fn check_domain_order(min: &Rgb, max: &Rgb) -> LutResult<()> {
    for channel in 0..3 {
        match min[channel].partial_cmp(&max[channel]) {
            Some(Ordering::Less | Ordering::Equal) => {}
            _ => {
                return Err(LutError::DomainBoundsReversed {
                    channel,
                    min: min[channel],
                    max: max[channel],
                });
            }
        }
    }
    Ok(())
}

/// Fills `table` from the data lines starting at `start`.
fn populate(table: &mut LutTable, lines: &[&str], start: usize) -> LutResult<()> {
    let mut rows = lines
        .iter()
        .enumerate()
        .skip(start)
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));
    let expected = table.entry_count();
    let mut filled = 0;
    let mut next_row = || -> LutResult<Rgb> {
        let (line_no, line) = rows.next().ok_or_else(|| {
            LutError::SizeOutOfRange(format!(
                "expected {} data rows, found {}",
                expected, filled
            ))
        })?;
        filled += 1;
        parse_row(line, line_no)
    };

    match table {
        LutTable::OneD(lut) => {
            for i in 0..lut.size() {
                lut.set(i, next_row()?);
            }
        }
        LutTable::ThreeD(lut) => {
            let n = lut.size();
            for b in 0..n {
                for g in 0..n {
                    for r in 0..n {
                        lut.set(r, g, b, next_row()?);
                    }
                }
            }
        }
    }
    Ok(())
}

/// Formats a cube file as `.cube` text.
///
/// Values are printed in shortest round-trip form, so finite tables parse back
/// to an identical table. Non-finite cells are written as-is and rejected on parse.
pub fn write_cube(file: &CubeFile) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail
    let _ = write_header(&mut out, file);
    match &file.table {
        LutTable::OneD(lut) => {
            for rgb in lut.entries() {
                let _ = writeln!(out, "{} {} {}", rgb[0], rgb[1], rgb[2]);
            }
        }
        LutTable::ThreeD(lut) => {
            for (_, _, _, rgb) in lut.cells() {
                let _ = writeln!(out, "{} {} {}", rgb[0], rgb[1], rgb[2]);
            }
        }
    }
    out
}

/// Writes a cube file to disk.
///
/// # Example
///
/// ```rust,ignore
/// let file = CubeFile::new(LutTable::ThreeD(Table3D::identity(33)?));
/// cube::write("identity.cube", &file)?;
/// ```
pub fn write<P: AsRef<Path>>(path: P, file: &CubeFile) -> LutResult<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    writer.write_all(write_cube(file).as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn write_header(out: &mut String, file: &CubeFile) -> std::fmt::Result {
    writeln!(out, "# Generated by cube-lut")?;
    if let Some(title) = &file.title {
        writeln!(out, "TITLE \"{}\"", title)?;
    }
    match &file.table {
        LutTable::OneD(lut) => writeln!(out, "LUT_1D_SIZE {}", lut.size())?,
        LutTable::ThreeD(lut) => writeln!(out, "LUT_3D_SIZE {}", lut.size())?,
    }
    let (min, max) = (file.domain_min, file.domain_max);
    if min != DEFAULT_DOMAIN_MIN || max != DEFAULT_DOMAIN_MAX {
        writeln!(out, "DOMAIN_MIN {} {} {}", min[0], min[1], min[2])?;
        writeln!(out, "DOMAIN_MAX {} {} {}", max[0], max[1], max[2])?;
    }
    writeln!(out)
}
