//! LUT info command.
//!
//! Displays the header of each file: title, table kind, size and domain.

use crate::InfoArgs;
use anyhow::{Context, Result};
use cube_lut::{CubeFile, LutTable, ParseState, TableKind};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Summary of one parsed file.
#[derive(Debug, Serialize)]
pub struct LutInfo {
    /// Source path
    pub file: String,
    /// File size in bytes
    pub size_bytes: u64,
    /// `TITLE` value
    pub title: Option<String>,
    /// Table kind
    pub kind: TableKind,
    /// Entry count (1D) or side length (3D)
    pub dimension: usize,
    /// Total RGB cells
    pub entries: usize,
    /// `DOMAIN_MIN`
    pub domain_min: [f32; 3],
    /// `DOMAIN_MAX`
    pub domain_max: [f32; 3],
    /// First table cell
    pub first: [f32; 3],
    /// Keywords present in the header
    pub keywords: ParseState,
}

impl LutInfo {
    /// Builds the summary for a parsed file.
    pub fn new(path: &Path, size_bytes: u64, lut: &CubeFile) -> Self {
        let first = match &lut.table {
            LutTable::OneD(t) => t.get(0),
            LutTable::ThreeD(t) => t.get(0, 0, 0),
        };
        Self {
            file: path.display().to_string(),
            size_bytes,
            title: lut.title.clone(),
            kind: lut.table.kind(),
            dimension: lut.table.dimension(),
            entries: lut.table.entry_count(),
            domain_min: lut.domain_min,
            domain_max: lut.domain_max,
            first,
            keywords: lut.state,
        }
    }
}

/// Runs the info command.
pub fn run(args: InfoArgs) -> Result<()> {
    let mut infos = Vec::with_capacity(args.input.len());
    for path in &args.input {
        let lut = super::load_lut(path)?;
        let size_bytes = fs::metadata(path)
            .with_context(|| format!("Failed to stat: {}", path.display()))?
            .len();
        infos.push(LutInfo::new(path, size_bytes, &lut));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for (idx, info) in infos.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        print_text(info);
    }
    Ok(())
}

/// Prints info in human-readable text format.
fn print_text(info: &LutInfo) {
    println!("{}", info.file);
    println!("  Title:      {}", info.title.as_deref().unwrap_or("-"));
    match info.kind {
        TableKind::OneD => println!("  Type:       1D ({} entries)", info.dimension),
        TableKind::ThreeD => println!(
            "  Type:       3D ({0}x{0}x{0}, {1} entries)",
            info.dimension, info.entries
        ),
    }
    println!("  Domain min: {}", super::format_rgb(info.domain_min));
    println!("  Domain max: {}", super::format_rgb(info.domain_max));
    println!("  First:      {}", super::format_rgb(info.first));
    println!("  File size:  {}", super::format_size(info.size_bytes));
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_lut::cube;

    #[test]
    fn summary_of_1d() {
        let lut = cube::parse("TITLE \"Ramp\"\nLUT_1D_SIZE 3\n0.1 0.2 0.3\n0.5 0.5 0.5\n1 1 1\n").unwrap();
        let info = LutInfo::new(Path::new("ramp.cube"), 64, &lut);
        assert_eq!(info.title.as_deref(), Some("Ramp"));
        assert_eq!(info.kind, TableKind::OneD);
        assert_eq!(info.dimension, 3);
        assert_eq!(info.first, [0.1, 0.2, 0.3]);
        assert!(info.keywords.title);

        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"kind\":\"OneD\""));
    }

    #[test]
    fn reports_real_file_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ramp.cube");
        let text = "LUT_1D_SIZE 3\n0 0 0\n0.5 0.5 0.5\n1 1 1\n";
        fs::write(&path, text).unwrap();
        assert!(run(InfoArgs { input: vec![path], json: true }).is_ok());

        let missing = dir.path().join("missing.cube");
        let err = run(InfoArgs { input: vec![missing], json: false }).unwrap_err();
        assert!(err.to_string().contains("missing.cube"));
    }
}
