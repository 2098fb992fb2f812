//! CLI command implementations

pub mod check;
pub mod flatten;
pub mod info;

use anyhow::{Context, Result};
use cube_lut::{CubeFile, cube};
use std::path::Path;

/// Load and parse a LUT from path
pub fn load_lut(path: &Path) -> Result<CubeFile> {
    cube::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Format a channel triple for display
pub fn format_rgb(rgb: [f32; 3]) -> String {
    format!("{} {} {}", rgb[0], rgb[1], rgb[2])
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn rgb() {
        assert_eq!(format_rgb([0.0, 0.5, 1.0]), "0 0.5 1");
    }

    #[test]
    fn load_reports_path() {
        let err = load_lut(Path::new("/nonexistent/look.cube")).unwrap_err();
        assert!(err.to_string().contains("look.cube"));
    }
}
