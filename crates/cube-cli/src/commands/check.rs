//! LUT validation command.

use crate::CheckArgs;
use anyhow::{Result, bail};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// Parses and normalizes every input, printing one status line per file.
///
/// Fails if any file is invalid.
pub fn run(args: CheckArgs) -> Result<()> {
    let mut failed = 0;
    for path in &args.input {
        match cube_lut::cube::read(path).and_then(|lut| cube_lut::normalize(&lut)) {
            Ok(model) => {
                debug!(path = %path.display(), samples = model.sample_count(), "valid LUT");
                println!("ok      {}", path.display());
            }
            Err(e) => {
                failed += 1;
                println!("invalid {}: {}", path.display(), e);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files invalid", failed, args.input.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reports_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.cube");
        let bad = dir.path().join("bad.cube");
        fs::write(&good, "LUT_1D_SIZE 3\n0 0 0\n0 0 0\n0 0 0\n").unwrap();
        fs::write(&bad, "LUT_3D_SIZE 300\n").unwrap();

        assert!(run(CheckArgs { input: vec![good.clone()] }).is_ok());
        let err = run(CheckArgs { input: vec![good, bad] }).unwrap_err();
        assert!(err.to_string().contains("1 of 2"));
    }
}
