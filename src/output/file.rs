use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

/// Write a rendered report to `path` atomically, with a trailing newline.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    file.write_all(report.as_bytes())
        .context("Failed to write report")?;
    if !report.ends_with('\n') {
        file.write_all(b"\n").context("Failed to write report")?;
    }

    file.commit()
        .with_context(|| format!("Failed to save report to {}", path.display()))?;
    Ok(())
}
