use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::schema::Config;

const HEADER: &str = "\
# dive-score configuration
#
# scoring.multiplier   factor applied after difficulty
# scoring.panel_size   require exactly this many judge scores per dive
# scoring.check_range  reject judge scores outside 0-10
# scoring.top          number of best scores to report
# report.format        text | tsv | json
";

/// Write the default configuration to `path`.
///
/// Refuses to replace an existing file unless `force` is set. The file is
/// written atomically so a failed write never leaves a truncated config.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }
    }

    let yaml = serde_saphyr::to_string(&Config::default())
        .context("Failed to serialize default config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(HEADER.as_bytes())
        .context("Failed to write config")?;
    file.write_all(yaml.as_bytes())
        .context("Failed to write config")?;
    file.commit().context("Failed to save config")?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
