use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

/// Convert every camera RAW (`.CR3`) file in `folder` to a JPEG next to it.
///
/// A RAW file is skipped when its JPEG already exists and is at least as
/// new. Conversion shells out to macOS `sips`. Returns the JPEGs written.
pub fn convert_raw(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for raw in files_with_extension(folder, "cr3")? {
        let jpg = raw.with_extension("JPG");
        if is_up_to_date(&jpg, &raw)? {
            tracing::debug!(raw = %raw.display(), "jpeg is up to date");
            continue;
        }

        tracing::info!(raw = %raw.display(), "converting to jpeg");
        let status = Command::new("sips")
            .args(["-s", "format", "jpeg"])
            .arg(&raw)
            .arg("--out")
            .arg(&jpg)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .context("running sips (pass --skip-raw on systems without it)")?;
        if !status.success() {
            bail!("sips failed on {} ({status})", raw.display());
        }
        written.push(jpg);
    }
    Ok(written)
}

/// Files in `folder` whose extension matches `ext` case-insensitively,
/// sorted by path.
pub fn files_with_extension(folder: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(folder).with_context(|| format!("listing {}", folder.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(ext));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_up_to_date(target: &Path, source: &Path) -> Result<bool> {
    if !target.exists() {
        return Ok(false);
    }
    let target_time = fs::metadata(target)?.modified()?;
    let source_time = fs::metadata(source)?.modified()?;
    Ok(target_time >= source_time)
}
