use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_core::model::{PortfolioData, SeriesData, SeriesName};
use indexmap::IndexMap;

use crate::config::BuildConfig;
use crate::raw::{convert_raw, files_with_extension};

const HORIZONTAL_DIR: &str = "hor";
const VERTICAL_DIR: &str = "vert";

/// Where the project lives and what the scan is allowed to do.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub root: PathBuf,
    /// Directory the page serves images from; payload paths are relative
    /// to it.
    pub images_dir: PathBuf,
    pub convert_raw: bool,
}

/// Scan every configured series and assemble the page payload.
pub fn build_portfolio(config: &BuildConfig, options: &ScanOptions) -> Result<PortfolioData> {
    let mut series = IndexMap::new();
    for (name, series_config) in &config.series {
        let dir = options.root.join(series_config.dir());
        let data = build_series(&dir, series_config.rows(), options)
            .with_context(|| format!("building series {name}"))?;
        series.insert(SeriesName::new(name.as_str()), data);
    }
    Ok(PortfolioData {
        active: Some(SeriesName::new(config.active())),
        series,
    })
}

/// List one series' `hor/` and `vert/` JPEGs, creating the folders if they
/// are missing.
pub fn build_series(dir: &Path, rows: Vec<i64>, options: &ScanOptions) -> Result<SeriesData> {
    let hor_dir = dir.join(HORIZONTAL_DIR);
    let vert_dir = dir.join(VERTICAL_DIR);
    fs::create_dir_all(&hor_dir).with_context(|| format!("creating {}", hor_dir.display()))?;
    fs::create_dir_all(&vert_dir).with_context(|| format!("creating {}", vert_dir.display()))?;

    if options.convert_raw {
        convert_raw(&hor_dir)?;
        convert_raw(&vert_dir)?;
    }

    let prefix = series_prefix(dir, &options.images_dir)?;
    let horizontal = list_images(&hor_dir)?
        .into_iter()
        .map(|name| format!("{prefix}{HORIZONTAL_DIR}/{name}"))
        .collect();
    let vertical = list_images(&vert_dir)?
        .into_iter()
        .map(|name| format!("{prefix}{VERTICAL_DIR}/{name}"))
        .collect();

    Ok(SeriesData::new(horizontal, rows, vertical))
}

/// JPEG file names in `folder`, sorted.
pub fn list_images(folder: &Path) -> Result<Vec<String>> {
    Ok(files_with_extension(folder, "jpg")?
        .into_iter()
        .filter_map(|path| path.file_name()?.to_str().map(str::to_owned))
        .collect())
}

/// Path of `dir` below `images_dir` with a trailing slash, or `""` when the
/// series lives directly in `images_dir`.
fn series_prefix(dir: &Path, images_dir: &Path) -> Result<String> {
    let dir = fs::canonicalize(dir).with_context(|| format!("resolving {}", dir.display()))?;
    let images_dir = fs::canonicalize(images_dir)
        .with_context(|| format!("resolving {}", images_dir.display()))?;
    let relative = dir.strip_prefix(&images_dir).with_context(|| {
        format!(
            "{} is not inside {}",
            dir.display(),
            images_dir.display()
        )
    })?;

    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("{}/", parts.join("/")))
    }
}
