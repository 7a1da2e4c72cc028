/// Portfolio catalog backed by the static data file
///
/// The catalog is the single source of truth for the gallery: a flat JSON
/// array of records loaded once and held immutable until the operator picks
/// another file. There is no database behind it; reloading is a full,
/// cheap re-parse.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use super::data::PortfolioRecord;

/// Errors raised while loading the data file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid portfolio data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The loaded portfolio: records plus the directory its assets live in
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<PortfolioRecord>,
    data_path: PathBuf,
    assets_dir: PathBuf,
}

impl Catalog {
    /// Load and parse a `portfolio.json`.
    ///
    /// Assets are expected next to the data file, under `portfolio/`
    /// (mirroring the site's `/portfolio/<file_name>` URLs).
    pub fn load(data_path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let data_path = data_path.into();

        let json = fs::read_to_string(&data_path).map_err(|source| CatalogError::Io {
            path: data_path.display().to_string(),
            source,
        })?;
        let records = Self::parse_records(&json)?;

        let assets_dir = data_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("portfolio");

        Ok(Catalog {
            records,
            data_path,
            assets_dir,
        })
    }

    /// Parse the JSON array of records.
    /// Missing category/client/ordem fields are fine; malformed JSON is not.
    pub fn parse_records(json: &str) -> Result<Vec<PortfolioRecord>, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn records(&self) -> &[PortfolioRecord] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn data_path(&self) -> &PathBuf {
        &self.data_path
    }

    pub fn assets_dir(&self) -> &PathBuf {
        &self.assets_dir
    }

    /// Local path of a record's asset
    pub fn asset_path(&self, file_name: &str) -> PathBuf {
        self.assets_dir.join(file_name)
    }

    /// Local path of a video's poster frame (`portfolio/posters/<stem>.jpg`)
    pub fn poster_path(&self, file_name: &str) -> PathBuf {
        let stem = file_name.rsplit_once('.').map(|(s, _)| s).unwrap_or(file_name);
        self.assets_dir.join("posters").join(format!("{}.jpg", stem))
    }

    /// Cross-check records against the files actually on disk.
    ///
    /// Missing: records whose asset file does not exist.
    /// Orphaned: top-level asset files no record references (poster frames
    /// under `posters/` are not counted).
    pub fn verify_assets(&self) -> AssetReport {
        let mut report = AssetReport::default();

        for record in &self.records {
            if !self.asset_path(&record.file_name).exists() {
                report.missing.push(record.file_name.clone());
            }
        }

        for entry in WalkDir::new(&self.assets_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if !self.records.iter().any(|r| r.file_name == name) {
                report.orphaned.push(name);
            }
        }

        report.orphaned.sort();
        report
    }
}

/// Resolve the startup data file.
///
/// A repo-local `data/portfolio.json` wins; otherwise the per-user data
/// directory is used:
/// - Linux: ~/.local/share/portfolio-studio/portfolio.json
/// - macOS: ~/Library/Application Support/portfolio-studio/portfolio.json
/// - Windows: %APPDATA%\portfolio-studio\portfolio.json
pub fn default_data_path() -> PathBuf {
    let local = PathBuf::from("data/portfolio.json");
    if local.exists() {
        return local;
    }

    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .expect("Could not determine user data directory");

    path.push("portfolio-studio");
    path.push("portfolio.json");
    path
}

/// Result of an asset verification pass
#[derive(Debug, Clone, Default)]
pub struct AssetReport {
    pub missing: Vec<String>,
    pub orphaned: Vec<String>,
}

impl AssetReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.orphaned.is_empty()
    }
}

/// Load a catalog off the UI thread.
/// Parsing is synchronous and cheap, but the file read should not block a frame.
pub async fn load_catalog(data_path: PathBuf) -> Result<Catalog, String> {
    tokio::task::spawn_blocking(move || Catalog::load(data_path).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}
