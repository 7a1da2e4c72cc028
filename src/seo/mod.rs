/// SEO artifact generation
///
/// This module builds the site's crawler-facing files from the portfolio
/// catalog and the business profile:
/// - sitemap.xml (sitemap.rs)
/// - image-sitemap.xml (image_sitemap.rs)
/// - robots.txt (sitemap.rs)
/// - structured-data.json, schema.org LocalBusiness (structured_data.rs)
///
/// Builders are pure string functions; `export_all` is the only place that
/// touches the filesystem.

pub mod image_sitemap;
pub mod sitemap;
pub mod structured_data;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::profile::BusinessProfile;
use crate::state::data::PortfolioRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Write all four artifacts into `dir`, returning how many files were written
pub fn export_all(
    dir: &Path,
    profile: &BusinessProfile,
    records: &[PortfolioRecord],
) -> Result<usize, ExportError> {
    let now = Utc::now();

    let files = [
        ("sitemap.xml", sitemap::build_sitemap_xml(profile, now)),
        (
            "image-sitemap.xml",
            image_sitemap::build_image_sitemap_xml(profile, records, now),
        ),
        ("robots.txt", sitemap::build_robots_txt(profile)),
        (
            "structured-data.json",
            structured_data::local_business_json(profile),
        ),
    ];

    for (name, contents) in &files {
        let path = dir.join(name);
        fs::write(&path, contents).map_err(|source| ExportError::Write {
            path: path.display().to_string(),
            source,
        })?;
    }

    Ok(files.len())
}

/// Run the export off the UI thread
pub async fn export_all_async(
    dir: PathBuf,
    profile: BusinessProfile,
    records: Vec<PortfolioRecord>,
) -> Result<usize, String> {
    tokio::task::spawn_blocking(move || {
        export_all(&dir, &profile, &records).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}
