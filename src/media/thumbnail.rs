/// Grid thumbnail generation and caching
///
/// Portfolio photos are multi-megapixel JPEGs; the gallery grid only needs a
/// few hundred pixels. Thumbnails are generated once into the user cache
/// directory and looked up by asset file name on every render.

use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::data::{MediaType, PortfolioRecord};

/// Size of generated thumbnails (longest edge)
const THUMBNAIL_SIZE: u32 = 384;

/// Get the thumbnail cache directory
/// Returns ~/.cache/portfolio-studio/thumbnails on Linux
pub fn get_thumbnail_cache_dir() -> PathBuf {
    let mut path = dirs_next::cache_dir()
        .or_else(|| dirs_next::home_dir())
        .expect("Could not determine cache directory");

    path.push("portfolio-studio");
    path.push("thumbnails");

    // Ensure the directory exists
    fs::create_dir_all(&path).expect("Failed to create thumbnail cache directory");

    path
}

/// Cache file name for an asset. The full asset name (extension included)
/// stays in the key so "14.jpeg" and "14.png" never collide.
fn cache_key(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}.jpg", safe)
}

/// Expected cache path for an asset (doesn't generate, just returns the path)
pub fn thumbnail_path(file_name: &str) -> PathBuf {
    get_thumbnail_cache_dir().join(cache_key(file_name))
}

/// Check if a cached thumbnail exists for an asset
pub fn thumbnail_exists(file_name: &str) -> bool {
    thumbnail_path(file_name).exists()
}

/// Generate a thumbnail for one asset
/// Returns the path to the saved thumbnail, or None if generation failed
pub fn generate_thumbnail(asset_path: &Path, file_name: &str) -> Option<PathBuf> {
    let img = image::open(asset_path).ok()?;
    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    let path = thumbnail_path(file_name);
    thumbnail.save(&path).ok()?;

    println!("📸 Generated thumbnail: {}", path.display());
    Some(path)
}

/// Generate thumbnails for every record that still lacks one.
/// Videos are skipped (the grid uses their poster frame directly).
/// Runs in a background thread to avoid blocking the UI.
pub async fn generate_missing(assets_dir: PathBuf, records: Vec<PortfolioRecord>) -> usize {
    tokio::task::spawn_blocking(move || {
        let mut generated = 0;

        for record in &records {
            if MediaType::from_file_name(&record.file_name) == MediaType::Video {
                continue;
            }
            if thumbnail_exists(&record.file_name) {
                continue;
            }

            let asset = assets_dir.join(&record.file_name);
            if !asset.exists() {
                eprintln!("⚠️  Asset missing, no thumbnail: {}", asset.display());
                continue;
            }

            if generate_thumbnail(&asset, &record.file_name).is_some() {
                generated += 1;
            }
        }

        if generated > 0 {
            println!("✅ Generated {} thumbnails", generated);
        }
        generated
    })
    .await
    .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_keeps_full_name_and_flattens_separators() {
        assert_eq!(cache_key("14.jpeg"), "14.jpeg.jpg");
        assert_eq!(cache_key("posters/v1.jpg"), "posters_v1.jpg.jpg");
    }

    #[test]
    fn test_thumbnail_path_lands_in_the_cache_dir() {
        let path = thumbnail_path("14.jpeg");
        assert!(path.ends_with("thumbnails/14.jpeg.jpg"));
    }
}
