/// Media handling
///
/// This module handles:
/// - Generating grid thumbnails from portfolio assets
/// - Caching thumbnails to disk

pub mod thumbnail;
