/// UI views
///
/// Widget-tree builders for the three surfaces of the app:
/// - grouped gallery grid (gallery.rs)
/// - lightbox viewer (lightbox.rs)
/// - quote request form (quote.rs)
///
/// Views are pure functions of the state; all behavior lives in the
/// message handlers in main.rs.

pub mod gallery;
pub mod lightbox;
pub mod quote;
