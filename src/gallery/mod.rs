/// Gallery domain logic
///
/// This module holds the pure, UI-independent pieces of the gallery:
/// - grouping and ordering of portfolio records (grouping.rs)
/// - lightbox viewer state with wraparound navigation (lightbox.rs)

pub mod grouping;
pub mod lightbox;
