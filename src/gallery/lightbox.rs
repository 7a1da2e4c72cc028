/// Lightbox viewer state
///
/// Holds the item list of the group the viewer was opened on and the index
/// of the item in focus. Navigation wraps around at both ends; the counter
/// is the 1-based "i / n" shown in the viewer's top bar.

use crate::state::data::DisplayItem;

#[derive(Debug, Clone)]
pub struct Lightbox {
    items: Vec<DisplayItem>,
    index: usize,
}

impl Lightbox {
    /// Open the viewer on `items[index]`.
    /// Returns None for an empty list or an out-of-range index.
    pub fn open_at(items: Vec<DisplayItem>, index: usize) -> Option<Self> {
        if index < items.len() {
            Some(Lightbox { items, index })
        } else {
            None
        }
    }

    pub fn current(&self) -> &DisplayItem {
        &self.items[self.index]
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.items.len() - 1) % self.items.len();
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }

    /// Position indicator, 1-based: "3 / 12"
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.items.len())
    }
}
