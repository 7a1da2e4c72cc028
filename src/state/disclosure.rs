/// Per-group "show more" flags
///
/// Pure presentation state kept outside the grouping engine: a map from
/// group key to an expanded boolean. It is thrown away (reset) whenever the
/// catalog or the view mode changes, so stale keys never accumulate.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Disclosure {
    expanded: HashMap<String, bool>,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups start collapsed
    pub fn is_expanded(&self, group_key: &str) -> bool {
        self.expanded.get(group_key).copied().unwrap_or(false)
    }

    /// Flip one group's flag; other groups are untouched
    pub fn toggle(&mut self, group_key: &str) {
        let flag = self.expanded.entry(group_key.to_string()).or_insert(false);
        *flag = !*flag;
    }

    /// Collapse everything (called on catalog reload and mode switch)
    pub fn reset(&mut self) {
        self.expanded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_start_collapsed() {
        let disclosure = Disclosure::new();
        assert!(!disclosure.is_expanded("acm"));
    }

    #[test]
    fn test_toggle_is_independent_across_groups() {
        let mut disclosure = Disclosure::new();

        disclosure.toggle("acm");
        assert!(disclosure.is_expanded("acm"));
        assert!(!disclosure.is_expanded("luminoso"));

        disclosure.toggle("acm");
        assert!(!disclosure.is_expanded("acm"));
    }

    #[test]
    fn test_reset_collapses_everything() {
        let mut disclosure = Disclosure::new();
        disclosure.toggle("acm");
        disclosure.toggle("luminoso");

        disclosure.reset();

        assert!(!disclosure.is_expanded("acm"));
        assert!(!disclosure.is_expanded("luminoso"));
    }
}
