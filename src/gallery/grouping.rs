/// Portfolio grouping and ordering engine
///
/// Turns the flat record list into the two gallery views:
/// - by category: curated keys first in a fixed order, items ranked by `ordem`
/// - by client: groups ranked by their best (minimum) `ordem`, items kept in
///   the order they appear in the data file
///
/// The whole thing is a pure function of (records, mode). It never mutates
/// the input and is recomputed from scratch whenever the catalog or the view
/// mode changes; at tens of records that is cheaper than any invalidation
/// scheme would be.

use crate::state::data::{
    category_description, category_label, DisplayItem, PortfolioRecord, CANONICAL_CATEGORIES,
};

/// How many items a category group shows before "Ver mais"
pub const CATEGORY_VISIBLE_LIMIT: usize = 5;

/// How many items a client group shows before "Ver mais"
pub const CLIENT_VISIBLE_LIMIT: usize = 6;

/// Title of the client group for records without a client
const UNATTRIBUTED_CLIENT_TITLE: &str = "Projetos avulsos";

/// Active grouping strategy, user-selectable and mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Category,
    Client,
}

/// A named bucket of display items sharing a category or client
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Grouping key: the literal category string or the exact client name
    pub key: String,
    /// Header shown above the group
    pub title: String,
    /// Optional subtitle (curated categories only)
    pub description: Option<String>,
    /// Full ordered item list
    pub items: Vec<DisplayItem>,
    /// How many items are shown while the group is collapsed
    pub visible_limit: usize,
}

impl Group {
    /// The items currently exposed: a bounded prefix while collapsed,
    /// everything once expanded.
    pub fn visible_items(&self, expanded: bool) -> &[DisplayItem] {
        if expanded {
            &self.items
        } else {
            &self.items[..self.items.len().min(self.visible_limit)]
        }
    }

    /// True iff the group holds more items than the collapsed view shows
    pub fn has_more(&self) -> bool {
        self.items.len() > self.visible_limit
    }

    /// How many items stay hidden while collapsed
    pub fn hidden_count(&self) -> usize {
        self.items.len().saturating_sub(self.visible_limit)
    }
}

/// Compute the ordered group list for the given view mode
pub fn list_groups(records: &[PortfolioRecord], mode: ViewMode) -> Vec<Group> {
    match mode {
        ViewMode::Category => category_groups(records),
        ViewMode::Client => client_groups(records),
    }
}

/// Bucket records by a key, preserving first-seen bucket order.
/// Each member keeps its original input position for tie-breaking.
fn bucket_by<'a, F>(
    records: &'a [PortfolioRecord],
    key_of: F,
) -> Vec<(String, Vec<(usize, &'a PortfolioRecord)>)>
where
    F: Fn(&PortfolioRecord) -> &str,
{
    let mut buckets: Vec<(String, Vec<(usize, &PortfolioRecord)>)> = Vec::new();
    for (position, record) in records.iter().enumerate() {
        let key = key_of(record);
        match buckets.iter_mut().find(|(k, _)| k == key) {
            Some((_, members)) => members.push((position, record)),
            None => buckets.push((key.to_string(), vec![(position, record)])),
        }
    }
    buckets
}

fn category_groups(records: &[PortfolioRecord]) -> Vec<Group> {
    let mut buckets = bucket_by(records, |r| r.category_key());

    // Curated categories first, in their fixed order; unknown keys keep
    // their first-seen order after them (stable sort).
    let canonical_rank = |key: &str| {
        CANONICAL_CATEGORIES
            .iter()
            .position(|c| *c == key)
            .unwrap_or(CANONICAL_CATEGORIES.len())
    };
    buckets.sort_by_key(|(key, _)| canonical_rank(key));

    buckets
        .into_iter()
        .map(|(key, mut members)| {
            // Ascending ordem; ties broken by file name, then input position,
            // so the order is total and reproducible across runs.
            members.sort_by(|(pos_a, a), (pos_b, b)| {
                a.ordem_rank()
                    .total_cmp(&b.ordem_rank())
                    .then_with(|| a.file_name.cmp(&b.file_name))
                    .then_with(|| pos_a.cmp(pos_b))
            });

            let title = category_label(&key)
                .map(String::from)
                .unwrap_or_else(|| degraded_category_title(&key));

            Group {
                title,
                description: category_description(&key).map(String::from),
                items: members
                    .iter()
                    .map(|(_, r)| DisplayItem::from_record(r))
                    .collect(),
                visible_limit: CATEGORY_VISIBLE_LIMIT,
                key,
            }
        })
        .collect()
}

/// Unknown categories keep their literal key as the header; records with no
/// category at all fall back to the generic label.
fn degraded_category_title(key: &str) -> String {
    if key.is_empty() {
        "Portfólio".to_string()
    } else {
        key.to_string()
    }
}

fn client_groups(records: &[PortfolioRecord]) -> Vec<Group> {
    let mut buckets = bucket_by(records, |r| r.client_key());

    // Groups led by their best manual rank; name comparison is
    // case-insensitive (Unicode lowercase), with the raw name as the final
    // key so equal-but-for-case names still order deterministically.
    let min_rank = |members: &[(usize, &PortfolioRecord)]| {
        members
            .iter()
            .map(|(_, r)| r.ordem_rank())
            .fold(f64::INFINITY, f64::min)
    };
    buckets.sort_by(|(key_a, members_a), (key_b, members_b)| {
        min_rank(members_a)
            .total_cmp(&min_rank(members_b))
            .then_with(|| key_a.to_lowercase().cmp(&key_b.to_lowercase()))
            .then_with(|| key_a.cmp(key_b))
    });

    buckets
        .into_iter()
        .map(|(key, members)| {
            let title = if key.is_empty() {
                UNATTRIBUTED_CLIENT_TITLE.to_string()
            } else {
                key.clone()
            };

            Group {
                title,
                description: None,
                // Insertion order preserved on purpose: a client's projects
                // read in the order they entered the data file.
                items: members
                    .iter()
                    .map(|(_, r)| DisplayItem::from_record(r))
                    .collect(),
                visible_limit: CLIENT_VISIBLE_LIMIT,
                key,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(file_name: &str, category: &str, client: &str, ordem: Option<f64>) -> PortfolioRecord {
        PortfolioRecord {
            file_name: file_name.to_string(),
            category: (!category.is_empty()).then(|| category.to_string()),
            client: (!client.is_empty()).then(|| client.to_string()),
            ordem,
        }
    }

    fn file_names(group: &Group) -> Vec<&str> {
        group.items.iter().map(|i| i.file_name.as_str()).collect()
    }

    #[test]
    fn test_every_record_lands_in_exactly_one_group() {
        let records = vec![
            rec("1.jpeg", "acm", "Padaria Real", Some(2.0)),
            rec("2.jpeg", "luminoso", "Clínica Diegues", None),
            rec("3.jpeg", "vitrine", "", Some(1.0)),
            rec("4.jpeg", "", "Padaria Real", None),
        ];

        for mode in [ViewMode::Category, ViewMode::Client] {
            let groups = list_groups(&records, mode);
            let total: usize = groups.iter().map(|g| g.items.len()).sum();
            assert_eq!(total, records.len(), "coverage in {:?} mode", mode);

            // No record appears twice
            let mut seen: Vec<&str> = groups
                .iter()
                .flat_map(|g| g.items.iter().map(|i| i.file_name.as_str()))
                .collect();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), records.len());
        }
    }

    #[test]
    fn test_category_group_order_is_canonical_then_first_seen() {
        let records = vec![
            rec("1.jpeg", "luminoso", "", None),
            rec("2.jpeg", "acm", "", None),
            rec("3.jpeg", "vitrine", "", None),
            rec("4.jpeg", "letra_caixa", "", None),
        ];

        let groups = list_groups(&records, ViewMode::Category);
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["acm", "letra_caixa", "luminoso", "vitrine"]);
    }

    #[test]
    fn test_empty_categories_are_never_emitted() {
        let records = vec![rec("1.jpeg", "acm", "", None)];
        let groups = list_groups(&records, ViewMode::Category);
        assert_eq!(groups.len(), 1);
        assert!(list_groups(&[], ViewMode::Category).is_empty());
        assert!(list_groups(&[], ViewMode::Client).is_empty());
    }

    #[test]
    fn test_ordem_sorts_ascending_with_missing_last() {
        let records = vec![
            rec("a.jpeg", "acm", "", Some(3.0)),
            rec("b.jpeg", "acm", "", None),
            rec("c.jpeg", "acm", "", Some(1.0)),
            rec("d.jpeg", "acm", "", Some(2.0)),
        ];

        let groups = list_groups(&records, ViewMode::Category);
        assert_eq!(file_names(&groups[0]), ["c.jpeg", "d.jpeg", "a.jpeg", "b.jpeg"]);
    }

    #[test]
    fn test_equal_ordem_ties_are_deterministic() {
        let records = vec![
            rec("z.jpeg", "acm", "", Some(1.0)),
            rec("a.jpeg", "acm", "", Some(1.0)),
            rec("m.jpeg", "acm", "", Some(1.0)),
        ];

        let first = list_groups(&records, ViewMode::Category);
        // Tie-break by file name
        assert_eq!(file_names(&first[0]), ["a.jpeg", "m.jpeg", "z.jpeg"]);

        // Reproducible across repeated runs on identical input
        for _ in 0..10 {
            assert_eq!(list_groups(&records, ViewMode::Category), first);
        }
    }

    #[test]
    fn test_unknown_category_keeps_its_literal_key() {
        let records = vec![rec("1.jpeg", "vitrine", "", None)];
        let groups = list_groups(&records, ViewMode::Category);
        assert_eq!(groups[0].key, "vitrine");
        assert_eq!(groups[0].title, "vitrine");
        assert_eq!(groups[0].description, None);
    }

    #[test]
    fn test_missing_category_degrades_to_generic_title() {
        let records = vec![rec("1.jpeg", "", "", None)];
        let groups = list_groups(&records, ViewMode::Category);
        assert_eq!(groups[0].key, "");
        assert_eq!(groups[0].title, "Portfólio");
    }

    #[test]
    fn test_client_mode_preserves_insertion_order() {
        // r1 has the worse ordem but entered first: it must stay first
        let records = vec![
            rec("r1.jpeg", "acm", "Padaria Real", Some(5.0)),
            rec("r2.jpeg", "luminoso", "Padaria Real", Some(1.0)),
        ];

        let groups = list_groups(&records, ViewMode::Client);
        assert_eq!(file_names(&groups[0]), ["r1.jpeg", "r2.jpeg"]);
    }

    #[test]
    fn test_client_groups_ordered_by_min_ordem_then_name() {
        let records = vec![
            rec("1.jpeg", "acm", "Zebra Motos", Some(4.0)),
            rec("2.jpeg", "acm", "açougue Bom Corte", Some(4.0)),
            rec("3.jpeg", "acm", "Clínica Diegues", Some(1.0)),
            rec("4.jpeg", "acm", "Clínica Diegues", Some(9.0)),
        ];

        let groups = list_groups(&records, ViewMode::Client);
        let titles: Vec<&str> = groups.iter().map(|g| g.title.as_str()).collect();
        // Diegues wins on min ordem; the 4.0 tie falls to case-insensitive
        // name order ("açougue…" before "Zebra…" despite the lowercase a)
        assert_eq!(titles, ["Clínica Diegues", "açougue Bom Corte", "Zebra Motos"]);
    }

    #[test]
    fn test_empty_client_forms_its_own_group() {
        let records = vec![
            rec("1.jpeg", "acm", "", None),
            rec("2.jpeg", "acm", "Padaria Real", Some(1.0)),
            rec("3.jpeg", "acm", "", None),
        ];

        let groups = list_groups(&records, ViewMode::Client);
        assert_eq!(groups.len(), 2);

        let unattributed = groups.iter().find(|g| g.key.is_empty()).unwrap();
        assert_eq!(unattributed.items.len(), 2);
        assert_eq!(unattributed.title, "Projetos avulsos");
    }

    #[test]
    fn test_visible_items_and_has_more() {
        let records: Vec<PortfolioRecord> = (0..8)
            .map(|n| rec(&format!("{}.jpeg", n), "acm", "", Some(n as f64)))
            .collect();

        let groups = list_groups(&records, ViewMode::Category);
        let group = &groups[0];

        assert!(group.has_more());
        assert_eq!(group.visible_items(false).len(), CATEGORY_VISIBLE_LIMIT);
        assert_eq!(group.visible_items(true).len(), 8);
        assert!(group.visible_items(true).len() >= group.visible_items(false).len());
        assert_eq!(group.hidden_count(), 8 - CATEGORY_VISIBLE_LIMIT);

        // Collapsed view is a prefix of the expanded view
        assert_eq!(
            group.visible_items(true)[..CATEGORY_VISIBLE_LIMIT],
            group.visible_items(false)[..]
        );
    }

    #[test]
    fn test_small_groups_have_no_more() {
        let records = vec![rec("1.jpeg", "acm", "Padaria Real", None)];

        for mode in [ViewMode::Category, ViewMode::Client] {
            let groups = list_groups(&records, mode);
            assert!(!groups[0].has_more());
            assert_eq!(groups[0].visible_items(false).len(), 1);
            assert_eq!(groups[0].visible_items(true).len(), 1);
        }
    }

    #[test]
    fn test_list_groups_is_idempotent_and_does_not_mutate_input() {
        let records = vec![
            rec("1.jpeg", "luminoso", "Clínica Diegues", Some(2.0)),
            rec("2.jpeg", "acm", "", None),
        ];
        let snapshot = records.clone();

        let a = list_groups(&records, ViewMode::Category);
        let b = list_groups(&records, ViewMode::Category);
        assert_eq!(a, b);
        assert_eq!(records, snapshot);
    }
}
