use std::collections::HashMap;

use crate::entities::CategoryCount;

/// Counts items per key, most frequent first.
///
/// Keys with equal counts keep the order in which they were first seen.
pub(crate) fn count_by<'a, T, I, F>(items: I, key: F) -> Vec<CategoryCount>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> &'a str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();
    for item in items {
        let k = key(item);
        match index.get(k) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(k, counts.len());
                counts.push(CategoryCount {
                    category: k.to_string(),
                    count: 1,
                });
            }
        }
    }
    // Stable, so ties stay in first-seen order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(counts: &[CategoryCount]) -> Vec<(&str, usize)> {
        counts
            .iter()
            .map(|c| (c.category.as_str(), c.count))
            .collect()
    }

    #[test]
    fn orders_by_count_then_first_seen() {
        let items = ["b", "a", "c", "a", "c", "d"];
        let counts = count_by(items.iter(), |s| *s);
        assert_eq!(pairs(&counts), vec![("a", 2), ("c", 2), ("b", 1), ("d", 1)]);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let items: [&str; 0] = [];
        assert!(count_by(items.iter(), |s| *s).is_empty());
    }
}
