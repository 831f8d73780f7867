use log::{debug, warn};

/// Outcome of one adjacency repair pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairSummary {
    pub swaps: usize,
    /// Adjacent pairs still sharing a key after the pass
    pub unresolved: usize,
}

/// Best-effort single forward pass that breaks up neighbours sharing a key.
///
/// For each position `i` in `1..=len - 2` whose key equals the key at `i - 1`, the
/// first later position whose key differs from `i - 1` is swapped into `i`. There is
/// no backtracking: a swap can create a new conflict further down, and the final
/// position is never inspected, so a conflict between the last two items always
/// survives. Neither is corrected here.
///
/// Only the order changes; no element is added, dropped or duplicated.
pub fn repair_adjacency<T, K, F>(items: &mut [T], key: F) -> RepairSummary
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut swaps = 0;

    for i in 1..items.len().saturating_sub(1) {
        let previous = key(&items[i - 1]);
        if key(&items[i]) != previous {
            continue;
        }

        match (i + 1..items.len()).find(|&j| key(&items[j]) != previous) {
            Some(j) => {
                items.swap(i, j);
                swaps += 1;
            }
            None => warn!("No swap target for repeated neighbour at position {i}"),
        }
    }

    let unresolved = count_conflicts(items, &key);
    if swaps > 0 || unresolved > 0 {
        debug!("Adjacency repair: {swaps} swaps, {unresolved} conflicts remain");
    }

    RepairSummary { swaps, unresolved }
}

/// Count adjacent pairs sharing a key. Read-only.
pub fn count_conflicts<T, K, F>(items: &[T], key: F) -> usize
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    items
        .windows(2)
        .filter(|pair| key(&pair[0]) == key(&pair[1]))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(c: &char) -> char {
        *c
    }

    fn repaired(input: &str) -> (String, RepairSummary) {
        let mut items: Vec<char> = input.chars().collect();
        let summary = repair_adjacency(&mut items, identity);
        (items.into_iter().collect(), summary)
    }

    #[test]
    fn test_swaps_first_differing_item_forward() {
        let (order, summary) = repaired("XXY");
        assert_eq!(order, "XYX");
        assert_eq!(summary, RepairSummary { swaps: 1, unresolved: 0 });
    }

    #[test]
    fn test_leaves_conflict_without_swap_target() {
        let (order, summary) = repaired("XXX");
        assert_eq!(order, "XXX");
        assert_eq!(summary, RepairSummary { swaps: 0, unresolved: 2 });
    }

    #[test]
    fn test_last_pair_is_never_inspected() {
        let (order, summary) = repaired("XYY");
        assert_eq!(order, "XYY");
        assert_eq!(summary, RepairSummary { swaps: 0, unresolved: 1 });

        let (order, summary) = repaired("YY");
        assert_eq!(order, "YY");
        assert_eq!(summary.unresolved, 1);
    }

    #[test]
    fn test_swap_can_push_repeat_into_unchecked_tail() {
        // B comes forward from the end; the displaced A lands next to another A.
        let (order, summary) = repaired("AAAB");
        assert_eq!(order, "ABAA");
        assert_eq!(summary, RepairSummary { swaps: 1, unresolved: 1 });
    }

    #[test]
    fn test_later_positions_see_earlier_swaps() {
        let (order, summary) = repaired("AAABC");
        assert_eq!(order, "ABACA");
        assert_eq!(summary, RepairSummary { swaps: 2, unresolved: 0 });
    }

    #[test]
    fn test_preserves_multiset() {
        let input = "AAABBBCCAABC";
        let (order, _) = repaired(input);

        let mut before: Vec<char> = input.chars().collect();
        let mut after: Vec<char> = order.chars().collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_short_inputs_are_untouched() {
        let mut empty: Vec<char> = Vec::new();
        assert_eq!(repair_adjacency(&mut empty, identity), RepairSummary::default());

        let mut single = vec!['A'];
        assert_eq!(repair_adjacency(&mut single, identity), RepairSummary::default());
    }

    #[test]
    fn test_count_conflicts() {
        let items: Vec<char> = "AABCCC".chars().collect();
        assert_eq!(count_conflicts(&items, identity), 3);
    }
}
