// 80/20 train/test partitioning of per-user interaction lines.

use std::collections::{BTreeSet, HashMap, HashSet};

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Parse interaction lines and merge repeated user ids.
///
/// Lines look like `"<user_id> <item_id> …"`. Item lists of repeated user
/// ids are concatenated without deduplication; users keep first-seen order.
pub fn merge_interactions(text: &str) -> Result<Vec<(u64, Vec<u64>)>> {
    let mut users: Vec<(u64, Vec<u64>)> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();

    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            continue;
        };
        let user_id: u64 = first
            .parse()
            .with_context(|| format!("Bad user id {first:?}"))?;
        let slot = *index.entry(user_id).or_insert_with(|| {
            users.push((user_id, Vec::new()));
            users.len() - 1
        });
        for token in tokens {
            let item: u64 = token
                .parse()
                .with_context(|| format!("Bad item id {token:?} for user {user_id}"))?;
            users[slot].1.push(item);
        }
    }
    Ok(users)
}

/// Split one user's interactions into train/test.
///
/// The sequence is shuffled and cut at `floor(train_ratio * len)`. A side
/// whose unique-item count falls below `min_unique` is replaced by the
/// unique set of the full original list, so the two sides can overlap after
/// the fallback.
pub fn split_user(
    items: &[u64],
    train_ratio: f64,
    min_unique: usize,
    rng: &mut impl Rng,
) -> (Vec<u64>, Vec<u64>) {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);

    let train_size = (train_ratio * shuffled.len() as f64).floor() as usize;
    let mut train = shuffled[..train_size].to_vec();
    let mut test = shuffled[train_size..].to_vec();

    if unique_count(&train) < min_unique {
        train = unique_sorted(items);
    }
    if unique_count(&test) < min_unique {
        test = unique_sorted(items);
    }
    (train, test)
}

fn unique_count(items: &[u64]) -> usize {
    items.iter().collect::<HashSet<_>>().len()
}

fn unique_sorted(items: &[u64]) -> Vec<u64> {
    items.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn merge_concatenates_repeated_users_in_first_seen_order() {
        let merged = merge_interactions("5 1 2\n9 7\n5 2 3\n").unwrap();
        assert_eq!(merged, vec![(5, vec![1, 2, 2, 3]), (9, vec![7])]);
    }

    #[test]
    fn merge_skips_blank_lines_and_rejects_garbage() {
        assert_eq!(merge_interactions("\n\n4 1\n").unwrap(), vec![(4, vec![1])]);
        assert!(merge_interactions("4 one\n").is_err());
    }

    #[test]
    fn large_user_splits_disjoint_and_complete() {
        let items: Vec<u64> = (1..=10).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let (train, test) = split_user(&items, 0.8, 3, &mut rng);

        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);
        assert!(train.iter().all(|id| !test.contains(id)));

        let mut union: Vec<u64> = train.iter().chain(test.iter()).copied().collect();
        union.sort_unstable();
        assert_eq!(union, items);
    }

    #[test]
    fn small_user_collapses_both_sides_to_full_unique_set() {
        // Three items: train gets floor(2.4) = 2 < 3 unique, test gets 1.
        let items = vec![1, 2, 3];
        let mut rng = StdRng::seed_from_u64(3);
        let (train, test) = split_user(&items, 0.8, 3, &mut rng);
        assert_eq!(train, vec![1, 2, 3]);
        assert_eq!(test, vec![1, 2, 3]);
    }

    #[test]
    fn duplicate_heavy_user_falls_back_on_unique_floor() {
        // Nine copies of one id plus one other: whatever the cut, no side
        // reaches three unique items, and the fallback deduplicates.
        let items = vec![4, 4, 4, 4, 4, 4, 4, 4, 4, 5];
        let mut rng = StdRng::seed_from_u64(11);
        let (train, test) = split_user(&items, 0.8, 3, &mut rng);
        assert_eq!(train, vec![4, 5]);
        assert_eq!(test, vec![4, 5]);
    }

    #[test]
    fn empty_interaction_list_stays_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let (train, test) = split_user(&[], 0.8, 0, &mut rng);
        assert!(train.is_empty());
        assert!(test.is_empty());
    }
}
