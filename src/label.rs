// Positive-interaction ("liked") derivation per user.
//
// `doing` and `wish` items count as liked outright. `collect` items are
// liked when unrated, or when rated at or above a 70th-percentile threshold
// cut over that user's own ratings. `dropped` and `on_hold` only ever enter
// through the empty-set fallback.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemEntry {
    pub project_id: u64,
    /// User-assigned score; 0 or absent means unrated.
    #[serde(default)]
    pub rate: f64,
}

/// One user with the five collection-status lists. Absent or null lists are
/// treated as empty.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserRecord {
    pub project_id: u64,
    #[serde(default)]
    pub wish: Option<Vec<ItemEntry>>,
    #[serde(default)]
    pub doing: Option<Vec<ItemEntry>>,
    #[serde(default)]
    pub collect: Option<Vec<ItemEntry>>,
    #[serde(default)]
    pub dropped: Option<Vec<ItemEntry>>,
    #[serde(default)]
    pub on_hold: Option<Vec<ItemEntry>>,
}

impl UserRecord {
    pub fn all_items(&self) -> impl Iterator<Item = &ItemEntry> {
        self.wish
            .iter()
            .flatten()
            .chain(self.doing.iter().flatten())
            .chain(self.collect.iter().flatten())
            .chain(self.dropped.iter().flatten())
            .chain(self.on_hold.iter().flatten())
    }

    pub fn total_items(&self) -> usize {
        self.all_items().count()
    }
}

/// Derive the liked item ids for one user, sorted ascending and unique.
///
/// Non-empty whenever the user has at least one item anywhere: the fallback
/// draws min(3, total) items uniformly from the union of all five lists.
pub fn liked_set(user: &UserRecord, rng: &mut impl Rng) -> Vec<u64> {
    let mut liked: BTreeSet<u64> = BTreeSet::new();

    for item in user.doing.iter().flatten().chain(user.wish.iter().flatten()) {
        liked.insert(item.project_id);
    }

    let collect = user.collect.as_deref().unwrap_or_default();
    for item in collect.iter().filter(|i| i.rate <= 0.0) {
        liked.insert(item.project_id);
    }

    let mut rated: Vec<&ItemEntry> = collect.iter().filter(|i| i.rate > 0.0).collect();
    if !rated.is_empty() {
        rated.sort_by(|a, b| b.rate.partial_cmp(&a.rate).unwrap_or(Ordering::Equal));
        let n = rated.len();
        let k = ((0.7 * n as f64).ceil() as usize).clamp(1, n);
        // Threshold cut, not a fixed top-k: ties at the rank-k rate all get in.
        let threshold = rated[k - 1].rate;
        for item in rated.iter().filter(|i| i.rate >= threshold) {
            liked.insert(item.project_id);
        }
    }

    if liked.is_empty() {
        let mut pool: Vec<u64> = user.all_items().map(|i| i.project_id).collect();
        pool.shuffle(rng);
        liked.extend(pool.into_iter().take(3));
    }

    liked.into_iter().collect()
}

/// `"<user_id> <id> <id> …"`; just the user id when the liked set is empty.
pub fn interaction_line(user: &UserRecord, rng: &mut impl Rng) -> String {
    let mut parts = vec![user.project_id.to_string()];
    parts.extend(liked_set(user, rng).iter().map(|id| id.to_string()));
    parts.join(" ")
}
