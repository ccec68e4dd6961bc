// Activity-tier bucketing and proportional sampling of the user population.
//
// Users are kept as raw `serde_json::Value` objects so every field of the
// scraped records survives the round trip; only `project_id` is rewritten.

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};

// The five collection-status lists on a user record.
pub const CATEGORY_KEYS: [&str; 5] = ["wish", "doing", "collect", "dropped", "on_hold"];

/// Activity bucket derived from a user's total item count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Normal,
    Medium,
    Heavy,
    Core,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Normal, Tier::Medium, Tier::Heavy, Tier::Core];

    /// Bucket by total item count: <200, <500, <1000, rest.
    pub fn of(total_items: usize) -> Tier {
        if total_items < 200 {
            Tier::Normal
        } else if total_items < 500 {
            Tier::Medium
        } else if total_items < 1000 {
            Tier::Heavy
        } else {
            Tier::Core
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Normal => "normal",
            Tier::Medium => "medium",
            Tier::Heavy => "heavy",
            Tier::Core => "core",
        }
    }
}

/// Sum of the five category list lengths; absent or null lists count as 0.
pub fn item_count(user: &Value) -> usize {
    CATEGORY_KEYS
        .iter()
        .map(|key| {
            user.get(key)
                .and_then(Value::as_array)
                .map(|list| list.len())
                .unwrap_or(0)
        })
        .sum()
}

/// Partition users into the four tiers, in `Tier::ALL` order.
pub fn partition_by_tier(users: Vec<Value>) -> [Vec<Value>; 4] {
    let mut tiers: [Vec<Value>; 4] = Default::default();
    for user in users {
        let tier = Tier::of(item_count(&user));
        tiers[tier as usize].push(user);
    }
    tiers
}

/// Draw roughly `target` users, proportionally to tier size, then shuffle the
/// combined sample and reassign `project_id` as 1..N in shuffled order.
///
/// Per-tier counts are rounded independently, so the total can drift from
/// `target` by a unit or so; no correction pass is applied.
pub fn draw_proportional(tiers: [Vec<Value>; 4], target: usize, rng: &mut impl Rng) -> Vec<Value> {
    let total_valid: usize = tiers.iter().map(Vec::len).sum();
    if total_valid == 0 {
        return Vec::new();
    }

    let mut sampled: Vec<Value> = Vec::new();
    for tier_users in &tiers {
        let portion = tier_users.len() as f64 / total_valid as f64;
        let n_sample = (portion * target as f64).round() as usize;
        sampled.extend(
            tier_users
                .choose_multiple(rng, n_sample.min(tier_users.len()))
                .cloned(),
        );
    }

    sampled.shuffle(rng);

    for (idx, user) in sampled.iter_mut().enumerate() {
        if let Value::Object(obj) = user {
            obj.insert("project_id".to_string(), json!(idx as u64 + 1));
        }
    }
    sampled
}
