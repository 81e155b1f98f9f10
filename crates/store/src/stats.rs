//! Community impact statistics.
//!
//! Recomputed on demand from raw storage so that the numbers reflect every
//! scope's ledger, not just the active session's.

use serde_json::Value;

use crate::keys;
use crate::kv::{KvStore, KvStoreExt};

/// Estimated kilograms of waste diverted per rehomed item.
pub const AVERAGE_KG_PER_ITEM: f64 = 0.26;

/// Kilograms of diverted waste counted as one tree saved.
pub const KG_PER_TREE: u64 = 20;

/// Aggregate impact numbers across the whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityStats {
    /// Total ledger lines across every scope.
    pub items_rehomed: u64,
    /// `items_rehomed` converted to kilograms, rounded.
    pub kg_diverted: u64,
    pub trees_saved: u64,
    /// Percent progress toward the next tree, 0 to 100.
    pub progress_toward_next_tree: u8,
    pub users_count: u64,
}

impl CommunityStats {
    /// Recompute the statistics from raw storage.
    ///
    /// Every `purchases:*` key contributes its line count; malformed or
    /// non-array values are ignored rather than surfaced.
    #[must_use]
    pub fn compute(kv: &dyn KvStore) -> Self {
        let mut items_rehomed: u64 = 0;
        for key in kv.keys() {
            if !key.starts_with(keys::PURCHASES_PREFIX) {
                continue;
            }
            if let Some(lines) = kv
                .load_raw(&key)
                .and_then(|raw| serde_json::from_str::<Vec<Value>>(&raw).ok())
            {
                items_rehomed += lines.len() as u64;
            }
        }

        let users: Vec<Value> = kv.load(keys::USERS, Vec::new());

        Self::from_counts(items_rehomed, users.len() as u64)
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_counts(items_rehomed: u64, users_count: u64) -> Self {
        let kg_diverted = (items_rehomed as f64 * AVERAGE_KG_PER_ITEM).round() as u64;
        let trees_saved = kg_diverted / KG_PER_TREE;
        let progress = ((kg_diverted % KG_PER_TREE) as f64 / KG_PER_TREE as f64 * 100.0).round();
        Self {
            items_rehomed,
            kg_diverted,
            trees_saved,
            progress_toward_next_tree: (progress.min(100.0)) as u8,
            users_count,
        }
    }
}
