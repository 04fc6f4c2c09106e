// Copyright the ttl-merge-selector contributors.
//
// Use of this software is governed by the Apache License, Version 2.0.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0

use std::collections::HashMap;

use crate::part::PartitionId;

/// Per-partition memoized state: the earliest wall-clock time at which a
/// partition becomes eligible for another TTL-driven merge.
///
/// This is the only state a selector instance owns across `select` calls. A
/// missing entry means "eligible now". It is intentionally not durable: an
/// engine restart drops it, which only ever causes a partition to be merged
/// slightly sooner than the cooldown would otherwise allow.
#[derive(Debug, Clone, Default)]
pub struct CooldownMap {
    due: HashMap<PartitionId, i64>,
}

impl CooldownMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `partition_id` is still cooling down as of `current_time`.
    pub fn is_on_cooldown(&self, partition_id: &PartitionId, current_time: i64) -> bool {
        self.due
            .get(partition_id)
            .is_some_and(|&due| due > current_time)
    }

    /// Records that `partition_id` was just merged and should not be picked
    /// again until `current_time + merge_cooldown_time`.
    pub fn record_merge(&mut self, partition_id: PartitionId, current_time: i64, merge_cooldown_time: i64) {
        self.due.insert(partition_id, current_time + merge_cooldown_time);
    }

    /// The wall-clock time a partition becomes eligible again, if known.
    pub fn next_eligible_at(&self, partition_id: &PartitionId) -> Option<i64> {
        self.due.get(partition_id).copied()
    }
}
