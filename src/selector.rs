// Copyright the ttl-merge-selector contributors.
//
// Use of this software is governed by the Apache License, Version 2.0.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0

use crate::cooldown::CooldownMap;
use crate::part::{PartInfo, Partitions, PartsInPartition};
use crate::policy::TtlPolicy;

/// The contract every merge selector obeys: given the current inventory of
/// mergeable parts, grouped by partition, and a byte budget, return a
/// contiguous run inside a single partition worth merging next, or nothing.
///
/// `select` never fails. It never performs I/O, never blocks, and never logs
/// — those are all caller concerns (see `scheduler`). Its only observable
/// side effect is mutating the selector's own cooldown bookkeeping when it
/// returns a non-empty run.
pub trait MergeSelector {
    fn select(&mut self, partitions: &Partitions, max_total_size_to_merge: u64) -> PartsInPartition;
}

/// The shared TTL-driven selection algorithm, parameterized by a
/// [`TtlPolicy`] that supplies the two hooks distinguishing deletion from
/// recompression.
///
/// `current_time` is fixed at construction, not sampled inside `select`, so
/// that every decision within one scheduling tick is made against the same
/// clock reading and the whole thing stays deterministic given its inputs.
#[derive(Debug)]
pub struct TtlMergeSelector<P> {
    policy: P,
    current_time: i64,
    merge_cooldown_time: i64,
    cooldown: CooldownMap,
}

impl<P: TtlPolicy> TtlMergeSelector<P> {
    pub fn new(policy: P, current_time: i64, merge_cooldown_time: i64) -> Self {
        Self::with_cooldown(policy, current_time, merge_cooldown_time, CooldownMap::new())
    }

    /// Builds a selector that resumes from a cooldown map carried over from a
    /// previous tick.
    ///
    /// A real engine constructs a fresh selector for every scheduling tick
    /// (since `current_time` is fixed for the life of the instance) but needs
    /// the cooldown bookkeeping to outlive any single tick; this constructor
    /// and [`TtlMergeSelector::into_cooldown`] are the seam that lets it hand
    /// the map back and forth between ticks.
    pub fn with_cooldown(policy: P, current_time: i64, merge_cooldown_time: i64, cooldown: CooldownMap) -> Self {
        TtlMergeSelector {
            policy,
            current_time,
            merge_cooldown_time,
            cooldown,
        }
    }

    /// Read-only access to the cooldown bookkeeping, mostly useful for tests
    /// and for a scheduler that wants to report "next eligible at" without
    /// reimplementing the map.
    pub fn cooldown(&self) -> &CooldownMap {
        &self.cooldown
    }

    /// Reclaims the cooldown map so it can be threaded into the next tick's
    /// selector instance. See [`TtlMergeSelector::with_cooldown`].
    pub fn into_cooldown(self) -> CooldownMap {
        self.cooldown
    }

    fn candidate_ttl(&self, part: &PartInfo) -> Option<i64> {
        let ttl = self.policy.ttl_for_part(part);
        if ttl != 0 && !self.policy.is_already_satisfied(self.current_time, part) {
            Some(ttl)
        } else {
            None
        }
    }

    /// `ttl_for_part(part) != 0 && !is_already_satisfied(part) && ttl <= current_time`.
    fn eligible(&self, part: &PartInfo) -> bool {
        matches!(self.candidate_ttl(part), Some(ttl) if ttl <= self.current_time)
    }
}

impl<P: TtlPolicy> MergeSelector for TtlMergeSelector<P> {
    fn select(&mut self, partitions: &Partitions, max_total_size_to_merge: u64) -> PartsInPartition {
        // --- seed selection -------------------------------------------------
        let mut best: Option<(usize, usize, i64)> = None; // (partition_idx, part_idx, ttl)

        for (i, partition) in partitions.iter().enumerate() {
            let Some(first) = partition.first() else {
                continue;
            };
            if self.cooldown.is_on_cooldown(&first.partition_id, self.current_time) {
                continue;
            }

            for (idx, part) in partition.iter().enumerate() {
                let Some(ttl) = self.candidate_ttl(part) else {
                    continue;
                };
                let is_better = match best {
                    None => true,
                    Some((_, _, best_ttl)) => ttl < best_ttl,
                };
                if is_better {
                    best = Some((i, idx, ttl));
                }
            }
        }

        let Some((best_partition_idx, best_idx, best_ttl)) = best else {
            return Vec::new();
        };
        if best_ttl > self.current_time {
            return Vec::new();
        }

        // --- window expansion -----------------------------------------------
        let partition = &partitions[best_partition_idx];
        let mut begin = best_idx;
        let mut end = best_idx + 1;
        let mut total_size: u64 = 0;

        loop {
            let p = &partition[begin];
            let over_budget = max_total_size_to_merge != 0 && total_size > max_total_size_to_merge;
            if !self.eligible(p) || over_budget {
                begin += 1;
                break;
            }
            total_size += p.size;
            if begin == 0 {
                break;
            }
            begin -= 1;
        }

        while end != partition.len() {
            let p = &partition[end];
            let over_budget = max_total_size_to_merge != 0 && total_size > max_total_size_to_merge;
            if !self.eligible(p) || over_budget {
                break;
            }
            total_size += p.size;
            end += 1;
        }

        // --- cooldown update --------------------------------------------------
        let partition_id = partition[0].partition_id.clone();
        self.cooldown
            .record_merge(partition_id, self.current_time, self.merge_cooldown_time);

        partition[begin..end].to_vec()
    }
}
