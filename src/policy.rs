// Copyright the ttl-merge-selector contributors.
//
// Use of this software is governed by the Apache License, Version 2.0.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0

use crate::part::PartInfo;

/// The two pure hooks that distinguish a TTL-deletion selector from a
/// TTL-recompression selector.
///
/// Both methods are called on every part visited during seed selection and
/// window expansion (`O(total parts)` calls per `select`); implementations
/// must be cheap and side-effect-free. Expressed as a trait rather than a
/// pair of trait-object hooks so [`TtlMergeSelector`](crate::TtlMergeSelector)
/// monomorphizes per policy with no vtable and no heap-allocated closures.
pub trait TtlPolicy {
    /// The TTL this policy cares about for `part`. `0` means "no TTL".
    fn ttl_for_part(&self, part: &PartInfo) -> i64;

    /// Whether `part` already satisfies this policy, so that merging it
    /// would be wasted work.
    fn is_already_satisfied(&self, current_time: i64, part: &PartInfo) -> bool;
}
