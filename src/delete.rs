// Copyright the ttl-merge-selector contributors.
//
// Use of this software is governed by the Apache License, Version 2.0.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0

use crate::part::PartInfo;
use crate::policy::TtlPolicy;
use crate::selector::TtlMergeSelector;

/// Drives which rows count as "expired enough to merge" for a TTL-deletion
/// selector.
#[derive(Debug, Clone, Copy)]
pub struct DeletePolicy {
    /// When true, a part is only a candidate once every row in it has
    /// expired (`part_max_ttl`). When false, a single expired row is enough
    /// (`part_min_ttl`).
    pub only_drop_parts: bool,
}

impl TtlPolicy for DeletePolicy {
    fn ttl_for_part(&self, part: &PartInfo) -> i64 {
        if self.only_drop_parts {
            part.ttl_info.part_max_ttl
        } else {
            part.ttl_info.part_min_ttl
        }
    }

    fn is_already_satisfied(&self, _current_time: i64, _part: &PartInfo) -> bool {
        // A delete selector never considers a part already satisfied: the
        // merge itself is what performs the deletion.
        false
    }
}

/// Merges parts whose row-level TTL has expired so expired rows can be
/// physically removed.
pub type TtlDeleteSelector = TtlMergeSelector<DeletePolicy>;

/// Builds a selector that merges parts to drop expired rows.
///
/// `only_drop_parts`: see [`DeletePolicy::only_drop_parts`].
pub fn make_delete_selector(
    current_time: i64,
    merge_cooldown_time: i64,
    only_drop_parts: bool,
) -> TtlDeleteSelector {
    TtlMergeSelector::new(DeletePolicy { only_drop_parts }, current_time, merge_cooldown_time)
}
