// Copyright the ttl-merge-selector contributors.
//
// Use of this software is governed by the Apache License, Version 2.0.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::part::{PartInfo, TtlRuleId};
use crate::policy::TtlPolicy;
use crate::selector::TtlMergeSelector;

/// A single schema-declared recompression rule: once the rule's entry in a
/// part's `recompression_ttl` map has expired, the part should be rewritten
/// under `target_codec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtlRule {
    /// Matches a key in [`crate::TtlInfo::recompression_ttl`].
    pub id: TtlRuleId,
    /// Canonical textual rendering of the codec this rule prescribes.
    pub target_codec: String,
}

/// The ordered set of recompression rules declared in a table's schema.
pub type TtlRuleSet = Vec<TtlRule>;

/// Picks the recompression rule that applies to `recompression_ttl` as of
/// `now`.
///
/// A rule applies when its id has a recorded, nonzero, already-expired entry
/// in `recompression_ttl`. When more than one rule applies, `use_max` selects
/// between the earliest-expiring (`false`) and latest-expiring (`true`)
/// match; ties are broken by the rule's position in `rules`.
pub fn select_entry<'a>(
    rules: &'a TtlRuleSet,
    recompression_ttl: &BTreeMap<TtlRuleId, i64>,
    now: i64,
    use_max: bool,
) -> Option<&'a TtlRule> {
    let mut best: Option<(&TtlRule, i64)> = None;
    for rule in rules {
        let Some(&expiry) = recompression_ttl.get(&rule.id) else {
            continue;
        };
        if expiry == 0 || expiry > now {
            continue;
        }
        best = match best {
            None => Some((rule, expiry)),
            Some((_, best_expiry)) if use_max && expiry > best_expiry => Some((rule, expiry)),
            Some((_, best_expiry)) if !use_max && expiry < best_expiry => Some((rule, expiry)),
            other => other,
        };
    }
    best.map(|(rule, _)| rule)
}

/// Drives codec-recompression candidacy for a TTL-recompression selector.
#[derive(Debug, Clone)]
pub struct RecompressPolicy {
    pub recompression_ttls: TtlRuleSet,
}

impl TtlPolicy for RecompressPolicy {
    fn ttl_for_part(&self, part: &PartInfo) -> i64 {
        part.ttl_info.min_recompression_ttl()
    }

    fn is_already_satisfied(&self, current_time: i64, part: &PartInfo) -> bool {
        if self.recompression_ttls.is_empty() {
            return false;
        }
        let Some(entry) = select_entry(
            &self.recompression_ttls,
            &part.ttl_info.recompression_ttl,
            current_time,
            /* use_max = */ false,
        ) else {
            // No rule currently mandates a different codec: treat the part
            // as effectively satisfied so it is not picked for recompression.
            return true;
        };
        entry.target_codec == part.codec_text()
    }
}

/// Merges parts whose recompression TTL has expired, switching them to the
/// codec dictated by the applicable schema rule.
pub type TtlRecompressSelector = TtlMergeSelector<RecompressPolicy>;

/// Builds a selector that merges parts to recompress them per
/// `recompression_ttls`.
pub fn make_recompress_selector(
    current_time: i64,
    merge_cooldown_time: i64,
    recompression_ttls: TtlRuleSet,
) -> TtlRecompressSelector {
    TtlMergeSelector::new(
        RecompressPolicy { recompression_ttls },
        current_time,
        merge_cooldown_time,
    )
}
