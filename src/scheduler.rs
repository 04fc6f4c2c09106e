// Copyright the ttl-merge-selector contributors.
//
// Use of this software is governed by the Apache License, Version 2.0.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0

//! A minimal stand-in for the background-merge scheduler collaborator
//! described in the selector's external-interfaces contract.
//!
//! This is the *only* place logging or metrics are allowed to appear: the
//! selection algorithm in [`crate::selector`] stays pure and silent, exactly
//! as the original contract requires, and this module is the caller that
//! wraps it with observability. An embedding engine is expected to write its
//! own, much richer version of this; this one exists so the selector can be
//! exercised end to end in tests and examples without a real part catalog.

use tracing::{debug, debug_span, trace};

use crate::part::Partitions;
use crate::selector::MergeSelector;
use crate::{metrics::SelectorMetrics, PartsInPartition};

/// Supplies the current inventory of mergeable parts, grouped by partition.
///
/// In a real engine this would be backed by the part catalog; here it is
/// whatever the caller wants to hand in (a fixture, a fake, a snapshot of an
/// in-memory test database).
pub trait PartCatalog {
    fn mergeable_partitions(&self, now: i64) -> Partitions;
}

/// Runs one scheduler tick: fetch partitions from `catalog`, ask `selector`
/// to pick a run, log the outcome, and record it in `metrics`.
///
/// Returns whatever `selector` returned, so the caller can hand a non-empty
/// run to a merge executor (out of scope for this crate).
pub fn run_once(
    catalog: &impl PartCatalog,
    selector: &mut impl MergeSelector,
    max_total_size_to_merge: u64,
    now: i64,
    metrics: &SelectorMetrics,
) -> PartsInPartition {
    let _span = debug_span!("ttl_merge_tick", now).entered();

    let partitions = catalog.mergeable_partitions(now);
    let run = selector.select(&partitions, max_total_size_to_merge);

    metrics.ticks_total.inc();
    if run.is_empty() {
        metrics.ticks_empty_total.inc();
        trace!("nothing to merge this tick");
        return run;
    }

    let total_size: u64 = run.iter().map(|p| p.size).sum();
    metrics.parts_selected_total.inc_by(run.len() as u64);
    metrics.bytes_selected_total.inc_by(total_size);
    if run.len() == 1 && max_total_size_to_merge != 0 && run[0].size > max_total_size_to_merge {
        metrics.oversized_seed_total.inc();
    }
    debug!(
        partition_id = %run[0].partition_id,
        parts = run.len(),
        total_size,
        "selected a run to merge"
    );

    run
}
