// Copyright the ttl-merge-selector contributors.
//
// Use of this software is governed by the Apache License, Version 2.0.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0

use prometheus::{IntCounter, Registry};

/// Counters a background scheduler increments around each `select` call.
///
/// Never touched by the selection algorithm itself (see module docs on
/// `scheduler`) — only by the code that drives it. Collectors are grouped
/// behind a plain struct the caller owns and registers once, rather than
/// reached for through a global registry.
#[derive(Debug, Clone)]
pub struct SelectorMetrics {
    /// Every call to `select`, regardless of outcome.
    pub ticks_total: IntCounter,
    /// Calls to `select` that returned an empty run.
    pub ticks_empty_total: IntCounter,
    /// Parts included across all non-empty runs returned so far.
    pub parts_selected_total: IntCounter,
    /// Bytes included across all non-empty runs returned so far.
    pub bytes_selected_total: IntCounter,
    /// Non-empty runs whose single seed part alone exceeded the byte
    /// budget (invariant 3: the seed is included anyway).
    pub oversized_seed_total: IntCounter,
}

impl SelectorMetrics {
    /// Creates the counters and registers them with `registry`.
    pub fn register(registry: &Registry) -> prometheus::Result<Self> {
        let metrics = SelectorMetrics {
            ticks_total: IntCounter::new("ttl_merge_ticks_total", "Total select() calls")?,
            ticks_empty_total: IntCounter::new(
                "ttl_merge_ticks_empty_total",
                "select() calls that returned no run",
            )?,
            parts_selected_total: IntCounter::new(
                "ttl_merge_parts_selected_total",
                "Parts included in non-empty select() results",
            )?,
            bytes_selected_total: IntCounter::new(
                "ttl_merge_bytes_selected_total",
                "Bytes included in non-empty select() results",
            )?,
            oversized_seed_total: IntCounter::new(
                "ttl_merge_oversized_seed_total",
                "Non-empty results whose seed part alone exceeded the byte budget",
            )?,
        };
        registry.register(Box::new(metrics.ticks_total.clone()))?;
        registry.register(Box::new(metrics.ticks_empty_total.clone()))?;
        registry.register(Box::new(metrics.parts_selected_total.clone()))?;
        registry.register(Box::new(metrics.bytes_selected_total.clone()))?;
        registry.register(Box::new(metrics.oversized_seed_total.clone()))?;
        Ok(metrics)
    }
}
