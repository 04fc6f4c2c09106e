// Copyright the ttl-merge-selector contributors.
//
// Use of this software is governed by the Apache License, Version 2.0.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0

//! The TTL-driven merge selector of a columnar, partitioned, append-only
//! part store.
//!
//! On every background-merge tick, the enclosing storage engine gathers its
//! current inventory of mergeable parts grouped by partition and asks a
//! [`MergeSelector`] to nominate a contiguous run of parts inside a single
//! partition to merge next, biased toward whichever part's TTL obligation
//! expires soonest. [`TtlMergeSelector`] implements the shared algorithm;
//! [`TtlDeleteSelector`] and [`TtlRecompressSelector`] plug in the two
//! policies that distinguish row-TTL deletion from codec recompression.
//!
//! The selector is pure with respect to a snapshot of part metadata plus a
//! small amount of per-partition memoized state (the cooldown map): no I/O,
//! no logging, no blocking on the hot path. Everything in [`scheduler`] and
//! [`metrics`] is ambient plumbing for embedding this into a real engine, not
//! part of the algorithm itself.

mod config;
pub mod cooldown;
mod delete;
mod error;
pub mod metrics;
mod part;
mod policy;
mod recompress;
pub mod scheduler;
mod selector;

pub use config::{DeleteSelectorConfig, RecompressSelectorConfig};
pub use cooldown::CooldownMap;
pub use delete::{make_delete_selector, DeletePolicy, TtlDeleteSelector};
pub use error::SelectorConfigError;
pub use part::{PartInfo, Partition, PartitionId, Partitions, PartsInPartition, TtlInfo, TtlRuleId};
pub use policy::TtlPolicy;
pub use recompress::{
    make_recompress_selector, select_entry, RecompressPolicy, TtlRecompressSelector, TtlRule, TtlRuleSet,
};
pub use selector::{MergeSelector, TtlMergeSelector};
