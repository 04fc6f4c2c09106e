// Copyright the ttl-merge-selector contributors.
//
// Use of this software is governed by the Apache License, Version 2.0.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0

use std::collections::BTreeMap;
use std::fmt;

/// Identifies a partition across the lifetime of a selector instance.
///
/// Parts within the same partition share this id; the selector uses it only
/// as a cooldown-map key, never to compare part ordering (ordering is given
/// by position within a [`Partition`](crate::Partition)).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartitionId(pub String);

impl From<&str> for PartitionId {
    fn from(s: &str) -> Self {
        PartitionId(s.to_owned())
    }
}

impl From<String> for PartitionId {
    fn from(s: String) -> Self {
        PartitionId(s)
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The identifier for a recompression TTL rule, as declared in the table
/// schema. Used as the key into [`TtlInfo::recompression_ttl`].
pub type TtlRuleId = String;

/// A table's epoch-second TTL bookkeeping for a single part.
///
/// `0` means "no TTL of this kind applies", matching the `time_t` convention
/// of the storage engine this selector was lifted from: TTL expressions are
/// never scheduled for the Unix epoch itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TtlInfo {
    /// Earliest row-TTL expiry across all rows in the part.
    pub part_min_ttl: i64,
    /// Latest row-TTL expiry across all rows in the part.
    pub part_max_ttl: i64,
    /// Expiry time of each declared recompression rule, keyed by rule id.
    /// A rule absent from this map has never applied to this part.
    pub recompression_ttl: BTreeMap<TtlRuleId, i64>,
}

impl TtlInfo {
    /// The earliest nonzero expiry among this part's recompression rules, or
    /// `0` if none are recorded.
    pub fn min_recompression_ttl(&self) -> i64 {
        self.recompression_ttl
            .values()
            .copied()
            .filter(|&ttl| ttl != 0)
            .min()
            .unwrap_or(0)
    }
}

/// A single immutable part, as the selector sees it.
///
/// This is a metadata snapshot, not a handle to the actual on-disk data: the
/// selector reads these fields and never mutates or dereferences anything
/// behind them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartInfo {
    /// Opaque name of the part, used only for diagnostics (logging, test
    /// assertions); never interpreted by the algorithm.
    pub name: String,
    /// The partition this part belongs to.
    pub partition_id: PartitionId,
    /// Byte footprint of the part.
    pub size: u64,
    /// TTL bookkeeping for this part.
    pub ttl_info: TtlInfo,
    /// Canonical textual rendering of the part's current compression codec,
    /// or `None` for "no codec recorded" (rendered as the empty string when
    /// compared against a rule's target codec).
    pub compression_codec_desc: Option<String>,
}

impl PartInfo {
    /// Renders the part's codec the same way a schema rule's target codec is
    /// rendered, so the two can be compared textually.
    pub(crate) fn codec_text(&self) -> &str {
        self.compression_codec_desc.as_deref().unwrap_or("")
    }
}

/// An ordered run of parts, as given by the caller.
pub type Partition = Vec<PartInfo>;

/// An ordered sequence of partitions, as given by the caller for one
/// [`select`](crate::MergeSelector::select) call.
pub type Partitions = Vec<Partition>;

/// The result of a [`select`](crate::MergeSelector::select) call: a
/// contiguous slice of exactly one partition, or empty.
pub type PartsInPartition = Vec<PartInfo>;
