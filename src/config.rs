// Copyright the ttl-merge-selector contributors.
//
// Use of this software is governed by the Apache License, Version 2.0.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::delete::{make_delete_selector, TtlDeleteSelector};
use crate::error::SelectorConfigError;
use crate::recompress::{make_recompress_selector, TtlRecompressSelector, TtlRuleSet};

/// Validated construction parameters for a [`TtlDeleteSelector`].
///
/// Mirrors the way the storage engine this was lifted from separates a
/// small, serializable config snapshot from the long-lived selector it
/// configures: the config is schema-derived data and can be deserialized
/// straight out of whatever format the embedding engine already parses its
/// table DDL with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSelectorConfig {
    /// Minimum wall-clock seconds between two TTL-driven merges of the same
    /// partition.
    pub merge_cooldown_time_secs: i64,
    /// See [`crate::DeletePolicy::only_drop_parts`].
    pub only_drop_parts: bool,
}

impl DeleteSelectorConfig {
    pub fn validate(&self) -> Result<(), SelectorConfigError> {
        if self.merge_cooldown_time_secs < 0 {
            return Err(SelectorConfigError::NegativeCooldown(self.merge_cooldown_time_secs));
        }
        Ok(())
    }

    /// Validates this config and builds the selector it describes, anchored
    /// to `current_time`.
    pub fn build(&self, current_time: i64) -> Result<TtlDeleteSelector, SelectorConfigError> {
        self.validate()?;
        Ok(make_delete_selector(
            current_time,
            self.merge_cooldown_time_secs,
            self.only_drop_parts,
        ))
    }
}

/// Validated construction parameters for a [`TtlRecompressSelector`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecompressSelectorConfig {
    /// Minimum wall-clock seconds between two TTL-driven merges of the same
    /// partition.
    pub merge_cooldown_time_secs: i64,
    /// The ordered rule set declared in the table schema.
    pub recompression_ttls: TtlRuleSet,
}

impl RecompressSelectorConfig {
    pub fn validate(&self) -> Result<(), SelectorConfigError> {
        if self.merge_cooldown_time_secs < 0 {
            return Err(SelectorConfigError::NegativeCooldown(self.merge_cooldown_time_secs));
        }
        let mut seen = HashSet::with_capacity(self.recompression_ttls.len());
        for rule in &self.recompression_ttls {
            if !seen.insert(&rule.id) {
                return Err(SelectorConfigError::DuplicateRuleId(rule.id.clone()));
            }
        }
        Ok(())
    }

    /// Validates this config and builds the selector it describes, anchored
    /// to `current_time`.
    pub fn build(&self, current_time: i64) -> Result<TtlRecompressSelector, SelectorConfigError> {
        self.validate()?;
        Ok(make_recompress_selector(
            current_time,
            self.merge_cooldown_time_secs,
            self.recompression_ttls.clone(),
        ))
    }
}
