// Copyright the ttl-merge-selector contributors.
//
// Use of this software is governed by the Apache License, Version 2.0.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0

/// Errors constructing a selector from a [`crate::config::DeleteSelectorConfig`]
/// or [`crate::config::RecompressSelectorConfig`].
///
/// `select` itself is infallible by contract; this error type only ever
/// surfaces from validation at construction time.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectorConfigError {
    #[error("merge_cooldown_time must be nonnegative, got {0}")]
    NegativeCooldown(i64),

    #[error("recompression rule id {0:?} is declared more than once")]
    DuplicateRuleId(String),
}
