// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Brute-force broad phase
//!
//! Every unordered pair `(i, j)` with `i < j` is visited once, in ascending
//! order `(0,1), (0,2), ..., (1,2), ...`. This is O(n²) and intended for
//! small scenes only.
//!
//! # Ordering
//!
//! Resolvers mutate objects in place, so an object taking part in several
//! pairs in the same step sees the corrections of the earlier pairs. The
//! final state of a step therefore depends on the visiting order.
//!
//! ## Parallel Queries
//!
//! Resolution is strictly sequential. The read-only contact query has no
//! such dependency and fans out over Rayon when the `parallel` feature is
//! enabled; results are still returned in ascending pair order.

use crate::object::CollisionObject;
use crate::plugins::registry::{ColliderRegistry, ResolverRegistry};
use crate::solver::pair::{self, Contact, PairOutcome};
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Counters for one broad-phase step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Pairs that went through SAT
    pub pairs_checked: usize,
    /// Pairs whose resolvers were invoked
    pub collisions: usize,
    /// Pairs skipped because of missing or mismatched definitions
    pub skipped: usize,
}

/// Ascending unordered index pairs over `count` objects
pub fn pair_indices(count: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..count).flat_map(move |i| ((i + 1)..count).map(move |j| (i, j)))
}

/// Solve every unordered pair once, in ascending order
///
/// Holds no state between calls.
pub fn step_all(
    colliders: &ColliderRegistry,
    resolvers: &ResolverRegistry,
    objects: &mut [CollisionObject],
) -> StepStats {
    let mut stats = StepStats::default();

    for (i, j) in pair_indices(objects.len()) {
        let (head, tail) = objects.split_at_mut(j);
        match pair::solve(colliders, resolvers, &mut head[i], &mut tail[0]) {
            PairOutcome::Resolved(_) => {
                stats.pairs_checked += 1;
                stats.collisions += 1;
            }
            PairOutcome::Separated => stats.pairs_checked += 1,
            PairOutcome::Skipped(reason) => {
                if reason.is_configuration_error() {
                    stats.skipped += 1;
                }
            }
        }
    }

    debug!(
        "Step over {} objects: {} pairs checked, {} collisions, {} skipped",
        objects.len(),
        stats.pairs_checked,
        stats.collisions,
        stats.skipped
    );

    stats
}

/// Detect every overlapping pair without resolving anything
pub fn find_contacts(colliders: &ColliderRegistry, objects: &[CollisionObject]) -> Vec<Contact> {
    let contacts_from = move |i: usize| {
        ((i + 1)..objects.len()).filter_map(move |j| {
            match pair::detect(colliders, &objects[i], &objects[j]) {
                Ok(Some(overlap)) => Some(Contact {
                    first: i,
                    second: j,
                    overlap,
                }),
                Ok(None) => None,
                Err(reason) => {
                    if reason.is_configuration_error() {
                        debug!("Contact query skipped ({}, {}): {}", i, j, reason);
                    }
                    None
                }
            }
        })
    };

    #[cfg(feature = "parallel")]
    {
        (0..objects.len())
            .into_par_iter()
            .flat_map_iter(contacts_from)
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..objects.len()).flat_map(contacts_from).collect()
    }
}
