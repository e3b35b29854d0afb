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
//! Collision solving
//!
//! - [`sat`]: projection overlap and MTV selection, independent of shapes
//! - [`pair`]: registry lookups, skip diagnostics and resolver dispatch
//! - [`broadphase`]: all-pairs enumeration for a whole object collection
//!
//! Data flows one way: the broad phase calls the pair solver, the pair
//! solver asks both colliders for geometry, computes the MTV and calls both
//! resolvers, and the resolvers mutate the objects in place.

pub mod broadphase;
pub mod pair;
pub mod sat;

pub use broadphase::{find_contacts, pair_indices, step_all, StepStats};
pub use pair::{detect, overlap_between, solve, Contact, PairOutcome, SkipReason};
pub use sat::{axis_overlap, find_mtv, AxisOverlap, Overlap, PushDirection};
