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
//! Pairwise narrow phase
//!
//! Looks up both objects' definitions, gathers candidate axes from both
//! colliders, runs SAT and hands the MTV to both resolvers. Configuration
//! problems never abort: they skip the pair and report a [`SkipReason`].

use crate::object::CollisionObject;
use crate::plugins::api::{Collider, Counterpart, Resolver};
use crate::plugins::registry::{ColliderRegistry, ResolverRegistry};
use crate::solver::sat::{find_mtv, Overlap};
use log::warn;
use std::fmt;

/// Why a pair was not solved
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// At least one object has collision disabled
    Disabled,
    /// No collider is registered under the object's collider name
    MissingCollider(String),
    /// No resolver is registered under the object's resolver name
    MissingResolver(String),
    /// The collider does not understand the object's shape
    UnsupportedShape {
        /// Collider name
        collider: String,
        /// Shape kind of the object
        shape: &'static str,
    },
}

impl SkipReason {
    /// Whether this reason points at a setup mistake rather than a flag
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, SkipReason::Disabled)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Disabled => write!(f, "collision disabled"),
            SkipReason::MissingCollider(name) => write!(f, "collider '{}' is not registered", name),
            SkipReason::MissingResolver(name) => write!(f, "resolver '{}' is not registered", name),
            SkipReason::UnsupportedShape { collider, shape } => {
                write!(f, "collider '{}' does not support {} shapes", collider, shape)
            }
        }
    }
}

impl std::error::Error for SkipReason {}

/// Result of solving one pair
#[derive(Debug, Clone, PartialEq)]
pub enum PairOutcome {
    /// The pair was not examined
    Skipped(SkipReason),
    /// A separating axis exists or no usable axis was found
    Separated,
    /// The pair overlapped and both resolvers were invoked
    Resolved(Overlap),
}

impl PairOutcome {
    /// Check if the pair collided
    pub fn is_collision(&self) -> bool {
        matches!(self, PairOutcome::Resolved(_))
    }

    /// The MTV if the pair collided
    pub fn overlap(&self) -> Option<&Overlap> {
        match self {
            PairOutcome::Resolved(overlap) => Some(overlap),
            _ => None,
        }
    }
}

/// Overlapping pair found by a read-only query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Index of the first object
    pub first: usize,
    /// Index of the second object
    pub second: usize,
    /// MTV, with `first` as the first participant
    pub overlap: Overlap,
}

fn collider_for<'r>(
    colliders: &'r ColliderRegistry,
    object: &CollisionObject,
) -> Result<&'r dyn Collider, SkipReason> {
    let collider = colliders
        .get(&object.collider)
        .ok_or_else(|| SkipReason::MissingCollider(object.collider.clone()))?;

    if !collider.supports(object) {
        return Err(SkipReason::UnsupportedShape {
            collider: object.collider.clone(),
            shape: object.shape.kind(),
        });
    }

    Ok(collider)
}

fn resolver_for<'r>(
    resolvers: &'r ResolverRegistry,
    object: &CollisionObject,
) -> Result<&'r dyn Resolver, SkipReason> {
    resolvers
        .get(&object.resolver)
        .ok_or_else(|| SkipReason::MissingResolver(object.resolver.clone()))
}

/// SAT between two objects whose colliders are already known
pub fn overlap_between(
    a: &CollisionObject,
    collider_a: &dyn Collider,
    b: &CollisionObject,
    collider_b: &dyn Collider,
) -> Option<Overlap> {
    // Concatenated on purpose: duplicate or antiparallel axes are harmless
    let mut axes = collider_a.normals(a, Counterpart::new(b, collider_b));
    axes.extend(collider_b.normals(b, Counterpart::new(a, collider_a)));

    find_mtv(
        axes,
        |axis| collider_a.project(a, axis),
        |axis| collider_b.project(b, axis),
    )
}

/// Detect without resolving
///
/// Checks the enabled flags and both colliders. Resolvers are not needed
/// for detection and are not looked up.
pub fn detect(
    colliders: &ColliderRegistry,
    a: &CollisionObject,
    b: &CollisionObject,
) -> Result<Option<Overlap>, SkipReason> {
    if !a.collision_enabled || !b.collision_enabled {
        return Err(SkipReason::Disabled);
    }

    let collider_a = collider_for(colliders, a)?;
    let collider_b = collider_for(colliders, b)?;

    Ok(overlap_between(a, collider_a, b, collider_b))
}

/// Solve one pair: detect, then hand the MTV to both resolvers
///
/// The first object's resolver runs first and receives the signed amount
/// `depth * direction`; the second then receives the negated amount and the
/// same normal, and sees the first object's updated state.
pub fn solve(
    colliders: &ColliderRegistry,
    resolvers: &ResolverRegistry,
    a: &mut CollisionObject,
    b: &mut CollisionObject,
) -> PairOutcome {
    match try_solve(colliders, resolvers, a, b) {
        Ok(Some(overlap)) => PairOutcome::Resolved(overlap),
        Ok(None) => PairOutcome::Separated,
        Err(reason) => {
            if reason.is_configuration_error() {
                warn!("Skipping collision pair: {}", reason);
            }
            PairOutcome::Skipped(reason)
        }
    }
}

fn try_solve(
    colliders: &ColliderRegistry,
    resolvers: &ResolverRegistry,
    a: &mut CollisionObject,
    b: &mut CollisionObject,
) -> Result<Option<Overlap>, SkipReason> {
    if !a.collision_enabled || !b.collision_enabled {
        return Err(SkipReason::Disabled);
    }

    let collider_a = collider_for(colliders, a)?;
    let collider_b = collider_for(colliders, b)?;
    let resolver_a = resolver_for(resolvers, a)?;
    let resolver_b = resolver_for(resolvers, b)?;

    let Some(overlap) = overlap_between(a, collider_a, b, collider_b) else {
        return Ok(None);
    };

    resolver_a.resolve_collision(a, b, overlap.first_amount(), overlap.normal);
    resolver_b.resolve_collision(b, a, overlap.second_amount(), overlap.normal);

    Ok(Some(overlap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Shape;
    use crate::plugins::{BouncyResolver, CircleCollider, RectangleCollider, StaticResolver};
    use crate::vector::Vector2;

    fn registries() -> (ColliderRegistry, ResolverRegistry) {
        let mut colliders = ColliderRegistry::new();
        colliders.register("circle", Box::new(CircleCollider)).unwrap();
        colliders.register("rectangle", Box::new(RectangleCollider)).unwrap();
        let mut resolvers = ResolverRegistry::new();
        resolvers.register("static", Box::new(StaticResolver)).unwrap();
        resolvers.register("bouncy", Box::new(BouncyResolver::new())).unwrap();
        (colliders, resolvers)
    }

    #[test]
    fn test_disabled_pair_is_skipped() {
        let (colliders, resolvers) = registries();
        let mut a = CollisionObject::circle(Vector2::ZERO, 10.0);
        let mut b = CollisionObject::circle(Vector2::new(5.0, 0.0), 10.0);
        b.collision_enabled = false;

        let outcome = solve(&colliders, &resolvers, &mut a, &mut b);
        assert_eq!(outcome, PairOutcome::Skipped(SkipReason::Disabled));
    }

    #[test]
    fn test_missing_collider_is_skipped() {
        let (colliders, resolvers) = registries();
        let mut a = CollisionObject::circle(Vector2::ZERO, 10.0).with_collider("hexagon");
        let mut b = CollisionObject::circle(Vector2::new(5.0, 0.0), 10.0);

        let outcome = solve(&colliders, &resolvers, &mut a, &mut b);
        assert_eq!(
            outcome,
            PairOutcome::Skipped(SkipReason::MissingCollider("hexagon".to_string()))
        );
    }

    #[test]
    fn test_missing_resolver_is_skipped_without_mutation() {
        let (colliders, resolvers) = registries();
        let mut a = CollisionObject::circle(Vector2::ZERO, 10.0).with_resolver("bouncy");
        let mut b = CollisionObject::circle(Vector2::new(5.0, 0.0), 10.0).with_resolver("glue");
        let before = a.clone();

        let outcome = solve(&colliders, &resolvers, &mut a, &mut b);
        assert_eq!(
            outcome,
            PairOutcome::Skipped(SkipReason::MissingResolver("glue".to_string()))
        );
        assert_eq!(a, before);
    }

    #[test]
    fn test_shape_mismatch_is_skipped() {
        let (colliders, resolvers) = registries();
        let mut a = CollisionObject::new("circle", "static", Vector2::ZERO, Shape::Rectangle {
            width: 1.0,
            height: 1.0,
        });
        let mut b = CollisionObject::circle(Vector2::ZERO, 1.0);

        let outcome = solve(&colliders, &resolvers, &mut a, &mut b);
        match outcome {
            PairOutcome::Skipped(reason) => {
                assert!(reason.is_configuration_error());
                assert_eq!(reason.to_string(), "collider 'circle' does not support rectangle shapes");
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_detect_needs_no_resolvers() {
        let (colliders, _) = registries();
        let a = CollisionObject::circle(Vector2::ZERO, 10.0).with_resolver("unknown");
        let b = CollisionObject::circle(Vector2::new(15.0, 0.0), 10.0).with_resolver("unknown");

        let overlap = detect(&colliders, &a, &b).unwrap().unwrap();
        assert!((overlap.depth - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::Disabled.to_string(), "collision disabled");
        assert!(!SkipReason::Disabled.is_configuration_error());
        assert_eq!(
            SkipReason::MissingResolver("glue".into()).to_string(),
            "resolver 'glue' is not registered"
        );
    }
}
