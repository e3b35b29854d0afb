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
//! Plugin API traits for colliders and resolvers
//!
//! This module defines the two extension points of the engine:
//!
//! - [`Collider`]: geometry provider for one shape type (candidate axes,
//!   closest point, axis projection)
//! - [`Resolver`]: response policy applied to one object once the solver
//!   has found the minimum translation vector
//!
//! # Contracts
//!
//! Colliders must:
//! - Keep all three geometric operations consistent with the same shape
//! - Return only unit-length, finite axes (zero-length axes are omitted)
//! - Be pure: no interior mutation of the collider or the objects
//!
//! Resolvers receive a signed overlap amount and a unit normal. A positive
//! amount means "push this object along +normal".

use crate::debug::DebugCanvas;
use crate::object::CollisionObject;
use crate::vector::{Projection, Vector2};
use std::any::Any;

/// Version of the collider/resolver API
///
/// Format: MAJOR.MINOR.PATCH following semantic versioning.
pub const COLLISION_API_VERSION: &str = "0.1.0";

/// Common surface of every registered definition
pub trait Definition: Send + Sync {
    /// Get the plugin API version this definition was built against
    ///
    /// Used for compatibility checking at registration time.
    fn api_version(&self) -> &str {
        COLLISION_API_VERSION
    }

    /// Allow downcasting to the concrete definition type
    fn as_any(&self) -> &dyn Any;
}

/// The other participant of a pair, seen from one collider
///
/// Gives a collider access to the other object's geometry without knowing
/// its concrete shape type.
#[derive(Clone, Copy)]
pub struct Counterpart<'a> {
    object: &'a CollisionObject,
    collider: &'a dyn Collider,
}

impl<'a> Counterpart<'a> {
    /// Pair an object with the collider that describes it
    pub fn new(object: &'a CollisionObject, collider: &'a dyn Collider) -> Self {
        Counterpart { object, collider }
    }

    /// The other object
    pub fn object(&self) -> &'a CollisionObject {
        self.object
    }

    /// Closest point on the other object's shape to `point`
    pub fn closest_point(&self, point: Vector2) -> Vector2 {
        self.collider.closest_point(self.object, point)
    }

    /// Projection of the other object onto `axis`
    pub fn project(&self, axis: Vector2) -> Projection {
        self.collider.project(self.object, axis)
    }
}

/// Geometry provider for one shape type
///
/// # Example
///
/// ```rust
/// use sat_physics::plugins::{Collider, Counterpart, Definition};
/// use sat_physics::{CollisionObject, Projection, Vector2};
/// use std::any::Any;
///
/// /// Treats every object as a single point
/// struct PointCollider;
///
/// impl Definition for PointCollider {
///     fn as_any(&self) -> &dyn Any { self }
/// }
///
/// impl Collider for PointCollider {
///     fn normals(&self, object: &CollisionObject, other: Counterpart<'_>) -> Vec<Vector2> {
///         let toward = other.closest_point(object.position) - object.position;
///         toward.try_normalize().into_iter().collect()
///     }
///
///     fn closest_point(&self, object: &CollisionObject, _point: Vector2) -> Vector2 {
///         object.position
///     }
///
///     fn project(&self, object: &CollisionObject, axis: Vector2) -> Projection {
///         let p = object.position.dot(axis);
///         Projection::new(p, p)
///     }
/// }
/// ```
pub trait Collider: Definition {
    /// Whether this collider understands the object's shape
    ///
    /// The solver skips a pair whose object is handed to a collider that
    /// does not support it.
    fn supports(&self, _object: &CollisionObject) -> bool {
        true
    }

    /// Candidate separating axes contributed by this shape
    ///
    /// Axes must be unit length. Degenerate directions are left out rather
    /// than returned as zero vectors.
    fn normals(&self, object: &CollisionObject, other: Counterpart<'_>) -> Vec<Vector2>;

    /// Closest point on the shape to an external point
    fn closest_point(&self, object: &CollisionObject, point: Vector2) -> Vector2;

    /// Scalar projection interval of the shape onto a unit axis
    fn project(&self, object: &CollisionObject, axis: Vector2) -> Projection;

    /// Describe the shape to a debug renderer
    ///
    /// Only called by debug-draw collaborators, never during a solve.
    fn draw(&self, _object: &CollisionObject, _canvas: &mut dyn DebugCanvas) {}
}

/// Response policy applied after a collision has been resolved
pub trait Resolver: Definition {
    /// Mutate `object` given the signed overlap along `overlap_normal`
    ///
    /// # Arguments
    ///
    /// * `object` - The object this resolver acts on
    /// * `other` - The other participant, read-only
    /// * `overlap_amount` - Signed push distance; positive pushes along +normal
    /// * `overlap_normal` - Unit collision axis shared by both participants
    fn resolve_collision(
        &self,
        object: &mut CollisionObject,
        other: &CollisionObject,
        overlap_amount: f64,
        overlap_normal: Vector2,
    );
}

/// Resolver backed by a closure
///
/// Lets hosts register ad-hoc responses without declaring a type.
///
/// ```rust
/// use sat_physics::plugins::FnResolver;
/// use sat_physics::CollisionWorld;
///
/// let mut world = CollisionWorld::with_builtins();
/// world
///     .register_resolver("sticky", Box::new(FnResolver::new(|object, _other, _amount, _normal| {
///         object.velocity = sat_physics::Vector2::ZERO;
///     })))
///     .unwrap();
/// ```
pub struct FnResolver<F> {
    resolve: F,
}

impl<F> FnResolver<F>
where
    F: Fn(&mut CollisionObject, &CollisionObject, f64, Vector2) + Send + Sync + 'static,
{
    /// Wrap a closure as a resolver
    pub fn new(resolve: F) -> Self {
        FnResolver { resolve }
    }
}

impl<F> Definition for FnResolver<F>
where
    F: Fn(&mut CollisionObject, &CollisionObject, f64, Vector2) + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<F> Resolver for FnResolver<F>
where
    F: Fn(&mut CollisionObject, &CollisionObject, f64, Vector2) + Send + Sync + 'static,
{
    fn resolve_collision(
        &self,
        object: &mut CollisionObject,
        other: &CollisionObject,
        overlap_amount: f64,
        overlap_normal: Vector2,
    ) {
        (self.resolve)(object, other, overlap_amount, overlap_normal)
    }
}
