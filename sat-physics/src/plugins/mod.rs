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
//! Plugin system for shapes and collision responses
//!
//! Shapes ("colliders") and responses ("resolvers") are registered
//! independently under string names and combined per object at runtime.
//! New shape types or response behaviours plug in without touching the
//! pairwise solver.
//!
//! # Plugin Types
//!
//! ## Colliders
//!
//! Provide the geometry SAT needs for one shape type:
//!
//! ```rust,ignore
//! impl Collider for TriangleCollider {
//!     fn normals(&self, object: &CollisionObject, other: Counterpart<'_>) -> Vec<Vector2> {
//!         // One unit normal per edge
//!     }
//!     fn closest_point(&self, object: &CollisionObject, point: Vector2) -> Vector2 { .. }
//!     fn project(&self, object: &CollisionObject, axis: Vector2) -> Projection { .. }
//! }
//! ```
//!
//! ## Resolvers
//!
//! Decide what a collision does to one object:
//!
//! ```rust,ignore
//! impl Resolver for KillOnTouch {
//!     fn resolve_collision(&self, object: &mut CollisionObject, _other: &CollisionObject,
//!                          _amount: f64, _normal: Vector2) {
//!         object.collision_enabled = false;
//!     }
//! }
//! ```
//!
//! # Built-in Definitions
//!
//! | Name | Type | Behaviour |
//! |---|---|---|
//! | `circle` | [`CircleCollider`] | single axis toward the other shape |
//! | `rectangle` | [`RectangleCollider`] | two rotated edge normals |
//! | `static` | [`StaticResolver`] | no-op |
//! | `bouncy` | [`BouncyResolver`] | push-out, bounce, friction, rest snap |
//!
//! # Version Compatibility
//!
//! Definitions report the API version they were built against through
//! [`Definition::api_version`]; registries reject incompatible versions.

pub mod api;
pub mod circle;
pub mod rectangle;
pub mod registry;
pub mod response;

pub use api::{Collider, Counterpart, Definition, FnResolver, Resolver, COLLISION_API_VERSION};
pub use circle::CircleCollider;
pub use rectangle::RectangleCollider;
pub use registry::{ColliderRegistry, Registry, ResolverRegistry};
pub use response::{
    BouncyResolver, StaticResolver, DEFAULT_DAMPING, DEFAULT_FRICTION, DEFAULT_REST_THRESHOLD,
};
