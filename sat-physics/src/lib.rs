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
//! # SAT Physics
//!
//! A small 2D collision engine based on the Separating Axis Theorem, with
//! pluggable shapes and collision responses.
//!
//! ## Features
//!
//! - **SAT narrow phase**: minimum translation vector over the candidate
//!   axes contributed by both shapes
//! - **Plugins**: colliders (shape geometry) and resolvers (responses) are
//!   registered by name and combined per object
//! - **Built-ins**: circle and rotated rectangle colliders, static and
//!   bouncy resolvers
//! - **Broad phase**: brute-force all-pairs stepping, with an optional
//!   Rayon-parallel contact query
//!
//! ## Example
//!
//! ```rust
//! use sat_physics::{CollisionObject, CollisionWorld, Vector2};
//!
//! let world = CollisionWorld::with_builtins();
//!
//! let mut ball = CollisionObject::circle(Vector2::new(600.0, 45.0), 10.0)
//!     .with_resolver("bouncy");
//! let mut floor = CollisionObject::rectangle(Vector2::ZERO, 2000.0, 50.0);
//!
//! let outcome = world.solve_pair(&mut ball, &mut floor);
//! assert!(outcome.is_collision());
//! assert!((ball.position.y - 60.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]

/// 2D vector math and projection intervals
pub mod vector;

/// Collision objects and shapes
pub mod object;

/// Collider and resolver plugins
pub mod plugins;

/// SAT, pair solving and broad phase
pub mod solver;

/// Registries plus solver entry points
pub mod world;

/// Motion integration between collision steps
pub mod integration;

/// Debug drawing hook
pub mod debug;

pub use object::{
    CollisionObject, Shape, BOUNCY_RESOLVER, CIRCLE_COLLIDER, RECTANGLE_COLLIDER, STATIC_RESOLVER,
};
pub use vector::{Projection, Vector2};
pub use world::CollisionWorld;
