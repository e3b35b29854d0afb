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
//! Collision world
//!
//! Owns the collider and resolver registries and exposes the solver entry
//! points. Objects are not owned: the host keeps them in its own storage
//! and passes them in by reference, so the world can be shared across
//! scenes and threads once setup is done.
//!
//! Registration must complete before solving. Registering while a step is
//! running is impossible by construction (`&mut self` versus `&self`).

use crate::debug::DebugCanvas;
use crate::object::{
    CollisionObject, BOUNCY_RESOLVER, CIRCLE_COLLIDER, RECTANGLE_COLLIDER, STATIC_RESOLVER,
};
use crate::plugins::api::{Collider, Resolver};
use crate::plugins::registry::{ColliderRegistry, ResolverRegistry};
use crate::plugins::{BouncyResolver, CircleCollider, RectangleCollider, StaticResolver};
use crate::solver::broadphase::{self, StepStats};
use crate::solver::pair::{self, Contact, PairOutcome, SkipReason};
use crate::solver::sat::Overlap;
use log::{error, info};

/// Registries plus the collision entry points
pub struct CollisionWorld {
    colliders: ColliderRegistry,
    resolvers: ResolverRegistry,
}

impl CollisionWorld {
    /// Create a world with empty registries
    pub fn new() -> Self {
        CollisionWorld {
            colliders: ColliderRegistry::new(),
            resolvers: ResolverRegistry::new(),
        }
    }

    /// Create a world with the built-in definitions registered
    ///
    /// | Name | Definition |
    /// |---|---|
    /// | `circle` | [`CircleCollider`] |
    /// | `rectangle` | [`RectangleCollider`] |
    /// | `static` | [`StaticResolver`] |
    /// | `bouncy` | [`BouncyResolver`] with default coefficients |
    pub fn with_builtins() -> Self {
        let mut world = Self::new();
        world.register_builtins();
        world
    }

    /// Register (or re-register) the built-in definitions
    pub fn register_builtins(&mut self) {
        let colliders: [(&str, Box<dyn Collider>); 2] = [
            (CIRCLE_COLLIDER, Box::new(CircleCollider)),
            (RECTANGLE_COLLIDER, Box::new(RectangleCollider)),
        ];
        for (name, collider) in colliders {
            if let Err(e) = self.colliders.register(name, collider) {
                error!("Failed to register built-in collider '{}': {}", name, e);
            }
        }

        let resolvers: [(&str, Box<dyn Resolver>); 2] = [
            (STATIC_RESOLVER, Box::new(StaticResolver)),
            (BOUNCY_RESOLVER, Box::new(BouncyResolver::new())),
        ];
        for (name, resolver) in resolvers {
            if let Err(e) = self.resolvers.register(name, resolver) {
                error!("Failed to register built-in resolver '{}': {}", name, e);
            }
        }

        info!(
            "Registered built-in definitions: colliders {:?}, resolvers {:?}",
            self.colliders.names(),
            self.resolvers.names()
        );
    }

    /// Register a collider, replacing any previous one with the same name
    ///
    /// # Errors
    ///
    /// Returns an error if the collider's API version is incompatible
    pub fn register_collider(
        &mut self,
        name: impl Into<String>,
        collider: Box<dyn Collider>,
    ) -> Result<(), String> {
        self.colliders.register(name, collider).map(|_| ())
    }

    /// Remove a collider; objects naming it are skipped from then on
    pub fn unregister_collider(&mut self, name: &str) -> Option<Box<dyn Collider>> {
        self.colliders.unregister(name)
    }

    /// Register a resolver, replacing any previous one with the same name
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver's API version is incompatible
    pub fn register_resolver(
        &mut self,
        name: impl Into<String>,
        resolver: Box<dyn Resolver>,
    ) -> Result<(), String> {
        self.resolvers.register(name, resolver).map(|_| ())
    }

    /// Remove a resolver; objects naming it are skipped from then on
    pub fn unregister_resolver(&mut self, name: &str) -> Option<Box<dyn Resolver>> {
        self.resolvers.unregister(name)
    }

    /// Registered colliders
    pub fn colliders(&self) -> &ColliderRegistry {
        &self.colliders
    }

    /// Registered resolvers
    pub fn resolvers(&self) -> &ResolverRegistry {
        &self.resolvers
    }

    /// Detect a pair without resolving it
    pub fn detect_pair(
        &self,
        a: &CollisionObject,
        b: &CollisionObject,
    ) -> Result<Option<Overlap>, SkipReason> {
        pair::detect(&self.colliders, a, b)
    }

    /// Detect and resolve one pair
    ///
    /// # Example
    ///
    /// ```rust
    /// use sat_physics::{CollisionObject, CollisionWorld, Vector2};
    ///
    /// let world = CollisionWorld::with_builtins();
    /// let mut a = CollisionObject::circle(Vector2::new(700.0, 500.0), 10.0);
    /// let mut b = CollisionObject::circle(Vector2::new(300.0, 400.0), 10.0);
    ///
    /// assert!(!world.solve_pair(&mut a, &mut b).is_collision());
    /// ```
    pub fn solve_pair(&self, a: &mut CollisionObject, b: &mut CollisionObject) -> PairOutcome {
        pair::solve(&self.colliders, &self.resolvers, a, b)
    }

    /// Resolve every unordered pair once, in ascending index order
    pub fn step_all(&self, objects: &mut [CollisionObject]) -> StepStats {
        broadphase::step_all(&self.colliders, &self.resolvers, objects)
    }

    /// Find every overlapping pair without mutating anything
    pub fn find_contacts(&self, objects: &[CollisionObject]) -> Vec<Contact> {
        broadphase::find_contacts(&self.colliders, objects)
    }

    /// Ask each object's collider to draw it
    ///
    /// Objects whose collider is missing or does not support their shape
    /// are left out.
    pub fn draw_all(&self, objects: &[CollisionObject], canvas: &mut dyn DebugCanvas) {
        for object in objects {
            if let Some(collider) = self.colliders.get(&object.collider) {
                if collider.supports(object) {
                    collider.draw(object, canvas);
                }
            }
        }
    }

    /// Draw the MTV of every current contact as a line from the first
    /// object's centre
    pub fn draw_contacts(&self, objects: &[CollisionObject], canvas: &mut dyn DebugCanvas) {
        for contact in self.find_contacts(objects) {
            let from = objects[contact.first].center();
            canvas.line(from, from + contact.overlap.translation());
        }
    }
}

impl Default for CollisionWorld {
    fn default() -> Self {
        Self::new()
    }
}
