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
//! Built-in collision response policies
//!
//! # Static
//!
//! Immovable bodies (walls, platforms) ignore every resolution request. The
//! other participant of the pair is still corrected by its own resolver.
//!
//! # Bouncy
//!
//! Impulse-style bounce for a body colliding with an immovable surface:
//!
//! 1. Positional correction: `p += n * overlap`
//! 2. Restitution: `v -= n * (1 + e) * (v . n)`, which removes the incoming
//!    normal velocity and replaces it with `e` times its reflection
//! 3. Tangential friction: `v -= t * f * (v . t)` with `t = perp(n)`
//! 4. Rest snap: each velocity component whose magnitude is strictly below
//!    its threshold is zeroed
//!
//! The vertical rest threshold is larger than the horizontal one so that a
//! body resting on a floor under gravity settles instead of micro-bouncing.

use crate::object::CollisionObject;
use crate::plugins::api::{Definition, Resolver};
use crate::vector::Vector2;
use std::any::Any;

/// Default restitution coefficient `e`
pub const DEFAULT_DAMPING: f64 = 0.7;

/// Default fraction of tangential velocity removed per collision
pub const DEFAULT_FRICTION: f64 = 0.2;

/// Default per-axis speed below which a velocity component snaps to zero
pub const DEFAULT_REST_THRESHOLD: Vector2 = Vector2::new(10.0, 40.0);

/// Resolver that never mutates its object
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticResolver;

impl Definition for StaticResolver {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Resolver for StaticResolver {
    fn resolve_collision(
        &self,
        _object: &mut CollisionObject,
        _other: &CollisionObject,
        _overlap_amount: f64,
        _overlap_normal: Vector2,
    ) {
    }
}

/// Position correction plus bounce, friction and rest snapping
///
/// # Example
///
/// ```rust
/// use sat_physics::plugins::BouncyResolver;
/// use sat_physics::Vector2;
///
/// let mut bouncy = BouncyResolver::new();
/// bouncy.set_damping(0.5);
/// bouncy.set_rest_threshold(Vector2::new(1.0, 1.0));
/// assert_eq!(bouncy.damping(), 0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BouncyResolver {
    damping: f64,
    friction: f64,
    rest_threshold: Vector2,
}

impl BouncyResolver {
    /// Create a resolver with the default coefficients
    pub fn new() -> Self {
        BouncyResolver {
            damping: DEFAULT_DAMPING,
            friction: DEFAULT_FRICTION,
            rest_threshold: DEFAULT_REST_THRESHOLD,
        }
    }

    /// Set the restitution coefficient
    ///
    /// # Panics
    ///
    /// Panics if `damping` is outside `[0, 1]`.
    pub fn set_damping(&mut self, damping: f64) {
        assert!(
            (0.0..=1.0).contains(&damping),
            "Damping must be within [0, 1]"
        );
        self.damping = damping;
    }

    /// Get the restitution coefficient
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Set the fraction of tangential velocity removed per collision
    ///
    /// # Panics
    ///
    /// Panics if `friction` is outside `[0, 1]`.
    pub fn set_friction(&mut self, friction: f64) {
        assert!(
            (0.0..=1.0).contains(&friction),
            "Friction must be within [0, 1]"
        );
        self.friction = friction;
    }

    /// Get the friction fraction
    pub fn friction(&self) -> f64 {
        self.friction
    }

    /// Set the per-axis rest snap thresholds
    ///
    /// # Panics
    ///
    /// Panics if either component is negative or not finite.
    pub fn set_rest_threshold(&mut self, threshold: Vector2) {
        assert!(
            threshold.is_valid() && threshold.x >= 0.0 && threshold.y >= 0.0,
            "Rest threshold must be non-negative and finite"
        );
        self.rest_threshold = threshold;
    }

    /// Get the per-axis rest snap thresholds
    pub fn rest_threshold(&self) -> Vector2 {
        self.rest_threshold
    }

    /// Velocity after bounce and friction, before rest snapping
    fn respond(&self, velocity: Vector2, normal: Vector2) -> Vector2 {
        let v_dot_n = velocity.dot(normal);
        let bounced = velocity - normal * ((1.0 + self.damping) * v_dot_n);

        let tangent = normal.perp();
        let v_dot_t = bounced.dot(tangent);
        bounced - tangent * (v_dot_t * self.friction)
    }
}

impl Default for BouncyResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero each component whose magnitude is strictly below its threshold
pub(crate) fn snap_to_rest(velocity: Vector2, threshold: Vector2) -> Vector2 {
    let snap = |v: f64, limit: f64| if v.abs() < limit { 0.0 } else { v };
    Vector2::new(snap(velocity.x, threshold.x), snap(velocity.y, threshold.y))
}

impl Definition for BouncyResolver {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Resolver for BouncyResolver {
    fn resolve_collision(
        &self,
        object: &mut CollisionObject,
        _other: &CollisionObject,
        overlap_amount: f64,
        overlap_normal: Vector2,
    ) {
        let Some(normal) = overlap_normal.try_normalize() else {
            return;
        };

        object.position = object.position + normal * overlap_amount;
        let velocity = self.respond(object.velocity, normal);
        object.velocity = snap_to_rest(velocity, self.rest_threshold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn ball(velocity: Vector2) -> CollisionObject {
        CollisionObject::circle(Vector2::new(100.0, 100.0), 10.0).with_velocity(velocity)
    }

    fn floor() -> CollisionObject {
        CollisionObject::rectangle(Vector2::ZERO, 1000.0, 50.0)
    }

    #[test]
    fn test_static_resolver_is_noop() {
        let mut object = ball(Vector2::new(3.0, -7.0));
        let before = object.clone();
        for &(amount, normal) in &[
            (5.0, Vector2::Y),
            (-12.5, Vector2::X),
            (0.0, Vector2::new(0.6, 0.8)),
            (1e9, Vector2::ZERO),
        ] {
            StaticResolver.resolve_collision(&mut object, &floor(), amount, normal);
            assert_eq!(object, before);
        }
    }

    #[test]
    fn test_position_correction_along_normal() {
        let mut object = ball(Vector2::ZERO);
        BouncyResolver::new().resolve_collision(&mut object, &floor(), 16.0, Vector2::Y);
        assert_eq!(object.position, Vector2::new(100.0, 116.0));

        BouncyResolver::new().resolve_collision(&mut object, &floor(), -6.0, Vector2::X);
        assert_eq!(object.position, Vector2::new(94.0, 116.0));
    }

    #[test]
    fn test_restitution_reflects_normal_velocity() {
        let mut object = ball(Vector2::new(0.0, -300.0));
        BouncyResolver::new().resolve_collision(&mut object, &floor(), 1.0, Vector2::Y);

        // -300 - 1.7 * -300 = 210
        assert!((object.velocity.y - 210.0).abs() < EPSILON);
        assert_eq!(object.velocity.x, 0.0);
    }

    #[test]
    fn test_friction_reduces_tangential_velocity() {
        let mut object = ball(Vector2::new(100.0, -300.0));
        BouncyResolver::new().resolve_collision(&mut object, &floor(), 1.0, Vector2::Y);

        assert!((object.velocity.x - 80.0).abs() < EPSILON);
        assert!((object.velocity.y - 210.0).abs() < EPSILON);
    }

    #[test]
    fn test_unnormalized_normal_is_normalized() {
        let mut object = ball(Vector2::new(0.0, -300.0));
        BouncyResolver::new().resolve_collision(&mut object, &floor(), 2.0, Vector2::new(0.0, 10.0));
        assert_eq!(object.position, Vector2::new(100.0, 102.0));
        assert!((object.velocity.y - 210.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_normal_is_ignored() {
        let mut object = ball(Vector2::new(5.0, 5.0));
        let before = object.clone();
        BouncyResolver::new().resolve_collision(&mut object, &floor(), 3.0, Vector2::ZERO);
        assert_eq!(object, before);
    }

    #[test]
    fn test_rest_snap_boundary_is_strict() {
        let threshold = DEFAULT_REST_THRESHOLD;
        assert_eq!(snap_to_rest(Vector2::new(10.0, 40.0), threshold), Vector2::new(10.0, 40.0));
        assert_eq!(snap_to_rest(Vector2::new(-10.0, -40.0), threshold), Vector2::new(-10.0, -40.0));
        assert_eq!(snap_to_rest(Vector2::new(9.0, 39.0), threshold), Vector2::ZERO);
        assert_eq!(snap_to_rest(Vector2::new(-9.0, 41.0), threshold), Vector2::new(0.0, 41.0));
    }

    #[test]
    fn test_slow_bounce_comes_to_rest() {
        // Normal component after bounce: 0.7 * 20 = 14 < 40
        let mut object = ball(Vector2::new(5.0, -20.0));
        BouncyResolver::new().resolve_collision(&mut object, &floor(), 1.0, Vector2::Y);
        assert_eq!(object.velocity, Vector2::ZERO);
    }

    #[test]
    fn test_custom_coefficients() {
        let mut resolver = BouncyResolver::new();
        resolver.set_damping(1.0);
        resolver.set_friction(0.0);
        resolver.set_rest_threshold(Vector2::ZERO);

        let mut object = ball(Vector2::new(3.0, -4.0));
        resolver.resolve_collision(&mut object, &floor(), 0.5, Vector2::Y);
        assert!((object.velocity.x - 3.0).abs() < EPSILON);
        assert!((object.velocity.y - 4.0).abs() < EPSILON);
    }

    #[test]
    #[should_panic(expected = "Damping must be within [0, 1]")]
    fn test_invalid_damping_panics() {
        BouncyResolver::new().set_damping(1.5);
    }

    #[test]
    #[should_panic(expected = "Friction must be within [0, 1]")]
    fn test_invalid_friction_panics() {
        BouncyResolver::new().set_friction(-0.1);
    }

    #[test]
    #[should_panic(expected = "Rest threshold must be non-negative and finite")]
    fn test_invalid_rest_threshold_panics() {
        BouncyResolver::new().set_rest_threshold(Vector2::new(f64::INFINITY, 0.0));
    }
}
