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
//! Collidable objects
//!
//! A [`CollisionObject`] carries the header fields shared by every body
//! (registry keys, enabled flag, kinematic state) plus a closed [`Shape`]
//! variant with the geometry. The host application owns the objects; the
//! engine only borrows them for the duration of a solve call.

use crate::vector::Vector2;
use std::fmt;

/// Registry key of the built-in circle collider
pub const CIRCLE_COLLIDER: &str = "circle";
/// Registry key of the built-in oriented rectangle collider
pub const RECTANGLE_COLLIDER: &str = "rectangle";
/// Registry key of the built-in no-op resolver
pub const STATIC_RESOLVER: &str = "static";
/// Registry key of the built-in bounce/friction resolver
pub const BOUNCY_RESOLVER: &str = "bouncy";

/// Shape-specific geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Circle centred on the object position
    Circle {
        /// Radius in world units
        radius: f64,
    },
    /// Rectangle whose unrotated min corner is the object position
    ///
    /// Rotation happens about the centre `position + (width, height) / 2`.
    Rectangle {
        /// Extent along the local x axis
        width: f64,
        /// Extent along the local y axis
        height: f64,
    },
}

impl Shape {
    /// Short name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Rectangle { .. } => "rectangle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle { radius } => write!(f, "circle(r={})", radius),
            Shape::Rectangle { width, height } => write!(f, "rectangle({}x{})", width, height),
        }
    }
}

/// A body taking part in collision detection
///
/// The `collider` and `resolver` names select the geometry provider and
/// the response policy from the registries of a
/// [`CollisionWorld`](crate::world::CollisionWorld).
///
/// # Examples
///
/// ```
/// use sat_physics::{CollisionObject, Vector2};
///
/// let ball = CollisionObject::circle(Vector2::new(700.0, 500.0), 10.0)
///     .with_resolver("bouncy")
///     .with_velocity(Vector2::new(0.0, -200.0));
/// assert_eq!(ball.collider, "circle");
/// assert!(ball.collision_enabled);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionObject {
    /// Key into the collider registry
    pub collider: String,
    /// Key into the resolver registry
    pub resolver: String,
    /// Objects with this flag cleared are ignored by the solver
    pub collision_enabled: bool,
    /// Fixed objects are skipped by integrators
    pub fixed: bool,
    /// Circle centre or rectangle min corner
    pub position: Vector2,
    /// Linear velocity in world units per second
    pub velocity: Vector2,
    /// Rotation in degrees, counter-clockwise
    pub angle: f64,
    /// Geometry
    pub shape: Shape,
}

impl CollisionObject {
    /// Create an object with explicit registry keys
    ///
    /// Collision is enabled, velocity and angle are zero.
    pub fn new(
        collider: impl Into<String>,
        resolver: impl Into<String>,
        position: Vector2,
        shape: Shape,
    ) -> Self {
        CollisionObject {
            collider: collider.into(),
            resolver: resolver.into(),
            collision_enabled: true,
            fixed: false,
            position,
            velocity: Vector2::ZERO,
            angle: 0.0,
            shape,
        }
    }

    /// Circle using the built-in `"circle"` collider and `"static"` resolver
    ///
    /// # Panics
    ///
    /// Panics if `radius` is negative or not finite.
    pub fn circle(center: Vector2, radius: f64) -> Self {
        assert!(
            radius >= 0.0 && radius.is_finite(),
            "Radius must be non-negative and finite"
        );
        CollisionObject::new(CIRCLE_COLLIDER, STATIC_RESOLVER, center, Shape::Circle { radius })
    }

    /// Rectangle using the built-in `"rectangle"` collider and `"static"` resolver
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is negative or not finite.
    pub fn rectangle(min_corner: Vector2, width: f64, height: f64) -> Self {
        assert!(
            width >= 0.0 && width.is_finite() && height >= 0.0 && height.is_finite(),
            "Rectangle extents must be non-negative and finite"
        );
        CollisionObject::new(
            RECTANGLE_COLLIDER,
            STATIC_RESOLVER,
            min_corner,
            Shape::Rectangle { width, height },
        )
    }

    /// Replace the collider key
    pub fn with_collider(mut self, name: impl Into<String>) -> Self {
        self.collider = name.into();
        self
    }

    /// Replace the resolver key
    pub fn with_resolver(mut self, name: impl Into<String>) -> Self {
        self.resolver = name.into();
        self
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the rotation in degrees
    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.angle = degrees;
        self
    }

    /// Mark the object as fixed in place
    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    /// Rotate counter-clockwise by `degrees`
    pub fn rotate(&mut self, degrees: f64) {
        self.angle += degrees;
    }

    /// Geometric centre of the shape
    pub fn center(&self) -> Vector2 {
        match self.shape {
            Shape::Circle { .. } => self.position,
            Shape::Rectangle { width, height } => {
                self.position + Vector2::new(width / 2.0, height / 2.0)
            }
        }
    }

    /// Cosine and sine of the rotation angle
    pub fn rotation(&self) -> (f64, f64) {
        let radians = self.angle.to_radians();
        (radians.cos(), radians.sin())
    }

    /// Check that position, velocity and angle are finite
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.velocity.is_valid() && self.angle.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_defaults() {
        let circle = CollisionObject::circle(Vector2::new(1.0, 2.0), 3.0);
        assert_eq!(circle.collider, CIRCLE_COLLIDER);
        assert_eq!(circle.resolver, STATIC_RESOLVER);
        assert!(circle.collision_enabled);
        assert!(!circle.fixed);
        assert_eq!(circle.center(), Vector2::new(1.0, 2.0));
        assert_eq!(circle.shape.kind(), "circle");
    }

    #[test]
    fn test_rectangle_center_from_min_corner() {
        let rect = CollisionObject::rectangle(Vector2::new(600.0, 300.0), 300.0, 100.0);
        assert_eq!(rect.center(), Vector2::new(750.0, 350.0));
        assert_eq!(rect.shape.to_string(), "rectangle(300x100)");
    }

    #[test]
    fn test_builders() {
        let obj = CollisionObject::circle(Vector2::ZERO, 1.0)
            .with_resolver(BOUNCY_RESOLVER)
            .with_velocity(Vector2::new(5.0, 0.0))
            .with_angle(30.0)
            .fixed();
        assert_eq!(obj.resolver, BOUNCY_RESOLVER);
        assert_eq!(obj.velocity, Vector2::new(5.0, 0.0));
        assert_eq!(obj.angle, 30.0);
        assert!(obj.fixed);
    }

    #[test]
    fn test_rotate_accumulates_degrees() {
        let mut rect = CollisionObject::rectangle(Vector2::ZERO, 10.0, 10.0);
        rect.rotate(15.0);
        rect.rotate(15.0);
        assert_eq!(rect.angle, 30.0);
        let (cos, sin) = rect.rotation();
        assert!((cos - 30f64.to_radians().cos()).abs() < 1e-12);
        assert!((sin - 0.5).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "Radius must be non-negative and finite")]
    fn test_negative_radius_panics() {
        CollisionObject::circle(Vector2::ZERO, -1.0);
    }

    #[test]
    fn test_is_valid() {
        let mut obj = CollisionObject::circle(Vector2::ZERO, 1.0);
        assert!(obj.is_valid());
        obj.velocity = Vector2::new(f64::NAN, 0.0);
        assert!(!obj.is_valid());
    }
}
