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
//! Oriented rectangle collider
//!
//! # Geometry
//!
//! The object position is the rectangle's unrotated min corner and the
//! angle (degrees) rotates the shape about its centre. In the local frame
//! the rectangle spans `[-w/2, w/2] x [-h/2, h/2]`.
//!
//! Opposite edges of a rectangle are parallel, so the two rotated local
//! axes are the only edge normals SAT needs from this shape.

use crate::debug::DebugCanvas;
use crate::object::{CollisionObject, Shape};
use crate::plugins::api::{Collider, Counterpart, Definition};
use crate::vector::{Projection, Vector2};
use std::any::Any;

/// Collider for [`Shape::Rectangle`] objects
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleCollider;

impl RectangleCollider {
    fn half_extents(object: &CollisionObject) -> Vector2 {
        match object.shape {
            Shape::Rectangle { width, height } => Vector2::new(width / 2.0, height / 2.0),
            _ => Vector2::ZERO,
        }
    }

    /// World-space corners in counter-clockwise order
    pub fn corners(object: &CollisionObject) -> [Vector2; 4] {
        let half = Self::half_extents(object);
        let center = object.center();
        let (cos, sin) = object.rotation();

        [
            Vector2::new(-half.x, -half.y),
            Vector2::new(half.x, -half.y),
            Vector2::new(half.x, half.y),
            Vector2::new(-half.x, half.y),
        ]
        .map(|corner| center + corner.rotate(cos, sin))
    }
}

impl Definition for RectangleCollider {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Collider for RectangleCollider {
    fn supports(&self, object: &CollisionObject) -> bool {
        matches!(object.shape, Shape::Rectangle { .. })
    }

    fn normals(&self, object: &CollisionObject, _other: Counterpart<'_>) -> Vec<Vector2> {
        let (cos, sin) = object.rotation();
        vec![Vector2::new(cos, sin), Vector2::new(-sin, cos)]
    }

    /// Clamp `point` to the rectangle in its local frame
    ///
    /// Points inside the rectangle map to themselves.
    fn closest_point(&self, object: &CollisionObject, point: Vector2) -> Vector2 {
        let half = Self::half_extents(object);
        let center = object.center();
        let (cos, sin) = object.rotation();

        // Inverse rotation into the local frame
        let local = (point - center).rotate(cos, -sin);
        let clamped = Vector2::new(
            local.x.clamp(-half.x, half.x),
            local.y.clamp(-half.y, half.y),
        );

        center + clamped.rotate(cos, sin)
    }

    fn project(&self, object: &CollisionObject, axis: Vector2) -> Projection {
        // Four corners, so the point set is never empty
        Projection::of_points(&Self::corners(object), axis).unwrap_or_else(|| {
            let center = object.center().dot(axis);
            Projection::new(center, center)
        })
    }

    fn draw(&self, object: &CollisionObject, canvas: &mut dyn DebugCanvas) {
        canvas.polygon(&Self::corners(object));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::{DrawCommand, RecordingCanvas};
    use crate::plugins::CircleCollider;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: Vector2, expected: Vector2) {
        assert!(
            actual.distance(expected) < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_axis_aligned_corners() {
        let rect = CollisionObject::rectangle(Vector2::new(600.0, 300.0), 300.0, 100.0);
        let corners = RectangleCollider::corners(&rect);
        assert_close(corners[0], Vector2::new(600.0, 300.0));
        assert_close(corners[1], Vector2::new(900.0, 300.0));
        assert_close(corners[2], Vector2::new(900.0, 400.0));
        assert_close(corners[3], Vector2::new(600.0, 400.0));
    }

    #[test]
    fn test_rotated_corners_keep_center() {
        let rect = CollisionObject::rectangle(Vector2::ZERO, 4.0, 2.0).with_angle(90.0);
        let corners = RectangleCollider::corners(&rect);
        // Rotated a quarter turn about (2, 1) the rectangle spans x in [1, 3], y in [-1, 3]
        assert_close(corners[0], Vector2::new(3.0, -1.0));
        assert_close(corners[2], Vector2::new(1.0, 3.0));
    }

    #[test]
    fn test_normals_follow_rotation() {
        let circle = CollisionObject::circle(Vector2::ZERO, 1.0);
        let rect = CollisionObject::rectangle(Vector2::ZERO, 4.0, 2.0).with_angle(45.0);
        let normals = RectangleCollider.normals(&rect, Counterpart::new(&circle, &CircleCollider));

        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_eq!(normals.len(), 2);
        assert_close(normals[0], Vector2::new(h, h));
        assert_close(normals[1], Vector2::new(-h, h));
    }

    #[test]
    fn test_projection_axis_aligned() {
        let rect = CollisionObject::rectangle(Vector2::ZERO, 2000.0, 50.0);
        assert_eq!(RectangleCollider.project(&rect, Vector2::X), Projection::new(0.0, 2000.0));
        assert_eq!(RectangleCollider.project(&rect, Vector2::Y), Projection::new(0.0, 50.0));
    }

    #[test]
    fn test_projection_rotated_square_on_diagonal() {
        let rect = CollisionObject::rectangle(Vector2::new(-1.0, -1.0), 2.0, 2.0).with_angle(45.0);
        let proj = RectangleCollider.project(&rect, Vector2::X);
        let reach = 2f64.sqrt();
        assert!((proj.min + reach).abs() < EPSILON);
        assert!((proj.max - reach).abs() < EPSILON);
    }

    #[test]
    fn test_projection_spans_corners() {
        let rect = CollisionObject::rectangle(Vector2::new(3.0, -2.0), 5.0, 1.5).with_angle(30.0);
        let axis = Vector2::new(0.6, 0.8);
        let corners = RectangleCollider::corners(&rect);
        let proj = RectangleCollider.project(&rect, axis);

        for corner in corners {
            let p = corner.dot(axis);
            assert!(p >= proj.min - EPSILON && p <= proj.max + EPSILON);
        }
        assert!(corners.iter().any(|c| (c.dot(axis) - proj.min).abs() < EPSILON));
        assert!(corners.iter().any(|c| (c.dot(axis) - proj.max).abs() < EPSILON));
    }

    #[test]
    fn test_closest_point_outside_clamps_to_edge() {
        let rect = CollisionObject::rectangle(Vector2::ZERO, 2000.0, 50.0);
        let closest = RectangleCollider.closest_point(&rect, Vector2::new(600.0, 80.0));
        assert_close(closest, Vector2::new(600.0, 50.0));
    }

    #[test]
    fn test_closest_point_inside_is_identity() {
        let rect = CollisionObject::rectangle(Vector2::ZERO, 2000.0, 50.0);
        let closest = RectangleCollider.closest_point(&rect, Vector2::new(600.0, 24.0));
        assert_close(closest, Vector2::new(600.0, 24.0));
    }

    #[test]
    fn test_closest_point_rotated_corner() {
        let rect = CollisionObject::rectangle(Vector2::new(-1.0, -1.0), 2.0, 2.0).with_angle(45.0);
        let closest = RectangleCollider.closest_point(&rect, Vector2::new(10.0, 0.0));
        assert_close(closest, Vector2::new(2f64.sqrt(), 0.0));
    }

    #[test]
    fn test_draw_emits_polygon() {
        let rect = CollisionObject::rectangle(Vector2::ZERO, 1.0, 1.0);
        let mut canvas = RecordingCanvas::new();
        RectangleCollider.draw(&rect, &mut canvas);
        match &canvas.commands[..] {
            [DrawCommand::Polygon(points)] => assert_eq!(points.len(), 4),
            other => panic!("unexpected commands {:?}", other),
        }
    }
}
