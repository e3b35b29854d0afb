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
//! Circle collider
//!
//! A circle has no edges, so it contributes a single candidate axis: the
//! direction from its centre toward the closest feature of the other shape.
//! When the centre lies on or inside the other shape that direction
//! vanishes and the circle contributes no axis; the other shape's axes
//! still decide the pair. Its projection onto any unit axis is the
//! projected centre plus or minus the radius.

use crate::debug::DebugCanvas;
use crate::object::{CollisionObject, Shape};
use crate::plugins::api::{Collider, Counterpart, Definition};
use crate::vector::{Projection, Vector2};
use std::any::Any;

/// Collider for [`Shape::Circle`] objects
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleCollider;

impl CircleCollider {
    fn radius(object: &CollisionObject) -> f64 {
        match object.shape {
            Shape::Circle { radius } => radius,
            // Unsupported shapes degrade to a point; the solver filters them first.
            _ => 0.0,
        }
    }
}

impl Definition for CircleCollider {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Collider for CircleCollider {
    fn supports(&self, object: &CollisionObject) -> bool {
        matches!(object.shape, Shape::Circle { .. })
    }

    fn normals(&self, object: &CollisionObject, other: Counterpart<'_>) -> Vec<Vector2> {
        let closest = other.closest_point(object.position);
        // A zero-length direction has no axis.
        (closest - object.position).try_normalize().into_iter().collect()
    }

    /// Point on the circle's boundary nearest to `point`
    ///
    /// The centre itself has no nearest boundary point and is returned as is.
    fn closest_point(&self, object: &CollisionObject, point: Vector2) -> Vector2 {
        match (point - object.position).try_normalize() {
            Some(direction) => object.position + direction * Self::radius(object),
            None => point,
        }
    }

    fn project(&self, object: &CollisionObject, axis: Vector2) -> Projection {
        let center = object.position.dot(axis);
        let radius = Self::radius(object);
        Projection::new(center - radius, center + radius)
    }

    fn draw(&self, object: &CollisionObject, canvas: &mut dyn DebugCanvas) {
        canvas.circle(object.position, Self::radius(object));
    }
}
