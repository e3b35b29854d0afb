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
//! 2D vector math
//!
//! `Vector2` is an immutable value type: every operation returns a new
//! vector. Coordinates are double precision to keep projection arithmetic
//! stable for the large world coordinates used by typical scenes.

use std::ops::{Add, Mul, Neg, Sub};

/// 2D vector with double-precision coordinates
///
/// # Examples
///
/// ```
/// use sat_physics::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v.normalize(), Vector2::new(0.6, 0.8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// Horizontal component
    pub x: f64,
    /// Vertical component
    pub y: f64,
}

impl Vector2 {
    /// The zero vector
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    /// Unit vector along +X
    pub const X: Vector2 = Vector2 { x: 1.0, y: 0.0 };
    /// Unit vector along +Y
    pub const Y: Vector2 = Vector2 { x: 0.0, y: 1.0 };

    /// Create a new vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Multiply both components by a scalar
    pub fn scale(self, factor: f64) -> Vector2 {
        Vector2::new(self.x * factor, self.y * factor)
    }

    /// Dot product
    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length, avoids the square root
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction
    ///
    /// The zero vector normalizes to itself. Use [`Vector2::try_normalize`]
    /// when a zero-length input has to be told apart from a valid direction.
    pub fn normalize(self) -> Vector2 {
        self.try_normalize().unwrap_or(Vector2::ZERO)
    }

    /// Unit vector in the same direction, or `None` for degenerate input
    ///
    /// Degenerate means zero length or any non-finite component.
    pub fn try_normalize(self) -> Option<Vector2> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return None;
        }
        Some(Vector2::new(self.x / len, self.y / len))
    }

    /// Clamp the length to `max`, keeping the direction
    pub fn limit(self, max: f64) -> Vector2 {
        if self.length() <= max {
            self
        } else {
            self.normalize().scale(max)
        }
    }

    /// Counter-clockwise perpendicular `(-y, x)`
    pub fn perp(self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }

    /// Rotate counter-clockwise by an angle given as its cosine and sine
    pub fn rotate(self, cos: f64, sin: f64) -> Vector2 {
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Distance to another point
    pub fn distance(self, other: Vector2) -> f64 {
        (self - other).length()
    }

    /// Squared distance to another point
    pub fn distance_squared(self, other: Vector2) -> f64 {
        (self - other).length_squared()
    }

    /// Check if both components are finite (not NaN or infinite)
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

/// Closed interval of scalar projections onto an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Smallest projected value
    pub min: f64,
    /// Largest projected value
    pub max: f64,
}

impl Projection {
    /// Create a projection interval
    pub fn new(min: f64, max: f64) -> Self {
        Projection { min, max }
    }

    /// Tightest interval containing every projected point
    ///
    /// Returns `None` for an empty point set.
    pub fn of_points(points: &[Vector2], axis: Vector2) -> Option<Projection> {
        let (first, rest) = points.split_first()?;
        let start = first.dot(axis);
        let (min, max) = rest.iter().fold((start, start), |(min, max), point| {
            let p = point.dot(axis);
            (min.min(p), max.max(p))
        });
        Some(Projection { min, max })
    }

    /// Width of the interval
    pub fn length(&self) -> f64 {
        self.max - self.min
    }
}
