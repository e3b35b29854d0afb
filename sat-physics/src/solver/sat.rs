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
//! Separating Axis Theorem core
//!
//! Two convex shapes are disjoint iff some axis separates their
//! projections. For every candidate axis `n` with projections `A` and `B`:
//!
//! ```text
//! overlap_a = B.max - A.min    (push A along +n by this much)
//! overlap_b = A.max - B.min    (push A along -n by this much)
//! ```
//!
//! If either is `<= 0` the axis separates the shapes and the pair is not
//! colliding. Otherwise the smaller of the two is the push-out distance
//! along that axis, and the axis with the smallest push-out distance over
//! all candidates is the minimum translation vector (MTV).
//!
//! Ties keep the first axis seen, so the result depends on axis order when
//! two axes report exactly the same depth.

use crate::vector::{Projection, Vector2};
use log::trace;

/// Which way the first shape leaves along the axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushDirection {
    /// First shape moves along +axis
    Positive,
    /// First shape moves along -axis
    Negative,
}

impl PushDirection {
    /// `+1.0` or `-1.0`
    pub fn sign(self) -> f64 {
        match self {
            PushDirection::Positive => 1.0,
            PushDirection::Negative => -1.0,
        }
    }

    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            PushDirection::Positive => PushDirection::Negative,
            PushDirection::Negative => PushDirection::Positive,
        }
    }
}

/// Penetration of two projections on a single axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisOverlap {
    /// Push-out distance, always positive
    pub depth: f64,
    /// Direction the first shape has to move
    pub direction: PushDirection,
}

/// Overlap of two projection intervals on one axis
///
/// Returns None when the axis separates the intervals (touching counts as
/// separated) or when the arithmetic is not finite.
pub fn axis_overlap(a: Projection, b: Projection) -> Option<AxisOverlap> {
    let overlap_a = b.max - a.min;
    let overlap_b = a.max - b.min;

    // Negated comparison so NaN also counts as separated
    if !(overlap_a > 0.0 && overlap_b > 0.0) {
        return None;
    }

    if overlap_a < overlap_b {
        Some(AxisOverlap {
            depth: overlap_a,
            direction: PushDirection::Positive,
        })
    } else {
        Some(AxisOverlap {
            depth: overlap_b,
            direction: PushDirection::Negative,
        })
    }
}

/// Minimum translation vector of an overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Push-out distance along `normal`, always positive and finite
    pub depth: f64,
    /// Unit collision axis shared by both participants
    pub normal: Vector2,
    /// Direction the first participant has to move along `normal`
    pub direction: PushDirection,
}

impl Overlap {
    /// Signed overlap amount handed to the first participant's resolver
    pub fn first_amount(&self) -> f64 {
        self.depth * self.direction.sign()
    }

    /// Signed overlap amount handed to the second participant's resolver
    pub fn second_amount(&self) -> f64 {
        self.depth * self.direction.reversed().sign()
    }

    /// Translation that separates the first participant on its own
    pub fn translation(&self) -> Vector2 {
        self.normal * self.first_amount()
    }
}

/// Run SAT over `axes` and select the minimum translation vector
///
/// Axes are normalized before projection; zero-length or non-finite axes
/// are dropped. The first separating axis ends the search.
///
/// # Returns
///
/// The MTV if every usable axis overlaps, None if some axis separates the
/// shapes or no usable axis was supplied.
///
/// # Example
///
/// ```rust
/// use sat_physics::solver::find_mtv;
/// use sat_physics::{Projection, Vector2};
///
/// // Two unit squares overlapping by 0.25 along x
/// let mtv = find_mtv(
///     [Vector2::X, Vector2::Y],
///     |_| Projection::new(0.0, 1.0),
///     |axis| if axis == Vector2::X { Projection::new(0.75, 1.75) } else { Projection::new(0.0, 1.0) },
/// )
/// .unwrap();
/// assert_eq!(mtv.depth, 0.25);
/// assert_eq!(mtv.normal, Vector2::X);
/// assert_eq!(mtv.first_amount(), -0.25);
/// ```
pub fn find_mtv<I, A, B>(axes: I, mut project_a: A, mut project_b: B) -> Option<Overlap>
where
    I: IntoIterator<Item = Vector2>,
    A: FnMut(Vector2) -> Projection,
    B: FnMut(Vector2) -> Projection,
{
    let mut best: Option<Overlap> = None;

    for axis in axes {
        let Some(normal) = axis.try_normalize() else {
            trace!("Dropping degenerate axis {:?}", axis);
            continue;
        };

        let proj_a = project_a(normal);
        let proj_b = project_b(normal);
        let Some(overlap) = axis_overlap(proj_a, proj_b) else {
            trace!("Separating axis {:?}: {:?} vs {:?}", normal, proj_a, proj_b);
            return None;
        };

        trace!(
            "Axis {:?}: depth {} direction {:?}",
            normal,
            overlap.depth,
            overlap.direction
        );

        let improves = best.map_or(true, |current| overlap.depth < current.depth);
        if improves {
            best = Some(Overlap {
                depth: overlap.depth,
                normal,
                direction: overlap.direction,
            });
        }
    }

    best.filter(|mtv| mtv.depth > 0.0 && mtv.depth.is_finite())
}
