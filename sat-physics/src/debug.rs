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
//! Debug drawing hook
//!
//! Colliders may describe their outline to an external drawing context.
//! The engine never draws on its own; a renderer implements
//! [`DebugCanvas`] and asks the world to draw a frame.

use crate::vector::Vector2;

/// Drawing context supplied by a renderer
pub trait DebugCanvas {
    /// Draw a circle outline
    fn circle(&mut self, center: Vector2, radius: f64);

    /// Draw a closed polygon through the given points
    fn polygon(&mut self, points: &[Vector2]);

    /// Draw a line segment, e.g. a contact normal
    fn line(&mut self, _from: Vector2, _to: Vector2) {}
}

/// Canvas that records primitives instead of drawing them
///
/// Handy for tests and for renderers that batch their draw calls.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingCanvas {
    /// Recorded primitives in call order
    pub commands: Vec<DrawCommand>,
}

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A circle outline
    Circle {
        /// Centre point
        center: Vector2,
        /// Radius
        radius: f64,
    },
    /// A closed polygon
    Polygon(Vec<Vector2>),
    /// A line segment
    Line(Vector2, Vector2),
}

impl RecordingCanvas {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }
}

impl DebugCanvas for RecordingCanvas {
    fn circle(&mut self, center: Vector2, radius: f64) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn polygon(&mut self, points: &[Vector2]) {
        self.commands.push(DrawCommand::Polygon(points.to_vec()));
    }

    fn line(&mut self, from: Vector2, to: Vector2) {
        self.commands.push(DrawCommand::Line(from, to));
    }
}
