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
//! Motion integration between collision steps
//!
//! Collision resolution only moves objects apart and rewrites velocities;
//! something else has to advance positions over time. A typical frame is:
//!
//! ```text
//! integrator.integrate(&mut objects);   // gravity + velocity
//! world.step_all(&mut objects);         // push-out + bounce
//! ```
//!
//! # Timestep Guidelines
//!
//! - Recommended: dt = 1/60 (60 FPS)
//! - Large timesteps let fast objects tunnel through thin shapes, since the
//!   collision step only sees discrete positions

use crate::object::CollisionObject;

mod euler;

pub use euler::{ExplicitEuler, DEFAULT_GRAVITY, DEFAULT_TIMESTEP};

/// Trait for motion integrators
///
/// Integrators advance position and velocity of every non-fixed object by
/// one timestep.
pub trait Integrator: Send + Sync {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Get the timestep used by this integrator
    fn timestep(&self) -> f64;

    /// Set the timestep for this integrator
    ///
    /// # Panics
    ///
    /// Panics if timestep is non-positive, NaN, or infinite
    fn set_timestep(&mut self, dt: f64);

    /// Validate the timestep for stability
    ///
    /// Extremely small timesteps lose precision, large ones tunnel through
    /// thin shapes.
    fn validate_timestep(&self) -> Result<(), String> {
        let dt = self.timestep();

        if dt <= 0.0 || !dt.is_finite() {
            return Err(format!("Invalid timestep: {}. Must be positive and finite.", dt));
        }

        if dt < 1e-9 {
            return Err(format!(
                "Warning: Timestep {} is extremely small and may cause precision loss with f64.",
                dt
            ));
        }

        if dt > 1.0 {
            return Err(format!(
                "Warning: Timestep {} is large and lets objects tunnel through thin shapes. \
                Consider using smaller timesteps.",
                dt
            ));
        }

        Ok(())
    }

    /// Advance every non-fixed object by one timestep
    ///
    /// # Returns
    ///
    /// Number of objects updated
    fn integrate(&mut self, objects: &mut [CollisionObject]) -> usize;
}
