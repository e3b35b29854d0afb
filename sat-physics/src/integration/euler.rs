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
//! Explicit Euler integrator
//!
//! ```text
//! x(t + dt) = x(t) + v(t)*dt
//! v(t + dt) = v(t) + g*dt
//! ```
//!
//! First-order and not energy conserving, which does not matter here: the
//! bouncy resolver dissipates energy on every contact anyway.

use super::Integrator;
use crate::object::CollisionObject;
use crate::vector::Vector2;
use log::{trace, warn};

/// Default gravity, in units per second squared (y up)
pub const DEFAULT_GRAVITY: Vector2 = Vector2::new(0.0, -500.0);

/// Default timestep (60 FPS)
pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0;

/// Constant-gravity explicit Euler integrator
///
/// Objects flagged `fixed` are never moved.
///
/// # Example
///
/// ```
/// use sat_physics::integration::{ExplicitEuler, Integrator};
/// use sat_physics::{CollisionObject, Vector2};
///
/// let mut integrator = ExplicitEuler::new(0.5).with_gravity(Vector2::new(0.0, -10.0));
/// let mut objects = vec![CollisionObject::circle(Vector2::ZERO, 1.0).with_velocity(Vector2::X)];
///
/// assert_eq!(integrator.integrate(&mut objects), 1);
/// assert_eq!(objects[0].position, Vector2::new(0.5, 0.0));
/// assert_eq!(objects[0].velocity, Vector2::new(1.0, -5.0));
/// ```
#[derive(Debug, Clone)]
pub struct ExplicitEuler {
    timestep: f64,
    gravity: Vector2,
}

impl ExplicitEuler {
    /// Create a new integrator with [`DEFAULT_GRAVITY`]
    ///
    /// # Panics
    ///
    /// Panics if timestep is non-positive, NaN, or infinite
    pub fn new(timestep: f64) -> Self {
        assert!(
            timestep > 0.0 && timestep.is_finite(),
            "Timestep must be positive and finite"
        );
        ExplicitEuler {
            timestep,
            gravity: DEFAULT_GRAVITY,
        }
    }

    /// Replace the gravity vector
    ///
    /// # Panics
    ///
    /// Panics if gravity is not finite
    pub fn with_gravity(mut self, gravity: Vector2) -> Self {
        assert!(gravity.is_valid(), "Gravity must be finite");
        self.gravity = gravity;
        self
    }

    /// Get the gravity vector
    pub fn gravity(&self) -> Vector2 {
        self.gravity
    }
}

impl Default for ExplicitEuler {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTEP)
    }
}

impl Integrator for ExplicitEuler {
    fn name(&self) -> &str {
        "Explicit Euler"
    }

    fn timestep(&self) -> f64 {
        self.timestep
    }

    fn set_timestep(&mut self, dt: f64) {
        assert!(
            dt > 0.0 && dt.is_finite(),
            "Timestep must be positive and finite"
        );
        self.timestep = dt;
    }

    fn integrate(&mut self, objects: &mut [CollisionObject]) -> usize {
        let dt = self.timestep;
        let mut updated = 0;

        for object in objects.iter_mut().filter(|object| !object.fixed) {
            let position = object.position + object.velocity * dt;
            let velocity = object.velocity + self.gravity * dt;

            if !position.is_valid() || !velocity.is_valid() {
                warn!(
                    "Non-finite state after integration, object left at {:?}",
                    object.position
                );
                continue;
            }

            object.position = position;
            object.velocity = velocity;
            updated += 1;
        }

        trace!("Integrated {} of {} objects", updated, objects.len());
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euler_step() {
        let mut integrator = ExplicitEuler::new(0.1);
        let mut objects = vec![CollisionObject::circle(Vector2::new(0.0, 100.0), 5.0)
            .with_velocity(Vector2::new(10.0, 0.0))];

        integrator.integrate(&mut objects);

        // Position uses the old velocity
        assert!((objects[0].position.x - 1.0).abs() < 1e-12);
        assert!((objects[0].position.y - 100.0).abs() < 1e-12);
        assert!((objects[0].velocity.y + 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_fixed_objects_do_not_move() {
        let mut integrator = ExplicitEuler::default();
        let floor = CollisionObject::rectangle(Vector2::ZERO, 100.0, 10.0).fixed();
        let ball = CollisionObject::circle(Vector2::new(50.0, 50.0), 5.0);
        let mut objects = vec![floor.clone(), ball];

        let updated = integrator.integrate(&mut objects);

        assert_eq!(updated, 1);
        assert_eq!(objects[0], floor);
        assert!(objects[1].velocity.y < 0.0);
    }

    #[test]
    fn test_zero_gravity_is_uniform_motion() {
        let mut integrator = ExplicitEuler::new(1.0).with_gravity(Vector2::ZERO);
        let mut objects =
            vec![CollisionObject::circle(Vector2::ZERO, 1.0).with_velocity(Vector2::new(3.0, 4.0))];

        for _ in 0..10 {
            integrator.integrate(&mut objects);
        }

        assert_eq!(objects[0].position, Vector2::new(30.0, 40.0));
        assert_eq!(objects[0].velocity, Vector2::new(3.0, 4.0));
    }

    #[test]
    fn test_validate_timestep() {
        let mut integrator = ExplicitEuler::default();
        assert!(integrator.validate_timestep().is_ok());
        assert_eq!(integrator.name(), "Explicit Euler");

        integrator.set_timestep(1e-12);
        assert!(integrator.validate_timestep().is_err());

        integrator.set_timestep(2.0);
        assert!(integrator.validate_timestep().is_err());
    }

    #[test]
    #[should_panic(expected = "Timestep must be positive and finite")]
    fn test_zero_timestep_panics() {
        ExplicitEuler::new(0.0);
    }

    #[test]
    #[should_panic(expected = "Timestep must be positive and finite")]
    fn test_nan_set_timestep_panics() {
        ExplicitEuler::default().set_timestep(f64::NAN);
    }
}
