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
//! Bouncing Balls Example
//!
//! Drops a handful of balls onto a tilted ramp above a static floor and
//! prints where they end up. It showcases:
//!
//! - Built-in circle/rectangle colliders and static/bouncy resolvers
//! - A closure resolver registered at runtime
//! - The integrate-then-collide frame loop
//! - Deterministic random initial conditions
//!
//! # Running
//!
//! ```bash
//! cargo run --example bouncing --release
//!
//! # More balls, longer run, with per-step diagnostics
//! RUST_LOG=debug cargo run --example bouncing -- --balls 40 --seconds 20
//! ```

use sat_physics::debug::RecordingCanvas;
use sat_physics::integration::{ExplicitEuler, Integrator, DEFAULT_TIMESTEP};
use sat_physics::plugins::FnResolver;
use sat_physics::{CollisionObject, CollisionWorld, Vector2};
use std::time::Instant;

/// Linear congruential generator (Knuth MMIX constants)
struct SimpleRng {
    state: u64,
}

/// 2^53, for converting the upper bits into a float in [0, 1)
const F64_MANTISSA_MAX: f64 = 9007199254740992.0;

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn next_f64_range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * ((self.next_u64() >> 11) as f64 / F64_MANTISSA_MAX)
    }
}

/// Demo configuration
struct DemoConfig {
    balls: usize,
    seconds: f64,
    seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            balls: 12,
            seconds: 8.0,
            seed: 12345,
        }
    }
}

fn parse_args() -> DemoConfig {
    let mut config = DemoConfig::default();
    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--balls", Some(v)) => match v.parse::<usize>() {
                Ok(n) => config.balls = n,
                Err(_) => eprintln!("Invalid ball count '{}', using {}", v, config.balls),
            },
            ("--seconds", Some(v)) => match v.parse::<f64>() {
                Ok(s) if s > 0.0 => config.seconds = s,
                _ => eprintln!("Invalid duration '{}', using {}", v, config.seconds),
            },
            ("--seed", Some(v)) => match v.parse::<u64>() {
                Ok(s) => config.seed = s,
                Err(_) => eprintln!("Invalid seed '{}', using {}", v, config.seed),
            },
            (other, _) => {
                eprintln!("Unknown or incomplete argument '{}'", other);
                i += 1;
                continue;
            }
        }
        i += 2;
    }

    config
}

fn build_scene(config: &DemoConfig) -> Vec<CollisionObject> {
    let mut rng = SimpleRng::new(config.seed);

    let mut objects = vec![
        CollisionObject::rectangle(Vector2::ZERO, 2000.0, 50.0).fixed(),
        CollisionObject::rectangle(Vector2::new(300.0, 250.0), 400.0, 20.0)
            .with_angle(-15.0)
            .fixed(),
        // Sensor pad: stays put and logs every ball that lands on it
        CollisionObject::rectangle(Vector2::new(1500.0, 50.0), 200.0, 10.0)
            .with_resolver("sensor")
            .fixed(),
    ];

    for _ in 0..config.balls {
        let center = Vector2::new(
            rng.next_f64_range(300.0, 700.0),
            rng.next_f64_range(400.0, 900.0),
        );
        let radius = rng.next_f64_range(8.0, 20.0);
        let velocity = Vector2::new(rng.next_f64_range(-50.0, 200.0), 0.0);
        objects.push(
            CollisionObject::circle(center, radius)
                .with_resolver("bouncy")
                .with_velocity(velocity),
        );
    }

    objects
}

fn main() {
    env_logger::init();
    let config = parse_args();

    let mut world = CollisionWorld::with_builtins();
    if let Err(e) = world.register_resolver(
        "sensor",
        Box::new(FnResolver::new(|_object, other, _amount, _normal| {
            log::trace!("Ball at {:?} landed on the sensor pad", other.position);
        })),
    ) {
        eprintln!("Failed to register sensor resolver: {}", e);
        return;
    }

    let mut integrator = ExplicitEuler::new(DEFAULT_TIMESTEP);
    if let Err(warning) = integrator.validate_timestep() {
        eprintln!("{}", warning);
    }

    let mut objects = build_scene(&config);
    let frames = (config.seconds / integrator.timestep()).round() as usize;

    println!("=== Bouncing Balls ===");
    println!("Balls: {}", config.balls);
    println!("Frames: {} ({} s at {:.4} s/frame)", frames, config.seconds, integrator.timestep());
    println!();

    let start = Instant::now();
    let mut collisions = 0;

    for frame in 0..frames {
        integrator.integrate(&mut objects);
        let stats = world.step_all(&mut objects);
        collisions += stats.collisions;

        if frame % 60 == 0 {
            let resting = objects
                .iter()
                .filter(|o| !o.fixed && o.velocity == Vector2::ZERO)
                .count();
            println!(
                "t={:5.2}s  collisions this frame: {:3}  resting: {}/{}",
                frame as f64 * integrator.timestep(),
                stats.collisions,
                resting,
                config.balls
            );
        }
    }

    let elapsed = start.elapsed();

    println!();
    println!("Final ball positions:");
    for (i, ball) in objects.iter().filter(|o| !o.fixed).enumerate() {
        println!(
            "  ball {:2}: ({:8.2}, {:8.2})  velocity ({:8.2}, {:8.2})",
            i, ball.position.x, ball.position.y, ball.velocity.x, ball.velocity.y
        );
    }

    let mut canvas = RecordingCanvas::new();
    world.draw_all(&objects, &mut canvas);
    world.draw_contacts(&objects, &mut canvas);

    println!();
    println!("Total collisions resolved: {}", collisions);
    println!("Debug primitives in last frame: {}", canvas.commands.len());
    println!("Wall time: {:.2?}", elapsed);
}
