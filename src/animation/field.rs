use iced::widget::canvas;
use iced::{Point, Size};
use rand::Rng;

use crate::constants::{
    ATTRACTION_GAIN, CONNECTION_DISTANCE, DISTANCE_EPSILON, DRIFT_SPEED, LINK_MAX_ALPHA,
    MOUSE_RADIUS, PARTICLE_COUNT, PARTICLE_MIN_SIZE, PARTICLE_SIZE_RANGE,
};

/// One simulated body in the background field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
}

/// State for the neural field background simulation.
///
/// Owns the particle set, the last known pointer position, and the canvas
/// cache. The set is discarded and reseeded wholesale on every resize; no
/// particle survives a reseed.
#[derive(Debug)]
pub struct NeuralFieldState {
    pub particles: Vec<Particle>,
    pub bounds: Size,
    pub pointer: Option<Point>,
    pub cache: canvas::Cache,
}

impl Default for NeuralFieldState {
    fn default() -> Self {
        Self {
            particles: Vec::new(),
            bounds: Size::ZERO,
            pointer: None,
            cache: canvas::Cache::default(),
        }
    }
}

impl NeuralFieldState {
    /// Adopts new viewport bounds and reseeds the whole field for them.
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
        self.reseed();
    }

    /// Replaces every particle with a fresh random one inside the bounds.
    /// Zero-sized bounds leave the field empty, which makes the whole engine
    /// a silent no-op.
    pub fn reseed(&mut self) {
        self.particles.clear();
        if self.bounds.width <= 0.0 || self.bounds.height <= 0.0 {
            return;
        }
        let mut rng = rand::thread_rng();
        for _ in 0..PARTICLE_COUNT {
            self.particles.push(Particle {
                x: rng.gen_range(0.0..self.bounds.width),
                y: rng.gen_range(0.0..self.bounds.height),
                vx: (rng.gen::<f32>() - 0.5) * DRIFT_SPEED,
                vy: (rng.gen::<f32>() - 0.5) * DRIFT_SPEED,
                size: rng.gen::<f32>() * PARTICLE_SIZE_RANGE + PARTICLE_MIN_SIZE,
            });
        }
        self.cache.clear();
    }

    /// Records the latest pointer position in window coordinates.
    pub fn set_pointer(&mut self, position: Point) {
        self.pointer = Some(position);
    }

    /// Advances the simulation one frame: Euler step, elastic wall bounce,
    /// and, while interactive, a positional pull toward the pointer.
    ///
    /// The pull is applied to position every frame the particle stays inside
    /// the attraction radius; it compounds with drift and is deliberately
    /// uncapped.
    pub fn step(&mut self, interactive: bool) {
        if self.particles.is_empty() {
            return;
        }
        let width = self.bounds.width;
        let height = self.bounds.height;
        let pointer = if interactive { self.pointer } else { None };

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            // Elastic bounce: flip the axis velocity, keep the magnitude.
            // Overshoot past the wall is left in place until the flip brings
            // the particle back.
            if p.x < 0.0 || p.x > width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > height {
                p.vy = -p.vy;
            }

            if let Some(m) = pointer {
                let dx = m.x - p.x;
                let dy = m.y - p.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < MOUSE_RADIUS && distance > DISTANCE_EPSILON {
                    let pull = (MOUSE_RADIUS - distance) / MOUSE_RADIUS * ATTRACTION_GAIN;
                    p.x += dx / distance * pull;
                    p.y += dy / distance * pull;
                }
            }
        }
        self.cache.clear();
    }
}

/// Alpha for a connection line between two particles `distance` apart, or
/// `None` when they are too far apart to connect. Fades linearly from the
/// maximum at distance 0 down to nothing at the connection threshold.
pub fn connection_alpha(distance: f32) -> Option<f32> {
    if distance >= CONNECTION_DISTANCE {
        return None;
    }
    Some((1.0 - distance / CONNECTION_DISTANCE) * LINK_MAX_ALPHA)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(width: f32, height: f32) -> NeuralFieldState {
        NeuralFieldState {
            bounds: Size::new(width, height),
            ..NeuralFieldState::default()
        }
    }

    fn still_particle(x: f32, y: f32) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: 1.0,
        }
    }

    #[test]
    fn test_reseed_produces_full_set_in_bounds() {
        let mut f = field(800.0, 600.0);
        f.reseed();
        assert_eq!(f.particles.len(), PARTICLE_COUNT);
        for p in &f.particles {
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
            assert!(p.size >= PARTICLE_MIN_SIZE);
            assert!(p.size < PARTICLE_MIN_SIZE + PARTICLE_SIZE_RANGE);
            assert!(p.vx.abs() <= DRIFT_SPEED / 2.0);
            assert!(p.vy.abs() <= DRIFT_SPEED / 2.0);
        }
    }

    #[test]
    fn test_reseed_discards_previous_set() {
        let mut f = field(800.0, 600.0);
        f.reseed();
        let before: Vec<Particle> = f.particles.clone();
        f.resize(Size::new(1024.0, 768.0));
        assert_eq!(f.particles.len(), PARTICLE_COUNT);
        assert_ne!(before, f.particles);
    }

    #[test]
    fn test_zero_sized_bounds_noop() {
        let mut f = field(0.0, 0.0);
        f.reseed();
        assert!(f.particles.is_empty());
        // Stepping an empty field must not panic or allocate particles.
        f.step(true);
        assert!(f.particles.is_empty());
    }

    #[test]
    fn test_euler_step_moves_by_velocity() {
        let mut f = field(800.0, 600.0);
        f.particles.push(Particle {
            x: 100.0,
            y: 100.0,
            vx: 1.5,
            vy: -0.5,
            size: 1.0,
        });
        f.step(false);
        let p = &f.particles[0];
        assert_eq!((p.x, p.y), (101.5, 99.5));
    }

    #[test]
    fn test_bounce_flips_sign_keeps_magnitude() {
        let mut f = field(100.0, 100.0);
        f.particles.push(Particle {
            x: 99.9,
            y: 50.0,
            vx: 0.4,
            vy: 0.0,
            size: 1.0,
        });
        f.particles.push(Particle {
            x: 50.0,
            y: 0.05,
            vx: 0.0,
            vy: -0.3,
            size: 1.0,
        });
        f.step(false);
        assert_eq!(f.particles[0].vx, -0.4);
        assert_eq!(f.particles[1].vy, 0.3);
        // Overshoot is not clamped away.
        assert!(f.particles[0].x > 100.0);
        assert!(f.particles[1].y < 0.0);
    }

    #[test]
    fn test_attraction_pulls_toward_pointer_when_interactive() {
        let mut f = field(800.0, 600.0);
        f.particles.push(still_particle(100.0, 300.0));
        f.set_pointer(Point::new(150.0, 300.0));

        // Distance 50 inside the 200 radius: pull = (150 / 200) * 1.5 = 1.125
        // along +x.
        f.step(true);
        let p = f.particles[0];
        assert!((p.x - 101.125).abs() < 1e-4);
        assert!((p.y - 300.0).abs() < 1e-4);

        // The pull repeats every frame while in radius, compounding.
        f.step(true);
        assert!(f.particles[0].x > 101.125);
    }

    #[test]
    fn test_no_pull_outside_radius() {
        let mut f = field(800.0, 600.0);
        f.particles.push(still_particle(100.0, 300.0));
        f.set_pointer(Point::new(400.0, 300.0));
        f.step(true);
        assert_eq!(f.particles[0], still_particle(100.0, 300.0));
    }

    #[test]
    fn test_no_pull_before_interactive() {
        let mut f = field(800.0, 600.0);
        f.particles.push(still_particle(100.0, 300.0));
        f.set_pointer(Point::new(150.0, 300.0));
        f.step(false);
        assert_eq!(f.particles[0], still_particle(100.0, 300.0));
    }

    #[test]
    fn test_no_pull_without_pointer() {
        let mut f = field(800.0, 600.0);
        f.particles.push(still_particle(100.0, 300.0));
        f.step(true);
        assert_eq!(f.particles[0], still_particle(100.0, 300.0));
    }

    #[test]
    fn test_coincident_pointer_is_guarded() {
        let mut f = field(800.0, 600.0);
        f.particles.push(still_particle(100.0, 300.0));
        f.set_pointer(Point::new(100.0, 300.0));
        f.step(true);
        let p = f.particles[0];
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_eq!(p, still_particle(100.0, 300.0));
    }

    #[test]
    fn test_connection_alpha_fades_with_distance() {
        assert_eq!(connection_alpha(CONNECTION_DISTANCE), None);
        assert_eq!(connection_alpha(500.0), None);

        let near = connection_alpha(0.0).unwrap();
        assert!((near - LINK_MAX_ALPHA).abs() < 1e-6);

        let mid = connection_alpha(60.0).unwrap();
        let far = connection_alpha(119.0).unwrap();
        assert!(near > mid && mid > far);
        assert!(far > 0.0);
        assert!((mid - LINK_MAX_ALPHA * 0.5).abs() < 1e-6);
    }
}
