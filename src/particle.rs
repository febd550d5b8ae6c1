// Simple particle struct to keep track of individual position, velocity,
// size, opacity, and color. Only position and the sign of the velocity ever
// change after construction.

use crate::color::{Color, PALETTE};
use rand::Rng;
use vecmath::Vector2;

pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub opacity: f64,
    pub color: Color,
}

impl Particle {
    pub const MAX_SPEED: f64 = 0.25;
    pub const MIN_RADIUS: f64 = 1.0;
    pub const MAX_RADIUS: f64 = 4.0;
    pub const MIN_OPACITY: f64 = 0.02;
    pub const MAX_OPACITY: f64 = 0.17;

    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, opacity: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            opacity,
            color,
        }
    }

    // Uniform-random particle somewhere on a width x height surface
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let min_vel = -Self::MAX_SPEED;
        let max_vel = Self::MAX_SPEED;
        Particle {
            pos: [rng.gen::<f64>() * width, rng.gen::<f64>() * height],
            vel: [
                rng.gen::<f64>() * (max_vel - min_vel) + min_vel,
                rng.gen::<f64>() * (max_vel - min_vel) + min_vel,
            ],
            radius: rng.gen::<f64>() * (Self::MAX_RADIUS - Self::MIN_RADIUS) + Self::MIN_RADIUS,
            opacity: rng.gen::<f64>() * (Self::MAX_OPACITY - Self::MIN_OPACITY) + Self::MIN_OPACITY,
            color: PALETTE[rng.gen_range(0, PALETTE.len())],
        }
    }

    // Advance one frame, reflecting off the surface edges. The already-advanced
    // position is kept as-is when it lands out of range; the flipped velocity
    // brings the particle back inside on the following frames.
    pub fn step(&mut self, width: f64, height: f64) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] = -self.vel[1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_particles_stay_in_documented_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0);
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 600.0);
            assert!(p.vel[0].abs() <= Particle::MAX_SPEED);
            assert!(p.vel[1].abs() <= Particle::MAX_SPEED);
            assert!(p.radius >= Particle::MIN_RADIUS && p.radius <= Particle::MAX_RADIUS);
            assert!(p.opacity >= Particle::MIN_OPACITY && p.opacity <= Particle::MAX_OPACITY);
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn step_advances_by_velocity() {
        let mut p = Particle::new([10.0, 20.0], [0.2, -0.1], 2.0, 0.1, PALETTE[0]);
        p.step(800.0, 600.0);
        assert!((p.pos[0] - 10.2).abs() < 1e-12);
        assert!((p.pos[1] - 19.9).abs() < 1e-12);
        assert_eq!(p.vel, [0.2, -0.1]);
    }

    #[test]
    fn crossing_the_right_edge_flips_x_velocity_without_clamping() {
        let mut p = Particle::new([799.9, 300.0], [0.2, 0.0], 2.0, 0.1, PALETTE[0]);
        p.step(800.0, 600.0);
        // overshoot is kept, bounded by one frame of travel
        assert!(p.pos[0] > 800.0);
        assert!(p.pos[0] <= 800.0 + 0.2);
        assert_eq!(p.vel[0], -0.2);
        // next frame moves back inward
        p.step(800.0, 600.0);
        assert!((p.pos[0] - 799.9).abs() < 1e-12);
    }

    #[test]
    fn crossing_the_top_edge_flips_y_velocity() {
        let mut p = Particle::new([400.0, 0.05], [0.0, -0.1], 2.0, 0.1, PALETTE[1]);
        p.step(800.0, 600.0);
        assert!(p.pos[1] < 0.0);
        assert_eq!(p.vel[1], 0.1);
    }

    #[test]
    fn zero_velocity_particle_never_moves() {
        let mut p = Particle::new([5.0, 5.0], [0.0, 0.0], 1.0, 0.05, PALETTE[2]);
        for _ in 0..10 {
            p.step(800.0, 600.0);
        }
        assert_eq!(p.pos, [5.0, 5.0]);
    }
}
