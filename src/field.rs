// The particle field simulator. Owns the particle set and the surface
// dimensions; knows nothing about the canvas. The renderer reads state out
// through `particles` and `connections`, which keeps every rule in here
// testable off the page.

use crate::config::FieldConfig;
use crate::particle::Particle;
use rand::Rng;
use vecmath::{self, Vector2};

// One proximity line between two particles, faded by distance
pub struct Connection {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub opacity: f64,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub const LINE_WIDTH: f64 = 0.5;
    pub const MAX_LINE_OPACITY: f64 = 0.03;

    // The particle count is fixed here for the lifetime of the field; nothing
    // spawns or removes particles afterwards.
    pub fn new<R: Rng>(width: f64, height: f64, config: FieldConfig, rng: &mut R) -> ParticleField {
        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            particles.push(Particle::random(rng, width, height));
        }
        ParticleField {
            width,
            height,
            config,
            particles,
        }
    }

    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.step(self.width, self.height);
        }
    }

    // Resize only moves the surface edges. Particles that end up outside the
    // new bounds stay where they are until their own step reflects them back.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn draws_connections(&self) -> bool {
        self.config.draw_connections
    }

    // Stroke opacity for a pair at the given distance: full strength when
    // touching, zero at the connection threshold.
    pub fn connection_opacity(&self, distance: f64) -> f64 {
        Self::MAX_LINE_OPACITY * (1.0 - distance / self.config.connection_distance)
    }

    // Every unordered pair closer than the threshold. O(n^2), fine at n <= 60.
    pub fn connections(&self) -> Vec<Connection> {
        let mut lines = Vec::new();
        if !self.config.draw_connections {
            return lines;
        }
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let delta = vecmath::vec2_sub(self.particles[i].pos, self.particles[j].pos);
                let distance = vecmath::vec2_len(delta);
                if distance < self.config.connection_distance {
                    lines.push(Connection {
                        from: self.particles[i].pos,
                        to: self.particles[j].pos,
                        opacity: self.connection_opacity(distance),
                    });
                }
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn desktop_config() -> FieldConfig {
        FieldConfig::for_device(false)
    }

    fn field_with(particles: Vec<Particle>, width: f64, height: f64, config: FieldConfig) -> ParticleField {
        ParticleField {
            width,
            height,
            config,
            particles,
        }
    }

    #[test]
    fn particle_count_is_invariant_across_frames_and_resizes() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::new(800.0, 600.0, desktop_config(), &mut rng);
        assert_eq!(field.len(), 60);
        for frame in 0..200 {
            field.step();
            if frame == 50 {
                field.resize(400.0, 300.0);
            }
            if frame == 120 {
                field.resize(1024.0, 768.0);
            }
            assert_eq!(field.len(), 60);
        }
    }

    #[test]
    fn same_seed_gives_identical_trajectories() {
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let mut a = ParticleField::new(800.0, 600.0, desktop_config(), &mut rng_a);
        let mut b = ParticleField::new(800.0, 600.0, desktop_config(), &mut rng_b);
        for _ in 0..300 {
            a.step();
            b.step();
        }
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
        }
    }

    #[test]
    fn positions_stay_within_one_frame_of_the_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = ParticleField::new(640.0, 480.0, desktop_config(), &mut rng);
        for _ in 0..1000 {
            field.step();
            for p in field.particles() {
                assert!(p.pos[0] >= -Particle::MAX_SPEED && p.pos[0] <= 640.0 + Particle::MAX_SPEED);
                assert!(p.pos[1] >= -Particle::MAX_SPEED && p.pos[1] <= 480.0 + Particle::MAX_SPEED);
            }
        }
    }

    #[test]
    fn connection_opacity_fades_linearly_with_distance() {
        let field = field_with(Vec::new(), 800.0, 600.0, desktop_config());
        assert!((field.connection_opacity(0.0) - 0.03).abs() < 1e-12);
        assert!(field.connection_opacity(150.0).abs() < 1e-12);
        assert!((field.connection_opacity(75.0) - 0.015).abs() < 1e-12);
    }

    #[test]
    fn close_pair_produces_one_faded_line() {
        let particles = vec![
            Particle::new([0.0, 0.0], [0.0, 0.0], 2.0, 0.1, PALETTE[0]),
            Particle::new([10.0, 0.0], [0.0, 0.0], 2.0, 0.1, PALETTE[1]),
        ];
        let mut field = field_with(particles, 800.0, 600.0, desktop_config());
        field.step();
        // zero velocity: nothing moved
        assert_eq!(field.particles()[0].pos, [0.0, 0.0]);
        assert_eq!(field.particles()[1].pos, [10.0, 0.0]);
        let lines = field.connections();
        assert_eq!(lines.len(), 1);
        let expected = 0.03 * (1.0 - 10.0 / 150.0);
        assert!((lines[0].opacity - expected).abs() < 1e-12);
        assert_eq!(lines[0].from, [0.0, 0.0]);
        assert_eq!(lines[0].to, [10.0, 0.0]);
    }

    #[test]
    fn pair_at_the_threshold_draws_nothing() {
        let particles = vec![
            Particle::new([0.0, 0.0], [0.0, 0.0], 2.0, 0.1, PALETTE[0]),
            Particle::new([150.0, 0.0], [0.0, 0.0], 2.0, 0.1, PALETTE[1]),
        ];
        let field = field_with(particles, 800.0, 600.0, desktop_config());
        assert!(field.connections().is_empty());
    }

    #[test]
    fn pair_beyond_the_threshold_draws_nothing() {
        let particles = vec![
            Particle::new([0.0, 0.0], [0.0, 0.0], 2.0, 0.1, PALETTE[0]),
            Particle::new([500.0, 0.0], [0.0, 0.0], 2.0, 0.1, PALETTE[1]),
        ];
        let field = field_with(particles, 800.0, 600.0, desktop_config());
        assert!(field.connections().is_empty());
    }

    #[test]
    fn touch_config_skips_the_connection_pass_entirely() {
        let particles = vec![
            Particle::new([0.0, 0.0], [0.0, 0.0], 2.0, 0.1, PALETTE[0]),
            Particle::new([5.0, 0.0], [0.0, 0.0], 2.0, 0.1, PALETTE[1]),
        ];
        let field = field_with(particles, 800.0, 600.0, FieldConfig::for_device(true));
        assert!(!field.draws_connections());
        assert!(field.connections().is_empty());
    }

    #[test]
    fn resize_leaves_out_of_bounds_particles_alone_until_they_step() {
        let particles = vec![Particle::new([700.0, 500.0], [0.1, 0.1], 2.0, 0.1, PALETTE[0])];
        let mut field = field_with(particles, 800.0, 600.0, desktop_config());
        field.resize(400.0, 300.0);
        // stored position untouched by the resize itself
        assert_eq!(field.particles()[0].pos, [700.0, 500.0]);
        field.step();
        // now out of range on both axes, so both components reflected inward
        assert_eq!(field.particles()[0].vel, [-0.1, -0.1]);
    }

    #[test]
    fn boundary_reflection_overshoot_is_bounded_by_one_frame() {
        let particles = vec![Particle::new([799.9, 300.0], [0.2, 0.0], 2.0, 0.1, PALETTE[0])];
        let mut field = field_with(particles, 800.0, 600.0, desktop_config());
        field.step();
        let p = &field.particles()[0];
        assert_eq!(p.vel[0], -0.2);
        assert!(p.pos[0] <= 800.0 + 0.2);
    }
}
