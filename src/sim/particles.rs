//! Cosmetic particle pools
//!
//! Two independent pools: brick explosions and the ball trail. Purely visual;
//! nothing here feeds back into gameplay state.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Color triple handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Explosion palette: tomato, gold, orange-red, dark orange
pub const EXPLOSION_PALETTE: [Rgb; 4] = [
    Rgb(255, 99, 71),
    Rgb(255, 215, 0),
    Rgb(255, 69, 0),
    Rgb(255, 140, 0),
];

/// Ball color, shared by the trail
pub const BALL_COLOR: Rgb = Rgb(0, 149, 221);

/// A single explosion particle
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Rgb,
    /// Opacity, 1 at spawn, fades to 0
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, color: Rgb, rng: &mut Pcg32) -> Self {
        Self {
            pos,
            vel: Vec2::new(
                (rng.random::<f32>() - 0.5) * 4.0,
                (rng.random::<f32>() - 0.5) * 4.0,
            ),
            size: rng.random::<f32>() * 5.0 + 2.0,
            color,
            alpha: 1.0,
        }
    }

    pub fn step(&mut self) {
        self.pos += self.vel;
        self.alpha -= 0.02;
    }

    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// A ball trail particle; shrinks as it fades
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrailParticle {
    pub pos: Vec2,
    pub size: f32,
    pub alpha: f32,
    /// Per-instance fade rate; impact bursts fade faster
    pub fade_speed: f32,
}

impl TrailParticle {
    pub fn new(pos: Vec2, ball_radius: f32, rng: &mut Pcg32) -> Self {
        Self {
            pos,
            size: ball_radius * (0.3 + rng.random::<f32>() * 0.3),
            alpha: 1.0,
            fade_speed: 0.03 + rng.random::<f32>() * 0.02,
        }
    }

    pub fn step(&mut self) {
        self.alpha -= self.fade_speed;
        self.size -= 0.1;
    }

    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0 || self.size <= 0.0
    }
}

/// Spawn a brick explosion burst at `center`
pub fn spawn_explosion(pool: &mut Vec<Particle>, center: Vec2, rng: &mut Pcg32) {
    for _ in 0..EXPLOSION_PARTICLES {
        let color = EXPLOSION_PALETTE[rng.random_range(0..EXPLOSION_PALETTE.len())];
        pool.push(Particle::new(center, color, rng));
    }
}

/// Radial burst of fast-fading trail particles at a wall impact point.
/// Respects the trail cap, same as the passive spawn.
pub fn spawn_impact(pool: &mut Vec<TrailParticle>, pos: Vec2, ball_radius: f32, rng: &mut Pcg32) {
    for i in 0..IMPACT_PARTICLES {
        if pool.len() >= MAX_TRAIL_PARTICLES {
            break;
        }
        let angle = (i as f32 / IMPACT_PARTICLES as f32) * std::f32::consts::TAU;
        let mut p = TrailParticle::new(pos + Vec2::from_angle(angle) * 5.0, ball_radius, rng);
        p.fade_speed = 0.1;
        pool.push(p);
    }
}

/// Passive per-frame trail spawn at the ball position; suppressed at the cap
pub fn spawn_trail(pool: &mut Vec<TrailParticle>, pos: Vec2, ball_radius: f32, rng: &mut Pcg32) {
    if pool.len() < MAX_TRAIL_PARTICLES {
        pool.push(TrailParticle::new(pos, ball_radius, rng));
    }
}

/// Advance both pools one frame and drop dead entries
pub fn step_pools(particles: &mut Vec<Particle>, trail: &mut Vec<TrailParticle>) {
    for p in particles.iter_mut() {
        p.step();
    }
    particles.retain(|p| !p.is_dead());

    for t in trail.iter_mut() {
        t.step();
    }
    trail.retain(|t| !t.is_dead());
}
