//! Distance-gated spray trail.
//!
//! A particle is emitted only once the pointer has travelled at least the
//! emit distance from where the previous particle was emitted, so a slow
//! drag still leaves a trail while jitter in place leaves none.

use crate::constants::TRAIL_CAPACITY;
use crate::input::PointerSample;
use crate::params::CursorParams;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailParticle {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub size_px: f32,
    pub born_ms: u64,
}

impl TrailParticle {
    #[inline]
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.born_ms)
    }
}

pub struct TrailGenerator {
    capacity: usize,
    emit_distance: f32,
    jitter: f32,
    size_range: (f32, f32),
    lifetime_ms: u64,
    // most recent first
    particles: SmallVec<[TrailParticle; TRAIL_CAPACITY]>,
    last_position: Vec2,
    next_id: u64,
    rng: StdRng,
}

impl TrailGenerator {
    pub fn new(params: &CursorParams, seed: u64) -> Self {
        Self {
            capacity: params.trail_capacity,
            emit_distance: params.emit_distance_px,
            jitter: params.jitter_px,
            size_range: params.particle_size_px,
            lifetime_ms: params.particle_lifetime_ms,
            particles: SmallVec::new(),
            last_position: Vec2::ZERO,
            next_id: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Feeds one move sample; returns the new particle if one was emitted.
    pub fn on_sample(&mut self, sample: &PointerSample) -> Option<&TrailParticle> {
        let pos = sample.position();
        if pos.distance(self.last_position) < self.emit_distance {
            return None;
        }

        let offset = Vec2::new(
            self.rng.gen_range(-self.jitter..=self.jitter),
            self.rng.gen_range(-self.jitter..=self.jitter),
        );
        let particle = TrailParticle {
            id: self.next_id,
            x: pos.x + offset.x,
            y: pos.y + offset.y,
            size_px: self.rng.gen_range(self.size_range.0..=self.size_range.1),
            born_ms: sample.timestamp_ms,
        };
        self.next_id = self.next_id.wrapping_add(1);

        self.particles.insert(0, particle);
        self.particles.truncate(self.capacity);
        self.last_position = pos;
        log::trace!(
            "[trail] emit #{} at ({:.1},{:.1}) size {:.1}",
            particle.id,
            particle.x,
            particle.y,
            particle.size_px
        );
        self.particles.first()
    }

    /// Drops particles whose decay has finished. Returns how many were dropped.
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let before = self.particles.len();
        let lifetime = self.lifetime_ms;
        self.particles.retain(|p| p.age_ms(now_ms) < lifetime);
        before - self.particles.len()
    }

    /// Particles still inside their lifetime with their age, most recent first.
    pub fn live(&self, now_ms: u64) -> impl Iterator<Item = (&TrailParticle, u64)> + '_ {
        let lifetime = self.lifetime_ms;
        self.particles
            .iter()
            .map(move |p| (p, p.age_ms(now_ms)))
            .filter(move |(_, age)| *age < lifetime)
    }

    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn last_position(&self) -> Vec2 {
        self.last_position
    }

    pub fn lifetime_ms(&self) -> u64 {
        self.lifetime_ms
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
