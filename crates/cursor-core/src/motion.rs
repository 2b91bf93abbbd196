//! Spring follower for the cursor glyph.
//!
//! The target jumps to each new pointer sample; [`MotionFilter::step`] then
//! pulls the rendered position toward it once per display frame. The step
//! uses the closed-form solution of a damped spring, so it stays exact for
//! any frame time and never overshoots a target it starts at rest from.

use crate::constants::OFFSCREEN_PX;
use crate::input::PointerSample;
use crate::params::SpringParams;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SmoothedPosition {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2> for SmoothedPosition {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

#[derive(Clone, Debug)]
pub struct MotionFilter {
    omega: f32,
    damping_ratio: f32,
    half_size: f32,
    target: Vec2,
    position: Vec2,
    velocity: Vec2,
}

impl MotionFilter {
    pub fn new(spring: SpringParams, glyph_half_size_px: f32) -> Self {
        let start = Vec2::splat(OFFSCREEN_PX);
        Self {
            omega: spring.omega(),
            // underdamped springs are rejected by config validation
            damping_ratio: spring.damping_ratio.max(1.0),
            half_size: glyph_half_size_px,
            target: start,
            position: start,
            velocity: Vec2::ZERO,
        }
    }

    /// Moves the target to the sample, shifted so the glyph centres on it.
    pub fn set_target(&mut self, sample: &PointerSample) {
        self.target = sample.position() - Vec2::splat(self.half_size);
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn position(&self) -> SmoothedPosition {
        self.position.into()
    }

    pub fn step(&mut self, dt_sec: f32) {
        if !(dt_sec.is_finite() && dt_sec > 0.0) {
            return;
        }
        let (offset, velocity) = spring_step(
            self.position - self.target,
            self.velocity,
            self.omega,
            self.damping_ratio,
            dt_sec,
        );
        self.position = self.target + offset;
        self.velocity = velocity;
    }
}

/// Advances a unit-mass spring with rest length zero by `t` seconds.
/// Returns the new offset from the target and the new velocity.
fn spring_step(offset: Vec2, velocity: Vec2, omega: f32, zeta: f32, t: f32) -> (Vec2, Vec2) {
    if (zeta - 1.0).abs() < 1e-4 {
        // x(t) = (c1 + c2 t) e^(-wt)
        let c1 = offset;
        let c2 = velocity + c1 * omega;
        let decay = (-omega * t).exp();
        let x = (c1 + c2 * t) * decay;
        let v = (c2 - (c1 + c2 * t) * omega) * decay;
        (x, v)
    } else {
        // x(t) = c1 e^(r1 t) + c2 e^(r2 t), r1 > r2
        let s = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - s);
        let r2 = -omega * (zeta + s);
        let c2 = (velocity - offset * r1) / (r2 - r1);
        let c1 = offset - c2;
        let e1 = (r1 * t).exp();
        let e2 = (r2 * t).exp();
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerKind;

    fn sample(x: f32, y: f32) -> PointerSample {
        PointerSample {
            x,
            y,
            timestamp_ms: 0,
            kind: PointerKind::Mouse,
        }
    }

    #[test]
    fn target_is_centred_on_pointer() {
        let mut f = MotionFilter::new(SpringParams::default(), 16.0);
        f.set_target(&sample(100.0, 50.0));
        assert_eq!(f.target(), Vec2::new(84.0, 34.0));
    }

    #[test]
    fn starts_off_screen() {
        let f = MotionFilter::new(SpringParams::default(), 16.0);
        assert_eq!(f.position(), SmoothedPosition { x: -100.0, y: -100.0 });
    }

    #[test]
    fn zero_or_invalid_dt_is_ignored() {
        let mut f = MotionFilter::new(SpringParams::default(), 16.0);
        f.set_target(&sample(300.0, 300.0));
        let before = f.position();
        f.step(0.0);
        f.step(-0.016);
        f.step(f32::NAN);
        assert_eq!(f.position(), before);
    }

    #[test]
    fn overdamped_spring_matches_initial_conditions() {
        let (x, v) = spring_step(Vec2::new(10.0, 0.0), Vec2::ZERO, 20.0, 2.0, 0.0);
        assert!((x.x - 10.0).abs() < 1e-4);
        assert!(v.x.abs() < 1e-3);
    }
}
