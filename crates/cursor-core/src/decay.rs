//! Particle decay curve, a pure function of age.
//!
//! Keyframes at normalized times 0, 0.4 and 1: the bubble holds its opacity
//! while growing slightly, then fades out while swelling and losing its ring.

const TIMES: [f32; 3] = [0.0, 0.4, 1.0];
const OPACITY: [f32; 3] = [0.7, 0.7, 0.0];
const SCALE: [f32; 3] = [0.8, 1.0, 1.8];
const BORDER_PX: [f32; 3] = [2.0, 2.0, 0.0];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleLook {
    pub opacity: f32,
    pub scale: f32,
    pub border_px: f32,
    pub finished: bool,
}

impl ParticleLook {
    pub fn at(age_ms: u64, lifetime_ms: u64) -> Self {
        if lifetime_ms == 0 || age_ms >= lifetime_ms {
            return Self {
                opacity: OPACITY[2],
                scale: SCALE[2],
                border_px: BORDER_PX[2],
                finished: true,
            };
        }
        let t = age_ms as f32 / lifetime_ms as f32;
        let (seg, local) = segment(t);
        let e = ease_out(local);
        Self {
            opacity: lerp(OPACITY[seg], OPACITY[seg + 1], e),
            scale: lerp(SCALE[seg], SCALE[seg + 1], e),
            border_px: lerp(BORDER_PX[seg], BORDER_PX[seg + 1], e),
            finished: false,
        }
    }
}

#[inline]
fn segment(t: f32) -> (usize, f32) {
    let seg = if t < TIMES[1] { 0 } else { 1 };
    let span = TIMES[seg + 1] - TIMES[seg];
    (seg, ((t - TIMES[seg]) / span).clamp(0.0, 1.0))
}

// quadratic ease-out
#[inline]
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_keyframe() {
        let look = ParticleLook::at(0, 600);
        assert!((look.opacity - 0.7).abs() < 1e-6);
        assert!((look.scale - 0.8).abs() < 1e-6);
        assert!((look.border_px - 2.0).abs() < 1e-6);
        assert!(!look.finished);
    }

    #[test]
    fn middle_keyframe_is_hit() {
        let look = ParticleLook::at(240, 600);
        assert!((look.opacity - 0.7).abs() < 1e-5);
        assert!((look.scale - 1.0).abs() < 1e-5);
    }

    #[test]
    fn fades_monotonically_after_hold() {
        let mut prev = ParticleLook::at(240, 600).opacity;
        for age in (250..600).step_by(25) {
            let o = ParticleLook::at(age, 600).opacity;
            assert!(o <= prev + 1e-6, "opacity rose at {age}ms");
            prev = o;
        }
    }

    #[test]
    fn finished_at_lifetime() {
        let look = ParticleLook::at(600, 600);
        assert!(look.finished);
        assert_eq!(look.opacity, 0.0);
        assert!((look.scale - 1.8).abs() < 1e-6);
        assert_eq!(look.border_px, 0.0);
    }
}
