use crate::foundation::core::{Rect, Vec2};

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn lerp_vec2(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Fraction of `target`'s area that lies inside `viewport`, in `[0, 1]`.
///
/// Degenerate targets count as fully visible once they touch the viewport.
pub(crate) fn visible_ratio(target: Rect, viewport: Rect) -> f64 {
    let w = (target.x1.min(viewport.x1) - target.x0.max(viewport.x0)).max(0.0);
    let h = (target.y1.min(viewport.y1) - target.y0.max(viewport.y0)).max(0.0);
    let area = target.width().abs() * target.height().abs();
    if area <= 0.0 {
        let touches = target.x0 <= viewport.x1
            && viewport.x0 <= target.x1
            && target.y0 <= viewport.y1
            && viewport.y0 <= target.y1;
        return if touches { 1.0 } else { 0.0 };
    }
    ((w * h) / area).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform sample in `[0, 1)` with 53 bits of precision.
    pub(crate) fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
