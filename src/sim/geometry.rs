//! Geometry primitives for hook prediction
//!
//! Pure functions only. The two rounding helpers reproduce the fixed-point
//! stepping of the authoritative physics and must stay bit-stable: both round
//! half away from zero (`f32::round`).

use glam::Vec2;

use crate::consts::DIRECTION_FIXED_SCALE;

/// Intersections of a line with a circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineCircleHits {
    None,
    One(Vec2),
    /// Ordered along the line, from `p0` towards `p1`
    Two(Vec2, Vec2),
}

impl LineCircleHits {
    pub fn count(&self) -> usize {
        match self {
            LineCircleHits::None => 0,
            LineCircleHits::One(_) => 1,
            LineCircleHits::Two(..) => 2,
        }
    }
}

/// Intersect the infinite line through `p0` and `p1` with a circle
///
/// Solves `|p0 + t(p1 - p0) - center|² = radius²` for `t`. A degenerate line
/// (`p0 == p1`) has no direction and yields no intersections.
pub fn intersect_line_circle(p0: Vec2, p1: Vec2, center: Vec2, radius: f32) -> LineCircleHits {
    let d = p1 - p0;
    let f = p0 - center;

    let a = d.dot(d);
    if a <= 0.0 {
        return LineCircleHits::None;
    }
    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return LineCircleHits::None;
    }
    if discriminant == 0.0 {
        let t = -b / (2.0 * a);
        return LineCircleHits::One(p0 + d * t);
    }

    let root = discriminant.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);
    LineCircleHits::Two(p0 + d * t1, p0 + d * t2)
}

/// Whichever of `a` and `b` is closer to `reference` (ties go to `a`)
#[inline]
pub fn nearest_to(reference: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    if reference.distance(b) < reference.distance(a) {
        b
    } else {
        a
    }
}

/// Round each component to the nearest multiple of 1/256
#[inline]
pub fn quantize_to_fixed256(v: Vec2) -> Vec2 {
    (v * DIRECTION_FIXED_SCALE).round() / DIRECTION_FIXED_SCALE
}

/// Round each component to the nearest whole world unit
#[inline]
pub fn round_to_int(v: Vec2) -> Vec2 {
    v.round()
}

/// Closest point to `point` on the segment `p0`..`p1`
///
/// Returns `None` for a zero-length segment.
pub fn closest_point_on_segment(p0: Vec2, p1: Vec2, point: Vec2) -> Option<Vec2> {
    let line = p1 - p0;
    let len_sq = line.length_squared();
    if len_sq <= 0.0 {
        return None;
    }

    let t = ((point - p0).dot(line) / len_sq).clamp(0.0, 1.0);
    Some(p0 + line * t)
}
