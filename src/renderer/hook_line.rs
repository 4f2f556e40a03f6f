//! Reduction of a simulated hook path into draw primitives
//!
//! A thickness of zero draws hairlines. Anything thicker becomes one quad per
//! segment, widened perpendicular to the firing direction and scaled by the
//! camera zoom so the ribbon keeps the same apparent width on screen.

use glam::Vec2;

use super::sink::{DrawSink, Quad};
use super::vertex::{Rgba, invert_color};
use crate::settings::OutcomeColors;
use crate::sim::{LineSegment, Outcome, SolidKind};

/// What to hand to the sink
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitives {
    Lines(Vec<LineSegment>),
    Ribbon(Vec<Quad>),
}

impl DrawPrimitives {
    pub fn len(&self) -> usize {
        match self {
            DrawPrimitives::Lines(segments) => segments.len(),
            DrawPrimitives::Ribbon(quads) => quads.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ribbon half-width for a line size setting (0 = hairline)
pub fn line_width(size: u32) -> f32 {
    if size == 0 {
        0.0
    } else {
        0.5 + (size - 1) as f32 * 0.25
    }
}

/// Turn segments into hairlines or ribbon quads
///
/// Every segment lies along the aim, so one offset from `firing_direction`
/// widens them all.
pub fn reduce(segments: &[LineSegment], firing_direction: Vec2, thickness: f32, zoom: f32) -> DrawPrimitives {
    if thickness <= 0.0 {
        return DrawPrimitives::Lines(segments.to_vec());
    }

    let dir = firing_direction.normalize_or_zero();
    // Rotated a quarter turn clockwise
    let offset = Vec2::new(dir.y, -dir.x) * zoom * thickness;
    let quads = segments
        .iter()
        .map(|segment| Quad {
            corners: [
                segment.end - offset,
                segment.end + offset,
                segment.start - offset,
                segment.start + offset,
            ],
        })
        .collect();

    DrawPrimitives::Ribbon(quads)
}

/// Line color for a simulation outcome
pub fn outcome_color(outcome: Outcome, colors: &OutcomeColors) -> Rgba {
    match outcome {
        Outcome::FreeRetract | Outcome::HitSolid(SolidKind::NoHook) => colors.no_coll,
        Outcome::HitSolid(SolidKind::Hookable) | Outcome::StuckInTeleporter => colors.hookable_coll,
        Outcome::HitPlayer(_) => colors.tee_coll,
        Outcome::AmbiguousTeleport | Outcome::Exhausted => invert_color(colors.tee_coll),
    }
}

/// Forward primitives to a sink
pub fn submit<S: DrawSink + ?Sized>(primitives: &DrawPrimitives, color: Rgba, alpha: f32, sink: &mut S) {
    match primitives {
        DrawPrimitives::Lines(segments) => sink.lines(segments, color, alpha),
        DrawPrimitives::Ribbon(quads) => sink.ribbon(quads, color, alpha),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::sink::{DrawCall, RecordingSink};
    use crate::sim::ActorId;

    fn horizontal() -> Vec<LineSegment> {
        vec![
            LineSegment::new(Vec2::new(42.0, 0.0), Vec2::new(300.0, 0.0)),
            LineSegment::new(Vec2::new(1000.0, 0.0), Vec2::new(1200.0, 0.0)),
        ]
    }

    #[test]
    fn test_line_width() {
        assert_eq!(line_width(0), 0.0);
        assert_eq!(line_width(1), 0.5);
        assert_eq!(line_width(5), 1.5);
    }

    #[test]
    fn test_zero_thickness_keeps_segments() {
        let segments = horizontal();
        assert_eq!(reduce(&segments, Vec2::X, 0.0, 1.0), DrawPrimitives::Lines(segments));
    }

    #[test]
    fn test_ribbon_is_perpendicular_and_zoomed() {
        let primitives = reduce(&horizontal(), Vec2::X, 0.5, 2.0);
        let DrawPrimitives::Ribbon(quads) = primitives else {
            panic!("expected a ribbon");
        };
        assert_eq!(quads.len(), 2);
        assert_eq!(
            quads[0].corners,
            [
                Vec2::new(300.0, 1.0),
                Vec2::new(300.0, -1.0),
                Vec2::new(42.0, 1.0),
                Vec2::new(42.0, -1.0),
            ]
        );
    }

    #[test]
    fn test_every_quad_uses_firing_perpendicular() {
        // A slightly skewed segment still gets the aim's offset
        let segments = [LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 3.0))];
        let DrawPrimitives::Ribbon(quads) = reduce(&segments, Vec2::new(2.0, 0.0), 1.0, 1.0) else {
            panic!("expected a ribbon");
        };
        assert_eq!(quads[0].corners[0], Vec2::new(100.0, 4.0));
        assert_eq!(quads[0].corners[3], Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_primitive_counts() {
        assert_eq!(reduce(&horizontal(), Vec2::X, 0.0, 1.0).len(), 2);
        assert_eq!(reduce(&horizontal(), Vec2::X, 1.0, 1.0).len(), 2);
        assert!(reduce(&[], Vec2::X, 1.0, 1.0).is_empty());
        assert!(!reduce(&horizontal(), Vec2::X, 0.0, 1.0).is_empty());
    }

    #[test]
    fn test_degenerate_segment_uses_firing_direction() {
        let point = Vec2::new(5.0, 5.0);
        let primitives = reduce(&[LineSegment::new(point, point)], Vec2::Y, 1.0, 1.0);
        let DrawPrimitives::Ribbon(quads) = primitives else {
            panic!("expected a ribbon");
        };
        assert_eq!(quads[0].corners[0], Vec2::new(4.0, 5.0));
        assert_eq!(quads[0].corners[1], Vec2::new(6.0, 5.0));
    }

    #[test]
    fn test_outcome_colors() {
        let colors = OutcomeColors::default();
        assert_eq!(outcome_color(Outcome::FreeRetract, &colors), colors.no_coll);
        assert_eq!(outcome_color(Outcome::HitSolid(SolidKind::NoHook), &colors), colors.no_coll);
        assert_eq!(outcome_color(Outcome::HitSolid(SolidKind::Hookable), &colors), colors.hookable_coll);
        assert_eq!(outcome_color(Outcome::StuckInTeleporter, &colors), colors.hookable_coll);
        assert_eq!(outcome_color(Outcome::HitPlayer(ActorId(1)), &colors), colors.tee_coll);
        assert_eq!(outcome_color(Outcome::AmbiguousTeleport, &colors), invert_color(colors.tee_coll));
        assert_eq!(outcome_color(Outcome::Exhausted, &colors), invert_color(colors.tee_coll));
    }

    #[test]
    fn test_submit_routes_by_kind() {
        let mut sink = RecordingSink::default();
        submit(&reduce(&horizontal(), Vec2::X, 0.0, 1.0), [1.0; 4], 0.5, &mut sink);
        submit(&reduce(&horizontal(), Vec2::X, 1.0, 1.0), [1.0; 4], 0.5, &mut sink);

        assert!(matches!(sink.calls[0], DrawCall::Lines { ref segments, .. } if segments.len() == 2));
        assert!(matches!(sink.calls[1], DrawCall::Ribbon { ref quads, alpha, .. } if quads.len() == 2 && alpha == 0.5));
    }
}
