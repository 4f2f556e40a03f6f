//! Draw interface owned by the presentation layer

use glam::Vec2;

use super::vertex::Rgba;
use crate::sim::LineSegment;

/// Four corners of one ribbon piece
///
/// Corner order is end-left, end-right, start-left, start-right, the layout a
/// freeform quad batch expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [Vec2; 4],
}

/// Receives the reduced hook line
pub trait DrawSink {
    /// Hairline segments
    fn lines(&mut self, segments: &[LineSegment], color: Rgba, alpha: f32);

    /// Filled ribbon pieces
    fn ribbon(&mut self, quads: &[Quad], color: Rgba, alpha: f32);
}

impl<T: DrawSink + ?Sized> DrawSink for &mut T {
    fn lines(&mut self, segments: &[LineSegment], color: Rgba, alpha: f32) {
        (**self).lines(segments, color, alpha);
    }

    fn ribbon(&mut self, quads: &[Quad], color: Rgba, alpha: f32) {
        (**self).ribbon(quads, color, alpha);
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Lines {
        segments: Vec<LineSegment>,
        color: Rgba,
        alpha: f32,
    },
    Ribbon {
        quads: Vec<Quad>,
        color: Rgba,
        alpha: f32,
    },
}

/// Sink that keeps every call, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub calls: Vec<DrawCall>,
}

impl DrawSink for RecordingSink {
    fn lines(&mut self, segments: &[LineSegment], color: Rgba, alpha: f32) {
        self.calls.push(DrawCall::Lines {
            segments: segments.to_vec(),
            color,
            alpha,
        });
    }

    fn ribbon(&mut self, quads: &[Quad], color: Rgba, alpha: f32) {
        self.calls.push(DrawCall::Ribbon {
            quads: quads.to_vec(),
            color,
            alpha,
        });
    }
}
