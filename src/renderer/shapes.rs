//! Vertex generation for hook line primitives

use super::hook_line::DrawPrimitives;
use super::sink::Quad;
use super::vertex::{Rgba, Vertex, with_alpha};
use crate::sim::LineSegment;

/// Upload-ready vertices for reduced primitives, alpha baked into the color
///
/// Hairlines become a line list, ribbons a triangle list.
pub fn primitive_vertices(primitives: &DrawPrimitives, color: Rgba, alpha: f32) -> Vec<Vertex> {
    let color = with_alpha(color, color[3] * alpha);
    match primitives {
        DrawPrimitives::Lines(segments) => line_vertices(segments, color),
        DrawPrimitives::Ribbon(quads) => ribbon_vertices(quads, color),
    }
}

/// Triangle-list vertices for ribbon quads (two triangles per quad)
pub fn ribbon_vertices(quads: &[Quad], color: Rgba) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(quads.len() * 6);

    for quad in quads {
        let [end_l, end_r, start_l, start_r] = quad.corners;

        vertices.push(Vertex::new(start_l.x, start_l.y, color));
        vertices.push(Vertex::new(start_r.x, start_r.y, color));
        vertices.push(Vertex::new(end_l.x, end_l.y, color));

        vertices.push(Vertex::new(end_l.x, end_l.y, color));
        vertices.push(Vertex::new(start_r.x, start_r.y, color));
        vertices.push(Vertex::new(end_r.x, end_r.y, color));
    }

    vertices
}

/// Line-list vertices (two per segment)
pub fn line_vertices(segments: &[LineSegment], color: Rgba) -> Vec<Vertex> {
    segments
        .iter()
        .flat_map(|s| {
            [
                Vertex::new(s.start.x, s.start.y, color),
                Vertex::new(s.end.x, s.end.y, color),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_ribbon_vertices_cover_all_corners() {
        let quad = Quad {
            corners: [
                Vec2::new(10.0, 1.0),
                Vec2::new(10.0, -1.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(0.0, -1.0),
            ],
        };
        let vertices = ribbon_vertices(&[quad, quad], [1.0; 4]);
        assert_eq!(vertices.len(), 12);
        for corner in quad.corners {
            assert!(vertices[..6].iter().any(|v| v.position == [corner.x, corner.y]));
        }
    }

    #[test]
    fn test_primitive_vertices_bake_alpha() {
        let segments = vec![LineSegment::new(Vec2::ZERO, Vec2::X)];
        let vertices = primitive_vertices(&DrawPrimitives::Lines(segments), [1.0, 0.0, 0.0, 1.0], 0.25);
        assert_eq!(vertices.len(), 2);
        assert!(vertices.iter().all(|v| v.color == [1.0, 0.0, 0.0, 0.25]));
    }

    #[test]
    fn test_line_vertices() {
        let segments = [LineSegment::new(Vec2::ZERO, Vec2::new(5.0, 0.0))];
        let vertices = line_vertices(&segments, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[1].position, [5.0, 0.0]);
    }
}
