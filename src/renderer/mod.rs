//! Hook line rendering
//!
//! Reduces simulated paths into hairlines or ribbons and hands them to a
//! presentation-owned [`DrawSink`].

pub mod hook_line;
pub mod shapes;
pub mod sink;
pub mod vertex;

pub use hook_line::{DrawPrimitives, line_width, outcome_color, reduce, submit};
pub use shapes::primitive_vertices;
pub use sink::{DrawCall, DrawSink, Quad, RecordingSink};
pub use vertex::{Rgba, Vertex, invert_color};
