//! Shape tessellation for 2D primitives
//!
//! `Tessellator` is a render surface that turns draw commands into triangle
//! lists ready for a vertex buffer. Radial gradients become per-vertex colors
//! (center vertex gets the inner stop, rim vertices the outer stop) and are
//! interpolated by the rasterizer.

use glam::Vec2;

use super::command::{Color, DrawCommand, LineStyle, Paint, Stroke};
use super::surface::RenderSurface;
use super::vertex::Vertex;
use crate::rim_point;

/// Length of a dash (and of the gap after it) in dotted strokes, pixels
const DASH_LENGTH: f32 = 3.0;

/// A text placement; glyph rasterization is left to the host
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub position: Vec2,
    pub text: String,
    pub color: Color,
}

fn push_triangle(out: &mut Vec<Vertex>, a: Vertex, b: Vertex, c: Vertex) {
    out.extend_from_slice(&[a, b, c]);
}

fn push_quad(out: &mut Vec<Vertex>, a: Vertex, b: Vertex, c: Vertex, d: Vertex) {
    // a-b on one edge, c-d on the opposite edge
    push_triangle(out, a, b, c);
    push_triangle(out, c, b, d);
}

/// Generate vertices for a filled circle
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, paint: &Paint, segments: u32) {
    let inner = Vertex::at(center, paint.color_at(center));

    for i in 0..segments {
        let a1 = (i as f32 / segments as f32) * 360.0;
        let a2 = ((i + 1) as f32 / segments as f32) * 360.0;
        let p1 = rim_point(center, radius, a1);
        let p2 = rim_point(center, radius, a2);

        // Triangle from center to edge
        push_triangle(
            out,
            inner,
            Vertex::at(p1, paint.color_at(p1)),
            Vertex::at(p2, paint.color_at(p2)),
        );
    }
}

/// Generate vertices for a ring (hollow circle) centered on `radius`
pub fn ring(out: &mut Vec<Vertex>, center: Vec2, radius: f32, stroke: &Stroke, segments: u32) {
    let inner_radius = (radius - stroke.width / 2.0).max(0.0);
    let outer_radius = radius + stroke.width / 2.0;

    for i in 0..segments {
        if stroke.style == LineStyle::Dotted && i % 2 == 1 {
            continue;
        }
        let a1 = (i as f32 / segments as f32) * 360.0;
        let a2 = ((i + 1) as f32 / segments as f32) * 360.0;

        push_quad(
            out,
            Vertex::at(rim_point(center, inner_radius, a1), stroke.color),
            Vertex::at(rim_point(center, outer_radius, a1), stroke.color),
            Vertex::at(rim_point(center, inner_radius, a2), stroke.color),
            Vertex::at(rim_point(center, outer_radius, a2), stroke.color),
        );
    }
}

/// Generate vertices for a filled wedge.
///
/// The wedge is sampled in radar degrees through the same mapping as the
/// sweep line, so a wedge centered on a bearing is symmetric about that line.
pub fn pie(
    out: &mut Vec<Vertex>,
    center: Vec2,
    radius: f32,
    start_deg: f32,
    span_deg: f32,
    paint: &Paint,
    segments_per_degree: f32,
) {
    let num_segments = ((span_deg.abs() * segments_per_degree) as u32).max(4);
    let inner = Vertex::at(center, paint.color_at(center));

    for i in 0..num_segments {
        let t1 = i as f32 / num_segments as f32;
        let t2 = (i + 1) as f32 / num_segments as f32;
        let p1 = rim_point(center, radius, start_deg + t1 * span_deg);
        let p2 = rim_point(center, radius, start_deg + t2 * span_deg);

        push_triangle(
            out,
            inner,
            Vertex::at(p1, paint.color_at(p1)),
            Vertex::at(p2, paint.color_at(p2)),
        );
    }
}

/// Generate vertices for a straight stroke (dashed if the stroke is dotted)
pub fn line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, stroke: &Stroke) {
    let delta = to - from;
    let length = delta.length();
    if length <= f32::EPSILON {
        return;
    }
    let dir = delta / length;
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (stroke.width / 2.0);

    let mut emit = |a: Vec2, b: Vec2| {
        push_quad(
            out,
            Vertex::at(a + perp, stroke.color),
            Vertex::at(a - perp, stroke.color),
            Vertex::at(b + perp, stroke.color),
            Vertex::at(b - perp, stroke.color),
        );
    };

    match stroke.style {
        LineStyle::Solid => emit(from, to),
        LineStyle::Dotted => {
            let mut t = 0.0;
            while t < length {
                let end = (t + DASH_LENGTH).min(length);
                emit(from + dir * t, from + dir * end);
                t += DASH_LENGTH * 2.0;
            }
        }
    }
}

/// Two triangles covering the whole surface
pub fn fill_rect(out: &mut Vec<Vertex>, min: Vec2, max: Vec2, color: Color) {
    push_quad(
        out,
        Vertex::at(min, color),
        Vertex::at(Vec2::new(max.x, min.y), color),
        Vertex::at(Vec2::new(min.x, max.y), color),
        Vertex::at(max, color),
    );
}

/// Render surface producing triangle lists in pixel space
#[derive(Debug, Clone)]
pub struct Tessellator {
    pub width: f32,
    pub height: f32,
    /// Segments per full circle
    pub circle_segments: u32,
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
}

impl Tessellator {
    pub fn new(width: f32, height: f32, circle_segments: u32) -> Self {
        Self {
            width,
            height,
            circle_segments: circle_segments.max(8),
            vertices: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Triangle list of the last frame (pixel coordinates, 3 vertices per triangle)
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Text placements of the last frame
    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Last frame in clip space, ready for upload
    pub fn clip_space_vertices(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .map(|v| v.to_clip(self.width, self.height))
            .collect()
    }

    fn segments_per_degree(&self) -> f32 {
        self.circle_segments as f32 / 360.0
    }
}

impl RenderSurface for Tessellator {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn begin_frame(&mut self) {
        self.vertices.clear();
        self.labels.clear();
    }

    fn draw(&mut self, command: &DrawCommand) {
        let segments = self.circle_segments;
        match command {
            DrawCommand::Clear { color } => {
                fill_rect(&mut self.vertices, Vec2::ZERO, Vec2::new(self.width, self.height), *color);
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                if let Some(paint) = fill {
                    circle(&mut self.vertices, *center, *radius, paint, segments);
                }
                if let Some(stroke) = stroke {
                    ring(&mut self.vertices, *center, *radius, stroke, segments);
                }
            }
            DrawCommand::Pie {
                center,
                radius,
                start_deg,
                span_deg,
                fill,
            } => {
                let density = self.segments_per_degree();
                pie(&mut self.vertices, *center, *radius, *start_deg, *span_deg, fill, density);
            }
            DrawCommand::Line { from, to, stroke } => {
                line(&mut self.vertices, *from, *to, stroke);
            }
            DrawCommand::Text {
                position,
                text,
                color,
            } => self.labels.push(TextLabel {
                position: *position,
                text: text.clone(),
                color: *color,
            }),
        }
    }
}
