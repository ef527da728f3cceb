//! Draw commands emitted by the layer composer
//!
//! Commands are backend-neutral: positions are screen pixels, angles use the
//! radar convention (0 = up, clockwise), colors are 8-bit RGBA.

use std::ops::Range;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Normalized [r, g, b, a] for GPU vertices
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// How a closed shape is filled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Solid(Color),
    /// Two-stop radial gradient from `center` (inner) to `radius` (outer)
    RadialGradient {
        center: Vec2,
        radius: f32,
        inner: Color,
        outer: Color,
    },
}

impl Paint {
    /// Color at a distance from the gradient center (solid paints ignore it)
    pub fn color_at(&self, point: Vec2) -> Color {
        match *self {
            Paint::Solid(color) => color,
            Paint::RadialGradient {
                center,
                radius,
                inner,
                outer,
            } => {
                let t = if radius > 0.0 {
                    (point.distance(center) / radius).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
                Color::rgba(
                    lerp(inner.r, outer.r),
                    lerp(inner.g, outer.g),
                    lerp(inner.b, outer.b),
                    lerp(inner.a, outer.a),
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dotted,
}

/// Outline pen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub style: LineStyle,
}

impl Stroke {
    pub const fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Solid,
        }
    }

    pub const fn dotted(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Dotted,
        }
    }
}

/// A single drawing operation for a render surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Opaque fill of the whole surface
    Clear { color: Color },
    /// Circle with optional fill and optional outline
    Circle {
        center: Vec2,
        radius: f32,
        fill: Option<Paint>,
        stroke: Option<Stroke>,
    },
    /// Filled wedge from `start_deg` spanning `span_deg` clockwise
    Pie {
        center: Vec2,
        radius: f32,
        start_deg: f32,
        span_deg: f32,
        fill: Paint,
    },
    Line { from: Vec2, to: Vec2, stroke: Stroke },
    /// Text with its baseline starting at `position`
    Text {
        position: Vec2,
        text: String,
        color: Color,
    },
}

/// Compositing layers, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    Background,
    Display,
    Sweep,
    Targets,
    Hud,
}

impl Layer {
    pub const ALL: [Layer; 5] = [
        Layer::Background,
        Layer::Display,
        Layer::Sweep,
        Layer::Targets,
        Layer::Hud,
    ];
}

/// One composed frame: an ordered, immutable command list.
///
/// A frame is consumed once by a surface through `IntoIterator`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    commands: Vec<DrawCommand>,
    layers: Vec<(Layer, Range<usize>)>,
}

impl Frame {
    /// A frame that draws nothing (degenerate surface)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands belonging to one layer (empty if the layer was not drawn)
    pub fn layer(&self, layer: Layer) -> &[DrawCommand] {
        self.layers
            .iter()
            .find(|(l, _)| *l == layer)
            .map(|(_, range)| &self.commands[range.clone()])
            .unwrap_or(&[])
    }

    /// Layers present in this frame, in draw order
    pub fn layer_order(&self) -> impl Iterator<Item = Layer> + '_ {
        self.layers.iter().map(|(l, _)| *l)
    }
}

impl IntoIterator for Frame {
    type Item = DrawCommand;
    type IntoIter = std::vec::IntoIter<DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

/// Accumulates commands layer by layer while a frame is composed
#[derive(Debug, Default)]
pub(crate) struct FrameBuilder {
    frame: Frame,
}

impl FrameBuilder {
    /// Append all commands of a layer; layers must arrive back to front
    pub(crate) fn layer(&mut self, layer: Layer, commands: impl IntoIterator<Item = DrawCommand>) {
        let start = self.frame.commands.len();
        self.frame.commands.extend(commands);
        let end = self.frame.commands.len();
        self.frame.layers.push((layer, start..end));
    }

    pub(crate) fn finish(self) -> Frame {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let paint = Paint::RadialGradient {
            center: Vec2::ZERO,
            radius: 100.0,
            inner: Color::rgba(0, 255, 0, 80),
            outer: Color::rgba(0, 255, 0, 0),
        };
        assert_eq!(paint.color_at(Vec2::ZERO).a, 80);
        assert_eq!(paint.color_at(Vec2::new(100.0, 0.0)).a, 0);
        assert_eq!(paint.color_at(Vec2::new(50.0, 0.0)).a, 40);
        // Beyond the rim stays at the outer stop
        assert_eq!(paint.color_at(Vec2::new(0.0, 300.0)).a, 0);
    }

    #[test]
    fn test_color_to_f32() {
        assert_eq!(Color::rgb(255, 0, 51).to_f32(), [1.0, 0.0, 0.2, 1.0]);
    }

    #[test]
    fn test_frame_layers() {
        let mut builder = FrameBuilder::default();
        builder.layer(Layer::Background, [DrawCommand::Clear { color: Color::rgb(0, 0, 0) }]);
        builder.layer(Layer::Display, Vec::<DrawCommand>::new());
        let frame = builder.finish();

        assert_eq!(frame.len(), 1);
        assert_eq!(frame.layer(Layer::Background).len(), 1);
        assert!(frame.layer(Layer::Display).is_empty());
        assert!(frame.layer(Layer::Hud).is_empty());
        assert_eq!(frame.layer_order().collect::<Vec<_>>(), vec![Layer::Background, Layer::Display]);
    }
}
