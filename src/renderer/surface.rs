//! Render surface contract
//!
//! A surface reports its drawable size and rasterizes draw commands. The
//! composer never talks to a surface directly; the session composes a frame
//! and hands it to `present`.

use glam::Vec2;

use super::command::{DrawCommand, Frame};
use crate::error::RadarError;

/// Anything that can rasterize a frame
pub trait RenderSurface {
    /// Current drawable (width, height) in pixels
    fn size(&self) -> (f32, f32);

    /// Rasterize one command
    fn draw(&mut self, command: &DrawCommand);

    /// Called once before the first command of every frame
    fn begin_frame(&mut self) {}

    /// Consume a frame in order
    fn present(&mut self, frame: Frame) {
        self.begin_frame();
        for command in frame {
            self.draw(&command);
        }
    }
}

/// Center and radius of the display disk on a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Vec2,
    pub radius: f32,
}

impl Viewport {
    /// Fit the display disk inside a `width` x `height` surface with `margin`
    /// pixels to spare.
    pub fn from_surface_size(width: f32, height: f32, margin: f32) -> Result<Self, RadarError> {
        let center = Vec2::new((width / 2.0).floor(), (height / 2.0).floor());
        let radius = center.x.min(center.y) - margin;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RadarError::DegenerateSurface { radius });
        }
        Ok(Self { center, radius })
    }

    pub fn for_surface(surface: &impl RenderSurface, margin: f32) -> Result<Self, RadarError> {
        let (width, height) = surface.size();
        Self::from_surface_size(width, height, margin)
    }
}

/// Surface that keeps the commands of the last presented frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    commands: Vec<DrawCommand>,
    frames_presented: u64,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            frames_presented: 0,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Commands of the most recent frame
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn begin_frame(&mut self) {
        self.commands.clear();
        self.frames_presented += 1;
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.commands.push(command.clone());
    }
}
