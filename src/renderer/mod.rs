//! Rendering module
//!
//! Composes simulation state into backend-neutral draw commands and
//! tessellates them into vertex lists for a GPU surface.

pub mod command;
pub mod compose;
pub mod encoder;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use command::{Color, DrawCommand, Frame, Layer, LineStyle, Paint, Stroke};
pub use compose::{LayerComposer, compose};
pub use encoder::{TargetStyle, encode};
pub use shapes::{Tessellator, TextLabel};
pub use surface::{RecordingSurface, RenderSurface, Viewport};
pub use vertex::Vertex;
