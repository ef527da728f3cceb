//! Vertex types for tessellated frames

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::command::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(point: Vec2, color: Color) -> Self {
        Self::new(point.x, point.y, color.to_f32())
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }

    /// Same vertex with its pixel position mapped to clip space for a
    /// `width` x `height` surface (y up)
    pub fn to_clip(self, width: f32, height: f32) -> Self {
        let [x, y] = self.position;
        Self {
            position: [x / width * 2.0 - 1.0, 1.0 - y / height * 2.0],
            color: self.color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);

        let verts = [Vertex::new(1.0, 2.0, [0.0; 4])];
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&verts).len(), 24);
    }

    #[test]
    fn test_to_clip_corners() {
        let v = Vertex::new(0.0, 0.0, [1.0; 4]).to_clip(200.0, 100.0);
        assert_eq!(v.position, [-1.0, 1.0]);
        let v = Vertex::new(200.0, 100.0, [1.0; 4]).to_clip(200.0, 100.0);
        assert_eq!(v.position, [1.0, -1.0]);
    }
}
