use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// One vertex of a triangle-list mesh: a position already in NDC.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }

    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![
        0 => Float32x3 // position
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// A triangle-list mesh uploaded once at creation.
///
/// The buffer carries `VERTEX` usage only; without `COPY_DST` the contents
/// cannot be rewritten after the initial upload.
pub struct TriangleMesh {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl TriangleMesh {
    /// Uploads `vertices` into a device-local vertex buffer.
    pub fn upload(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Self {
        let buffer_label = format!("{label} vertex buffer");
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(buffer_label.as_str()),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            buffer,
            vertex_count: vertices.len() as u32,
        }
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 12);
    }

    #[test]
    fn vertex_layout_binds_position_at_location_zero() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(layout.attributes.len(), 1);

        let attr = &layout.attributes[0];
        assert_eq!(attr.shader_location, 0);
        assert_eq!(attr.offset, 0);
        assert_eq!(attr.format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn triangle_casts_to_nine_contiguous_floats() {
        let tri = [
            Vertex::new(0.1, 0.1, 0.0),
            Vertex::new(0.7, 0.1, 0.0),
            Vertex::new(0.1, 0.7, 0.0),
        ];

        let bytes: &[u8] = bytemuck::cast_slice(&tri);
        assert_eq!(bytes.len(), 36);

        let floats: &[f32] = bytemuck::cast_slice(&tri);
        assert_eq!(floats, &[0.1, 0.1, 0.0, 0.7, 0.1, 0.0, 0.1, 0.7, 0.0]);
    }
}
