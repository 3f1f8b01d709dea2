use crate::render::{RenderCtx, RenderTarget};

use super::mesh::{TriangleMesh, Vertex};

const VERTEX_SRC: &str = include_str!("shaders/position.wgsl");

/// Shader factory for the solid-color pipelines.
///
/// All pipelines share one pass-through vertex module. Each fragment source
/// is compiled into its own module, so every pipeline can carry a different
/// constant color without uniforms.
pub struct SolidShaders {
    vertex: wgpu::ShaderModule,
}

impl SolidShaders {
    pub fn new(device: &wgpu::Device) -> Self {
        let vertex = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("triptych position shader"),
            source: wgpu::ShaderSource::Wgsl(VERTEX_SRC.into()),
        });

        Self { vertex }
    }

    /// Builds a render pipeline pairing the shared vertex stage with
    /// `fragment_src`, targeting surfaces of `format`.
    pub fn pipeline(
        &self,
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        fragment_src: &str,
        label: &str,
    ) -> SolidPipeline {
        let fragment_label = format!("{label} fragment shader");
        let fragment = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(fragment_label.as_str()),
            source: wgpu::ShaderSource::Wgsl(fragment_src.into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("triptych solid pipeline layout"),
            bind_group_layouts: &[],
            // Newer wgpu uses immediate constants; keep disabled.
            immediate_size: 0,
        });

        let pipeline_label = format!("{label} pipeline");
        let raw = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(pipeline_label.as_str()),
            layout: Some(&layout),

            vertex: wgpu::VertexState {
                module: &self.vertex,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        SolidPipeline { raw }
    }
}

/// A ready-to-draw solid-color pipeline.
pub struct SolidPipeline {
    raw: wgpu::RenderPipeline,
}

/// Records one render pass drawing each `(pipeline, mesh)` pair in order.
///
/// The pass loads the surface contents left by the clear earlier in the frame
/// and sets an explicit full-drawable viewport anchored at the origin, so a
/// resized surface keeps its lower-left mapping.
pub fn record_pass(
    ctx: &RenderCtx<'_>,
    target: &mut RenderTarget<'_>,
    items: &[(SolidPipeline, TriangleMesh)],
) {
    if items.is_empty() {
        return;
    }

    let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("triptych solid pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target.color_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });

    let width = ctx.surface_size.width.max(1) as f32;
    let height = ctx.surface_size.height.max(1) as f32;
    rpass.set_viewport(0.0, 0.0, width, height, 0.0, 1.0);

    for (pipeline, mesh) in items {
        rpass.set_pipeline(&pipeline.raw);
        rpass.set_vertex_buffer(0, mesh.buffer().slice(..));
        rpass.draw(0..mesh.vertex_count(), 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validated(src: &str) -> naga::Module {
        let module = naga::front::wgsl::parse_str(src).expect("WGSL parse failed");
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        );
        validator.validate(&module).expect("WGSL validation failed");
        module
    }

    #[test]
    fn shared_vertex_source_is_valid_wgsl() {
        let module = validated(VERTEX_SRC);

        let entry_points: Vec<_> = module
            .entry_points
            .iter()
            .map(|ep| (ep.name.as_str(), ep.stage))
            .collect();
        assert_eq!(entry_points, vec![("vs_main", naga::ShaderStage::Vertex)]);
    }

    #[test]
    fn shared_vertex_stage_takes_one_input() {
        let module = validated(VERTEX_SRC);
        assert_eq!(module.entry_points[0].function.arguments.len(), 1);
    }
}
