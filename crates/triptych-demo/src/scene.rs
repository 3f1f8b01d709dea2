//! Fixed scene data: three triangles, one solid color each.

use triptych_engine::color::Color;
use triptych_engine::render::mesh::{TriangleMesh, Vertex};
use triptych_engine::render::solid::{self, SolidPipeline, SolidShaders};
use triptych_engine::render::{RenderCtx, RenderTarget};

/// Background the frame is cleared to before the triangles are drawn.
pub const CLEAR_COLOR: Color = Color::new(0.8, 0.8, 0.8, 1.0);

/// One triangle of the scene: a name used for GPU labels, a constant-color
/// fragment shader, and three NDC vertices.
pub struct TriangleSpec {
    pub label: &'static str,
    pub fragment_src: &'static str,
    pub vertices: [Vertex; 3],
}

/// The three triangles, in draw order.
pub const TRIANGLES: [TriangleSpec; 3] = [
    TriangleSpec {
        label: "right-angled",
        fragment_src: include_str!("shaders/solid_red.wgsl"),
        vertices: [
            Vertex::new(0.1, 0.1, 0.0),
            Vertex::new(0.7, 0.1, 0.0),
            Vertex::new(0.1, 0.7, 0.0),
        ],
    },
    TriangleSpec {
        label: "equilateral",
        fragment_src: include_str!("shaders/solid_green.wgsl"),
        vertices: [
            Vertex::new(-0.7, 0.1, 0.0),
            Vertex::new(-0.1, 0.1, 0.0),
            Vertex::new(-0.4, 0.65, 0.0),
        ],
    },
    TriangleSpec {
        label: "isosceles",
        fragment_src: include_str!("shaders/solid_blue.wgsl"),
        vertices: [
            Vertex::new(-0.7, -0.7, 0.0),
            Vertex::new(-0.1, -0.7, 0.0),
            Vertex::new(-0.4, -0.3, 0.0),
        ],
    },
];

/// GPU-resident form of [`TRIANGLES`]: one pipeline and one mesh per entry.
pub struct Scene {
    items: Vec<(SolidPipeline, TriangleMesh)>,
}

impl Scene {
    /// Compiles the shaders and uploads the vertex buffers.
    ///
    /// The meshes are immutable after upload; the pipelines are keyed to the
    /// surface format carried by `ctx`.
    pub fn build(ctx: &RenderCtx<'_>) -> Self {
        let shaders = SolidShaders::new(ctx.device);

        let items = TRIANGLES
            .iter()
            .map(|spec| {
                let pipeline =
                    shaders.pipeline(ctx.device, ctx.surface_format, spec.fragment_src, spec.label);
                let mesh = TriangleMesh::upload(ctx.device, spec.label, &spec.vertices);
                (pipeline, mesh)
            })
            .collect();

        log::debug!("scene built: {} triangles", TRIANGLES.len());

        Self { items }
    }

    pub fn draw(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        solid::record_pass(ctx, target, &self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy(v: &Vertex) -> (f32, f32) {
        (v.position[0], v.position[1])
    }

    fn validated(src: &str) -> naga::Module {
        let module = naga::front::wgsl::parse_str(src).expect("WGSL parse failed");
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        );
        validator.validate(&module).expect("WGSL validation failed");
        module
    }

    // ── geometry ────────────────────────────────────────────────────────────

    #[test]
    fn scene_lists_the_triangles_in_draw_order() {
        let labels: Vec<_> = TRIANGLES.iter().map(|t| t.label).collect();
        assert_eq!(labels, ["right-angled", "equilateral", "isosceles"]);
    }

    #[test]
    fn triangle_vertices_match_the_fixed_literals() {
        let expected: [[[f32; 3]; 3]; 3] = [
            [[0.1, 0.1, 0.0], [0.7, 0.1, 0.0], [0.1, 0.7, 0.0]],
            [[-0.7, 0.1, 0.0], [-0.1, 0.1, 0.0], [-0.4, 0.65, 0.0]],
            [[-0.7, -0.7, 0.0], [-0.1, -0.7, 0.0], [-0.4, -0.3, 0.0]],
        ];

        for (spec, tri) in TRIANGLES.iter().zip(expected) {
            let got: Vec<[f32; 3]> = spec.vertices.iter().map(|v| v.position).collect();
            assert_eq!(got, tri, "{}", spec.label);
        }
    }

    #[test]
    fn vertices_lie_in_ndc_on_the_z_plane() {
        for spec in &TRIANGLES {
            for v in &spec.vertices {
                let [x, y, z] = v.position;
                assert!(x.abs() <= 1.0 && y.abs() <= 1.0, "{}: out of NDC", spec.label);
                assert_eq!(z, 0.0, "{}: off the z plane", spec.label);
            }
        }
    }

    #[test]
    fn right_angled_legs_are_perpendicular() {
        let [a, b, c] = &TRIANGLES[0].vertices;
        let (ax, ay) = xy(a);
        let (bx, by) = xy(b);
        let (cx, cy) = xy(c);

        // Both legs leave the corner vertex along an axis, so the dot
        // product is exact even in f32.
        let dot = (bx - ax) * (cx - ax) + (by - ay) * (cy - ay);
        assert_eq!(dot, 0.0);
    }

    #[test]
    fn isosceles_sides_match_within_tolerance() {
        let [a, b, apex] = &TRIANGLES[2].vertices;
        let (ax, ay) = xy(a);
        let (bx, by) = xy(b);
        let (px, py) = xy(apex);

        let left = (px - ax).powi(2) + (py - ay).powi(2);
        let right = (px - bx).powi(2) + (py - by).powi(2);
        assert!((left - right).abs() < 1e-6, "left {left} vs right {right}");
    }

    #[test]
    fn winding_is_counter_clockwise() {
        for spec in &TRIANGLES {
            let [a, b, c] = &spec.vertices;
            let (ax, ay) = xy(a);
            let (bx, by) = xy(b);
            let (cx, cy) = xy(c);

            let cross = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
            assert!(cross > 0.0, "{}: winds clockwise", spec.label);
        }
    }

    // ── shaders ─────────────────────────────────────────────────────────────

    #[test]
    fn fragment_sources_are_valid_fragment_stages() {
        for spec in &TRIANGLES {
            let module = validated(spec.fragment_src);

            let entry_points: Vec<_> = module
                .entry_points
                .iter()
                .map(|ep| (ep.name.as_str(), ep.stage))
                .collect();
            assert_eq!(
                entry_points,
                vec![("fs_main", naga::ShaderStage::Fragment)],
                "{}",
                spec.label
            );

            // No inputs: the output cannot vary per fragment.
            assert!(
                module.entry_points[0].function.arguments.is_empty(),
                "{}: fragment stage takes inputs",
                spec.label
            );
        }
    }

    #[test]
    fn fragment_colors_are_pure_red_green_blue() {
        let expected = [
            "vec4<f32>(1.0, 0.0, 0.0, 1.0)",
            "vec4<f32>(0.0, 1.0, 0.0, 1.0)",
            "vec4<f32>(0.0, 0.0, 1.0, 1.0)",
        ];

        for (spec, color) in TRIANGLES.iter().zip(expected) {
            assert!(
                spec.fragment_src.contains(color),
                "{}: expected constant {color}",
                spec.label
            );
            assert_eq!(
                spec.fragment_src.matches("vec4<f32>(").count(),
                1,
                "{}: more than one color constant",
                spec.label
            );
        }
    }

    #[test]
    fn clear_color_is_opaque_light_gray() {
        assert_eq!(CLEAR_COLOR, Color::new(0.8, 0.8, 0.8, 1.0));
        assert!(CLEAR_COLOR.is_finite());
    }
}
