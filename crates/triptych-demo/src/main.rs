//! Three Triangles: opens one window and draws three solid-color triangles
//! until Escape is pressed or the window is closed.

use anyhow::Result;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use triptych_engine::core::{App, AppControl, FrameCtx};
use triptych_engine::device::GpuInit;
use triptych_engine::logging::{init_logging, LoggingConfig};
use triptych_engine::window::{Runtime, RuntimeConfig};

mod scene;

use scene::Scene;

struct ThreeTriangles {
    scene: Option<Scene>,
}

impl ThreeTriangles {
    fn new() -> Self {
        Self { scene: None }
    }
}

impl App for ThreeTriangles {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if event.state == ElementState::Pressed
                && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
            {
                return AppControl::Exit;
            }
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let scene = &mut self.scene;

        ctx.render(scene::CLEAR_COLOR, |rctx, target| {
            // Built on the first frame, once the device and surface format
            // are known; reused unchanged afterwards.
            let scene = scene.get_or_insert_with(|| Scene::build(rctx));
            scene.draw(rctx, target);
        })
    }
}

fn run() -> Result<()> {
    let config = RuntimeConfig {
        title: "Three Triangles".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };

    Runtime::run(config, GpuInit::default(), ThreeTriangles::new())
}

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run() {
        log::error!("fatal: {err:#}");
        std::process::exit(-1);
    }
}
