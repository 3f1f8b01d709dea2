//! GPU rendering subsystem.
//!
//! Renderers issue GPU commands via wgpu. Each renderer is responsible for
//! its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is authored directly in normalized device coordinates
//!   (center origin, +Y up, z forward at 0).
//! - The shared vertex shader forwards positions unchanged.

mod ctx;
pub mod mesh;
pub mod solid;

pub use ctx::{RenderCtx, RenderTarget};
