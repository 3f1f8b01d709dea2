//! Triptych engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo
//! binaries: window and event loop, wgpu device and surface, solid-color
//! render primitives, and logging setup.

pub mod device;
pub mod window;
pub mod core;

pub mod color;
pub mod logging;
pub mod render;
