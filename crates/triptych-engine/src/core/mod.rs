//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform
//! loop) and the application: an [`App`] trait with event and frame hooks,
//! and the per-frame context handed to them. Runtime internals stay out of
//! application code.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
