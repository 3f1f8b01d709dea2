/// Initialization parameters for the GPU layer.
///
/// Keep this structure minimal. Add configuration flags only when a concrete
/// platform or workload requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default: shader outputs and clear values are authored directly
    /// in framebuffer space, so an sRGB surface would re-encode them.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO is vsync and is supported everywhere, which keeps the redraw loop
    /// paced to the display.
    pub present_mode: wgpu::PresentMode,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
        }
    }
}
