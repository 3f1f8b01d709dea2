/// RGBA color with `f32` channels in `[0, 1]`.
///
/// Values are stored as authored. Whether they are interpreted as linear or
/// sRGB depends on the surface format the device layer picked; with the
/// default non-sRGB surface they reach the framebuffer unencoded.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Widens to the `f64` color wgpu expects for clear operations.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_wgpu_widens_each_channel() {
        let c = Color::new(0.8, 0.25, 0.5, 1.0);
        let w = c.to_wgpu();
        assert_eq!(w.r, 0.8f32 as f64);
        assert_eq!(w.g, 0.25);
        assert_eq!(w.b, 0.5);
        assert_eq!(w.a, 1.0);
    }

    #[test]
    fn default_is_transparent_black() {
        assert_eq!(Color::default(), Color::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn is_finite_rejects_nan_channels() {
        assert!(Color::new(0.1, 0.2, 0.3, 1.0).is_finite());
        assert!(!Color::new(f32::NAN, 0.0, 0.0, 1.0).is_finite());
    }
}
