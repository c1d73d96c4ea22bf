//! Colors

/// Convert an f64 [0,1] component to a u8 [0,255] component
pub fn cu8(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

/// Color as normalized red, green, blue, and alpha components
///
/// Components are real values in [0,1]. They are never clamped here;
/// callers must supply values already in range.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rgba {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    pub a: f64,
}

impl Rgba {
    /// Create a new color
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }
    /// Create a new opaque color
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }
    /// White (1,1,1,1)
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
    /// Black (0,0,0,1)
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
    /// Fully transparent (0,0,0,0)
    pub fn clear() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
    /// An alpha of exactly 0 means "not drawn"
    pub fn is_visible(&self) -> bool {
        self.a != 0.0
    }
    /// Quantize to 8 bits per component
    pub fn to_rgba8(&self) -> [u8; 4] {
        [cu8(self.r), cu8(self.g), cu8(self.b), cu8(self.a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantization_rounds() {
        assert_eq!(cu8(0.0), 0);
        assert_eq!(cu8(1.0), 255);
        assert_eq!(cu8(0.5), 128);
        assert_eq!(Rgba::new(1.0, 0.0, 0.25, 1.0).to_rgba8(), [255, 0, 64, 255]);
    }

    #[test]
    fn visibility_follows_alpha() {
        assert!(Rgba::black().is_visible());
        assert!(!Rgba::clear().is_visible());
        assert!(Rgba::new(0.5, 0.5, 0.5, 0.001).is_visible());
    }
}
