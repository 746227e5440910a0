//! Linear RGBA colors and the small palette used by the demo scenes.

/// An RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(0.9, 0.16, 0.22);
    pub const GOLD: Color = Color::rgb(1.0, 0.8, 0.0);
    pub const SKY_BLUE: Color = Color::rgb(0.4, 0.75, 1.0);
    /// Off-white used as the frame background.
    pub const RAY_WHITE: Color = Color::rgb(0.96, 0.96, 0.96);
    pub const DARK_GREEN: Color = Color::rgb(0.0, 0.46, 0.17);
    pub const DARK_GRAY: Color = Color::rgb(0.31, 0.31, 0.31);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Builds an opaque color from hue (degrees), saturation and value.
    ///
    /// Hue wraps around at 360; saturation and value are clamped to `[0, 1]`.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::rgb(r + m, g + m, b + m)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hsv_primaries() {
        let red = Color::from_hsv(0.0, 1.0, 1.0);
        assert_abs_diff_eq!(red.r, 1.0);
        assert_abs_diff_eq!(red.g, 0.0);

        let green = Color::from_hsv(120.0, 1.0, 1.0);
        assert_abs_diff_eq!(green.g, 1.0);
        assert_abs_diff_eq!(green.b, 0.0);

        let blue = Color::from_hsv(240.0, 1.0, 1.0);
        assert_abs_diff_eq!(blue.b, 1.0);
        assert_abs_diff_eq!(blue.r, 0.0);
    }

    #[test]
    fn hsv_zero_saturation_is_gray() {
        let gray = Color::from_hsv(200.0, 0.0, 0.5);
        assert_abs_diff_eq!(gray.r, 0.5);
        assert_abs_diff_eq!(gray.g, 0.5);
        assert_abs_diff_eq!(gray.b, 0.5);
        assert_abs_diff_eq!(gray.a, 1.0);
    }

    #[test]
    fn hsv_hue_wraps() {
        assert_eq!(Color::from_hsv(360.0, 0.8, 0.9), Color::from_hsv(0.0, 0.8, 0.9));
    }
}
