//! Easing curves and interpolation primitives.

/// Easing curve applied to a tween's local progress.
///
/// The `Quad`/`Cubic`/`Quart` family maps to exponents 2/3/4.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ease {
    Linear,
    /// Default curve for entrance tweens.
    #[default]
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartOut,
    QuartInOut,
}

impl Ease {
    /// Map linear progress `t` in [0,1] onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => out(t, 2),
            Ease::QuadInOut => in_out(t, 2),
            Ease::CubicIn => t.powi(3),
            Ease::CubicOut => out(t, 3),
            Ease::CubicInOut => in_out(t, 3),
            Ease::QuartOut => out(t, 4),
            Ease::QuartInOut => in_out(t, 4),
        }
    }
}

fn out(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}

fn in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        (2.0 * t).powi(power) / 2.0
    } else {
        1.0 - (2.0 - 2.0 * t).powi(power) / 2.0
    }
}

/// Linear interpolation between two values.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// An sRGB color animated per channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Per-channel interpolation toward `to`.
    pub fn mix(self, to: Rgb, t: f64) -> Rgb {
        let ch = |a: u8, b: u8| lerp(a as f64, b as f64, t).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: ch(self.r, to.r),
            g: ch(self.g, to.g),
            b: ch(self.b, to.b),
        }
    }

    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints_fixed() {
        for ease in [
            Ease::Linear,
            Ease::QuadOut,
            Ease::QuadInOut,
            Ease::CubicIn,
            Ease::CubicOut,
            Ease::CubicInOut,
            Ease::QuartOut,
            Ease::QuartInOut,
        ] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_out_curves_front_loaded() {
        // An *Out curve covers more than half the distance by the midpoint.
        assert!(Ease::QuadOut.apply(0.5) > 0.5);
        assert!(Ease::QuartOut.apply(0.5) > Ease::QuadOut.apply(0.5));
    }

    #[test]
    fn test_in_out_symmetric() {
        let e = Ease::CubicInOut;
        assert_eq!(e.apply(0.5), 0.5);
        let lo = e.apply(0.25);
        let hi = e.apply(0.75);
        assert!((lo + hi - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_apply_clamps_out_of_range() {
        assert_eq!(Ease::QuartOut.apply(-0.5), 0.0);
        assert_eq!(Ease::QuartOut.apply(1.5), 1.0);
    }

    #[test]
    fn test_rgb_mix() {
        let purple = Rgb::new(0x93, 0x33, 0xEA);
        let lilac = Rgb::new(0xE9, 0xD5, 0xFF);
        assert_eq!(purple.mix(lilac, 0.0), purple);
        assert_eq!(purple.mix(lilac, 1.0), lilac);
        let mid = purple.mix(lilac, 0.5);
        assert_eq!(mid.r, 0xBE);
    }

    #[test]
    fn test_rgb_css() {
        assert_eq!(Rgb::new(147, 51, 234).to_css(), "rgb(147, 51, 234)");
    }
}
