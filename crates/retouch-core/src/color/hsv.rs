//! HSV (Hue-Saturation-Value) conversions on the 8-bit sample scale

/// HSV color representation
/// - H (hue): 0.0-360.0 degrees
/// - S (saturation): 0.0-255.0
/// - V (value): 0.0-255.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Convert RGB to HSV
///
/// Input: RGB values in range 0.0-255.0
/// Output: HSV where H is 0.0-360.0, S and V are 0.0-255.0
#[inline]
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let r = r.clamp(0.0, 255.0);
    let g = g.clamp(0.0, 255.0);
    let b = b.clamp(0.0, 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // Black and achromatic pixels carry no hue or saturation
    if max <= 0.0 || delta < 1e-6 {
        return Hsv {
            h: 0.0,
            s: 0.0,
            v: max,
        };
    }

    let s = delta / max * 255.0;

    let h = if (max - r).abs() < 1e-6 {
        let mut h = (g - b) / delta;
        if g < b {
            h += 6.0;
        }
        h * 60.0
    } else if (max - g).abs() < 1e-6 {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };

    Hsv {
        h: h % 360.0,
        s,
        v: max,
    }
}

/// Convert HSV to RGB
///
/// Input: HSV where H is 0.0-360.0, S and V are 0.0-255.0
/// Output: RGB values in range 0.0-255.0
#[inline]
pub fn hsv_to_rgb(hsv: Hsv) -> (f32, f32, f32) {
    let Hsv { h, s, v } = hsv;
    let s = s.clamp(0.0, 255.0);
    let v = v.clamp(0.0, 255.0);

    if s < 1e-6 {
        return (v, v, v);
    }

    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };

    let chroma = v * s / 255.0;
    let sector = h / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    (r + m, g + m, b + m)
}
