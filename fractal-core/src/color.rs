//! Hex and HSL color handling.
//!
//! Tree colors are specified as `#rrggbb` strings and drawn in HSL so that
//! the hue can be shifted per level. Display surfaces take RGB, so the
//! inverse conversion lives here too.

/// A color in HSL space.
///
/// `hue` is in degrees, `saturation` and `lightness` are percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

/// Reasons a string is not a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color must start with '#'")]
    MissingHash,

    #[error("expected 6 hex digits, found {0}")]
    BadLength(usize),

    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Converts 8-bit RGB channels to HSL.
    ///
    /// Uses the max/min channel formula. When all channels are equal the
    /// color is achromatic and both hue and saturation are `0`.
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb.map(|c| f32::from(c) / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Self::new(0.0, 0.0, lightness * 100.0);
        }

        let d = max - min;
        let saturation = if lightness > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new(sector * 60.0, saturation * 100.0, lightness * 100.0)
    }

    /// Converts back to 8-bit RGB channels.
    ///
    /// Hue wraps around, saturation and lightness are clamped to `0..=100`.
    pub fn to_rgb(self) -> [u8; 3] {
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);
        let h = self.hue.rem_euclid(360.0) / 60.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        [r, g, b].map(|v| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8)
    }
}

/// Parses a `#rrggbb` string into 8-bit channels. Case-insensitive.
pub fn parse_hex(hex: &str) -> Result<[u8; 3], ColorError> {
    let digits = hex.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(bad));
    }
    if digits.len() != 6 {
        return Err(ColorError::BadLength(digits.len()));
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let pair = &digits[i * 2..i * 2 + 2];
        *channel = u8::from_str_radix(pair, 16).map_err(|_| {
            ColorError::InvalidDigit(pair.chars().next().unwrap_or_default())
        })?;
    }
    Ok(rgb)
}

/// Formats 8-bit channels as a lowercase `#rrggbb` string.
pub fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Converts a `#rrggbb` string to HSL.
///
/// Hue is in `[0, 360)`, saturation and lightness in `[0, 100]`.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    parse_hex(hex).map(Hsl::from_rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hsl_close(actual: Hsl, expected: (f32, f32, f32)) {
        let eps = 1e-3;
        assert!(
            (actual.hue - expected.0).abs() < eps
                && (actual.saturation - expected.1).abs() < eps
                && (actual.lightness - expected.2).abs() < eps,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn primary_and_achromatic_colors() {
        assert_eq!(hex_to_hsl("#FF0000"), Ok(Hsl::new(0.0, 100.0, 50.0)));
        assert_eq!(hex_to_hsl("#FFFFFF"), Ok(Hsl::new(0.0, 0.0, 100.0)));
        assert_eq!(hex_to_hsl("#000000"), Ok(Hsl::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn green_and_blue_sectors() {
        assert_hsl_close(hex_to_hsl("#00ff00").unwrap(), (120.0, 100.0, 50.0));
        assert_hsl_close(hex_to_hsl("#0000ff").unwrap(), (240.0, 100.0, 50.0));
        // Red dominant with blue above green wraps into the last sector.
        assert_hsl_close(hex_to_hsl("#ff00ff").unwrap(), (300.0, 100.0, 50.0));
    }

    #[test]
    fn default_pink_is_saturated_and_light() {
        let hsl = hex_to_hsl("#ff81e6").unwrap();
        assert!((hsl.saturation - 100.0).abs() < 1e-3);
        assert!(hsl.hue > 311.0 && hsl.hue < 313.0, "hue = {}", hsl.hue);
        assert!(hsl.lightness > 75.0 && hsl.lightness < 76.0);
    }

    #[test]
    fn lowercase_and_uppercase_parse_the_same() {
        assert_eq!(parse_hex("#aBcDeF"), parse_hex("#ABCDEF"));
        assert_eq!(parse_hex("#abcdef"), Ok([0xab, 0xcd, 0xef]));
    }

    #[test]
    fn malformed_strings_are_rejected() {
        assert_eq!(parse_hex("zzzzzz"), Err(ColorError::MissingHash));
        assert_eq!(parse_hex("#zzzzzz"), Err(ColorError::InvalidDigit('z')));
        assert_eq!(parse_hex("#fff"), Err(ColorError::BadLength(3)));
        assert_eq!(parse_hex("#ff81e6a"), Err(ColorError::BadLength(7)));
        assert_eq!(parse_hex("#ff81é6"), Err(ColorError::InvalidDigit('é')));
        assert_eq!(parse_hex(""), Err(ColorError::MissingHash));
    }

    #[test]
    fn rgb_survives_hsl_roundtrip() {
        for rgb in [[0xff, 0x81, 0xe6], [12, 200, 99], [30, 30, 30], [255, 255, 0]] {
            assert_eq!(Hsl::from_rgb(rgb).to_rgb(), rgb);
        }
    }

    #[test]
    fn to_rgb_wraps_hue() {
        assert_eq!(Hsl::new(360.0, 100.0, 50.0).to_rgb(), [255, 0, 0]);
        assert_eq!(Hsl::new(-120.0, 100.0, 50.0).to_rgb(), [0, 0, 255]);
    }

    #[test]
    fn to_hex_is_lowercase_and_padded() {
        assert_eq!(to_hex([0xff, 0x01, 0xe6]), "#ff01e6");
    }
}
