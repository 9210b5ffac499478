//! Color parsing and formatting for trait fills
//!
//! Trait colors are stored as [`Rgba<u8>`]. Config files and the CLI accept
//! any of:
//! - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - Functional: `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`
//! - Named: `burlywood`, `saddlebrown`, `transparent`, etc.

use image::Rgba;
use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use thiserror::Error;

/// Black, used for every shape outline.
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// White, the canvas backdrop.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Fully transparent pixel.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// CSS parsing error from lightningcss
    #[error("CSS parse error: {0}")]
    CssParse(String),
}

/// Parse a color string into an RGBA color.
///
/// Hex strings take a fast path; everything else goes through lightningcss.
///
/// # Examples
///
/// ```
/// use genelab::color::parse_color;
///
/// assert_eq!(parse_color("#deb887").unwrap(), image::Rgba([222, 184, 135, 255]));
/// assert_eq!(parse_color("burlywood").unwrap(), image::Rgba([222, 184, 135, 255]));
/// assert_eq!(parse_color("#F00").unwrap(), image::Rgba([255, 0, 0, 255]));
/// ```
pub fn parse_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    match s.strip_prefix('#') {
        Some(hex) => parse_hex_color(hex),
        None => parse_css_color(s),
    }
}

/// Format a color as lowercase hex.
///
/// Opaque colors use `#rrggbb`; anything with alpha below 255 gets the
/// eight-digit form so it survives a round trip through [`parse_color`].
pub fn to_hex(color: Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Pack a color into the `0x00RRGGBB` layout used by window framebuffers.
pub fn to_xrgb(color: Rgba<u8>) -> u32 {
    let [r, g, b, _] = color.0;
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Source-over blend of `top` onto an opaque `bottom`.
pub fn blend_over(bottom: Rgba<u8>, top: Rgba<u8>) -> Rgba<u8> {
    let alpha = u32::from(top[3]);
    if alpha == 255 {
        return top;
    }
    if alpha == 0 {
        return bottom;
    }
    let mix = |b: u8, t: u8| {
        ((u32::from(t) * alpha + u32::from(b) * (255 - alpha) + 127) / 255) as u8
    };
    Rgba([
        mix(bottom[0], top[0]),
        mix(bottom[1], top[1]),
        mix(bottom[2], top[2]),
        255,
    ])
}

fn parse_hex_color(hex: &str) -> Result<Rgba<u8>, ColorError> {
    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ColorError::InvalidHex(c)))
        .collect::<Result<Vec<u8>, _>>()?;

    match digits.as_slice() {
        // Short forms double each digit
        [r, g, b] => Ok(Rgba([r * 17, g * 17, b * 17, 255])),
        [r, g, b, a] => Ok(Rgba([r * 17, g * 17, b * 17, a * 17])),
        [r1, r2, g1, g2, b1, b2] => Ok(Rgba([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, 255])),
        [r1, r2, g1, g2, b1, b2, a1, a2] => {
            Ok(Rgba([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, a1 * 16 + a2]))
        }
        _ => Err(ColorError::InvalidLength(digits.len())),
    }
}

fn parse_css_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    use lightningcss::values::color::FloatColor;

    let css_color = CssColor::parse_string(s).map_err(|e| ColorError::CssParse(e.to_string()))?;
    let rgb_color = css_color
        .to_rgb()
        .map_err(|_| ColorError::CssParse("cannot convert color to RGB".to_string()))?;

    match rgb_color {
        CssColor::RGBA(rgba) => Ok(Rgba([rgba.red, rgba.green, rgba.blue, rgba.alpha])),
        CssColor::Float(float_color) => match float_color.as_ref() {
            FloatColor::RGB(rgb) => {
                let channel = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
                Ok(Rgba([channel(rgb.r), channel(rgb.g), channel(rgb.b), channel(rgb.alpha)]))
            }
            _ => Err(ColorError::CssParse("unexpected float color format".to_string())),
        },
        _ => Err(ColorError::CssParse("color conversion did not produce RGB".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_color("#b0c4de"), Ok(Rgba([176, 196, 222, 255])));
        assert_eq!(parse_color("#B0C4DE"), Ok(Rgba([176, 196, 222, 255])));
        assert_eq!(parse_color("#0f08"), Ok(Rgba([0, 255, 0, 136])));
        assert_eq!(parse_color("#8b451380"), Ok(Rgba([139, 69, 19, 128])));
    }

    #[test]
    fn test_parse_named_and_functional() {
        assert_eq!(parse_color("saddlebrown"), Ok(Rgba([139, 69, 19, 255])));
        assert_eq!(parse_color("rgb(0, 0, 255)"), Ok(Rgba([0, 0, 255, 255])));
        assert_eq!(parse_color("hsl(0, 100%, 50%)"), Ok(Rgba([255, 0, 0, 255])));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_color(""), Err(ColorError::Empty));
        assert_eq!(parse_color("   "), Err(ColorError::Empty));
        assert_eq!(parse_color("#12345"), Err(ColorError::InvalidLength(5)));
        assert_eq!(parse_color("#ggg"), Err(ColorError::InvalidHex('g')));
        assert!(matches!(parse_color("notacolor"), Err(ColorError::CssParse(_))));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(Rgba([222, 184, 135, 255])), "#deb887");
        assert_eq!(to_hex(Rgba([0, 0, 0, 0])), "#00000000");
        assert_eq!(parse_color(&to_hex(Rgba([1, 2, 3, 4]))), Ok(Rgba([1, 2, 3, 4])));
    }

    #[test]
    fn test_to_xrgb() {
        assert_eq!(to_xrgb(Rgba([0x12, 0x34, 0x56, 0x00])), 0x0012_3456);
        assert_eq!(to_xrgb(WHITE), 0x00FF_FFFF);
    }

    #[test]
    fn test_blend_over() {
        assert_eq!(blend_over(WHITE, TRANSPARENT), WHITE);
        assert_eq!(blend_over(WHITE, BLACK), BLACK);
        assert_eq!(blend_over(WHITE, Rgba([0, 0, 0, 128])), Rgba([127, 127, 127, 255]));
    }
}
