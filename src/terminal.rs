//! Terminal rendering for a quick look at the composited animal
//!
//! Uses 24-bit ANSI escapes and the upper-half-block character so each text
//! cell shows two sampled pixels stacked vertically.

use image::{Rgba, RgbaImage};

/// ANSI escape sequence to reset all formatting
pub const ANSI_RESET: &str = "\x1b[0m";

/// Upper half block: foreground paints the top pixel, background the bottom
const HALF_BLOCK: char = '\u{2580}';

/// Convert RGBA color to ANSI 24-bit background escape sequence.
///
/// Transparent colors (alpha = 0) are rendered as a dark gray background
/// to visually distinguish them from opaque colors.
///
/// # Examples
///
/// ```
/// use genelab::terminal::color_to_ansi_bg;
/// use image::Rgba;
///
/// assert_eq!(color_to_ansi_bg(Rgba([255, 0, 0, 255])), "\x1b[48;2;255;0;0m");
/// assert_eq!(color_to_ansi_bg(Rgba([0, 0, 0, 0])), "\x1b[48;5;236m");
/// ```
pub fn color_to_ansi_bg(rgba: Rgba<u8>) -> String {
    if rgba[3] == 0 {
        "\x1b[48;5;236m".to_string()
    } else {
        format!("\x1b[48;2;{};{};{}m", rgba[0], rgba[1], rgba[2])
    }
}

/// Foreground counterpart of [`color_to_ansi_bg`].
pub fn color_to_ansi_fg(rgba: Rgba<u8>) -> String {
    if rgba[3] == 0 {
        "\x1b[38;5;236m".to_string()
    } else {
        format!("\x1b[38;2;{};{};{}m", rgba[0], rgba[1], rgba[2])
    }
}

/// Render an image as rows of half-block cells.
///
/// Samples every `step`-th pixel in both directions (`step` of 0 is treated
/// as 1), so a 400x400 canvas at step 8 becomes 50 columns by 25 lines.
pub fn render_ansi_image(image: &RgbaImage, step: u32) -> String {
    let step = step.max(1);
    let (width, height) = image.dimensions();
    let columns: Vec<u32> = (0..width).step_by(step as usize).collect();
    let rows: Vec<u32> = (0..height).step_by(step as usize).collect();

    let mut output = String::new();
    for pair in rows.chunks(2) {
        for &x in &columns {
            let top = *image.get_pixel(x, pair[0]);
            let bottom = match pair.get(1) {
                Some(&y) => *image.get_pixel(x, y),
                None => Rgba([0, 0, 0, 0]),
            };
            output.push_str(&color_to_ansi_fg(top));
            output.push_str(&color_to_ansi_bg(bottom));
            output.push(HALF_BLOCK);
        }
        output.push_str(ANSI_RESET);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_ansi_fg() {
        assert_eq!(color_to_ansi_fg(Rgba([1, 2, 3, 255])), "\x1b[38;2;1;2;3m");
        assert_eq!(color_to_ansi_fg(Rgba([1, 2, 3, 0])), "\x1b[38;5;236m");
    }

    #[test]
    fn test_render_ansi_image_dimensions() {
        let image = RgbaImage::from_pixel(8, 6, Rgba([255, 0, 0, 255]));
        let out = render_ansi_image(&image, 2);
        let lines: Vec<&str> = out.lines().collect();
        // 3 sampled rows -> 2 lines, 4 sampled columns each
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches(HALF_BLOCK).count(), 4);
        assert!(lines[0].ends_with(ANSI_RESET));
    }

    #[test]
    fn test_render_ansi_image_odd_row_pads_transparent() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([0, 255, 0, 255]));
        let out = render_ansi_image(&image, 1);
        assert_eq!(
            out,
            format!("\x1b[38;2;0;255;0m\x1b[48;5;236m{}{}\n", HALF_BLOCK, ANSI_RESET)
        );
    }

    #[test]
    fn test_render_ansi_image_zero_step() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        assert_eq!(render_ansi_image(&image, 0), render_ansi_image(&image, 1));
    }
}
