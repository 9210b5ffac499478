//! Software painting of the window frame.

use image::{Rgba, RgbaImage};

use super::layout::Rect;
use super::text::Typeface;
use crate::color::blend_over;
use crate::shapes::{boundary, rasterize_box, rasterize_polygon};

pub const PANEL_BG: Rgba<u8> = Rgba([236, 236, 236, 255]);
pub const CONTROL_BG: Rgba<u8> = Rgba([250, 250, 250, 255]);
pub const CONTROL_BORDER: Rgba<u8> = Rgba([120, 120, 120, 255]);
pub const TEXT: Rgba<u8> = Rgba([20, 20, 20, 255]);
pub const HIGHLIGHT: Rgba<u8> = Rgba([30, 110, 220, 255]);
pub const ERROR: Rgba<u8> = Rgba([200, 40, 40, 255]);
pub const SCRIM: Rgba<u8> = Rgba([0, 0, 0, 96]);

fn put(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < image.width() && y < image.height() {
        image.put_pixel(x, y, color);
    }
}

pub fn fill_rect(image: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    for (x, y) in rasterize_box(rect.x, rect.y, rect.right() - 1, rect.bottom() - 1) {
        put(image, x, y, color);
    }
}

pub fn stroke_rect(image: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let region = rasterize_box(rect.x, rect.y, rect.right() - 1, rect.bottom() - 1);
    for (x, y) in boundary(&region) {
        put(image, x, y, color);
    }
}

/// Darken everything with a translucent overlay.
pub fn dim(image: &mut RgbaImage) {
    for px in image.pixels_mut() {
        *px = blend_over(*px, SCRIM);
    }
}

/// Text vertically centered in `rect`, left-aligned with a small inset.
pub fn draw_text_in(
    image: &mut RgbaImage,
    face: &Typeface,
    rect: Rect,
    text: &str,
    color: Rgba<u8>,
) {
    let y = rect.y + (rect.h - face.line_height()) / 2;
    face.draw(image, rect.x + 6, y, text, color);
}

/// Text centered both ways in `rect`.
pub fn draw_text_centered(
    image: &mut RgbaImage,
    face: &Typeface,
    rect: Rect,
    text: &str,
    color: Rgba<u8>,
) {
    let x = rect.x + (rect.w - face.width(text)) / 2;
    let y = rect.y + (rect.h - face.line_height()) / 2;
    face.draw(image, x, y, text, color);
}

pub fn draw_button(image: &mut RgbaImage, face: &Typeface, rect: Rect, text: &str) {
    fill_rect(image, rect, CONTROL_BG);
    stroke_rect(image, rect, CONTROL_BORDER);
    draw_text_centered(image, face, rect, text, TEXT);
}

/// A closed dropdown: current value plus a down arrow at the right edge.
pub fn draw_selector(image: &mut RgbaImage, face: &Typeface, rect: Rect, value: &str) {
    fill_rect(image, rect, CONTROL_BG);
    stroke_rect(image, rect, CONTROL_BORDER);
    draw_text_in(image, face, rect, value, TEXT);

    let cx = rect.right() - 12;
    let cy = rect.y + rect.h / 2;
    for (x, y) in rasterize_polygon(&[(cx - 4, cy - 2), (cx + 4, cy - 2), (cx, cy + 2)]) {
        put(image, x, y, TEXT);
    }
}

/// Copy `src` into `image` with its top-left at `(x, y)`.
pub fn blit(image: &mut RgbaImage, src: &RgbaImage, x: i32, y: i32) {
    for (sx, sy, px) in src.enumerate_pixels() {
        put(image, x + sx as i32, y + sy as i32, *px);
    }
}
