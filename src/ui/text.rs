//! Caption text for the panel and picker.
//!
//! The window looks up a sans-serif system face with `fontdb` and rasterizes
//! it with `swash`. Headless sessions, and machines without a usable font,
//! use the 8x8 bitmap face from `font8x8`.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use font8x8::{UnicodeFonts, BASIC_FONTS};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use image::{Rgba, RgbaImage};
use log::{debug, warn};
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;
use swash::FontRef;

use crate::color::blend_over;

/// Pixel size of captions drawn with a system face
pub const CAPTION_SIZE: f32 = 14.0;

/// Characters rasterized up front: printable ASCII
const PRINTABLE: RangeInclusive<u8> = b' '..=b'~';

/// Shown for characters the face has no glyph for
const REPLACEMENT: char = '?';

/// One rasterized character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glyph {
    /// Offset from the pen position to the bitmap's left edge
    pub left: i32,
    /// Distance from the baseline up to the bitmap's top edge
    pub top: i32,
    pub width: u32,
    pub height: u32,
    /// Row-major coverage, 0 (empty) to 255 (solid)
    pub coverage: Vec<u8>,
    pub advance: i32,
}

/// A face rasterized at one size, ready to draw without further font work.
#[derive(Debug, Clone, PartialEq)]
pub struct Typeface {
    glyphs: HashMap<char, Glyph>,
    ascent: i32,
    line_height: i32,
}

impl Typeface {
    /// The built-in 8x8 bitmap face.
    pub fn bitmap() -> Self {
        let glyphs = PRINTABLE
            .map(char::from)
            .filter_map(|c| {
                let rows = BASIC_FONTS.get(c)?;
                // Bit 0 of each row is the leftmost column
                let coverage = rows
                    .iter()
                    .flat_map(|&row| (0..8u8).map(move |bit| (row >> bit & 1) * 255))
                    .collect();
                let glyph = Glyph {
                    left: 0,
                    top: 8,
                    width: 8,
                    height: 8,
                    coverage,
                    advance: 8,
                };
                Some((c, glyph))
            })
            .collect();

        Self {
            glyphs,
            ascent: 8,
            line_height: 8,
        }
    }

    /// The system's default sans-serif face at `size` pixels, if there is one.
    pub fn system(size: f32) -> Option<Self> {
        let mut db = Database::new();
        db.load_system_fonts();

        let query = Query {
            families: &[Family::SansSerif],
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let id = db.query(&query)?;
        db.with_face_data(id, |data, index| Self::from_font_data(data, index as usize, size))
            .flatten()
    }

    /// Rasterize face `index` of a TrueType/OpenType file.
    pub fn from_font_data(data: &[u8], index: usize, size: f32) -> Option<Self> {
        let font = FontRef::from_index(data, index)?;
        let metrics = font.metrics(&[]);
        let glyph_metrics = font.glyph_metrics(&[]);
        let scale = size / f32::from(metrics.units_per_em.max(1));
        let charmap = font.charmap();

        let mut context = ScaleContext::new();
        let mut scaler = context.builder(font).size(size).hint(true).build();
        let mut render = Render::new(&[Source::Outline]);
        render.format(Format::Alpha);

        let glyphs = PRINTABLE
            .map(char::from)
            .map(|c| {
                let id = charmap.map(c);
                let advance = (glyph_metrics.advance_width(id) * scale).round() as i32;
                let glyph = match render.render(&mut scaler, id) {
                    Some(image) => Glyph {
                        left: image.placement.left,
                        top: image.placement.top,
                        width: image.placement.width,
                        height: image.placement.height,
                        coverage: image.data,
                        advance,
                    },
                    // Blank glyphs such as space
                    None => Glyph {
                        advance,
                        ..Glyph::default()
                    },
                };
                (c, glyph)
            })
            .collect();

        let ascent = (metrics.ascent * scale).ceil() as i32;
        let descent = (metrics.descent.abs() * scale).ceil() as i32;
        Some(Self {
            glyphs,
            ascent,
            line_height: ascent + descent,
        })
    }

    /// A system face when available, otherwise the bitmap face.
    pub fn load(size: f32) -> Self {
        match Self::system(size) {
            Some(face) => {
                debug!("captions use the system sans-serif face at {}px", size);
                face
            }
            None => {
                warn!("no usable system font; captions use the built-in bitmap face");
                Self::bitmap()
            }
        }
    }

    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c).or_else(|| self.glyphs.get(&REPLACEMENT))
    }

    /// Horizontal advance of `text` in pixels.
    pub fn width(&self, text: &str) -> i32 {
        text.chars().filter_map(|c| self.glyph(c)).map(|g| g.advance).sum()
    }

    /// Draw `text` with the top of its line box at `(x, y)`, clipped to the image.
    pub fn draw(&self, image: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        let baseline = y + self.ascent;
        let mut pen = x;
        for c in text.chars() {
            let Some(glyph) = self.glyph(c) else {
                continue;
            };
            let origin_x = pen + glyph.left;
            let origin_y = baseline - glyph.top;
            let width = glyph.width.max(1) as usize;
            for (i, &coverage) in glyph.coverage.iter().enumerate() {
                if coverage == 0 {
                    continue;
                }
                let gx = origin_x + (i % width) as i32;
                let gy = origin_y + (i / width) as i32;
                blend_pixel(image, gx, gy, color, coverage);
            }
            pen += glyph.advance;
        }
    }
}

fn blend_pixel(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: u8) {
    if x < 0 || y < 0 || x as u32 >= image.width() || y as u32 >= image.height() {
        return;
    }
    let alpha = (u16::from(color[3]) * u16::from(coverage) / 255) as u8;
    let px = image.get_pixel_mut(x as u32, y as u32);
    *px = blend_over(*px, Rgba([color[0], color[1], color[2], alpha]));
}
