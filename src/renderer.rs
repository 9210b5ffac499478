//! Animal rendering to image buffers

use image::{Rgba, RgbaImage};

use crate::color::{blend_over, BLACK, TRANSPARENT};
use crate::models::{Animal, Shape, Trait};
use crate::shapes::{ellipse_span, triangle_span, Span};

/// Default canvas edge length in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 400;

/// Where a trait's shape lands, answered one row at a time.
///
/// Every shape is convex, so each row is a single span. A pixel is outline
/// when one of its four neighbors lies outside the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    shape: Shape,
    bounds: (i64, i64, i64, i64),
}

impl Footprint {
    pub fn of(t: &Trait) -> Self {
        Self {
            shape: t.shape,
            bounds: t.bounds(),
        }
    }

    /// Inclusive bounding box `(x0, y0, x1, y1)`.
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        self.bounds
    }

    /// Columns covered on row `y`, fill and outline together.
    pub fn span(&self, y: i64) -> Option<Span> {
        let (x0, y0, x1, y1) = self.bounds;
        match self.shape {
            Shape::Oval => ellipse_span(self.bounds, y),
            Shape::Rectangle => (x0 <= x1 && y0 <= y && y <= y1).then_some((x0, x1)),
            Shape::Triangle => triangle_span(x0 + (x1 - x0) / 2, self.bounds, y),
        }
    }

    /// Columns on row `y` drawn in the trait's color rather than the outline.
    pub fn interior(&self, y: i64) -> Option<Span> {
        let (start, end) = self.span(y)?;
        let (above_start, above_end) = self.span(y - 1)?;
        let (below_start, below_end) = self.span(y + 1)?;
        let start = (start + 1).max(above_start).max(below_start);
        let end = (end - 1).min(above_end).min(below_end);
        (start <= end).then_some((start, end))
    }

    pub fn covers(&self, x: i64, y: i64) -> bool {
        self.span(y).is_some_and(|(start, end)| start <= x && x <= end)
    }

    pub fn on_outline(&self, x: i64, y: i64) -> bool {
        self.covers(x, y) && !self.interior(y).is_some_and(|(start, end)| start <= x && x <= end)
    }
}

/// Draw one trait: filled in its color with a one-pixel black outline.
///
/// Pixels are overwritten, not blended. Only rows and columns on the canvas
/// are visited, so the cost is bounded by the canvas, not the trait.
pub fn draw_trait(image: &mut RgbaImage, t: &Trait) {
    let footprint = Footprint::of(t);
    let (width, height) = image.dimensions();
    let (_, y0, _, y1) = footprint.bounds();

    for y in y0.max(0)..=y1.min(i64::from(height) - 1) {
        let Some((start, end)) = footprint.span(y) else {
            continue;
        };
        let interior = footprint.interior(y);
        for x in start.max(0)..=end.min(i64::from(width) - 1) {
            let inside = interior.is_some_and(|(a, b)| a <= x && x <= b);
            let color = if inside { t.color } else { BLACK };
            // Both coordinates were clamped to the canvas above
            image.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Render every trait of `animal`, in order, onto a fresh transparent canvas.
///
/// Later traits paint over earlier ones.
///
/// # Examples
///
/// ```
/// use genelab::catalog::default_body;
/// use genelab::models::Animal;
/// use genelab::renderer::render_animal;
///
/// let animal: Animal = [default_body()].into_iter().collect();
/// let image = render_animal(&animal, 400, 400);
/// assert_eq!(image.dimensions(), (400, 400));
/// assert_eq!(image.get_pixel(0, 0)[3], 0);
/// assert_eq!(image.get_pixel(200, 200).0, [222, 184, 135, 255]);
/// ```
pub fn render_animal(animal: &Animal, width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, TRANSPARENT);
    for t in animal {
        draw_trait(&mut image, t);
    }
    image
}

/// Flatten a transparent render onto an opaque backdrop color.
pub fn flatten(image: &RgbaImage, background: Rgba<u8>) -> RgbaImage {
    let mut out = RgbaImage::from_pixel(image.width(), image.height(), background);
    for (x, y, px) in image.enumerate_pixels() {
        out.put_pixel(x, y, blend_over(background, *px));
    }
    out
}
