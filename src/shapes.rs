//! Shape rasterization primitives.
//!
//! The `rasterize_*` functions return the set of integer pixel coordinates
//! covered by a small shape. The `*_span` functions answer one row at a
//! time, so callers can clip to a canvas before touching any pixel.
//!
//! Bounding boxes are inclusive on both ends: the box `(x0, y0, x1, y1)`
//! spans `x1 - x0 + 1` columns. An inverted box (`x1 < x0` or `y1 < y0`)
//! covers nothing.

use std::collections::HashSet;

/// Pixel coordinate set produced by the rasterizers.
pub type PixelSet = HashSet<(i32, i32)>;

/// Rasterize a line using Bresenham's line algorithm.
///
/// # Examples
///
/// ```
/// use genelab::shapes::rasterize_line;
///
/// let pixels = rasterize_line((0, 0), (3, 3));
/// assert_eq!(pixels.len(), 4);
/// assert!(pixels.contains(&(3, 3)));
/// ```
pub fn rasterize_line(p0: (i32, i32), p1: (i32, i32)) -> PixelSet {
    let mut pixels = HashSet::new();

    // Widened so endpoints at opposite ends of i32 cannot overflow
    let (mut x0, mut y0) = (i64::from(p0.0), i64::from(p0.1));
    let (x1, y1) = (i64::from(p1.0), i64::from(p1.1));

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        // x0 and y0 never leave the segment, so they fit back in i32
        pixels.insert((x0 as i32, y0 as i32));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }

    pixels
}

/// Rasterize a filled axis-aligned box.
///
/// # Examples
///
/// ```
/// use genelab::shapes::rasterize_box;
///
/// let pixels = rasterize_box(0, 0, 2, 1);
/// assert_eq!(pixels.len(), 6);
/// assert!(pixels.contains(&(2, 1)));
/// ```
pub fn rasterize_box(x0: i32, y0: i32, x1: i32, y1: i32) -> PixelSet {
    let mut pixels = HashSet::new();
    for y in y0..=y1 {
        for x in x0..=x1 {
            pixels.insert((x, y));
        }
    }
    pixels
}

/// Inclusive column range `(start, end)` covered on one row.
pub type Span = (i64, i64);

/// Row `y` of a filled ellipse inscribed in an inclusive bounding box.
///
/// A pixel is covered when its center falls inside the ellipse whose
/// extents touch the outer edges of the box's border pixels.
///
/// # Examples
///
/// ```
/// use genelab::shapes::ellipse_span;
///
/// // Middle row spans the whole box, the top row only its center
/// assert_eq!(ellipse_span((0, 0, 10, 6), 3), Some((0, 10)));
/// assert_eq!(ellipse_span((0, 0, 10, 6), 0), Some((3, 7)));
/// assert_eq!(ellipse_span((0, 0, 10, 6), 7), None);
/// ```
pub fn ellipse_span(bounds: (i64, i64, i64, i64), y: i64) -> Option<Span> {
    let (x0, y0, x1, y1) = bounds;
    if x1 < x0 || y < y0 || y > y1 {
        return None;
    }

    let rx = (x1 - x0 + 1) as f64 / 2.0;
    let ry = (y1 - y0 + 1) as f64 / 2.0;
    let cx = x0 as f64 + rx;
    let cy = y0 as f64 + ry;

    let ny = (y as f64 + 0.5 - cy) / ry;
    let reach = 1.0 - ny * ny;
    if reach < 0.0 {
        return None;
    }
    let half = rx * reach.sqrt();
    let start = (cx - half - 0.5).ceil() as i64;
    let end = (cx + half - 0.5).floor() as i64;
    (start <= end).then_some((start, end))
}

/// Row `y` of an upward triangle with its apex at `(apex_x, y0)` and its
/// base along the bottom edge of an inclusive bounding box.
///
/// A zero-height box degenerates to the base line.
///
/// # Examples
///
/// ```
/// use genelab::shapes::triangle_span;
///
/// assert_eq!(triangle_span(2, (0, 0, 4, 4), 0), Some((2, 2)));
/// assert_eq!(triangle_span(2, (0, 0, 4, 4), 4), Some((0, 4)));
/// ```
pub fn triangle_span(apex_x: i64, bounds: (i64, i64, i64, i64), y: i64) -> Option<Span> {
    let (x0, y0, x1, y1) = bounds;
    if x1 < x0 || y < y0 || y > y1 {
        return None;
    }
    if y0 == y1 {
        return Some((x0, x1));
    }

    let t = (y - y0) as f64 / (y1 - y0) as f64;
    let apex = apex_x as f64;
    let left = apex + t * (x0 as f64 - apex);
    let right = apex + t * (x1 as f64 - apex);
    Some((left.round() as i64, right.round() as i64))
}

/// Rasterize a filled polygon using a scanline fill.
///
/// Edges are always included, so thin slivers never disappear.
///
/// # Examples
///
/// ```
/// use genelab::shapes::rasterize_polygon;
///
/// let triangle = vec![(2, 0), (0, 4), (4, 4)];
/// let pixels = rasterize_polygon(&triangle);
/// assert!(pixels.contains(&(2, 2)));
/// assert!(!pixels.contains(&(0, 0)));
/// ```
pub fn rasterize_polygon(vertices: &[(i32, i32)]) -> PixelSet {
    let mut pixels = polygon_outline(vertices);
    if vertices.len() < 3 {
        return pixels;
    }

    let (Some(min_y), Some(max_y)) = (
        vertices.iter().map(|&(_, y)| y).min(),
        vertices.iter().map(|&(_, y)| y).max(),
    ) else {
        return pixels;
    };

    for y in min_y..=max_y {
        let mut crossings = Vec::new();
        for (i, &(x1, y1)) in vertices.iter().enumerate() {
            let (x2, y2) = vertices[(i + 1) % vertices.len()];
            if y1 == y2 {
                continue;
            }
            // Half-open on the upper end so shared vertices count once
            let (lo, hi) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
            if y >= lo && y < hi {
                let t = (f64::from(y) - f64::from(y1)) / (f64::from(y2) - f64::from(y1));
                crossings.push(f64::from(x1) + t * (f64::from(x2) - f64::from(x1)));
            }
        }
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let start = pair[0].ceil() as i32;
            let end = pair[1].floor() as i32;
            for x in start..=end {
                pixels.insert((x, y));
            }
        }
    }

    pixels
}

/// Rasterize the closed outline of a polygon.
pub fn polygon_outline(vertices: &[(i32, i32)]) -> PixelSet {
    let mut pixels = HashSet::new();
    for (i, &start) in vertices.iter().enumerate() {
        let end = vertices[(i + 1) % vertices.len()];
        pixels.extend(rasterize_line(start, end));
    }
    pixels
}

/// Pixels of `region` that touch a pixel outside it (4-connected).
///
/// Used to trace the one-pixel outline of filled boxes and ellipses.
///
/// # Examples
///
/// ```
/// use genelab::shapes::{boundary, rasterize_box};
///
/// let edge = boundary(&rasterize_box(0, 0, 3, 3));
/// assert_eq!(edge.len(), 12);
/// assert!(!edge.contains(&(1, 1)));
/// ```
pub fn boundary(region: &PixelSet) -> PixelSet {
    region
        .iter()
        .copied()
        .filter(|&(x, y)| {
            [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
                .iter()
                .any(|p| !region.contains(p))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rasterize_line_horizontal() {
        let pixels = rasterize_line((0, 0), (3, 0));
        assert_eq!(pixels.len(), 4);
        for x in 0..=3 {
            assert!(pixels.contains(&(x, 0)));
        }
    }

    #[test]
    fn test_rasterize_line_single_point() {
        let pixels = rasterize_line((5, 5), (5, 5));
        assert_eq!(pixels.len(), 1);
    }

    #[test]
    fn test_rasterize_line_reversed() {
        assert_eq!(rasterize_line((3, 1), (0, 1)), rasterize_line((0, 1), (3, 1)));
    }

    #[test]
    fn test_rasterize_box_inclusive() {
        let pixels = rasterize_box(10, 20, 12, 20);
        assert_eq!(pixels.len(), 3);
        assert!(pixels.contains(&(10, 20)));
        assert!(pixels.contains(&(12, 20)));
    }

    #[test]
    fn test_rasterize_box_inverted_is_empty() {
        assert!(rasterize_box(5, 5, 4, 10).is_empty());
        assert!(rasterize_box(5, 5, 10, 4).is_empty());
    }

    #[test]
    fn test_rasterize_box_negative_coords() {
        let pixels = rasterize_box(-2, -2, -1, -1);
        assert_eq!(pixels.len(), 4);
        assert!(pixels.contains(&(-2, -2)));
    }

    #[test]
    fn test_ellipse_span_touches_box_edges() {
        let bounds = (0, 0, 20, 10);
        // Midpoints of each side are inside, corners are not
        assert_eq!(ellipse_span(bounds, 5), Some((0, 20)));
        let (start, end) = ellipse_span(bounds, 0).unwrap();
        assert!(start > 0 && start <= 10 && end >= 10 && end < 20);
        let (start, end) = ellipse_span(bounds, 10).unwrap();
        assert!(start > 0 && end < 20);
        assert_eq!(ellipse_span(bounds, -1), None);
        assert_eq!(ellipse_span(bounds, 11), None);
    }

    #[test]
    fn test_ellipse_span_symmetric() {
        let bounds = (0, 0, 9, 5);
        for y in 0..=5 {
            let (start, end) = ellipse_span(bounds, y).unwrap();
            assert_eq!(start, 9 - end);
            assert_eq!(ellipse_span(bounds, 5 - y), Some((start, end)));
        }
    }

    #[test]
    fn test_ellipse_span_single_pixel() {
        assert_eq!(ellipse_span((3, 3, 3, 3), 3), Some((3, 3)));
    }

    #[test]
    fn test_ellipse_span_inverted_is_empty() {
        assert_eq!(ellipse_span((5, 5, 4, 9), 6), None);
        assert_eq!(ellipse_span((5, 9, 6, 5), 7), None);
    }

    #[test]
    fn test_ellipse_span_far_from_origin() {
        let x = i64::from(i32::MAX) - 10;
        let (start, end) = ellipse_span((x, 0, x + 100, 100), 50).unwrap();
        assert_eq!((start, end), (x, x + 100));
    }

    #[test]
    fn test_triangle_span_widens_toward_base() {
        let bounds = (0, 0, 40, 40);
        assert_eq!(triangle_span(20, bounds, 0), Some((20, 20)));
        assert_eq!(triangle_span(20, bounds, 20), Some((10, 30)));
        assert_eq!(triangle_span(20, bounds, 40), Some((0, 40)));
        assert_eq!(triangle_span(20, bounds, 41), None);
    }

    #[test]
    fn test_triangle_span_flat_is_base_line() {
        assert_eq!(triangle_span(5, (0, 7, 10, 7), 7), Some((0, 10)));
        assert_eq!(triangle_span(5, (10, 0, 0, 10), 5), None);
    }

    #[test]
    fn test_rasterize_line_extreme_endpoints() {
        let pixels = rasterize_line((i32::MIN, 0), (i32::MIN + 2, 0));
        assert_eq!(pixels.len(), 3);
        let pixels = rasterize_line((i32::MAX, i32::MAX), (i32::MAX - 1, i32::MAX));
        assert_eq!(pixels.len(), 2);
    }

    #[test]
    fn test_rasterize_polygon_triangle() {
        let pixels = rasterize_polygon(&[(20, 0), (0, 40), (40, 40)]);
        // Apex and base corners
        assert!(pixels.contains(&(20, 0)));
        assert!(pixels.contains(&(0, 40)));
        assert!(pixels.contains(&(40, 40)));
        // Interior
        assert!(pixels.contains(&(20, 30)));
        // Outside, beside the apex
        assert!(!pixels.contains(&(5, 5)));
        assert!(!pixels.contains(&(35, 5)));
    }

    #[test]
    fn test_rasterize_polygon_square() {
        let pixels = rasterize_polygon(&[(0, 0), (3, 0), (3, 3), (0, 3)]);
        assert_eq!(pixels.len(), 16);
    }

    #[test]
    fn test_rasterize_polygon_too_few_vertices() {
        let pixels = rasterize_polygon(&[(0, 0), (2, 2)]);
        // Degenerates to the line between the points
        assert_eq!(pixels.len(), 3);
        assert!(rasterize_polygon(&[]).is_empty());
    }

    #[test]
    fn test_polygon_outline_closed() {
        let outline = polygon_outline(&[(0, 0), (4, 0), (4, 4)]);
        assert!(outline.contains(&(2, 0)));
        assert!(outline.contains(&(4, 2)));
        assert!(outline.contains(&(2, 2)));
        assert!(!outline.contains(&(3, 1)));
    }

    #[test]
    fn test_boundary_of_box() {
        let region = rasterize_box(0, 0, 4, 4);
        let edge = boundary(&region);
        assert_eq!(edge.len(), 16);
        assert!(edge.contains(&(0, 2)));
        assert!(!edge.contains(&(2, 2)));
    }

    #[test]
    fn test_boundary_of_thin_box_is_whole_box() {
        let region = rasterize_box(0, 0, 5, 1);
        assert_eq!(boundary(&region), region);
    }
}
