//! Data models for the animal and its traits

use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color::to_hex;

/// The drawing primitive a trait is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Ellipse inscribed in the trait's bounding box
    Oval,
    /// The trait's bounding box itself
    Rectangle,
    /// Upward triangle, apex centered on the top edge
    Triangle,
}

impl Shape {
    /// Every shape kind, in a stable order.
    pub const ALL: [Shape; 3] = [Shape::Oval, Shape::Rectangle, Shape::Triangle];

    /// Parse a shape-kind string, ignoring case.
    ///
    /// Returns `None` for kinds that have no primitive.
    ///
    /// ```
    /// use genelab::models::Shape;
    ///
    /// assert_eq!(Shape::parse("Oval"), Some(Shape::Oval));
    /// assert_eq!(Shape::parse("hexagon"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Shape> {
        Shape::ALL.into_iter().find(|shape| shape.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Oval => "oval",
            Shape::Rectangle => "rectangle",
            Shape::Triangle => "triangle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a shape-kind string names no known primitive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape kind '{0}'")]
pub struct UnknownShape(pub String);

impl FromStr for Shape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::parse(s).ok_or_else(|| UnknownShape(s.to_string()))
    }
}

/// A named visual descriptor attached to an animal.
///
/// Only `color` changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trait {
    pub name: String,
    pub shape: Shape,
    #[serde(serialize_with = "serialize_color")]
    pub color: Rgba<u8>,
    /// (width, height) in pixels
    pub size: (i32, i32),
    /// Top-left (x, y) pixel offset
    pub position: (i32, i32),
}

fn serialize_color<S>(color: &Rgba<u8>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&to_hex(*color))
}

impl Trait {
    pub fn new(
        name: impl Into<String>,
        shape: Shape,
        color: Rgba<u8>,
        size: (i32, i32),
        position: (i32, i32),
    ) -> Self {
        Self {
            name: name.into(),
            shape,
            color,
            size,
            position,
        }
    }

    /// Inclusive bounding box `(x0, y0, x1, y1)` spanned by the trait.
    ///
    /// Widened to `i64` so any position and size combine without overflow.
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        let (x, y) = (i64::from(self.position.0), i64::from(self.position.1));
        let (w, h) = (i64::from(self.size.0), i64::from(self.size.1));
        (x, y, x + w, y + h)
    }
}

/// An ordered collection of traits composited into one image.
///
/// Insertion order is draw order. Names are not required to be unique here;
/// callers that care check with [`Animal::contains`] before adding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Animal {
    traits: Vec<Trait>,
}

impl Animal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trait unconditionally.
    pub fn add(&mut self, t: Trait) {
        self.traits.push(t);
    }

    /// Remove every trait called `name`. Absent names are a no-op.
    ///
    /// Returns how many traits were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.traits.len();
        self.traits.retain(|t| t.name != name);
        before - self.traits.len()
    }

    /// First trait called `name`.
    pub fn get(&self, name: &str) -> Option<&Trait> {
        self.traits.iter().find(|t| t.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Trait> {
        self.traits.iter_mut().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    pub fn names(&self) -> Vec<&str> {
        self.traits.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trait> {
        self.traits.iter()
    }
}

impl<'a> IntoIterator for &'a Animal {
    type Item = &'a Trait;
    type IntoIter = std::slice::Iter<'a, Trait>;

    fn into_iter(self) -> Self::IntoIter {
        self.traits.iter()
    }
}

impl FromIterator<Trait> for Animal {
    fn from_iter<I: IntoIterator<Item = Trait>>(iter: I) -> Self {
        Self {
            traits: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(name: &str, shape: Shape) -> Trait {
        Trait::new(name, shape, Rgba([10, 20, 30, 255]), (10, 10), (0, 0))
    }

    #[test]
    fn test_shape_parse() {
        assert_eq!(Shape::parse("rectangle"), Some(Shape::Rectangle));
        assert_eq!(Shape::parse(" TRIANGLE "), Some(Shape::Triangle));
        assert_eq!(Shape::parse(""), None);
        assert_eq!("star".parse::<Shape>(), Err(UnknownShape("star".to_string())));
    }

    #[test]
    fn test_shape_serde_lowercase() {
        let json = serde_json::to_string(&Shape::Oval).unwrap();
        assert_eq!(json, r#""oval""#);
        let parsed: Shape = serde_json::from_str(r#""triangle""#).unwrap();
        assert_eq!(parsed, Shape::Triangle);
    }

    #[test]
    fn test_add_appends() {
        let mut animal = Animal::new();
        animal.add(make("Body", Shape::Oval));
        animal.add(make("Wings", Shape::Rectangle));
        assert_eq!(animal.names(), vec!["Body", "Wings"]);
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let mut animal = Animal::new();
        animal.add(make("Tail", Shape::Rectangle));
        animal.add(make("Tail", Shape::Rectangle));
        assert_eq!(animal.len(), 2);
    }

    #[test]
    fn test_remove_all_matches_preserves_order() {
        let mut animal: Animal = ["A", "Tail", "B", "Tail", "C"]
            .into_iter()
            .map(|n| make(n, Shape::Oval))
            .collect();
        assert_eq!(animal.remove("Tail"), 2);
        assert_eq!(animal.names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut animal: Animal = [make("Wings", Shape::Rectangle)].into_iter().collect();
        let before = animal.clone();
        assert_eq!(animal.remove("Body"), 0);
        assert_eq!(animal, before);
    }

    #[test]
    fn test_get_first_match() {
        let mut first = make("Ears", Shape::Triangle);
        first.color = Rgba([1, 1, 1, 255]);
        let animal: Animal = [first.clone(), make("Ears", Shape::Oval)].into_iter().collect();
        assert_eq!(animal.get("Ears"), Some(&first));
        assert_eq!(animal.get("ears"), None);
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut animal: Animal = [make("Body", Shape::Oval)].into_iter().collect();
        if let Some(t) = animal.get_mut("Body") {
            t.color = Rgba([9, 9, 9, 255]);
        }
        assert_eq!(animal.traits()[0].color, Rgba([9, 9, 9, 255]));
    }

    #[test]
    fn test_bounds() {
        let t = Trait::new("Body", Shape::Oval, Rgba([0, 0, 0, 255]), (180, 120), (110, 140));
        assert_eq!(t.bounds(), (110, 140, 290, 260));

        let black = Rgba([0, 0, 0, 255]);
        let far = Trait::new("Far", Shape::Oval, black, (i32::MAX, 1), (i32::MAX, 0));
        assert_eq!(far.bounds().2, 2 * i64::from(i32::MAX));
    }

    #[test]
    fn test_trait_serializes_hex_color() {
        let brown = Rgba([139, 69, 19, 255]);
        let t = Trait::new("Tail", Shape::Rectangle, brown, (20, 80), (250, 220));
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["color"], "#8b4513");
        assert_eq!(json["shape"], "rectangle");
        assert_eq!(json["size"], serde_json::json!([20, 80]));
    }
}
