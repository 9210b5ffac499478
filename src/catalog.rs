//! The fixed set of traits a user can add, plus the default body.

use image::Rgba;

use crate::models::{Shape, Trait};

/// Addable trait templates, in selector order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<Trait>,
}

impl Catalog {
    /// Build a catalog from templates.
    ///
    /// Later entries whose name repeats an earlier one are unreachable through
    /// [`Catalog::get`]; config validation rejects them before they get here.
    pub fn new(entries: Vec<Trait>) -> Self {
        Self { entries }
    }

    /// Wings, Tail and Ears.
    pub fn builtin() -> Self {
        let wings = Rgba([0xb0, 0xc4, 0xde, 255]);
        let tail = Rgba([0x8b, 0x45, 0x13, 255]);
        let ears = Rgba([0xde, 0xb8, 0x87, 255]);
        Self::new(vec![
            Trait::new("Wings", Shape::Rectangle, wings, (120, 40), (70, 100)),
            Trait::new("Tail", Shape::Rectangle, tail, (20, 80), (250, 220)),
            Trait::new("Ears", Shape::Triangle, ears, (40, 40), (120, 100)),
        ])
    }

    /// Template for `name`, if the catalog offers it.
    pub fn get(&self, name: &str) -> Option<&Trait> {
        self.entries.iter().find(|t| t.name == name)
    }

    pub fn entries(&self) -> &[Trait] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The trait every animal starts with.
pub fn default_body() -> Trait {
    Trait::new("Body", Shape::Oval, Rgba([0xde, 0xb8, 0x87, 255]), (180, 120), (110, 140))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        assert_eq!(Catalog::builtin().names(), vec!["Wings", "Tail", "Ears"]);
    }

    #[test]
    fn test_builtin_templates() {
        let catalog = Catalog::builtin();

        let wings = catalog.get("Wings").unwrap();
        assert_eq!(wings.shape, Shape::Rectangle);
        assert_eq!(wings.size, (120, 40));
        assert_eq!(wings.position, (70, 100));

        let tail = catalog.get("Tail").unwrap();
        assert_eq!(tail.color, Rgba([139, 69, 19, 255]));

        let ears = catalog.get("Ears").unwrap();
        assert_eq!(ears.shape, Shape::Triangle);
        assert_eq!(ears.position, (120, 100));
    }

    #[test]
    fn test_get_unknown() {
        assert!(Catalog::builtin().get("Horns").is_none());
        assert!(Catalog::builtin().get("wings").is_none());
    }

    #[test]
    fn test_default_body() {
        let body = default_body();
        assert_eq!(body.name, "Body");
        assert_eq!(body.shape, Shape::Oval);
        assert_eq!(body.bounds(), (110, 140, 290, 260));
    }
}
