//! Configuration schema types for `genelab.toml`
//!
//! Every section is optional; an empty file yields the built-in lab.

use image::Rgba;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::{default_body, Catalog};
use crate::color::{parse_color, to_hex};
use crate::models::{Shape, Trait};
use crate::renderer::DEFAULT_CANVAS_SIZE;

/// Smallest canvas the panel layout can sit beside
pub const MIN_CANVAS_SIZE: u32 = 64;
/// Largest accepted canvas
pub const MAX_CANVAS_SIZE: u32 = 2048;

/// Window section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,
    /// Edge length of the square drawing canvas
    #[serde(default = "default_canvas_size")]
    pub canvas_size: u32,
    /// Canvas backdrop behind the transparent render
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            canvas_size: default_canvas_size(),
            background: default_background(),
        }
    }
}

fn default_title() -> String {
    "Animal Gene Lab (Prototype)".to_string()
}

fn default_canvas_size() -> u32 {
    DEFAULT_CANVAS_SIZE
}

fn default_background() -> String {
    "white".to_string()
}

/// A trait as written in the config file.
///
/// Shape and color stay strings here so validation can report every bad
/// entry at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitConfig {
    pub name: String,
    pub shape: String,
    pub color: String,
    pub size: [i32; 2],
    pub position: [i32; 2],
}

impl TraitConfig {
    /// Convert into a trait.
    ///
    /// Returns `None` when the shape kind has no primitive or the color does
    /// not parse.
    pub fn to_trait(&self) -> Option<Trait> {
        let shape = Shape::parse(&self.shape)?;
        let color = parse_color(&self.color).ok()?;
        Some(Trait::new(
            self.name.clone(),
            shape,
            color,
            (self.size[0], self.size[1]),
            (self.position[0], self.position[1]),
        ))
    }
}

impl From<&Trait> for TraitConfig {
    fn from(t: &Trait) -> Self {
        Self {
            name: t.name.clone(),
            shape: t.shape.to_string(),
            color: to_hex(t.color),
            size: [t.size.0, t.size.1],
            position: [t.position.0, t.position.1],
        }
    }
}

/// Color picker section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Colors offered by the picker, in grid order
    #[serde(default = "default_swatches")]
    pub swatches: Vec<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            swatches: default_swatches(),
        }
    }
}

fn default_swatches() -> Vec<String> {
    [
        "#deb887", "#b0c4de", "#8b4513", "#000000", "#ffffff", "#808080", "#ff0000", "#ff8c00",
        "#ffd700", "#9acd32", "#228b22", "#20b2aa", "#1e90ff", "#4b0082", "#ee82ee", "#ff69b4",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Top-level `genelab.toml` contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabConfig {
    #[serde(default)]
    pub window: WindowConfig,
    /// Trait every animal starts with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<TraitConfig>,
    /// Replaces the built-in catalog when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<TraitConfig>>,
    #[serde(default)]
    pub picker: PickerConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "catalog[1].color")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "genelab.toml: '{}' {}", self.field, self.message)
    }
}

impl LabConfig {
    /// Validate the configuration and return any errors
    ///
    /// Unknown shape kinds are not errors; those entries are skipped when the
    /// catalog is built.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let mut push = |field: String, message: &str| {
            errors.push(ConfigValidationError {
                field,
                message: message.to_string(),
            })
        };

        if self.window.canvas_size < MIN_CANVAS_SIZE || self.window.canvas_size > MAX_CANVAS_SIZE {
            push(
                "window.canvas_size".to_string(),
                &format!("must be between {} and {}", MIN_CANVAS_SIZE, MAX_CANVAS_SIZE),
            );
        }
        if parse_color(&self.window.background).is_err() {
            push("window.background".to_string(), "is not a valid color");
        }

        if let Some(body) = &self.body {
            if body.name.trim().is_empty() {
                push("body.name".to_string(), "must be a non-empty string");
            }
            if parse_color(&body.color).is_err() {
                push("body.color".to_string(), "is not a valid color");
            }
        }

        if let Some(catalog) = &self.catalog {
            let mut seen = HashSet::new();
            for (i, entry) in catalog.iter().enumerate() {
                if entry.name.trim().is_empty() {
                    push(format!("catalog[{}].name", i), "must be a non-empty string");
                } else if !seen.insert(entry.name.as_str()) {
                    push(format!("catalog[{}].name", i), "duplicates an earlier entry");
                }
                if parse_color(&entry.color).is_err() {
                    push(format!("catalog[{}].color", i), "is not a valid color");
                }
            }
        }

        if self.picker.swatches.is_empty() {
            push("picker.swatches".to_string(), "must contain at least one color");
        }
        for (i, swatch) in self.picker.swatches.iter().enumerate() {
            if parse_color(swatch).is_err() {
                push(format!("picker.swatches[{}]", i), "is not a valid color");
            }
        }

        errors
    }

    /// The catalog this config describes.
    ///
    /// Entries whose shape kind is unknown are dropped with a warning.
    pub fn catalog(&self) -> Catalog {
        let Some(entries) = &self.catalog else {
            return Catalog::builtin();
        };
        let traits = entries
            .iter()
            .filter_map(|entry| {
                let t = entry.to_trait();
                if t.is_none() {
                    warn!("skipping catalog entry '{}' with shape '{}'", entry.name, entry.shape);
                }
                t
            })
            .collect();
        Catalog::new(traits)
    }

    /// The starting body trait.
    ///
    /// A body with an unknown shape kind falls back to the built-in body.
    pub fn body(&self) -> Trait {
        match &self.body {
            Some(entry) => entry.to_trait().unwrap_or_else(|| {
                warn!("body shape '{}' is unknown, using the default body", entry.shape);
                default_body()
            }),
            None => default_body(),
        }
    }

    /// Parsed picker swatches, skipping any that fail to parse.
    pub fn swatches(&self) -> Vec<Rgba<u8>> {
        self.picker.swatches.iter().filter_map(|s| parse_color(s).ok()).collect()
    }

    /// Parsed canvas backdrop, white if unparseable.
    pub fn background(&self) -> Rgba<u8> {
        parse_color(&self.window.background).unwrap_or(crate::color::WHITE)
    }
}
