//! The lab controller: turns user actions into animal edits.
//!
//! The lab owns the animal, the catalog and the state of the two selectors.
//! Every action is a silent no-op when it cannot apply; the return values only
//! tell the caller whether anything changed.

use image::Rgba;
use log::debug;

use crate::catalog::{default_body, Catalog};
use crate::models::{Animal, Trait};

/// Which of the two dropdowns an action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Add,
    Remove,
}

/// Source of a user-chosen color.
///
/// Implementations block until the user confirms (`Some`) or cancels (`None`).
pub trait ColorPicker {
    fn pick(&mut self, title: &str, initial: Rgba<u8>) -> Option<Rgba<u8>>;
}

/// A pending recolor, handed to a picker that answers later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecolorRequest {
    /// Trait whose color will change
    pub name: String,
    /// Title for the picker
    pub title: String,
    /// The trait's color when the request was made
    pub current: Rgba<u8>,
}

#[derive(Debug, Clone)]
pub struct Lab {
    animal: Animal,
    catalog: Catalog,
    add_selection: usize,
    remove_selection: usize,
}

impl Lab {
    /// A lab whose animal starts with just `body`.
    pub fn new(catalog: Catalog, body: Trait) -> Self {
        let mut animal = Animal::new();
        animal.add(body);
        Self {
            animal,
            catalog,
            add_selection: 0,
            remove_selection: 0,
        }
    }

    pub fn animal(&self) -> &Animal {
        &self.animal
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Name currently shown in a selector.
    pub fn selected(&self, selector: Selector) -> Option<&str> {
        let index = match selector {
            Selector::Add => self.add_selection,
            Selector::Remove => self.remove_selection,
        };
        self.catalog.entries().get(index).map(|t| t.name.as_str())
    }

    /// Point a selector at a catalog entry by name.
    ///
    /// Names outside the catalog leave the selector where it was.
    pub fn select(&mut self, selector: Selector, name: &str) -> bool {
        let Some(index) = self.catalog.entries().iter().position(|t| t.name == name) else {
            debug!("'{}' is not in the catalog, selection unchanged", name);
            return false;
        };
        match selector {
            Selector::Add => self.add_selection = index,
            Selector::Remove => self.remove_selection = index,
        }
        true
    }

    /// Add the trait named by the add selector.
    ///
    /// Ignored when the animal already carries a trait of that name.
    pub fn add_selected(&mut self) -> bool {
        let Some(name) = self.selected(Selector::Add).map(str::to_owned) else {
            return false;
        };
        self.add_by_name(&name)
    }

    /// Add a catalog trait by name, ignoring duplicates and unknown names.
    pub fn add_by_name(&mut self, name: &str) -> bool {
        if self.animal.contains(name) {
            debug!("'{}' already present, add ignored", name);
            return false;
        }
        let Some(template) = self.catalog.get(name) else {
            debug!("'{}' is not in the catalog, add ignored", name);
            return false;
        };
        self.animal.add(template.clone());
        debug!("added '{}'", name);
        true
    }

    /// Remove every trait named by the remove selector.
    pub fn remove_selected(&mut self) -> bool {
        let Some(name) = self.selected(Selector::Remove).map(str::to_owned) else {
            return false;
        };
        self.remove_by_name(&name)
    }

    /// Remove by any name, including ones outside the catalog such as the body.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        let removed = self.animal.remove(name);
        if removed == 0 {
            debug!("'{}' not present, remove ignored", name);
        } else {
            debug!("removed {} trait(s) named '{}'", removed, name);
        }
        removed > 0
    }

    /// Start a recolor of the trait named by the *add* selector.
    ///
    /// Returns `None` when the animal has no such trait.
    pub fn recolor_request(&self) -> Option<RecolorRequest> {
        let name = self.selected(Selector::Add)?;
        self.recolor_request_for(name)
    }

    /// Start a recolor of a trait by name.
    pub fn recolor_request_for(&self, name: &str) -> Option<RecolorRequest> {
        let Some(t) = self.animal.get(name) else {
            debug!("'{}' not present, recolor ignored", name);
            return None;
        };
        Some(RecolorRequest {
            name: t.name.clone(),
            title: format!("Choose color for {}", t.name),
            current: t.color,
        })
    }

    /// Finish a recolor. `None` means the picker was cancelled.
    pub fn apply_recolor(&mut self, request: &RecolorRequest, choice: Option<Rgba<u8>>) -> bool {
        let Some(color) = choice else {
            debug!("recolor of '{}' cancelled", request.name);
            return false;
        };
        match self.animal.get_mut(&request.name) {
            Some(t) => {
                t.color = color;
                debug!("recolored '{}'", request.name);
                true
            }
            None => false,
        }
    }

    /// Recolor the add-selected trait, asking `picker` for the color.
    pub fn change_color(&mut self, picker: &mut dyn ColorPicker) -> bool {
        let Some(request) = self.recolor_request() else {
            return false;
        };
        let choice = picker.pick(&request.title, request.current);
        self.apply_recolor(&request, choice)
    }
}

impl Default for Lab {
    fn default() -> Self {
        Self::new(Catalog::builtin(), default_body())
    }
}
