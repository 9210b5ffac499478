//! Fixed geometry of the lab window.
//!
//! The canvas sits at the top-left; a control panel runs down its right side
//! with one row per label, selector or button.

use crate::lab::Selector;

/// Width of the control panel beside the canvas
pub const PANEL_WIDTH: i32 = 180;
/// Height of one control row
pub const ROW_HEIGHT: i32 = 26;
/// Vertical gap between rows, and the panel's outer margin
pub const ROW_GAP: i32 = 8;

/// Axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

/// Something in the panel a click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Selector(Selector),
    Add,
    Remove,
    ChangeColor,
}

/// A static caption in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub rect: Rect,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub canvas: Rect,
    pub labels: Vec<Label>,
    pub add_selector: Rect,
    pub add_button: Rect,
    pub remove_selector: Rect,
    pub remove_button: Rect,
    pub color_button: Rect,
}

impl Layout {
    pub fn new(canvas_size: u32) -> Self {
        let side = i32::try_from(canvas_size).unwrap_or(i32::MAX / 2);
        let canvas = Rect::new(0, 0, side, side);

        let x = canvas.right() + ROW_GAP * 2;
        let w = PANEL_WIDTH - ROW_GAP * 4;
        let row = |i: i32| Rect::new(x, ROW_GAP * 2 + i * (ROW_HEIGHT + ROW_GAP), w, ROW_HEIGHT);

        let label = |i: i32, text: &'static str| Label { rect: row(i), text };
        let labels = vec![
            label(0, "Add Trait:"),
            label(3, "Remove Trait:"),
            label(6, "Manipulate Trait:"),
        ];
        let panel_bottom = row(7).bottom() + ROW_GAP * 2;

        Self {
            width: canvas.right() + PANEL_WIDTH,
            height: canvas.bottom().max(panel_bottom),
            canvas,
            labels,
            add_selector: row(1),
            add_button: row(2),
            remove_selector: row(4),
            remove_button: row(5),
            color_button: row(7),
        }
    }

    pub fn selector_rect(&self, selector: Selector) -> Rect {
        match selector {
            Selector::Add => self.add_selector,
            Selector::Remove => self.remove_selector,
        }
    }

    /// Rectangles of an open dropdown's options, stacked below the selector.
    pub fn menu_items(&self, selector: Selector, count: usize) -> Vec<Rect> {
        let anchor = self.selector_rect(selector);
        (0..count as i32)
            .map(|i| Rect::new(anchor.x, anchor.bottom() + i * anchor.h, anchor.w, anchor.h))
            .collect()
    }

    /// The control under a point, if any.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<Control> {
        [
            (self.add_selector, Control::Selector(Selector::Add)),
            (self.add_button, Control::Add),
            (self.remove_selector, Control::Selector(Selector::Remove)),
            (self.remove_button, Control::Remove),
            (self.color_button, Control::ChangeColor),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(x, y))
        .map(|(_, control)| control)
    }
}
