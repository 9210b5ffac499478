//! Modal color picker drawn over the lab window.
//!
//! Swatches choose with one click. The entry field takes any color
//! `parse_color` understands (`#rrggbb`, `#rgb`, CSS names and functions)
//! and applies it with OK or Enter.

use image::Rgba;
use log::debug;

use super::layout::Rect;
use super::text::Typeface;
use crate::color::{parse_color, to_hex};
use crate::lab::RecolorRequest;

const SWATCH: i32 = 28;
const GAP: i32 = 6;
const MARGIN: i32 = 12;
const MAX_COLUMNS: usize = 8;
const BUTTON_HEIGHT: i32 = 24;
const APPLY_WIDTH: i32 = 48;
/// Longest CSS color worth typing, e.g. `rgba(255, 255, 255, 0.5)`
const MAX_INPUT: usize = 32;

/// Result of an action while the picker is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    Chosen(Rgba<u8>),
    Cancelled,
    /// The picker stays open
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Picker {
    pub request: RecolorRequest,
    pub frame: Rect,
    pub title: Rect,
    pub cells: Vec<(Rect, Rgba<u8>)>,
    pub entry: Rect,
    pub apply: Rect,
    pub cancel: Rect,
    /// Contents of the entry field
    pub input: String,
    /// Set when the last submitted input did not parse
    pub invalid: bool,
}

impl Picker {
    /// Lay out a picker centered in a `width` x `height` window.
    pub fn new(
        request: RecolorRequest,
        swatches: &[Rgba<u8>],
        face: &Typeface,
        width: i32,
        height: i32,
    ) -> Self {
        let columns = swatches.len().clamp(1, MAX_COLUMNS) as i32;
        let rows = (swatches.len() as i32 + columns - 1) / columns;
        let line = face.line_height();

        let grid_w = columns * SWATCH + (columns - 1) * GAP;
        let inner_w = grid_w.max(face.width(&request.title));
        let frame_w = inner_w + MARGIN * 2;
        let frame_h = MARGIN
            + line
            + GAP * 2
            + rows * (SWATCH + GAP)
            + (BUTTON_HEIGHT + GAP) * 2
            + MARGIN;

        let frame = Rect::new(
            ((width - frame_w) / 2).max(0),
            ((height - frame_h) / 2).max(0),
            frame_w,
            frame_h,
        );
        let left = frame.x + MARGIN;
        let title = Rect::new(left, frame.y + MARGIN, inner_w, line);
        let grid_x = left + (inner_w - grid_w) / 2;
        let grid_y = title.bottom() + GAP * 2;

        let cells = swatches
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                let (col, row) = (i as i32 % columns, i as i32 / columns);
                let x = grid_x + col * (SWATCH + GAP);
                let y = grid_y + row * (SWATCH + GAP);
                (Rect::new(x, y, SWATCH, SWATCH), color)
            })
            .collect();

        let entry_y = grid_y + rows * (SWATCH + GAP);
        let entry = Rect::new(left, entry_y, inner_w - APPLY_WIDTH - GAP, BUTTON_HEIGHT);
        let apply = Rect::new(entry.right() + GAP, entry_y, APPLY_WIDTH, BUTTON_HEIGHT);
        let cancel = Rect::new(left, entry.bottom() + GAP, inner_w, BUTTON_HEIGHT);

        let input = to_hex(request.current);
        Self {
            request,
            frame,
            title,
            cells,
            entry,
            apply,
            cancel,
            input,
            invalid: false,
        }
    }

    pub fn click(&mut self, x: i32, y: i32) -> PickerOutcome {
        if !self.frame.contains(x, y) || self.cancel.contains(x, y) {
            return PickerOutcome::Cancelled;
        }
        if self.apply.contains(x, y) {
            return self.submit();
        }
        self.cells
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map_or(PickerOutcome::Ignored, |&(_, color)| PickerOutcome::Chosen(color))
    }

    /// Apply the typed color. Input that does not parse keeps the picker open.
    pub fn submit(&mut self) -> PickerOutcome {
        match parse_color(&self.input) {
            Ok(color) => PickerOutcome::Chosen(color),
            Err(e) => {
                debug!("rejected color input '{}': {}", self.input, e);
                self.invalid = true;
                PickerOutcome::Ignored
            }
        }
    }

    /// Append typed text to the entry field, dropping control characters.
    pub fn push_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            if self.input.chars().count() >= MAX_INPUT {
                break;
            }
            self.input.push(c);
        }
        self.invalid = false;
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.invalid = false;
    }
}
