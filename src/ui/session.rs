//! Window-independent UI state: what a click does and what the frame shows.

use image::{Rgba, RgbaImage};
use log::debug;

use super::layout::{Control, Layout, Rect};
use super::paint::{
    blit, dim, draw_button, draw_selector, draw_text_in, fill_rect, stroke_rect, CONTROL_BG,
    CONTROL_BORDER, ERROR, HIGHLIGHT, PANEL_BG, TEXT,
};
use super::picker::{Picker, PickerOutcome};
use super::text::Typeface;
use crate::config::LabConfig;
use crate::lab::{Lab, Selector};
use crate::renderer::{flatten, render_animal};

/// One running lab window's worth of state.
#[derive(Debug, Clone)]
pub struct Session {
    lab: Lab,
    layout: Layout,
    background: Rgba<u8>,
    swatches: Vec<Rgba<u8>>,
    face: Typeface,
    canvas: RgbaImage,
    open_menu: Option<Selector>,
    picker: Option<Picker>,
}

impl Session {
    /// A session drawing its captions with the built-in bitmap face.
    pub fn new(lab: Lab, canvas_size: u32, background: Rgba<u8>, swatches: Vec<Rgba<u8>>) -> Self {
        let mut session = Self {
            lab,
            layout: Layout::new(canvas_size),
            background,
            swatches,
            face: Typeface::bitmap(),
            canvas: RgbaImage::new(canvas_size, canvas_size),
            open_menu: None,
            picker: None,
        };
        session.redraw_canvas();
        session
    }

    pub fn from_config(config: &LabConfig) -> Self {
        let lab = Lab::new(config.catalog(), config.body());
        Self::new(lab, config.window.canvas_size, config.background(), config.swatches())
    }

    pub fn with_typeface(mut self, face: Typeface) -> Self {
        self.face = face;
        self
    }

    pub fn lab(&self) -> &Lab {
        &self.lab
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn open_menu(&self) -> Option<Selector> {
        self.open_menu
    }

    pub fn picker(&self) -> Option<&Picker> {
        self.picker.as_ref()
    }

    /// Regenerate the whole canvas from the animal.
    fn redraw_canvas(&mut self) {
        let (w, h) = self.canvas.dimensions();
        self.canvas = flatten(&render_animal(self.lab.animal(), w, h), self.background);
    }

    /// Close the picker on a final outcome, applying a chosen color.
    fn resolve_picker(&mut self, picker: Picker, outcome: PickerOutcome) -> bool {
        let choice = match outcome {
            PickerOutcome::Chosen(color) => Some(color),
            PickerOutcome::Cancelled => None,
            PickerOutcome::Ignored => {
                self.picker = Some(picker);
                return true;
            }
        };
        if self.lab.apply_recolor(&picker.request, choice) {
            self.redraw_canvas();
        }
        true
    }

    /// Handle a left click. Returns whether the frame needs repainting.
    pub fn click(&mut self, x: i32, y: i32) -> bool {
        if let Some(mut picker) = self.picker.take() {
            let outcome = picker.click(x, y);
            return self.resolve_picker(picker, outcome);
        }

        if let Some(selector) = self.open_menu.take() {
            let names: Vec<String> =
                self.lab.catalog().names().into_iter().map(str::to_owned).collect();
            let items = self.layout.menu_items(selector, names.len());
            if let Some(i) = items.iter().position(|r| r.contains(x, y)) {
                self.lab.select(selector, &names[i]);
            }
            return true;
        }

        match self.layout.hit_test(x, y) {
            Some(Control::Selector(selector)) => {
                self.open_menu = Some(selector);
            }
            Some(Control::Add) => {
                self.lab.add_selected();
                self.redraw_canvas();
            }
            Some(Control::Remove) => {
                self.lab.remove_selected();
                self.redraw_canvas();
            }
            Some(Control::ChangeColor) => match self.lab.recolor_request() {
                Some(request) => {
                    debug!("opening picker for '{}'", request.name);
                    self.picker = Some(Picker::new(
                        request,
                        &self.swatches,
                        &self.face,
                        self.layout.width,
                        self.layout.height,
                    ));
                }
                None => return false,
            },
            None => return false,
        }
        true
    }

    /// Escape: dismiss the picker or an open dropdown.
    pub fn cancel(&mut self) -> bool {
        if let Some(picker) = self.picker.take() {
            return self.resolve_picker(picker, PickerOutcome::Cancelled);
        }
        self.open_menu.take().is_some()
    }

    /// Enter: apply the color typed into the picker.
    pub fn submit(&mut self) -> bool {
        match self.picker.take() {
            Some(mut picker) => {
                let outcome = picker.submit();
                self.resolve_picker(picker, outcome)
            }
            None => false,
        }
    }

    /// Keyboard text goes to the picker's entry field while it is open.
    pub fn type_text(&mut self, text: &str) -> bool {
        match &mut self.picker {
            Some(picker) => {
                picker.push_str(text);
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        match &mut self.picker {
            Some(picker) => {
                picker.backspace();
                true
            }
            None => false,
        }
    }

    /// Paint the full window into `frame`, clipping to its size.
    pub fn paint(&self, frame: &mut RgbaImage) {
        let full = Rect::new(0, 0, frame.width() as i32, frame.height() as i32);
        fill_rect(frame, full, PANEL_BG);
        blit(frame, &self.canvas, self.layout.canvas.x, self.layout.canvas.y);

        let face = &self.face;
        for label in &self.layout.labels {
            draw_text_in(frame, face, label.rect, label.text, TEXT);
        }
        for selector in [Selector::Add, Selector::Remove] {
            let value = self.lab.selected(selector).unwrap_or("");
            draw_selector(frame, face, self.layout.selector_rect(selector), value);
        }
        draw_button(frame, face, self.layout.add_button, "Add");
        draw_button(frame, face, self.layout.remove_button, "Remove");
        draw_button(frame, face, self.layout.color_button, "Change Color");

        if let Some(selector) = self.open_menu {
            self.paint_menu(frame, selector);
        }
        if let Some(picker) = &self.picker {
            paint_picker(frame, face, picker);
        }
    }

    fn paint_menu(&self, frame: &mut RgbaImage, selector: Selector) {
        let names = self.lab.catalog().names();
        let current = self.lab.selected(selector);
        let items = self.layout.menu_items(selector, names.len());
        for (rect, name) in items.into_iter().zip(names) {
            fill_rect(frame, rect, CONTROL_BG);
            stroke_rect(frame, rect, CONTROL_BORDER);
            let color = if Some(name) == current { HIGHLIGHT } else { TEXT };
            draw_text_in(frame, &self.face, rect, name, color);
        }
    }
}

fn paint_picker(frame: &mut RgbaImage, face: &Typeface, picker: &Picker) {
    dim(frame);
    fill_rect(frame, picker.frame, CONTROL_BG);
    stroke_rect(frame, picker.frame, CONTROL_BORDER);
    face.draw(frame, picker.title.x, picker.title.y, &picker.request.title, TEXT);

    for &(rect, color) in &picker.cells {
        fill_rect(frame, rect, color);
        stroke_rect(frame, rect, CONTROL_BORDER);
        if color == picker.request.current {
            let ring = Rect::new(rect.x - 2, rect.y - 2, rect.w + 4, rect.h + 4);
            stroke_rect(frame, ring, HIGHLIGHT);
        }
    }

    let entry = picker.entry;
    let border = if picker.invalid { ERROR } else { HIGHLIGHT };
    fill_rect(frame, entry, PANEL_BG);
    stroke_rect(frame, entry, border);
    draw_text_in(frame, face, entry, &picker.input, TEXT);
    // Caret after the typed text
    let caret_x = entry.x + 6 + face.width(&picker.input) + 1;
    let caret = Rect::new(caret_x, entry.y + 4, 1, entry.h - 8);
    fill_rect(frame, caret, TEXT);

    draw_button(frame, face, picker.apply, "OK");
    draw_button(frame, face, picker.cancel, "Cancel");
}
