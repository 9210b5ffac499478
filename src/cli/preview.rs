//! Preview command implementation (terminal display)

use std::process::ExitCode;

use crate::config::LabConfig;
use crate::lab::Lab;
use crate::renderer::{flatten, render_animal};
use crate::terminal::render_ansi_image;

use super::{Recolor, EXIT_SUCCESS};

/// Apply preview actions to a fresh lab: adds, then recolors, then removes.
///
/// Each action is a silent no-op when it cannot apply, as in the window.
pub fn build_lab(
    config: &LabConfig,
    add: &[String],
    recolor: &[Recolor],
    remove: &[String],
) -> Lab {
    let mut lab = Lab::new(config.catalog(), config.body());
    for name in add {
        lab.add_by_name(name);
    }
    for change in recolor {
        if let Some(request) = lab.recolor_request_for(&change.name) {
            lab.apply_recolor(&request, Some(change.color));
        }
    }
    for name in remove {
        lab.remove_by_name(name);
    }
    lab
}

/// Execute the preview command
pub fn run_preview(
    config: &LabConfig,
    add: &[String],
    recolor: &[Recolor],
    remove: &[String],
    step: u32,
) -> ExitCode {
    let lab = build_lab(config, add, recolor, remove);
    let size = config.window.canvas_size;
    let image = flatten(&render_animal(lab.animal(), size, size), config.background());

    print!("{}", render_ansi_image(&image, step));
    println!("Traits: {}", lab.animal().names().join(", "));

    ExitCode::from(EXIT_SUCCESS)
}
