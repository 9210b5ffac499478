//! The lab window.
//!
//! Everything except [`window`] is plain state and software painting, so it
//! runs and tests without a display.

pub mod layout;
pub mod paint;
pub mod picker;
pub mod session;
pub mod text;
#[cfg(feature = "gui")]
pub mod window;

pub use session::Session;
pub use text::Typeface;
#[cfg(feature = "gui")]
pub use window::{run, UiError};
