//! Terminal UI components.
//!
//! - [`viewport`]: Scroll position and visible range management
//! - [`render()`]: Buffer, gutter, cursor and status bar drawing

pub mod viewport;

mod render;
mod status;

pub use render::{TAB_WIDTH, display_column, line_number_width, render};
pub use status::status_text;

#[cfg(test)]
mod tests;
