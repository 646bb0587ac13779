//! Viewport management for scrolling.
//!
//! The [`Viewport`] tracks which buffer lines are on screen and follows
//! the cursor as it moves.

use std::ops::Range;

/// Manages the visible portion of a buffer.
///
/// # Example
///
/// ```
/// use vimlet::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 10, 100);
/// assert_eq!(vp.visible_range(), 0..10);
///
/// vp.ensure_visible(25);
/// assert_eq!(vp.visible_range(), 16..26);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a new viewport.
    ///
    /// # Arguments
    ///
    /// * `width` - Terminal width in columns
    /// * `height` - Lines available for buffer text
    /// * `total_lines` - Total lines in the buffer
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_lines,
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Range of buffer lines currently on screen, clamped to the buffer.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.total_lines);
        let end = (self.offset + self.height as usize).min(self.total_lines);
        start..end
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }

    /// Scroll the minimum amount needed to bring `line` on screen.
    pub fn ensure_visible(&mut self, line: usize) {
        let line = line.min(self.total_lines.saturating_sub(1));
        let height = (self.height as usize).max(1);
        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset + height {
            self.offset = line + 1 - height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update dimensions, keeping the offset valid.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the buffer length after an edit, keeping the offset valid.
    pub fn set_total_lines(&mut self, total_lines: usize) {
        self.total_lines = total_lines;
        self.offset = self.offset.min(self.max_offset());
    }
}
