//! List configuration.

use crate::geometry::Rect;

/// Vertical gap between adjacent items at insertion time.
pub const DEFAULT_PADDING: u16 = 10;

/// Geometry of a [`DndList`](crate::DndList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// Viewport width; new items are centered on `width / 2`.
    pub width: u16,

    /// Viewport height. Items may extend past it; scrolling reveals them.
    pub height: u16,

    /// Gap inserted above each item as it is added.
    pub padding: u16,

    /// Screen column of the viewport's left edge.
    pub x: u16,

    /// Screen row of the viewport's top edge.
    pub y: u16,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            padding: DEFAULT_PADDING,
            x: 0,
            y: 0,
        }
    }
}

impl ListConfig {
    /// Create a config with the given viewport size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Set the gap between items.
    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    /// Set the screen position of the viewport.
    pub fn origin(mut self, x: u16, y: u16) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Horizontal anchor for new items.
    pub fn center(&self) -> i32 {
        self.width as i32 / 2
    }

    pub fn viewport(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
