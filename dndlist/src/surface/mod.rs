//! Drawing surfaces that host placed widgets.

mod canvas;

use std::fmt;

pub use canvas::Canvas;

use crate::error::SurfaceError;
use crate::geometry::{Anchor, BBox, Point, Rect, Size};

/// Stable identifier of one placement on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(pub u64);

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Placement primitives a host toolkit provides to the list.
///
/// Coordinates passed in and out are content coordinates unless a method
/// says otherwise. Content coordinates are independent of scrolling.
pub trait Surface {
    /// Name the surface gives itself as the parent of hosted widgets.
    fn id(&self) -> &str;

    /// Screen rectangle the surface occupies.
    fn viewport(&self) -> Rect;

    /// Place an item of `size` so that its `anchor` point lands on `at`.
    /// The new item goes on top of the stacking order.
    fn place(&mut self, at: Point, anchor: Anchor, size: Size) -> Handle;

    fn bbox(&self, handle: Handle) -> Result<BBox, SurfaceError>;

    /// Translate a placement by a relative offset.
    fn move_by(&mut self, handle: Handle, dx: i32, dy: i32) -> Result<(), SurfaceError>;

    /// Bring a placement to the top of the stacking order.
    fn raise(&mut self, handle: Handle) -> Result<(), SurfaceError>;

    /// The placement nearest to `at`. Among equally near placements the one
    /// highest in the stacking order wins. `None` only when the surface is empty.
    fn find_closest(&self, at: Point) -> Option<Handle>;

    /// Topmost placement whose box contains `at`.
    fn find_at(&self, at: Point) -> Option<Handle>;

    /// Handles from bottom to top.
    fn stacking_order(&self) -> Vec<Handle>;

    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> i32;

    /// Bounds that scrolling may reveal.
    fn scroll_region(&self) -> BBox;

    /// Scroll by `dy` rows, clamped to the region. Returns true if the view moved.
    /// `scroll_by(0)` re-clamps an offset left outside a region that shrank.
    fn scroll_by(&mut self, dy: i32) -> bool;

    /// Map a screen position to content coordinates: subtract the surface's
    /// screen origin, then apply the scroll offset.
    fn to_content(&self, screen: Point) -> Point {
        let view = self.viewport();
        Point::new(
            screen.x - view.x as i32,
            screen.y - view.y as i32 + self.scroll_offset(),
        )
    }

    /// Inverse of [`Surface::to_content`].
    fn to_screen(&self, content: Point) -> Point {
        let view = self.viewport();
        Point::new(
            content.x + view.x as i32,
            content.y + view.y as i32 - self.scroll_offset(),
        )
    }
}
