use crate::error::SurfaceError;
use crate::geometry::{Anchor, BBox, Point};
use crate::surface::{Handle, Surface};
use crate::widget::Widget;

/// One list item: a widget and its placement on the list's surface.
///
/// The handle never changes; the placement's position does, so queries take
/// the surface and read the live geometry.
#[derive(Debug)]
pub struct Node {
    handle: Handle,
    widget: Box<dyn Widget>,
}

impl Node {
    /// Move `widget` onto `surface`, top-centered at (`center`, `depth`).
    pub(crate) fn new<S: Surface>(
        surface: &mut S,
        mut widget: Box<dyn Widget>,
        center: i32,
        depth: i32,
    ) -> Self {
        widget.reparent(surface.id());
        let handle = surface.place(Point::new(center, depth), Anchor::N, widget.size());
        Self { handle, widget }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn widget(&self) -> &dyn Widget {
        self.widget.as_ref()
    }

    pub fn id(&self) -> &str {
        self.widget.id()
    }

    pub fn bbox<S: Surface>(&self, surface: &S) -> Result<BBox, SurfaceError> {
        surface.bbox(self.handle)
    }

    /// Current top edge in content coordinates.
    pub fn top<S: Surface>(&self, surface: &S) -> Result<i32, SurfaceError> {
        Ok(self.bbox(surface)?.top)
    }
}
