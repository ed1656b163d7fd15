use std::collections::HashMap;

use super::{Handle, Surface};
use crate::error::SurfaceError;
use crate::geometry::{Anchor, BBox, Point, Rect, Size};
use crate::scroll::ScrollState;
use crate::widget::generate_id;

/// In-memory surface: a fixed-size viewport onto an unbounded plane of
/// rectangular placements, scrollable vertically.
#[derive(Debug)]
pub struct Canvas {
    id: String,
    viewport: Rect,
    placements: HashMap<Handle, BBox>,
    /// Bottom to top.
    stacking: Vec<Handle>,
    next_handle: u64,
    scroll: ScrollState,
}

impl Canvas {
    pub fn new(viewport: Rect) -> Self {
        Self {
            id: generate_id("canvas"),
            viewport,
            placements: HashMap::new(),
            stacking: Vec::new(),
            next_handle: 1,
            scroll: ScrollState::new(),
        }
    }

    fn get(&self, handle: Handle) -> Result<BBox, SurfaceError> {
        self.placements
            .get(&handle)
            .copied()
            .ok_or(SurfaceError::UnknownHandle(handle))
    }
}

impl Surface for Canvas {
    fn id(&self) -> &str {
        &self.id
    }

    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn place(&mut self, at: Point, anchor: Anchor, size: Size) -> Handle {
        let handle = Handle(self.next_handle);
        self.next_handle += 1;

        let bbox = BBox::from_origin(anchor.origin_for(at, size), size);
        self.placements.insert(handle, bbox);
        self.stacking.push(handle);
        handle
    }

    fn bbox(&self, handle: Handle) -> Result<BBox, SurfaceError> {
        self.get(handle)
    }

    fn move_by(&mut self, handle: Handle, dx: i32, dy: i32) -> Result<(), SurfaceError> {
        let bbox = self
            .placements
            .get_mut(&handle)
            .ok_or(SurfaceError::UnknownHandle(handle))?;
        *bbox = bbox.translate(dx, dy);
        Ok(())
    }

    fn raise(&mut self, handle: Handle) -> Result<(), SurfaceError> {
        let pos = self
            .stacking
            .iter()
            .position(|h| *h == handle)
            .ok_or(SurfaceError::UnknownHandle(handle))?;
        let handle = self.stacking.remove(pos);
        self.stacking.push(handle);
        Ok(())
    }

    fn find_closest(&self, at: Point) -> Option<Handle> {
        // Walk top-down so the first strict minimum is also the topmost.
        let mut best: Option<(i64, Handle)> = None;
        for handle in self.stacking.iter().rev() {
            let distance = self.placements[handle].distance_sq(at);
            match best {
                Some((d, _)) if d <= distance => {}
                _ => best = Some((distance, *handle)),
            }
        }
        best.map(|(_, h)| h)
    }

    fn find_at(&self, at: Point) -> Option<Handle> {
        self.stacking
            .iter()
            .rev()
            .find(|h| self.placements[*h].contains(at))
            .copied()
    }

    fn stacking_order(&self) -> Vec<Handle> {
        self.stacking.clone()
    }

    fn scroll_offset(&self) -> i32 {
        self.scroll.get()
    }

    fn scroll_region(&self) -> BBox {
        let view = BBox::new(0, 0, self.viewport.width as i32, self.viewport.height as i32);
        self.placements.values().fold(view, |acc, b| acc.union(*b))
    }

    fn scroll_by(&mut self, dy: i32) -> bool {
        let region = self.scroll_region();
        self.scroll.scroll_by(dy, region, self.viewport.height)
    }
}
