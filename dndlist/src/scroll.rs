use crate::buffer::{Buffer, Cell, Rgb};
use crate::geometry::{BBox, Rect};

/// Vertical scroll position of a surface.
///
/// The offset is the content y-coordinate shown at the top of the viewport.
/// It ranges over the scroll region, so content dragged above zero can be
/// scrolled back into view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollState {
    offset: i32,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> i32 {
        self.offset
    }

    /// Valid offsets for a viewport of `viewport_height` over `region`.
    pub fn range(region: BBox, viewport_height: u16) -> (i32, i32) {
        let min = region.top;
        let max = (region.bottom - viewport_height as i32).max(min);
        (min, max)
    }

    /// Set the offset, clamped to the region. Returns true if it changed.
    pub fn set(&mut self, offset: i32, region: BBox, viewport_height: u16) -> bool {
        let (min, max) = Self::range(region, viewport_height);
        let clamped = offset.clamp(min, max);
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }

    /// Scroll by `dy` rows. Returns true if the offset changed.
    pub fn scroll_by(&mut self, dy: i32, region: BBox, viewport_height: u16) -> bool {
        self.set(self.offset + dy, region, viewport_height)
    }
}

/// Thumb start (relative to the track) and length for a vertical scrollbar.
/// Returns `None` when the content fits and no bar is needed.
pub fn thumb(track: u16, region: BBox, viewport_height: u16, offset: i32) -> Option<(u16, u16)> {
    let content = region.height().max(0) as u32;
    let viewport = viewport_height as u32;
    if track == 0 || content <= viewport {
        return None;
    }

    let track = track as u32;
    let size = (viewport * track / content).clamp(1, track);
    let range = track - size;
    let max_scroll = content - viewport;
    let scrolled = (offset - region.top).clamp(0, max_scroll as i32) as u32;
    let pos = if range > 0 {
        (scrolled * range / max_scroll).min(range)
    } else {
        0
    };
    Some((pos as u16, size as u16))
}

/// Draw a vertical scrollbar in the single-column `track`.
pub fn render_scrollbar(
    buf: &mut Buffer,
    track: Rect,
    region: BBox,
    viewport_height: u16,
    offset: i32,
) {
    let Some((pos, size)) = thumb(track.height, region, viewport_height, offset) else {
        return;
    };

    let dim = Rgb::new(90, 90, 100);
    let bright = Rgb::new(200, 200, 210);
    for row in 0..track.height {
        let on_thumb = row >= pos && row < pos + size;
        let cell = if on_thumb {
            Cell::new('█').with_fg(bright)
        } else {
            Cell::new('│').with_fg(dim)
        };
        buf.set(track.x as i32, (track.y + row) as i32, cell);
    }
}
