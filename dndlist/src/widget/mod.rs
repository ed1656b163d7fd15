//! Widgets that can be placed on a surface.

mod label;
mod stack;

use std::sync::atomic::{AtomicU64, Ordering};

pub use label::{Label, Relief};
pub use stack::Stack;

use crate::buffer::Buffer;
use crate::geometry::{Point, Size};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A visual element the list can host.
///
/// The list only needs to move a widget onto its surface and walk its
/// children to bind pointer handling; measuring and painting let the
/// surface size the placement and draw it.
pub trait Widget: std::fmt::Debug {
    /// Identifier used as the pointer-event target. Must be non-empty and
    /// unique among everything added to one list.
    fn id(&self) -> &str;

    /// Make `parent` the logical owner of this widget.
    fn reparent(&mut self, parent: &str);

    fn parent(&self) -> Option<&str>;

    /// Direct children with their offsets from this widget's top-left corner.
    fn children(&self) -> Vec<(Point, &dyn Widget)> {
        Vec::new()
    }

    fn size(&self) -> Size;

    /// Paint with the widget's top-left corner at `origin` (screen cells).
    fn render(&self, origin: Point, buf: &mut Buffer);
}

/// Narrow a cell count to `u16`, saturating at the largest representable size.
pub(crate) fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Ids of `widget` and every widget nested under it, parents first.
pub fn collect_ids(widget: &dyn Widget) -> Vec<String> {
    let mut result = Vec::new();
    collect_ids_recursive(widget, &mut result);
    result
}

fn collect_ids_recursive(widget: &dyn Widget, result: &mut Vec<String>) {
    result.push(widget.id().to_string());
    for (_, child) in widget.children() {
        collect_ids_recursive(child, result);
    }
}
