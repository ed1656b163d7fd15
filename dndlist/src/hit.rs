use crate::geometry::{BBox, Point};
use crate::widget::Widget;

/// Find the deepest widget containing `at`, given the widget's top-left
/// corner `origin`. Both points must be in the same coordinate space.
pub fn hit_test(widget: &dyn Widget, origin: Point, at: Point) -> Option<String> {
    if !BBox::from_origin(origin, widget.size()).contains(at) {
        return None;
    }

    // Later children draw on top
    for (offset, child) in widget.children().into_iter().rev() {
        if let Some(id) = hit_test(child, origin.offset(offset.x, offset.y), at) {
            return Some(id);
        }
    }

    Some(widget.id().to_string())
}
