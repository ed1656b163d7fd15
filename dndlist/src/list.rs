use std::collections::{HashMap, HashSet};

use crossterm::event::Event as CrosstermEvent;

use crate::buffer::Buffer;
use crate::config::ListConfig;
use crate::error::{DndError, Result};
use crate::event::{Event, MouseButton};
use crate::geometry::{Point, Rect};
use crate::hit::hit_test;
use crate::node::Node;
use crate::scroll::render_scrollbar;
use crate::surface::{Canvas, Handle, Surface};
use crate::widget::{collect_ids, Widget};

/// Pointer drag progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// `last` is the previous pointer position in content coordinates.
    Dragging { handle: Handle, last: Point },
}

/// A vertical list of widgets the user can reorder by dragging.
///
/// Items are stacked at insertion time; afterwards each item's position is
/// whatever dragging made it. No order is stored: [`DndList::ordered`] sorts
/// by live position on every call.
#[derive(Debug)]
pub struct DndList<S: Surface = Canvas> {
    config: ListConfig,
    surface: S,
    nodes: HashMap<Handle, Node>,
    /// Widget id (item or any descendant) to the item it drags.
    bindings: HashMap<String, Handle>,
    /// Insertion cursor: where the next item's top goes. Only grows, and is
    /// not updated by drags.
    depth: i32,
    drag: DragState,
}

impl DndList<Canvas> {
    pub fn new(config: ListConfig) -> Self {
        Self::with_surface(config, Canvas::new(config.viewport()))
    }

    /// Create a list and add `items` in order.
    pub fn with_items(
        config: ListConfig,
        items: impl IntoIterator<Item = Box<dyn Widget>>,
    ) -> Result<Self> {
        let mut list = Self::new(config);
        for item in items {
            list.add_boxed(item)?;
        }
        Ok(list)
    }
}

impl<S: Surface> DndList<S> {
    /// Create an empty list hosted on `surface`.
    pub fn with_surface(config: ListConfig, surface: S) -> Self {
        Self {
            config,
            surface,
            nodes: HashMap::new(),
            bindings: HashMap::new(),
            depth: 0,
            drag: DragState::Idle,
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top coordinate the next added item will get.
    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Handle of the item being dragged, if any.
    pub fn dragging(&self) -> Option<Handle> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging { handle, .. } => Some(handle),
        }
    }

    pub fn node(&self, handle: Handle) -> Option<&Node> {
        self.nodes.get(&handle)
    }

    /// Item that a widget id (the item's own or a descendant's) belongs to.
    pub fn bound_to(&self, widget_id: &str) -> Option<Handle> {
        self.bindings.get(widget_id).copied()
    }

    pub fn add_item(&mut self, widget: impl Widget + 'static) -> Result<Handle> {
        self.add_boxed(Box::new(widget))
    }

    /// Add `widget` below the previously added items and make it draggable
    /// from any part of it.
    ///
    /// Fails without changing the list if any id in the widget tree is empty
    /// or already bound.
    pub fn add_boxed(&mut self, widget: Box<dyn Widget>) -> Result<Handle> {
        let ids = collect_ids(widget.as_ref());
        let mut seen = HashSet::new();
        for id in &ids {
            if id.is_empty() {
                return Err(DndError::EmptyId);
            }
            if self.bindings.contains_key(id) || !seen.insert(id.as_str()) {
                return Err(DndError::DuplicateId(id.clone()));
            }
        }

        // Placement size is the widget size; reading it back from the surface
        // could fail after the placement exists.
        let height = widget.size().height as i32;
        let node = Node::new(&mut self.surface, widget, self.config.center(), self.depth);
        let handle = node.handle();

        self.depth += self.config.padding as i32 + height;
        for id in ids {
            self.bindings.insert(id, handle);
        }
        log::debug!(
            "[dndlist] added {} as {} (height {}, next depth {})",
            node.id(),
            handle,
            height,
            self.depth
        );
        self.nodes.insert(handle, node);
        Ok(handle)
    }

    /// Items sorted top to bottom by current position. Items at the same
    /// height keep insertion order.
    pub fn ordered(&self) -> Result<Vec<&Node>> {
        let mut keyed = Vec::with_capacity(self.nodes.len());
        for node in self.nodes.values() {
            keyed.push((node.top(&self.surface)?, node.handle(), node));
        }
        keyed.sort_by_key(|(top, handle, _)| (*top, *handle));
        Ok(keyed.into_iter().map(|(_, _, node)| node).collect())
    }

    /// Widget ids of [`DndList::ordered`].
    pub fn ordered_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .ordered()?
            .into_iter()
            .map(|node| node.id().to_string())
            .collect())
    }

    /// Start dragging the item nearest the pointer at screen position
    /// `screen`, raising it above the others. Returns the picked item.
    pub fn on_click(&mut self, screen: Point) -> Result<Option<Handle>> {
        let at = self.surface.to_content(screen);
        let Some(handle) = self.surface.find_closest(at) else {
            return Ok(None);
        };
        if !self.nodes.contains_key(&handle) {
            log::debug!("[dndlist] closest placement {} is not an item", handle);
            return Ok(None);
        }

        self.surface.raise(handle)?;
        self.drag = DragState::Dragging { handle, last: at };
        log::debug!("[dndlist] drag start {} at {:?}", handle, at);
        Ok(Some(handle))
    }

    /// Move the dragged item by the pointer's movement since the last event.
    /// Returns false, changing nothing, when no drag is active.
    pub fn on_motion(&mut self, screen: Point) -> Result<bool> {
        let DragState::Dragging { handle, last } = self.drag else {
            log::trace!("[dndlist] ignoring motion with no active drag");
            return Ok(false);
        };

        let at = self.surface.to_content(screen);
        let (dx, dy) = at.delta(last);
        self.surface.move_by(handle, dx, dy)?;
        self.drag = DragState::Dragging { handle, last: at };
        log::trace!("[dndlist] drag {} by ({}, {})", handle, dx, dy);
        Ok(true)
    }

    /// End the drag. Returns the dropped item, or `None` if nothing was dragged.
    pub fn on_release(&mut self) -> Option<Handle> {
        let dropped = self.dragging();
        match dropped {
            Some(handle) => {
                // The drop may have shrunk the scroll region; pull the view back inside it.
                if self.surface.scroll_by(0) {
                    log::debug!(
                        "[dndlist] scroll offset clamped to {}",
                        self.surface.scroll_offset()
                    );
                }
                log::debug!("[dndlist] drop {}", handle);
            }
            None => log::trace!("[dndlist] ignoring release with no active drag"),
        }
        self.drag = DragState::Idle;
        dropped
    }

    /// Feed one event through the drag state machine and scrolling.
    /// Returns true if the event changed the list.
    ///
    /// Only a left click on a bound widget starts a drag. Drag and release
    /// events act on the active drag wherever the pointer is, like a pointer
    /// grab.
    pub fn handle_event(&mut self, event: &Event) -> Result<bool> {
        match event {
            Event::Click {
                target: Some(target),
                x,
                y,
                button: MouseButton::Left,
            } if self.bindings.contains_key(target) => Ok(self
                .on_click(Point::new(*x as i32, *y as i32))?
                .is_some()),

            Event::Drag {
                x,
                y,
                button: MouseButton::Left,
                ..
            } => self.on_motion(Point::new(*x as i32, *y as i32)),

            Event::Release {
                button: MouseButton::Left,
                ..
            } => Ok(self.on_release().is_some()),

            Event::Scroll { x, y, delta_y } if self.surface.viewport().contains(*x, *y) => {
                Ok(self.surface.scroll_by(*delta_y as i32))
            }

            _ => Ok(false),
        }
    }

    /// Convert raw terminal events into targeted [`Event`]s.
    pub fn process_events(&self, raw: &[CrosstermEvent]) -> Vec<Event> {
        raw.iter()
            .filter_map(|event| Event::from_crossterm(event, |x, y| self.target_at(x, y)))
            .collect()
    }

    /// Deepest widget under screen position (`x`, `y`), if it belongs to an item.
    pub fn target_at(&self, x: u16, y: u16) -> Option<String> {
        if !self.surface.viewport().contains(x, y) {
            return None;
        }
        let at = self.surface.to_content(Point::new(x as i32, y as i32));
        let handle = self.surface.find_at(at)?;
        let node = self.nodes.get(&handle)?;
        let bbox = self.surface.bbox(handle).ok()?;
        hit_test(node.widget(), bbox.top_left(), at)
    }

    /// Paint every item in stacking order plus the scrollbar, clipped to the
    /// viewport.
    pub fn render(&self, buf: &mut Buffer) -> Result<()> {
        let view = self.surface.viewport();
        let previous = buf.set_clip(view);

        for handle in self.surface.stacking_order() {
            let Some(node) = self.nodes.get(&handle) else {
                continue;
            };
            let bbox = self.surface.bbox(handle)?;
            let origin = self.surface.to_screen(bbox.top_left());
            node.widget().render(origin, buf);
        }

        if view.width > 0 {
            let track = Rect::new(view.right() - 1, view.y, 1, view.height);
            render_scrollbar(
                buf,
                track,
                self.surface.scroll_region(),
                view.height,
                self.surface.scroll_offset(),
            );
        }

        buf.set_clip(previous);
        Ok(())
    }
}
