//! A vertical list of widgets that the user reorders by dragging them with
//! the mouse. The current top-to-bottom order is read back with
//! [`DndList::ordered`].

pub mod buffer;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod hit;
pub mod list;
pub mod node;
pub mod scroll;
pub mod surface;
pub mod text;
pub mod widget;

pub use buffer::{Buffer, Cell, Rgb};
pub use config::ListConfig;
pub use error::{DndError, Result, SurfaceError};
pub use event::{Event, Key, MouseButton};
pub use geometry::{Anchor, BBox, Point, Rect, Size};
pub use hit::hit_test;
pub use list::{DndList, DragState};
pub use node::Node;
pub use surface::{Canvas, Handle, Surface};
pub use widget::{collect_ids, Label, Relief, Stack, Widget};
