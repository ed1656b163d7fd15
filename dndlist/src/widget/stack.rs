use super::label::draw_box;
use super::{cells, generate_id, Relief, Widget};
use crate::buffer::{Buffer, Cell, Rgb};
use crate::geometry::{Point, Size};

/// Composite widget laying its children out top to bottom.
#[derive(Debug)]
pub struct Stack {
    id: String,
    parent: Option<String>,
    children: Vec<Box<dyn Widget>>,
    gap: u16,
    relief: Relief,
    bg: Rgb,
}

impl Stack {
    pub fn new() -> Self {
        Self {
            id: generate_id("stack"),
            parent: None,
            children: Vec::new(),
            gap: 0,
            relief: Relief::Flat,
            bg: Rgb::new(30, 30, 36),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        for child in &mut self.children {
            child.reparent(&self.id);
        }
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn relief(mut self, relief: Relief) -> Self {
        self.relief = relief;
        self
    }

    pub fn background(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub fn child(mut self, mut child: impl Widget + 'static) -> Self {
        child.reparent(&self.id);
        self.children.push(Box::new(child));
        self
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Stack {
    fn id(&self) -> &str {
        &self.id
    }

    fn reparent(&mut self, parent: &str) {
        self.parent = Some(parent.to_string());
    }

    fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    fn children(&self) -> Vec<(Point, &dyn Widget)> {
        let border = self.relief.thickness() as i32;
        let mut y = border;
        self.children
            .iter()
            .map(|child| {
                let offset = Point::new(border, y);
                y += child.size().height as i32 + self.gap as i32;
                (offset, child.as_ref())
            })
            .collect()
    }

    fn size(&self) -> Size {
        let border = self.relief.thickness();
        let sizes: Vec<Size> = self.children.iter().map(|c| c.size()).collect();
        let width = sizes.iter().map(|s| s.width).max().unwrap_or(0);
        let gaps = self
            .gap
            .saturating_mul(cells(sizes.len().saturating_sub(1)));
        let height = sizes
            .iter()
            .fold(gaps, |acc, s| acc.saturating_add(s.height));
        Size::new(
            width.saturating_add(2 * border),
            height.saturating_add(2 * border),
        )
    }

    fn render(&self, origin: Point, buf: &mut Buffer) {
        let size = self.size();
        let blank = Cell::new(' ').with_bg(self.bg);
        for y in 0..size.height as i32 {
            for x in 0..size.width as i32 {
                buf.set(origin.x + x, origin.y + y, blank);
            }
        }
        if self.relief == Relief::Raised {
            draw_box(buf, origin, size, blank);
        }
        for (offset, child) in self.children() {
            child.render(origin.offset(offset.x, offset.y), buf);
        }
    }
}
