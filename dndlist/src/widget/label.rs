use super::{cells, generate_id, Widget};
use crate::buffer::{Buffer, Cell, Rgb};
use crate::geometry::{Point, Size};
use crate::text::{center_offset, display_width, wrap};

/// Border treatment of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relief {
    #[default]
    Flat,
    /// One-cell box border.
    Raised,
}

impl Relief {
    pub(crate) fn thickness(self) -> u16 {
        match self {
            Relief::Flat => 0,
            Relief::Raised => 1,
        }
    }
}

/// Horizontal padding between a label's border and its text.
const PAD_X: u16 = 1;

/// A block of wrapped text.
#[derive(Debug, Clone)]
pub struct Label {
    id: String,
    parent: Option<String>,
    text: String,
    wrap_length: u16,
    relief: Relief,
    fg: Rgb,
    bg: Rgb,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_id("label"),
            parent: None,
            text: text.into(),
            wrap_length: 0,
            relief: Relief::Flat,
            fg: Rgb::new(230, 230, 230),
            bg: Rgb::new(40, 40, 48),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Wrap text to at most `columns` wide. Zero disables wrapping.
    pub fn wrap_length(mut self, columns: u16) -> Self {
        self.wrap_length = columns;
        self
    }

    pub fn relief(mut self, relief: Relief) -> Self {
        self.relief = relief;
        self
    }

    pub fn colors(mut self, fg: Rgb, bg: Rgb) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    fn lines(&self) -> Vec<String> {
        wrap(&self.text, self.wrap_length as usize)
    }
}

impl Widget for Label {
    fn id(&self) -> &str {
        &self.id
    }

    fn reparent(&mut self, parent: &str) {
        self.parent = Some(parent.to_string());
    }

    fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    fn size(&self) -> Size {
        let lines = self.lines();
        let text_width = cells(lines.iter().map(|l| display_width(l)).max().unwrap_or(0));
        let border = self.relief.thickness();
        Size::new(
            text_width.saturating_add(2 * (border + PAD_X)),
            cells(lines.len()).saturating_add(2 * border),
        )
    }

    fn render(&self, origin: Point, buf: &mut Buffer) {
        let size = self.size();
        let (w, h) = (size.width as i32, size.height as i32);
        let blank = Cell::new(' ').with_fg(self.fg).with_bg(self.bg);

        for y in 0..h {
            for x in 0..w {
                buf.set(origin.x + x, origin.y + y, blank);
            }
        }

        let border = self.relief.thickness() as i32;
        if border > 0 {
            draw_box(buf, origin, size, blank);
        }

        let inner = (w - 2 * (border + PAD_X as i32)).max(0) as usize;
        for (row, line) in self.lines().iter().enumerate() {
            let x = origin.x + border + PAD_X as i32 + center_offset(display_width(line), inner) as i32;
            buf.put_str(x, origin.y + border + row as i32, line, blank);
        }
    }
}

pub(crate) fn draw_box(buf: &mut Buffer, origin: Point, size: Size, template: Cell) {
    let (w, h) = (size.width as i32, size.height as i32);
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (origin.x + w - 1, origin.y + h - 1);
    let edge = |c: char| Cell { char: c, ..template };

    for x in origin.x + 1..right {
        buf.set(x, origin.y, edge('─'));
        buf.set(x, bottom, edge('─'));
    }
    for y in origin.y + 1..bottom {
        buf.set(origin.x, y, edge('│'));
        buf.set(right, y, edge('│'));
    }
    buf.set(origin.x, origin.y, edge('┌'));
    buf.set(right, origin.y, edge('┐'));
    buf.set(origin.x, bottom, edge('└'));
    buf.set(right, bottom, edge('┘'));
}
