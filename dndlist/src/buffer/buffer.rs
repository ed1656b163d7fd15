use super::Cell;
use crate::geometry::Rect;
use crate::text::char_width;

/// Cell grid in screen coordinates. Writes outside the clip rect are dropped,
/// so widgets can paint with signed coordinates and partial visibility.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    clip: Rect,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
            clip: Rect::from_size(width, height),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Restrict subsequent writes to `clip` (intersected with the buffer).
    /// Returns the previous clip so callers can restore it.
    pub fn set_clip(&mut self, clip: Rect) -> Rect {
        let right = clip.right().min(self.width);
        let bottom = clip.bottom().min(self.height);
        let x = clip.x.min(right);
        let y = clip.y.min(bottom);
        std::mem::replace(&mut self.clip, Rect::new(x, y, right - x, bottom - y))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
            return;
        }
        let (x, y) = (x as u16, y as u16);
        if self.clip.contains(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Write `text` starting at (x, y), returning the number of columns used.
    pub fn put_str(&mut self, x: i32, y: i32, text: &str, template: Cell) -> i32 {
        let mut col = x;
        for ch in text.chars() {
            let w = char_width(ch) as i32;
            if w == 0 {
                continue;
            }
            self.set(col, y, Cell { char: ch, ..template });
            for extra in 1..w {
                self.set(
                    col + extra,
                    y,
                    Cell {
                        wide_continuation: true,
                        ..template
                    },
                );
            }
            col += w;
        }
        col - x
    }

    /// Text of row `y`, skipping wide continuation cells.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|c| !c.wide_continuation)
            .map(|c| c.char)
            .collect()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
        self.clip = Rect::from_size(self.width, self.height);
    }
}
