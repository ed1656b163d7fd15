#![allow(dead_code)]

use dndlist::{Buffer, Cell, DndList, ListConfig, Point, Size, Widget};

/// Fixed-size widget that paints its first letter.
#[derive(Debug)]
pub struct Block {
    pub id: String,
    pub size: Size,
    pub parent: Option<String>,
    pub children: Vec<(Point, Block)>,
}

impl Block {
    pub fn new(id: &str, width: u16, height: u16) -> Self {
        Self {
            id: id.to_string(),
            size: Size::new(width, height),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, offset: Point, child: Block) -> Self {
        self.children.push((offset, child));
        self
    }
}

impl Widget for Block {
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
        self.children
            .iter()
            .map(|(offset, child)| (*offset, child as &dyn Widget))
            .collect()
    }

    fn size(&self) -> Size {
        self.size
    }

    fn render(&self, origin: Point, buf: &mut Buffer) {
        let ch = self.id.chars().next().unwrap_or('?');
        for y in 0..self.size.height as i32 {
            for x in 0..self.size.width as i32 {
                buf.set(origin.x + x, origin.y + y, Cell::new(ch));
            }
        }
    }
}

/// 700x800 list with padding 10 holding A, B, C, each 100 wide and 30 tall.
/// Tops are 0, 40 and 80.
pub fn abc_list() -> DndList {
    let mut list = DndList::new(ListConfig::new(700, 800).padding(10));
    for id in ["A", "B", "C"] {
        list.add_item(Block::new(id, 100, 30)).unwrap();
    }
    list
}

pub fn top_of(list: &DndList, id: &str) -> i32 {
    let handle = list.bound_to(id).unwrap();
    list.node(handle).unwrap().top(list.surface()).unwrap()
}
