/// A point in either screen or surface content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Component-wise difference `self - other`.
    pub const fn delta(self, other: Point) -> (i32, i32) {
        (self.x - other.x, self.y - other.y)
    }
}

/// Intrinsic size of a widget, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned bounding box of a placement, in content coordinates.
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BBox {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn from_origin(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.width as i32,
            bottom: origin.y + size.height as i32,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub const fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }

    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Smallest box containing both.
    pub fn union(self, other: BBox) -> Self {
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Squared distance from `p` to the nearest point of the box.
    /// Zero when the point lies inside.
    pub fn distance_sq(&self, p: Point) -> i64 {
        let dx = if p.x < self.left {
            self.left - p.x
        } else if p.x >= self.right {
            p.x - (self.right - 1)
        } else {
            0
        } as i64;
        let dy = if p.y < self.top {
            self.top - p.y
        } else if p.y >= self.bottom {
            p.y - (self.bottom - 1)
        } else {
            0
        } as i64;
        dx * dx + dy * dy
    }
}

/// Screen-space rectangle (terminal cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Reference point of a placed item that lands on the requested coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Top-center.
    #[default]
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    Center,
}

impl Anchor {
    /// Top-left corner of an item of `size` whose anchor point sits at `at`.
    pub fn origin_for(self, at: Point, size: Size) -> Point {
        let w = size.width as i32;
        let h = size.height as i32;
        let (dx, dy) = match self {
            Anchor::NW => (0, 0),
            Anchor::N => (w / 2, 0),
            Anchor::NE => (w, 0),
            Anchor::W => (0, h / 2),
            Anchor::Center => (w / 2, h / 2),
            Anchor::E => (w, h / 2),
            Anchor::SW => (0, h),
            Anchor::S => (w / 2, h),
            Anchor::SE => (w, h),
        };
        at.offset(-dx, -dy)
    }
}
