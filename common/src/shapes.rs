use rand::Rng;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned square with a top-left origin.
///
/// Containment is half-open on both axes: `[x, x + width)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub x: u32,
    pub y: u32,
    pub width: u32,
}

impl Rectangle {
    pub fn new(x: u32, y: u32, width: u32) -> Self {
        Self { x, y, width }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn left(&self) -> u32 {
        self.x
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn top(&self) -> u32 {
        self.y
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.width)
    }

    /// True when the far edges do not fit in `u32`.
    pub fn overflows(&self) -> bool {
        self.x.checked_add(self.width).is_none() || self.y.checked_add(self.width).is_none()
    }

    pub fn top_left(&self) -> (u32, u32) {
        (self.left(), self.top())
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() as f32
            && x < self.right() as f32
            && y >= self.top() as f32
            && y < self.bottom() as f32
    }

    pub fn contains_pixel(&self, x: u32, y: u32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    // Edges touching counts as intersecting.
    pub fn intersects_rectangle(&self, other: &Rectangle) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Splits into NW, NE, SW, SE using floor-halved width.
    ///
    /// For odd widths the quadrants leave the last row and column of the
    /// parent uncovered.
    pub fn quadrants(&self) -> [Rectangle; 4] {
        let half = self.width / 2;
        [
            Rectangle::new(self.x, self.y, half),
            Rectangle::new(self.x + half, self.y, half),
            Rectangle::new(self.x, self.y + half, half),
            Rectangle::new(self.x + half, self.y + half, half),
        ]
    }

    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            self._safe_randf32(rng, self.left() as f32, self.right() as f32),
            self._safe_randf32(rng, self.top() as f32, self.bottom() as f32),
        )
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..max)
    }
}
