use rand::Rng;
use std::fmt;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        (other - *self).length()
    }

    // Zero vector stays zero instead of producing NaN.
    pub fn normalized(&self) -> Point {
        let length = self.length();
        if length == 0.0 {
            return Point::default();
        }
        Point::new(self.x / length, self.y / length)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, factor: f32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// Every predicate treats the rectangle as a closed interval on both axes, so
/// rectangles that only share an edge still intersect and a point on the
/// border is contained.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_position(position: Point, width: f32, height: f32) -> Self {
        Self::new(position.x, position.y, width, height)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    // Check that other is fully contained in self
    pub fn contains_rect(&self, other: &Rectangle) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    pub fn intersects(&self, other: &Rectangle) -> bool {
        let separate = self.right() < other.left()
            || self.bottom() < other.top()
            || self.left() > other.right()
            || self.top() > other.bottom();
        !separate
    }

    /// Same size, shifted by `(dx, dy)`.
    pub fn translate(&self, dx: f32, dy: f32) -> Rectangle {
        Rectangle::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Same size, top-left corner moved to `position`.
    pub fn with_position(&self, position: Point) -> Rectangle {
        Rectangle::from_position(position, self.width, self.height)
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    pub fn random_inside<R: Rng>(&self, width: f32, height: f32, rng: &mut R) -> Rectangle {
        Rectangle::new(
            self._safe_randf32(rng, self.left(), self.right() - width),
            self._safe_randf32(rng, self.top(), self.bottom() - height),
            width,
            height,
        )
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min > max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle({}, {}, {}, {})",
            self.x, self.y, self.width, self.height
        )
    }
}
