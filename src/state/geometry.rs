/// A position on the plane. Screen convention: `y` grows downward.
#[derive(PartialEq, Clone, Copy, Default, Debug, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x: x, y: y }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// An axis-aligned square anchored at its top-left corner.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Hitbox {
    pub origin: Point,
    pub size: f64,
}

impl Hitbox {
    pub fn new(origin: Point, size: f64) -> Hitbox {
        Hitbox {
            origin: origin,
            size: size,
        }
    }

    /// Strict overlap: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.origin.x < other.origin.x + other.size &&
        self.origin.x + self.size > other.origin.x &&
        self.origin.y < other.origin.y + other.size &&
        self.origin.y + self.size > other.origin.y
    }
}

/// Maps any angle in degrees onto `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    // Adding 360 to a tiny negative remainder rounds up to exactly 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
