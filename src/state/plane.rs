use rand::Rng;

use state::geometry::*;

/// The bounded playing field. Objects leaving one edge re-enter at the opposite one.
#[derive(PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Plane {
    pub width: f64,
    pub height: f64,
}

impl Plane {
    pub fn new(width: f64, height: f64) -> Plane {
        Plane {
            width: width,
            height: height,
        }
    }

    /// Teleports a box of side `size` that has fully left the plane to the opposite edge.
    /// Returns `None` if the box is still (at least partly) on the plane.
    pub fn wrap(&self, p: Point, size: f64) -> Option<Point> {
        let mut wrapped = p;

        if wrapped.x + size < 0.0 {
            wrapped.x = self.width;
        }
        if wrapped.x > self.width {
            wrapped.x = -size;
        }
        if wrapped.y > self.height {
            wrapped.y = -size;
        }
        if wrapped.y + size < 0.0 {
            wrapped.y = self.height;
        }

        if wrapped == p { None } else { Some(wrapped) }
    }

    /// Whether a box of side `size` at `p` lies entirely on the plane.
    pub fn contains(&self, p: Point, size: f64) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x + size <= self.width && p.y + size <= self.height
    }

    /// A uniformly random top-left corner for a box of side `size` that keeps the box on the plane.
    pub fn random_position<R: Rng>(&self, rng: &mut R, size: f64) -> Point {
        let max_x = (self.width - size).max(0.0);
        let max_y = (self.height - size).max(0.0);
        Point {
            x: rng.gen_range(0.0..=max_x),
            y: rng.gen_range(0.0..=max_y),
        }
    }
}
