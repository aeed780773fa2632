use rand::Rng;

use state::geometry::*;
use state::plane::*;

#[derive(PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Food {
    pub position: Point,
    pub size: f64,
}

impl Food {
    pub fn new(position: Point, size: f64) -> Food {
        Food {
            position: position,
            size: size,
        }
    }

    /// A fresh food placed uniformly at random, never hanging over an edge.
    pub fn spawn<R: Rng>(plane: &Plane, size: f64, rng: &mut R) -> Food {
        Food::new(plane.random_position(rng, size), size)
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.position, self.size)
    }
}
