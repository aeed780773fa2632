use state::geometry::*;

/// One follower box of an actor's trail. Only the owning actor moves it.
#[derive(PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TailSegment {
    pub position: Point,
    pub size: f64,
    // False until the trail is long enough to reach this segment.
    pub placed: bool,
}

impl TailSegment {
    pub fn new(size: f64) -> TailSegment {
        TailSegment {
            position: Point::default(),
            size: size,
            placed: false,
        }
    }

    pub fn move_to(&mut self, position: Point) {
        self.position = position;
        self.placed = true;
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.position, self.size)
    }

    /// An unplaced segment is not on the plane and hits nothing.
    pub fn hits(&self, head: &Hitbox) -> bool {
        self.placed && self.hitbox().overlaps(head)
    }
}
