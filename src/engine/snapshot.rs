use uuid::Uuid;

use state::*;
use engine::State;

/// Everything a renderer needs after a tick.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub session: Uuid,
    pub state: State,
    pub score: u64,
    pub highscore: u64,
    pub plane: Plane,
    pub actors: Vec<ActorSnapshot>,
}

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub name: String,
    pub active: bool,
    pub head: Point,
    pub angle: f64,
    pub size: f64,
    pub tail: Vec<TailSegment>,
    pub food: Food,
}

impl ActorSnapshot {
    pub fn new(name: &str, actor: &Actor) -> ActorSnapshot {
        ActorSnapshot {
            name: name.to_string(),
            active: actor.is_active(),
            head: actor.position(),
            angle: actor.angle(),
            size: actor.size(),
            tail: actor.tail().to_vec(),
            food: *actor.food(),
        }
    }
}
