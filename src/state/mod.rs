mod geometry;
mod plane;
mod motion;
mod food;
mod tail;
mod actor;

pub use self::geometry::*;
pub use self::plane::*;
pub use self::motion::*;
pub use self::food::*;
pub use self::tail::*;
pub use self::actor::*;
