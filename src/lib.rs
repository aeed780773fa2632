// Error chain is used for the crate's error types.
#[macro_use]
extern crate error_chain;
// Log is the logging facade; the binary picks the logger.
#[macro_use]
extern crate log;
// Rand places food and drives sessions.
extern crate rand;
// UUID is used to give unique identifiers to each session.
extern crate uuid;
// Serde is used to Serialise/Deserialise settings, scores and snapshots.
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate futures;
extern crate tokio_timer;
// Quickcheck is used for property-based testing.
#[cfg(test)]
extern crate quickcheck;

pub mod errors;
pub mod utils;
pub mod settings;
pub mod state;
pub mod engine;

pub use errors::*;
pub use settings::*;
pub use state::*;
pub use engine::*;
