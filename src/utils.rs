use std::fmt;
use std::time::Duration;
use serde_json;
use serde::Serialize;

use errors::*;

pub fn json<T>(value: &T) -> Result<String>
    where T: Serialize
{
    serde_json::to_string(value).chain_err(|| "serialising into json")
}

/// A whole number of milliseconds, as stored in settings files.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Debug, Serialize, Deserialize)]
pub struct Milliseconds(u64);

impl Milliseconds {
    pub fn new(ms: u64) -> Milliseconds {
        Milliseconds(ms)
    }

    pub fn millis(&self) -> u64 {
        self.0
    }
}

impl From<Milliseconds> for Duration {
    fn from(ms: Milliseconds) -> Duration {
        Duration::from_millis(ms.0)
    }
}

impl fmt::Display for Milliseconds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
