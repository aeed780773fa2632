use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind as IoErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use serde_json;

use errors::*;

/// A string key/value store that outlives a session, e.g. for the best score.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Reads a stored score. A missing or unreadable value counts as zero.
pub fn get_highscore<S: Storage + ?Sized>(storage: &S, key: &str) -> Result<u64> {
    let stored = storage.get(key)?;
    Ok(match stored {
        None => 0,
        Some(text) => {
            match text.trim().parse() {
                Ok(score) => score,
                Err(_) => {
                    warn!("ignoring unparsable high score {:?} under {:?}", text, key);
                    0
                }
            }
        }
    })
}

pub fn set_highscore<S: Storage + ?Sized>(storage: &mut S, key: &str, score: u64) -> Result<()> {
    storage.set(key, &score.to_string())
}

#[derive(Default, Debug, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Keeps all values in one JSON object on disk, rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFileStorage {
    /// Opens the store at `path`. A file that does not exist yet is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<JsonFileStorage> {
        let path = path.as_ref().to_path_buf();
        let values = match File::open(&path) {
            Ok(mut f) => {
                let mut contents = String::new();
                f.read_to_string(&mut contents)
                    .chain_err(|| format!("reading {}", path.display()))?;
                if contents.trim().is_empty() {
                    HashMap::new()
                } else {
                    serde_json::from_str(&contents)
                        .chain_err(|| format!("decoding {}", path.display()))?
                }
            }
            Err(ref e) if e.kind() == IoErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e).chain_err(|| format!("opening {}", path.display())),
        };

        Ok(JsonFileStorage {
            path: path,
            values: values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let encoded = serde_json::to_string_pretty(&self.values)?;
        let mut f = File::create(&self.path)
            .chain_err(|| format!("creating {}", self.path.display()))?;
        f.write_all(encoded.as_bytes())
            .chain_err(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

impl Storage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
