use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Durable key-value persistence for the refresh token and the cached
/// identity. Operations are total: implementations log and swallow I/O
/// problems instead of surfacing them, like browser-local storage does.
pub trait SessionStorage: Send + Sync + Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
    }

    fn delete(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// File-backed storage: a JSON map loaded once at construction and written
/// through on every mutation.
#[derive(Debug)]
pub struct FileSessionStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|error| {
                warn!("Cannot parse session storage file: {error}");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        match serde_json::to_vec(entries) {
            Ok(bytes) => {
                if let Err(error) = fs::write(&self.path, bytes) {
                    warn!("Cannot persist session storage file: {error}");
                }
            }
            Err(error) => warn!("Cannot serialize session storage: {error}"),
        }
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn delete(&self, key: &str) {
        let mut entries = self.entries.lock();
        entries.remove(key);
        self.persist(&entries);
    }
}
