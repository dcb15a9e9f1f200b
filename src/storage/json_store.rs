use std::{
    collections::BTreeMap,
    env, fs,
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::errors::Result;

use super::KeyValueStore;

const TMP_SUFFIX: &str = "tmp";
const DEFAULT_DIR_NAME: &str = ".caixa_core";
const STORE_FILE: &str = "store.json";

/// File-backed key-value store mirroring the device's local storage: one JSON
/// object per store file, values kept as opaque strings.
///
/// Writes stage to a temporary sibling and rename over the target, so a
/// failed write never corrupts the existing file. Clones share the same
/// write lock.
#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self {
            path,
            lock: Arc::new(Mutex::new(())),
        })
    }

    /// Opens the store at its default location, `~/.caixa_core/store.json`.
    pub fn new_default() -> Result<Self> {
        Self::new(default_root().join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(map)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// Application data directory, defaulting to `~/.caixa_core` and overridable
/// through `CAIXA_CORE_HOME`.
fn default_root() -> PathBuf {
    if let Some(custom) = env::var_os("CAIXA_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn get_on_missing_file_returns_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("store.json")).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonFileStore::new(&path).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "two").unwrap();

        let reopened = JsonFileStore::new(&path).unwrap();
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn remove_deletes_only_the_named_key() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("store.json")).unwrap();
        store.set("keep", "x").unwrap();
        store.set("drop", "y").unwrap();
        store.remove("drop").unwrap();
        store.remove("never-existed").unwrap();
        assert_eq!(store.get("drop").unwrap(), None);
        assert_eq!(store.get("keep").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn failed_write_preserves_existing_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonFileStore::new(&path).unwrap();
        store.set("a", "1").unwrap();
        let original = fs::read_to_string(&path).unwrap();

        // A directory squatting on the staging path makes File::create fail.
        fs::create_dir_all(tmp_path(&path)).unwrap();
        assert!(store.set("a", "2").is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
