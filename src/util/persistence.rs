use std::io;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

/// Flat string key → JSON string storage.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), PersistError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[cfg(target_arch = "wasm32")]
    #[error("browser storage error: {0}")]
    Browser(String),
}

/// A stored value's name together with the value used when nothing usable is
/// stored under it.
pub struct PreferenceKey<T> {
    pub name: &'static str,
    pub default: fn() -> T,
}

/// Typed reads and writes over a [`KeyValueStore`] backend.
#[derive(Clone)]
pub struct Preferences {
    store: Rc<dyn KeyValueStore>,
}

impl Preferences {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn platform() -> Self {
        Self::new(file::FileStore::new())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn platform() -> Self {
        Self::new(browser::BrowserStore)
    }

    /// Reads `key`, falling back to its default when nothing is stored or the
    /// stored JSON no longer matches `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &PreferenceKey<T>) -> T {
        let Some(raw) = self.store.read(key.name) else {
            debug!(key = key.name, "nothing stored, using default");
            return (key.default)();
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key = key.name, %err, "stored value has an unexpected shape, using default");
                (key.default)()
            }
        }
    }

    pub fn save<T: Serialize>(&self, key: &PreferenceKey<T>, value: &T) -> Result<(), PersistError> {
        let json = serde_json::to_string(value)?;
        self.store.write(key.name, &json)?;
        debug!(key = key.name, bytes = json.len(), "saved");
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::path::PathBuf;

    use directories::ProjectDirs;

    use super::{KeyValueStore, PersistError};
    use crate::config::{APP_DIR, APP_ORG, APP_QUALIFIER};

    /// One JSON file per key in the platform config directory.
    pub struct FileStore {
        dir: Option<PathBuf>,
    }

    impl FileStore {
        pub fn new() -> Self {
            let dir = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_DIR)
                .map(|dirs| dirs.config_dir().to_path_buf());
            Self { dir }
        }

        #[cfg(test)]
        pub fn in_dir(dir: PathBuf) -> Self {
            Self { dir: Some(dir) }
        }

        fn path(&self, key: &str) -> Option<PathBuf> {
            self.dir.as_ref().map(|dir| dir.join(format!("{key}.json")))
        }
    }

    impl KeyValueStore for FileStore {
        fn read(&self, key: &str) -> Option<String> {
            fs::read_to_string(self.path(key)?).ok()
        }

        fn write(&self, key: &str, value: &str) -> Result<(), PersistError> {
            let path = self.path(key).ok_or(PersistError::StorageUnavailable)?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, value)?;
            Ok(())
        }
    }

}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStore, PersistError};

    /// `window.localStorage`.
    pub struct BrowserStore;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    impl KeyValueStore for BrowserStore {
        fn read(&self, key: &str) -> Option<String> {
            local_storage()?.get_item(key).ok()?
        }

        fn write(&self, key: &str, value: &str) -> Result<(), PersistError> {
            local_storage()
                .ok_or(PersistError::StorageUnavailable)?
                .set_item(key, value)
                .map_err(|err| PersistError::Browser(format!("{err:?}")))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use crate::config::keys::{CALCULATOR_INPUTS, THEME};
    use crate::domain::{CalculatorInputs, LoadItem, Theme};

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let prefs = Preferences::new(MemoryStore::default());
        assert_eq!(prefs.load(&THEME), Theme::Dark);
        assert_eq!(prefs.load(&CALCULATOR_INPUTS), CalculatorInputs::default());
    }

    #[test]
    fn saved_values_load_back() {
        let prefs = Preferences::new(MemoryStore::default());
        let mut inputs = CalculatorInputs::default();
        inputs.add_load(LoadItem::new("EV", 7.0));
        inputs.pv_power = 2.5;

        prefs.save(&CALCULATOR_INPUTS, &inputs).unwrap();
        prefs.save(&THEME, &Theme::Light).unwrap();

        assert_eq!(prefs.load(&CALCULATOR_INPUTS), inputs);
        assert_eq!(prefs.load(&THEME), Theme::Light);
    }

    #[test]
    fn mismatched_shape_falls_back_to_default() {
        let prefs = Preferences::new(MemoryStore::with(CALCULATOR_INPUTS.name, r#"["EV", 7]"#));
        assert_eq!(prefs.load(&CALCULATOR_INPUTS), CalculatorInputs::default());

        let prefs = Preferences::new(MemoryStore::with(CALCULATOR_INPUTS.name, "not json"));
        assert_eq!(prefs.load(&CALCULATOR_INPUTS), CalculatorInputs::default());

        let prefs = Preferences::new(MemoryStore::with(THEME.name, "\"sepia\""));
        assert_eq!(prefs.load(&THEME), Theme::Dark);
    }

    #[test]
    fn null_fields_keep_the_saved_loads() {
        let prefs = Preferences::new(MemoryStore::with(
            CALCULATOR_INPUTS.name,
            r#"{
                "importPriceDay": null,
                "importPriceNight": 10,
                "exportPriceDay": 15,
                "pvPower": null,
                "shiftableImportLoads": [{"label": "EV", "power": 7, "enabled": true}],
                "baseLoad": 0.3
            }"#,
        ));
        let loaded = prefs.load(&CALCULATOR_INPUTS);

        assert_eq!(loaded.shiftable_loads, vec![LoadItem::new("EV", 7.0)]);
        assert_eq!(loaded.import_price_day, CalculatorInputs::default().import_price_day);
        assert_eq!(loaded.pv_power, CalculatorInputs::default().pv_power);
    }

    #[test]
    fn theme_is_written_as_a_json_string() {
        let store = Rc::new(MemoryStore::default());
        let prefs = Preferences {
            store: store.clone(),
        };
        prefs.save(&THEME, &Theme::Light).unwrap();
        assert_eq!(store.read("theme").as_deref(), Some("\"light\""));
    }
}
