use gloo_storage::{LocalStorage, Storage};
use tracing::debug;

use portfolio_common::storage::{MemoryStore, PreferenceStore};

// browser local storage
//
// gloo throws if local storage is missing entirely (disabled cookies, some private modes), so
// open() checks first and hands back an in-memory store instead.  values go through the raw
// storage handle, since gloo's typed accessors would json-encode the bare theme name
#[derive(Debug)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn open() -> Box<dyn PreferenceStore> {
        let available = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some();

        if available {
            Box::new(BrowserStore)
        } else {
            debug!("local storage unavailable, preferences will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        LocalStorage::raw().get_item(key).map_err(|err| {
            anyhow::Error::msg(format!("Failed to fetch local storage {key}: {err:?}"))
        })
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        LocalStorage::raw().set_item(key, value).map_err(|err| {
            anyhow::Error::msg(format!("Failed to set local storage {key}: {err:?}"))
        })
    }
}
