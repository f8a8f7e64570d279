use std::{cell::RefCell, collections::HashMap};

use anyhow::Result;

// persisted preference storage
//
// a synchronous key-value store scoped to the page's origin.  the browser implementation lives
// in the webapp; callers are expected to absorb errors rather than surface them, since nothing
// about storage should ever block the page from rendering
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

// in-memory store
//
// used when the browser refuses to give us local storage, in which case preferences still work
// for the rest of the session but are gone on the next load
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = MemoryStore::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();

        assert_eq!(store.get("portfolio-theme").unwrap(), None);

        store.set("portfolio-theme", "dark").unwrap();
        assert_eq!(store.get("portfolio-theme").unwrap().as_deref(), Some("dark"));

        store.set("portfolio-theme", "light").unwrap();
        assert_eq!(store.get("portfolio-theme").unwrap().as_deref(), Some("light"));
    }
}
