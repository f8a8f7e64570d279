use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config::ThemeConfig, storage::PreferenceStore};

// the user's chosen display mode
//
// stored under a single key as "light" or "dark", which are also the values the stylesheet
// matches on via the document root attribute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    // the toggle button shows the mode you would switch to
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemePreference::Light => "bi bi-moon-fill",
            ThemePreference::Dark => "bi bi-sun-fill",
        }
    }

    pub fn toggle_title(self) -> &'static str {
        match self {
            ThemePreference::Light => "Switch to dark mode",
            ThemePreference::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// the page's root node, as far as theming is concerned
pub trait ThemeRoot {
    fn set_theme_attribute(&self, attribute: &str, value: &str);
}

// theme manager
//
// owns the current preference and the injected store.  storage failures never escape: reads
// fall back to the configured default and writes are dropped, leaving the in-memory value as
// the source of truth for the rest of the session
#[derive(Debug)]
pub struct ThemeManager<S: PreferenceStore> {
    store: S,
    config: ThemeConfig,
    current: ThemePreference,
}

impl<S: PreferenceStore> ThemeManager<S> {
    pub fn new(store: S, config: ThemeConfig) -> Self {
        let current = Self::get_initial(&store, &config);

        ThemeManager {
            store,
            config,
            current,
        }
    }

    pub fn get_initial(store: &S, config: &ThemeConfig) -> ThemePreference {
        match store.get(&config.storage_key) {
            Ok(Some(value)) => ThemePreference::parse(&value).unwrap_or_else(|| {
                debug!("ignoring unrecognized stored theme {value:?}");
                config.default
            }),
            Ok(None) => config.default,
            Err(err) => {
                debug!("theme storage unavailable, using default: {err}");
                config.default
            }
        }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    // persist the current value and reflect it onto the root
    pub fn apply(&self, root: &impl ThemeRoot) {
        let value = self.current.as_str();

        if let Err(err) = self.store.set(&self.config.storage_key, value) {
            debug!("theme storage unavailable, keeping {value} in memory: {err}");
        }

        root.set_theme_attribute(&self.config.attribute, value);
    }

    pub fn toggle(&mut self, root: &impl ThemeRoot) -> ThemePreference {
        self.current = self.current.toggled();
        self.apply(root);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Default)]
    struct RecordingRoot {
        attributes: RefCell<Vec<(String, String)>>,
    }

    impl RecordingRoot {
        fn last(&self) -> Option<(String, String)> {
            self.attributes.borrow().last().cloned()
        }
    }

    impl ThemeRoot for RecordingRoot {
        fn set_theme_attribute(&self, attribute: &str, value: &str) {
            self.attributes
                .borrow_mut()
                .push((attribute.to_owned(), value.to_owned()));
        }
    }

    // storage that has been disabled by the browser
    #[derive(Default)]
    struct BrokenStore {
        writes: Cell<usize>,
    }

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Err(anyhow::Error::msg("storage disabled"))
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            self.writes.set(self.writes.get() + 1);
            Err(anyhow::Error::msg("quota exceeded"))
        }
    }

    #[test]
    fn initial_is_light_when_absent() {
        let store = MemoryStore::new();

        assert_eq!(
            ThemeManager::get_initial(&store, &ThemeConfig::default()),
            ThemePreference::Light
        );
    }

    #[test]
    fn initial_uses_stored_value() {
        for stored in [ThemePreference::Light, ThemePreference::Dark] {
            let store = MemoryStore::with_entry("portfolio-theme", stored.as_str());

            assert_eq!(
                ThemeManager::get_initial(&store, &ThemeConfig::default()),
                stored
            );
        }
    }

    #[test]
    fn stored_value_is_the_bare_theme_name() {
        let root = RecordingRoot::default();
        let store = MemoryStore::with_entry("portfolio-theme", "dark");
        let mut manager = ThemeManager::new(store, ThemeConfig::default());

        assert_eq!(manager.current(), ThemePreference::Dark);

        // mounting writes the preference back unchanged
        manager.apply(&root);
        assert_eq!(
            manager.store.get("portfolio-theme").unwrap().as_deref(),
            Some("dark")
        );

        manager.toggle(&root);
        assert_eq!(
            manager.store.get("portfolio-theme").unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn quoted_values_are_not_theme_names() {
        let store = MemoryStore::with_entry("portfolio-theme", "\"dark\"");

        assert_eq!(
            ThemeManager::get_initial(&store, &ThemeConfig::default()),
            ThemePreference::Light
        );
    }

    #[test]
    fn initial_ignores_garbage() {
        let store = MemoryStore::with_entry("portfolio-theme", "sepia");

        assert_eq!(
            ThemeManager::get_initial(&store, &ThemeConfig::default()),
            ThemePreference::Light
        );
    }

    #[test]
    fn toggle_twice_is_identity() {
        for stored in [None, Some("light"), Some("dark")] {
            let store = match stored {
                Some(value) => MemoryStore::with_entry("portfolio-theme", value),
                None => MemoryStore::new(),
            };
            let root = RecordingRoot::default();
            let mut manager = ThemeManager::new(store, ThemeConfig::default());
            let original = manager.current();

            manager.toggle(&root);
            assert_ne!(manager.current(), original);

            manager.toggle(&root);
            assert_eq!(manager.current(), original);
        }
    }

    #[test]
    fn toggle_persists_and_sets_root() {
        let root = RecordingRoot::default();
        let mut manager = ThemeManager::new(MemoryStore::new(), ThemeConfig::default());

        assert_eq!(manager.toggle(&root), ThemePreference::Dark);
        assert_eq!(
            root.last(),
            Some(("data-theme".to_owned(), "dark".to_owned()))
        );
        assert_eq!(
            manager.store.get("portfolio-theme").unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn broken_storage_degrades_to_memory() {
        let root = RecordingRoot::default();
        let mut manager = ThemeManager::new(BrokenStore::default(), ThemeConfig::default());

        assert_eq!(manager.current(), ThemePreference::Light);

        manager.apply(&root);
        assert_eq!(manager.toggle(&root), ThemePreference::Dark);
        assert_eq!(manager.current(), ThemePreference::Dark);
        assert_eq!(manager.store.writes.get(), 2);
        assert_eq!(
            root.last(),
            Some(("data-theme".to_owned(), "dark".to_owned()))
        );
    }

    #[test]
    fn toggle_affordances_point_at_the_other_mode() {
        assert_eq!(ThemePreference::Light.toggle_title(), "Switch to dark mode");
        assert_eq!(ThemePreference::Dark.toggle_icon(), "bi bi-sun-fill");
        assert_eq!(ThemePreference::parse(" Dark "), Some(ThemePreference::Dark));
    }
}
