use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument, warn};

use crate::theme::ThemePreference;

// portfolio page configuration
//
// this struct contains the handful of hooks that tie the interactive behavior to the markup and
// the stylesheet.  every field has a built-in default, so an empty document is a valid config
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    // key used with the persisted preference store
    pub storage_key: String,

    // attribute set on the document root for the stylesheet to key off
    pub attribute: String,

    // value used when nothing (or garbage) is stored
    pub default: ThemePreference,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            storage_key: String::from("portfolio-theme"),
            attribute: String::from("data-theme"),
            default: ThemePreference::Light,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    // both selectors are re-queried on every document click
    pub container_selector: String,
    pub toggle_selector: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            container_selector: String::from(".portfolio-nav"),
            toggle_selector: String::from(".mobile-menu-toggle"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RevealConfig {
    // fraction of the element's area that must be visible
    pub threshold: f64,

    // css-style margin applied to the viewport, negative values shrink it
    pub root_margin: String,

    // content block categories that get the reveal treatment
    pub selectors: Vec<String>,

    pub pending_class: String,
    pub revealed_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            threshold: 0.1,
            root_margin: String::from("0px 0px -50px 0px"),
            selectors: [
                ".project-card",
                ".timeline-item",
                ".skill-category",
                ".education-card",
                ".certification-item",
                ".about-content",
                ".contact-item",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            pending_class: String::from("animate-on-scroll"),
            revealed_class: String::from("animate-in"),
        }
    }
}

impl RevealConfig {
    // the selectors joined into a single query, i.e. ".a, .b, .c"
    pub fn selector_query(&self) -> String {
        self.selectors.join(", ")
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(anyhow::Error::msg(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.reveal.threshold
            )));
        }

        // one blank entry would make the joined query invalid and disable every block
        if self.reveal.selectors.is_empty()
            || self.reveal.selectors.iter().any(|s| s.trim().is_empty())
        {
            return Err(anyhow::Error::msg(
                "reveal.selectors must be non-empty with no blank entries",
            ));
        }

        if self.theme.storage_key.is_empty() || self.theme.attribute.is_empty() {
            return Err(anyhow::Error::msg(
                "theme.storage_key and theme.attribute must not be empty",
            ));
        }

        Ok(())
    }

    // parse and validate a toml document with a [config] root table
    pub fn from_toml(doc: &str) -> Result<Self> {
        // in order to extract the config table from a larger document, we need to specify it
        // as a subtable of the root node, i.e. a substruct
        #[derive(Debug, Deserialize)]
        struct TomlConfigFile {
            #[serde(default)]
            config: PageConfig,
        }

        let data: TomlConfigFile = toml::from_str(doc)?;

        data.config.validate()?;

        Ok(data.config)
    }
}

// there is no fatal path during page load, so a broken document falls back to the defaults
#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> PageConfig {
    debug!("parsing page config");

    match PageConfig::from_toml(doc) {
        Ok(config) => {
            debug!("successfully parsed page config");
            config
        }
        Err(err) => {
            warn!("failed to parse page config, using defaults: {err}");
            PageConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(PageConfig::from_toml("").unwrap(), PageConfig::default());
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let doc = r#"
            [config.theme]
            default = "dark"

            [config.reveal]
            threshold = 0.25
        "#;

        let config = PageConfig::from_toml(doc).unwrap();

        assert_eq!(config.theme.default, ThemePreference::Dark);
        assert_eq!(config.theme.storage_key, "portfolio-theme");
        assert_eq!(config.reveal.threshold, 0.25);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.reveal.selectors.len(), 7);
    }

    #[test]
    fn default_selector_query() {
        let query = RevealConfig::default().selector_query();

        assert!(query.starts_with(".project-card, .timeline-item"));
        assert!(query.ends_with(".contact-item"));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let doc = r#"
            [config.reveal]
            threshold = 1.5
        "#;

        assert!(PageConfig::from_toml(doc).is_err());
    }

    #[test]
    fn empty_selectors_are_rejected() {
        let doc = r#"
            [config.reveal]
            selectors = []
        "#;

        assert!(PageConfig::from_toml(doc).is_err());
    }

    #[test]
    fn blank_selector_entries_are_rejected() {
        let doc = r#"
            [config.reveal]
            selectors = [".project-card", ""]
        "#;

        assert!(PageConfig::from_toml(doc).is_err());
        assert_eq!(read_config(doc).reveal, RevealConfig::default());

        let doc = r#"
            [config.reveal]
            selectors = [".project-card", "   "]
        "#;

        assert!(PageConfig::from_toml(doc).is_err());
    }

    #[test]
    fn broken_document_falls_back() {
        assert_eq!(read_config("[config"), PageConfig::default());
    }
}
