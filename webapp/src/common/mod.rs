use dioxus::prelude::*;

use portfolio_common::config::{PageConfig, read_config};

pub mod dom;
pub mod storage;
pub mod style;

// the page config is baked in at compile time and parsed on first use
const PAGE_CONFIG_DOC: &str = include_str!("../../portfolio.toml");

pub static PAGE_CONFIG: GlobalSignal<PageConfig> = Signal::global(|| read_config(PAGE_CONFIG_DOC));
