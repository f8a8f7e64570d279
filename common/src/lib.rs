// portfolio page core
//
// everything interactive on the page, reduced to plain state and small capability traits.  the
// webapp wires these to the dom; nothing in here knows about a browser, which keeps the whole
// thing testable on the host
pub mod config;
pub mod content;
pub mod lifecycle;
pub mod nav;
pub mod reveal;
pub mod storage;
pub mod theme;
