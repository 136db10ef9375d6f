//! API base-URL resolution and connectivity probing.
//!
//! A front end served next to its API needs to know where that API lives:
//! on a developer machine the page and the API run on different ports, in
//! production they share an origin. This crate resolves the correct base
//! URL from an injected page context, composes endpoint URLs against it,
//! and performs one-shot diagnostic probes to verify the API is reachable.

pub mod config;
pub mod probe;
pub mod resolver;

pub use config::page_context::PageContext;
pub use probe::probe::probe_connection;
pub use probe::result::ProbeResult;
pub use resolver::{DEV_API_PORT, build_url, resolve_base_url};
