//! H5 Arcade core
//!
//! Platform-agnostic logic for the H5 Arcade games catalogue: the catalogue
//! data contract and validation, the fetch/retry loader state machine, the
//! deterministic daily-game selector, and the attribution-preserving launch
//! URL builder. No UI and no browser APIs live here; the web crate supplies
//! those behind the [`CatalogueTransport`] trait.

pub mod catalog;
pub mod daily;
pub mod launch;
pub mod loader;

// Re-export commonly used types
pub use catalog::{Catalogue, CatalogueError, GameRecord};
pub use daily::{DailyView, day_key, day_seed, select_for};
pub use launch::{INTERNAL_PARAMS, attribution_params, launch_url, query_pairs};
pub use loader::{
    CatalogueLoader, CatalogueTransport, LoadError, LoadState, LoaderConfig, TransportError,
    TransportReply,
};
