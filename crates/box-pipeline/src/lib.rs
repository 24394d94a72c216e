//! Turns form parameters into the final, ordered solid list.
//!
//! [`resolve`] serves the interactive preview and never fails;
//! [`resolve_for_export`] reports exactly what happened so the exporter can
//! refuse to write a meaningless file.

pub mod config;
pub mod debounce;
pub mod resolve;

pub use config::{PipelineConfig, DEFAULT_PALETTE};
pub use debounce::PreviewDebouncer;
pub use resolve::{resolve, resolve_for_export, ResolveOutcome};
