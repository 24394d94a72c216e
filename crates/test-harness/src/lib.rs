//! Test harness for the box pipeline.
//!
//! Runs whole parameter sets through the pipeline on either kernel and
//! checks the resulting solids with readable failure messages.
//!
//! # Key Components
//!
//! - [`BoxRun`]: One pipeline run plus the kernel that holds its solids
//! - [`helpers`]: Error type, parameter presets, proptest strategies
//! - [`assertions`]: Bounding-box and membership assertions with context

pub mod assertions;
pub mod helpers;
pub mod run;

pub use helpers::HarnessError;
pub use run::BoxRun;
