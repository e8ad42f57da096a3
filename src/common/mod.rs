//! # Common Components
//!
//! Shared data model and ambient utilities used by the processing operations,
//! the codec and the pipeline.
//!
//! ## Modules
//!
//! - [`pixels`]: the RGB pixel buffer every operation consumes and produces
//! - [`error`]: the crate error type
//! - [`config`]: TOML configuration for the pipeline
//! - [`report`]: per-run timing report exported as JSON

pub mod config;
pub mod error;
pub mod pixels;
pub mod report;
