//! # Common Components
//!
//! Shared utilities used by both the CLI and the web server.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration loading
//! - [`policy`]: Message and upload limits checked before encoding

pub mod config;
pub mod policy;
