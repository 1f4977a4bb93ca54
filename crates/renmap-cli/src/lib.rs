//! Command-line front end for the renmap mapping renderer.

pub mod args;
pub mod driver;
pub mod tracing_config;
