//! Tracing configuration for the renmap binary.
//!
//! Supports three output formats controlled by `RENMAP_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ```bash
//! # Trace the emission protocol, one line per event
//! RENMAP_LOG=trace renmap table.json
//!
//! # Hierarchical view of a render
//! RENMAP_LOG=trace RENMAP_LOG_FORMAT=tree renmap table.json
//!
//! # Fine-grained filtering
//! RENMAP_LOG="renmap_emitter=trace" renmap table.json
//! ```
//!
//! The subscriber is only initialised when `RENMAP_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal runs.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse from the `RENMAP_LOG_FORMAT` environment variable.
    fn from_env() -> Self {
        match std::env::var("RENMAP_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Build an `EnvFilter` from `RENMAP_LOG`, falling back to `RUST_LOG`.
///
/// `RENMAP_LOG` takes precedence when both are set. Values use the same
/// syntax as `RUST_LOG` (e.g. `debug`, `renmap_emitter=trace`).
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("RENMAP_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `RENMAP_LOG` nor `RUST_LOG` is set.
///
/// All output goes to stderr so it never interferes with the mapping
/// document on stdout.
pub fn init_tracing() {
    let has_renmap_log = std::env::var("RENMAP_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_renmap_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
