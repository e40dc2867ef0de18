//! Tracing configuration for debugging emitted output.
//!
//! Supports three output formats controlled by `RBJS_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`, one level per
//!   compile entry point
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Trace every statement the unit compiles, as a tree
//! RBJS_LOG=trace RBJS_LOG_FORMAT=tree cargo test -p rbjs-emitter
//!
//! # Only dropped regexp flags and other warnings
//! RBJS_LOG="rbjs_emitter=warn" cargo test -p rbjs-emitter
//! ```
//!
//! [`init_tracing`] installs the global subscriber from the environment.
//! [`TracingConfig::dispatch`] builds the same subscriber around any writer,
//! for capturing compiler traces in tests or tools.

use std::io::IsTerminal;

use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
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
    /// Parse a `RBJS_LOG_FORMAT` value; anything unrecognised is `Text`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Filter directives plus output format for one subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directives, e.g. `rbjs_emitter=trace`.
    pub filter: String,
    pub format: LogFormat,
    /// Colour codes in text and tree output.
    pub ansi: bool,
}

impl TracingConfig {
    #[must_use]
    pub fn new(filter: impl Into<String>, format: LogFormat) -> Self {
        Self {
            filter: filter.into(),
            format,
            ansi: false,
        }
    }

    /// Read `RBJS_LOG` (falling back to `RUST_LOG`) and `RBJS_LOG_FORMAT`.
    /// `None` when neither filter variable is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let filter = std::env::var("RBJS_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()?;
        let format = LogFormat::parse(&std::env::var("RBJS_LOG_FORMAT").unwrap_or_default());
        Some(Self {
            filter,
            format,
            ansi: std::io::stderr().is_terminal(),
        })
    }

    /// Build a subscriber that writes through `writer`.
    #[must_use]
    pub fn dispatch<W>(&self, writer: W) -> Dispatch
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let filter = EnvFilter::builder().parse_lossy(&self.filter);
        match self.format {
            LogFormat::Tree => {
                let tree_layer = tracing_tree::HierarchicalLayer::default()
                    .with_writer(writer)
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_targets(true)
                    .with_ansi(self.ansi);
                Dispatch::new(Registry::default().with(filter).with(tree_layer))
            }
            LogFormat::Json => {
                let json_layer = fmt::layer().json().with_writer(writer);
                Dispatch::new(Registry::default().with(filter).with(json_layer))
            }
            LogFormat::Text => {
                let text_layer = fmt::layer().with_writer(writer).with_ansi(self.ansi);
                Dispatch::new(Registry::default().with(filter).with(text_layer))
            }
        }
    }
}

/// Initialise the global tracing subscriber from the environment.
///
/// Does nothing when neither `RBJS_LOG` nor `RUST_LOG` is set. Safe to call
/// more than once (later calls are ignored), so every test may call it.
/// All output goes to stderr.
pub fn init_tracing() {
    let Some(config) = TracingConfig::from_env() else {
        return;
    };
    // Fails once a global subscriber exists; that is expected here.
    let _ = tracing::dispatcher::set_global_default(config.dispatch(std::io::stderr));
}
