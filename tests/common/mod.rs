//! Shared test setup: tracing to the console and to an NDJSON file.
//!
//! ```rust,ignore
//! mod common;
//!
//! #[test]
//! fn deletes_rebalance() {
//!     common::init_tracing();
//!     // ...
//! }
//! ```
//!
//! Tree events are only emitted when the crate is built with the `tracing`
//! feature:
//!
//! ```bash
//! RUST_LOG=redblack=trace cargo test --features tracing
//! ```
//!
//! Environment variables:
//! - `RUST_LOG`: filter directives (e.g. `redblack=debug,redblack::tree=trace`)
//! - `REDBLACK_LOG_DIR`: log directory (default: `logs/`)
//! - `REDBLACK_LOG_CONSOLE`: set to "0" to silence console output
//!
//! The file sink is `<dir>/redblack.jsonl`, one JSON object per line:
//!
//! ```bash
//! # Every span that touched key 16
//! jq 'select(.span.key == "16")' logs/redblack.jsonl
//!
//! # Fixup decisions only
//! jq 'select(.fields.message | startswith("delete_fixup"))' logs/redblack.jsonl
//! ```

#![allow(dead_code)]

use std::env;
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::{Mutex, Once};

use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls do nothing.
pub fn init_tracing() {
    INIT.call_once(|| install(&LogSettings::from_env()));
}

/// Where and how test logs go.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Directory holding the NDJSON file.
    pub dir: PathBuf,

    /// Echo events to stderr.
    pub console: bool,

    /// Level used when `RUST_LOG` is unset or invalid.
    pub fallback_level: Level,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            console: true,
            fallback_level: Level::INFO,
        }
    }
}

impl LogSettings {
    /// Defaults overridden by `REDBLACK_LOG_DIR` / `REDBLACK_LOG_CONSOLE`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            dir: env::var_os("REDBLACK_LOG_DIR").map_or(defaults.dir, PathBuf::from),
            console: !env::var("REDBLACK_LOG_CONSOLE").is_ok_and(|v| v == "0"),
            fallback_level: defaults.fallback_level,
        }
    }

    /// Full path of the NDJSON sink.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join("redblack.jsonl")
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.fallback_level.to_string()))
    }
}

#[expect(clippy::expect_used, reason = "test setup fails loudly")]
fn open_sink(settings: &LogSettings) -> File {
    std::fs::create_dir_all(&settings.dir).expect("create log directory");

    // Append: each test binary runs in its own process.
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(settings.file_path())
        .expect("open log file")
}

fn install(settings: &LogSettings) {
    let console = settings.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::CLOSE)
            .compact()
            .with_filter(settings.filter())
    });

    let file = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(open_sink(settings)))
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .json()
        .with_filter(settings.filter());

    // try_init: another harness may have installed one already.
    let _ = Registry::default().with(console).with(file).try_init();
}

