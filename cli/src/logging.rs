//! # Diagnostics Output
//!
//! The `msgseal` binary has two output streams with fixed jobs. Stdout gets
//! exactly one JSON document per run, the command result, so it can be piped
//! into `jq` or another program. Every `tracing` event goes to stderr.
//!
//! Verbosity comes from `RUST_LOG` when set, [`DEFAULT_FILTER`] otherwise.
//! `--log-format json` switches stderr to one JSON object per event.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
///
/// The binary target is named `msgseal`, same as the library, so one
/// directive covers both.
pub const DEFAULT_FILTER: &str = "msgseal=info";

/// How events are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `"json"` in any case selects JSON. Anything else falls back to pretty
    /// rather than failing the command over a logging flag.
    pub fn from_str_lossy(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Install the stderr subscriber. Must run before the first event and at
/// most once per process.
///
/// ```text
/// RUST_LOG=msgseal=debug msgseal verify -m hi -s ... -p ...
/// ```
///
/// With `debug`, a `false` verdict also logs which check rejected it.
pub fn init_logging(fallback_filter: &str, format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(false),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr).with_target(true))
            .init(),
    }

    tracing::debug!(?format, "stderr logging ready");
}
