//! Tracing setup for the runner and for tests.
//!
//! Diagnostics go to stderr so the demo lines on stdout stay clean.

use std::sync::Once;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

static TEST_SETUP: Once = Once::new();

/// Maps the `-d` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber. `RUST_LOG`, when set, wins over `verbosity`.
pub fn setup_logging(verbosity: u8) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => EnvFilter::default().add_directive(level_for(verbosity).into()),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter);

    if let Err(e) = tracing_subscriber::registry().with(fmt_layer).try_init() {
        eprintln!("Failed to set up logging: {}", e);
    }

    tracing::debug!(verbosity, "logging initialised");
}

/// Test-only subscriber at TRACE; safe to call from every test.
pub fn init_test_logging() {
    TEST_SETUP.call_once(|| {
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_filter(LevelFilter::TRACE),
        );
        if tracing::dispatcher::has_been_set() {
            tracing::debug!("Tracing subscriber already set");
        } else if let Err(e) = subscriber.try_init() {
            eprintln!("Failed to set up test logging: {}", e);
        }
    });
}
