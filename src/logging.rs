//! Diagnostics setup. stdout carries the status record, so logs go to stderr.

use std::io::IsTerminal;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global subscriber
pub fn setup_logging(debug: bool) {
    let ansi = std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter(debug))
        .with(fmt_layer(std::io::stderr, ansi))
        .init();
}

fn filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("usage_pie=debug,usage_pie_core=debug")
    } else {
        EnvFilter::new("usage_pie=warn,usage_pie_core=warn")
    }
}

/// Colour codes only when a terminal is reading; bar hosts keep stderr in their log
fn fmt_layer<S, W>(writer: W, ansi: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer)
}
