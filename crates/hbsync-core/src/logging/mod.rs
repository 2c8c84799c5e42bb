use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
///
/// The `hbsync` target prefix covers both the CLI and `hbsync_core`.
pub fn init_logging(quiet: bool) {
    let directive = if quiet { "hbsync=error" } else { "hbsync=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(directive.parse().expect("Invalid log directive")),
        )
        .init();
}
