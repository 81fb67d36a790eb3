use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt as _};

/// Initializes the global tracing subscriber.
///
/// `json_output` selects flattened JSON lines for deployed builds,
/// otherwise a pretty ANSI format for local runs.
pub fn init_tracing(json_output: bool) {
    let filter = EnvFilter::from_default_env();
    if json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().flatten_event(true).with_ansi(false))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_ansi(true))
            .init();
    }
}
