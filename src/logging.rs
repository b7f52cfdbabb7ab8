use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Logs go to stderr so result tables on
/// stdout stay readable. `RUST_LOG` wins over the default level.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "trade_recommender=debug"
    } else {
        "trade_recommender=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
