// crates/voxrle-cli/src/logging.rs

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Human-readable logs on stderr; stdout carries the report only.
pub fn setup_logging(verbose: bool) {
    let dirs = if verbose {
        "info,voxrle_core=debug,voxrle_cli=debug"
    } else {
        "warn,voxrle_core=info,voxrle_cli=info"
    };

    let main_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(dirs)))
        .with(main_layer)
        .init()
}
