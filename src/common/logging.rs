use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so the totals written to stdout stay machine readable.
/// `RUST_LOG` refines the default `expense_splitter=info` directive.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("expense_splitter=info"));

        // A subscriber may already be installed by an embedding application.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
