use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber for the binary.
///
/// `RUST_LOG` wins over the `verbose` default when set.
pub fn init_logger(verbose: bool) {
    let default_directive = if verbose {
        "bank_account=debug,info"
    } else {
        "bank_account=info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}
