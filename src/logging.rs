use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber for binaries and demos.
///
/// `RUST_LOG` wins when set; otherwise `combo_odds` logs at `info`
/// (`debug` when `verbose`). Calling this twice is a no-op.
pub fn init_logger(verbose: bool) {
    let default = if verbose { "combo_odds=debug,info" } else { "combo_odds=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}
