use env_logger::{Builder, Env};

/// Initializes the global logger.
///
/// Defaults to `info` with timestamps off; `RUST_LOG` overrides the level.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
