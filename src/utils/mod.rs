use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber, honoring `RUST_LOG` overrides.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("caixa_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
