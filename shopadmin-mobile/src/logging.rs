//! Logging setup for the mobile UI
//!
//! In the browser, events go to the devtools console through `tracing-wasm`
//! and panics are reported with a readable message. Native hosts (server-side
//! rendering) get a `tracing-subscriber` formatter filtered by `RUST_LOG`.

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: tracing::Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: tracing::Level) -> Self {
        Self { level }
    }

    /// Install the global subscriber. Calling it twice is harmless.
    #[cfg(target_arch = "wasm32")]
    pub fn init(&self) {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default_with_config(
            tracing_wasm::WASMLayerConfigBuilder::default()
                .set_max_level(self.level)
                .build(),
        );
    }

    /// Install the global subscriber. Calling it twice is harmless.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn init(&self) {
        use tracing_subscriber::EnvFilter;

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.as_str().to_lowercase()));

        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init();
    }
}
