use crate::Environment;
use tracing_subscriber::EnvFilter;

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations to ensure
/// colored error output. Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware configuration.
///
/// - **Production** (`APP_ENV=production`): JSON format for log
///   aggregation tools, defaults to `info` level.
/// - **Development** (default): human-readable format, defaults to
///   `debug` level.
///
/// `RUST_LOG` overrides the default filter in both cases. Safe to call
/// multiple times (subsequent calls are no-ops), which matters in tests.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("info,tower_http=info,sea_orm=warn")
        } else {
            EnvFilter::new("debug")
        }
    });

    if environment.is_production() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    }
}
