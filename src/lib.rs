pub mod config;
pub mod models;
pub mod db;
pub mod risk; // rule-based scoring + factor insights
pub mod plan; // prioritized action plans
pub mod nutrition; // calorie logging, food lookup, weight goals
pub mod analytics; // trends, averages, weekly series
pub mod session; // in-memory tracking session
pub mod capability; // subscription gating for premium features
pub mod assistant; // health assistant chat transcript
pub mod members; // family dashboard + report analysis

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Honors `RUST_LOG` when set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} v{} starting", config::APP_NAME, config::APP_VERSION);
}
