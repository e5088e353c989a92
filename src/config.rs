use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Healthscope";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the application data directory
/// ~/Healthscope/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Healthscope")
}

/// Get the database file path
pub fn database_path() -> PathBuf {
    app_data_dir().join("healthscope.db")
}

/// Get the resources directory (bundled reference data)
pub fn resources_dir() -> PathBuf {
    app_data_dir().join("resources")
}

/// Default log filter when RUST_LOG is not set
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}
