use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system.
/// This should be called once at application startup.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn) // Keep command output clean
            .filter_module("arrctl", log::LevelFilter::Info)
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();
    });
}
