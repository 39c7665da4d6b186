use std::env;

/// Sets up pretty_env_logger. `bin_module` and this crate log at debug level when `RUST_LOG=debug`.
pub fn logger_init(bin_module: &str) {
    let crate_level =
        if env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default() == "debug" {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module(bin_module, crate_level)
        .filter_module("mealplan_rs", crate_level)
        .init();
}
