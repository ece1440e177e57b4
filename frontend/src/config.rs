/// Backend origin used when `API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Baked in at compile time; the dashboard has no runtime configuration.
        option_env!("API_BASE_URL")
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn log_level() -> log::Level {
        if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}
