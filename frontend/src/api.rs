pub mod analytics;
pub mod players;
pub mod teams;
pub mod utils;

use crate::config::Config;

pub use analytics::{fetch_team_analytics, fetch_team_visuals};
pub use players::fetch_top_players;
pub use teams::{fetch_team_snapshot, fetch_teams};

pub fn api_url(path: &str) -> String {
    let base_url = Config::api_base_url();
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        // Use absolute URL
        format!("{}{}", base_url, path)
    }
}
