/// Sentinel team name the backend uses for league-wide aggregates.
pub const ALL_TEAMS: &str = "All Teams";

/// Public path the team logos are served from.
pub const LOGO_DIR: &str = "/logos";

/// Logo file shown when a team's own logo is missing.
pub const FALLBACK_LOGO_FILE: &str = "All_Teams.png";

/// Derives the logo path for a team: spaces become underscores and `.png` is appended.
pub fn logo_path(team: &str) -> String {
    format!("{}/{}.png", LOGO_DIR, team.replace(' ', "_"))
}

pub fn fallback_logo_path() -> String {
    format!("{}/{}", LOGO_DIR, FALLBACK_LOGO_FILE)
}

/// Keeps the teams whose lower-cased name contains the lower-cased query.
/// Order is preserved and an empty query keeps everything.
pub fn filter_teams(teams: &[String], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    teams
        .iter()
        .filter(|team| team.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
