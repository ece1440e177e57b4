pub mod dto {
    pub mod analytics;
    pub mod common;
    pub mod players;
    pub mod team;
    pub mod visuals;
}

pub mod error;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export DTOs
pub use dto::{
    analytics::{StatEntry, StatValue, TeamAnalytics},
    common::ErrorResponse,
    players::{BatsmanDto, BowlerDto, LeaderboardEntry, TopPlayersDto},
    team::{fallback_logo_path, filter_teams, logo_path, ALL_TEAMS},
    visuals::{Chart, TeamVisuals},
};

/// The three per-team resources, fetched and committed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamSnapshot {
    pub analytics: TeamAnalytics,
    pub visuals: TeamVisuals,
    pub top_players: TopPlayersDto,
}
