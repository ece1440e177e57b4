use crate::api::analytics::{fetch_team_analytics, fetch_team_visuals};
use crate::api::api_url;
use crate::api::players::fetch_top_players;
use crate::api::utils::get_json;
use log::debug;
use shared::{Result, TeamAnalytics, TeamSnapshot, TeamVisuals, TopPlayersDto};
use std::future::Future;

pub async fn fetch_teams() -> Result<Vec<String>> {
    debug!("Fetching team list");
    let teams = get_json::<Vec<String>>(&api_url("/teams")).await?;
    debug!("Successfully fetched {} teams", teams.len());
    Ok(teams)
}

/// Requests analytics, visuals and top players for `team` concurrently.
/// Resolves only once all three have succeeded; the first failure wins otherwise.
pub async fn fetch_team_snapshot(team: &str) -> Result<TeamSnapshot> {
    debug!("Fetching snapshot for team: {}", team);

    join_snapshot(
        fetch_team_analytics(team),
        fetch_team_visuals(team),
        fetch_top_players(team),
    )
    .await
}

async fn join_snapshot(
    analytics: impl Future<Output = Result<TeamAnalytics>>,
    visuals: impl Future<Output = Result<TeamVisuals>>,
    top_players: impl Future<Output = Result<TopPlayersDto>>,
) -> Result<TeamSnapshot> {
    let (analytics, visuals, top_players) = futures::try_join!(analytics, visuals, top_players)?;

    Ok(TeamSnapshot {
        analytics,
        visuals,
        top_players,
    })
}
