use crate::api::utils::{get_json, team_url};
use log::debug;
use shared::{Result, TeamAnalytics, TeamVisuals};

pub async fn fetch_team_analytics(team: &str) -> Result<TeamAnalytics> {
    let analytics = get_json::<TeamAnalytics>(&team_url("/analytics", team)).await?;
    debug!("Received {} analytics entries for {}", analytics.len(), team);
    Ok(analytics)
}

/// Chart payloads come back still base64-encoded.
pub async fn fetch_team_visuals(team: &str) -> Result<TeamVisuals> {
    let visuals = get_json::<TeamVisuals>(&team_url("/visuals", team)).await?;
    debug!("Received {} charts for {}", visuals.charts().len(), team);
    Ok(visuals)
}
