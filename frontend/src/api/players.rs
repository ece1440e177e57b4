use crate::api::utils::{get_json, team_url};
use log::debug;
use shared::{Result, TopPlayersDto};

pub async fn fetch_top_players(team: &str) -> Result<TopPlayersDto> {
    let players = get_json::<TopPlayersDto>(&team_url("/top-players", team)).await?;
    debug!(
        "Received {} batsmen and {} bowlers for {}",
        players.top_batsmen.len(),
        players.top_bowlers.len(),
        team
    );
    Ok(players)
}
