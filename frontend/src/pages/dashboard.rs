use crate::api::{fetch_team_snapshot, fetch_teams};
use crate::components::footer::Footer;
use crate::components::leaderboard::LeaderboardCards;
use crate::components::logo_grid::{LogoTile, TeamLogoGrid};
use crate::components::search_bar::SearchBar;
use crate::components::stats_cards::StatsCards;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::visual_gallery::VisualGallery;
use crate::state::{DashboardAction, DashboardState};
use log::{debug, error, info};
use shared::ALL_TEAMS;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let state = use_reducer_eq(DashboardState::default);

    // Team list, once. The default selection kicks off the first fetch triple.
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(DashboardAction::SelectTeam(ALL_TEAMS.to_string()));
            spawn_local(async move {
                match fetch_teams().await {
                    Ok(teams) => dispatcher.dispatch(DashboardAction::TeamsLoaded(teams)),
                    Err(e) => error!("Failed to load team list: {}", e),
                }
            });
            || ()
        });
    }

    // Fetch triple for every accepted selection.
    {
        let dispatcher = state.dispatcher();
        let team = state.selected_team.clone();
        use_effect_with(state.request_token, move |token| {
            let token = *token;
            if token > 0 {
                spawn_local(async move {
                    match fetch_team_snapshot(&team).await {
                        Ok(snapshot) => {
                            info!("Loaded data for {}", team);
                            dispatcher.dispatch(DashboardAction::SnapshotLoaded { token, snapshot });
                        }
                        Err(e) => {
                            error!("Error loading data for {}: {}", team, e);
                            dispatcher.dispatch(DashboardAction::SnapshotFailed { token, error: e });
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_toggle_theme = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::ToggleTheme))
    };

    let on_search = {
        let dispatcher = state.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(DashboardAction::Search(value)))
    };

    let on_select = {
        let dispatcher = state.dispatcher();
        Callback::from(move |team: String| dispatcher.dispatch(DashboardAction::SelectTeam(team)))
    };

    let on_logo_error = {
        let dispatcher = state.dispatcher();
        Callback::from(move |team: String| dispatcher.dispatch(DashboardAction::LogoFailed(team)))
    };

    let tiles: Vec<LogoTile> = state
        .filtered_teams
        .iter()
        .map(|team| LogoTile {
            team: team.clone(),
            src: state.logo_src(team),
            fallback: state.fallback_logos.contains(team),
        })
        .collect();

    debug!(
        "Dashboard rendering: team={} phase={:?}",
        state.selected_team, state.phase
    );

    html! {
        <div class={classes!("App", state.theme.class())}>
            <h1 class="title">{"🏏 IPL Team Analytics Dashboard"}</h1>

            <ThemeToggle theme={state.theme} on_toggle={on_toggle_theme} />

            <SearchBar value={state.search.clone()} {on_search} />

            <TeamLogoGrid
                {tiles}
                selected={state.selected_team.clone()}
                {on_select}
                {on_logo_error}
            />

            if state.is_loading() {
                <p class="loading">{"Loading data..."}</p>
            } else {
                <StatsCards stats={state.analytics.clone()} />

                <div class="players-section">
                    <LeaderboardCards
                        title="Top Batsmen"
                        entries={state.top_players.batting_leaderboard()}
                    />
                    <LeaderboardCards
                        title="Top Bowlers"
                        entries={state.top_players.bowling_leaderboard()}
                        class={classes!("spaced")}
                    />
                </div>

                if !state.visuals.is_empty() {
                    <VisualGallery visuals={state.visuals.clone()} />
                }
            }

            <Footer />
        </div>
    }
}
