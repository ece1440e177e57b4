//! Renders components to HTML with Yew's server renderer and checks the markup.

use futures::executor::block_on;
use ipl_dashboard::components::leaderboard::LeaderboardCards;
use ipl_dashboard::components::logo_grid::{LogoTile, TeamLogoGrid};
use ipl_dashboard::components::stats_cards::StatsCards;
use ipl_dashboard::components::team_buttons::TeamButtons;
use ipl_dashboard::components::theme_toggle::ThemeToggle;
use ipl_dashboard::components::visual_gallery::VisualGallery;
use ipl_dashboard::pages::dashboard::Dashboard;
use ipl_dashboard::state::Theme;
use pretty_assertions::assert_eq;
use shared::{LeaderboardEntry, TeamAnalytics, TeamVisuals, TopPlayersDto};
use yew::prelude::*;
use yew::ServerRenderer;

fn render<C>() -> String
where
    C: BaseComponent,
    C::Properties: Default + Send,
{
    block_on(ServerRenderer::<C>::new().hydratable(false).render())
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("`{}` not found in {}", needle, html))
}

#[function_component(StatsHarness)]
fn stats_harness() -> Html {
    let stats: TeamAnalytics =
        serde_json::from_str(r#"{"Matches Won": 10, "Win %": "62.5"}"#).unwrap();
    html! { <StatsCards {stats} /> }
}

#[function_component(EmptyStatsHarness)]
fn empty_stats_harness() -> Html {
    html! { <StatsCards stats={TeamAnalytics::default()} /> }
}

#[function_component(PlayersHarness)]
fn players_harness() -> Html {
    let players: TopPlayersDto = serde_json::from_str(
        r#"{"top_batsmen": [{"name": "A", "runs": 500}], "top_bowlers": [{"name": "B", "wickets": 20}]}"#,
    )
    .unwrap();
    html! {
        <>
            <LeaderboardCards title="Top Batsmen" entries={players.batting_leaderboard()} />
            <LeaderboardCards title="Top Bowlers" entries={players.bowling_leaderboard()} />
        </>
    }
}

#[function_component(EmptyLeaderboardHarness)]
fn empty_leaderboard_harness() -> Html {
    html! { <LeaderboardCards title="Top Bowlers" entries={Vec::<LeaderboardEntry>::new()} /> }
}

#[function_component(VisualsHarness)]
fn visuals_harness() -> Html {
    let visuals = TeamVisuals::from_pairs([("runs_histogram", "QUJD"), ("extras_count", "REVG")]);
    html! { <VisualGallery {visuals} /> }
}

#[function_component(ButtonsHarness)]
fn buttons_harness() -> Html {
    let teams = vec![
        "All Teams".to_string(),
        "Delhi Capitals".to_string(),
        "Rajasthan Royals".to_string(),
    ];
    html! { <TeamButtons {teams} on_select={Callback::noop()} /> }
}

#[function_component(DarkToggleHarness)]
fn dark_toggle_harness() -> Html {
    html! { <ThemeToggle theme={Theme::Dark} on_toggle={Callback::noop()} /> }
}

#[function_component(LogoGridHarness)]
fn logo_grid_harness() -> Html {
    let tiles = vec![
        LogoTile {
            team: "Mumbai Indians".to_string(),
            src: "/logos/Mumbai_Indians.png".to_string(),
            fallback: false,
        },
        LogoTile {
            team: "Deccan Chargers".to_string(),
            src: "/logos/All_Teams.png".to_string(),
            fallback: true,
        },
    ];
    html! {
        <TeamLogoGrid
            {tiles}
            selected="Mumbai Indians"
            on_select={Callback::noop()}
            on_logo_error={Callback::noop()}
        />
    }
}

#[test]
fn test_stats_cards_render_in_input_order() {
    let html = render::<StatsHarness>();

    assert_eq!(html.matches(r#"class="card""#).count(), 2);
    assert!(html.contains("<h3>Matches Won</h3><p>10</p>"));
    assert!(html.contains("<h3>Win %</h3><p>62.5</p>"));
    assert!(position(&html, "Matches Won") < position(&html, "Win %"));
}

#[test]
fn test_empty_stats_render_no_cards() {
    let html = render::<EmptyStatsHarness>();
    assert!(html.contains(r#"<div class="stats-cards"></div>"#));
}

#[test]
fn test_leaderboards_show_runs_and_wickets() {
    let html = render::<PlayersHarness>();

    assert_eq!(html.matches(r#"class="stat-card""#).count(), 2);
    assert!(html.contains("<strong>A</strong><p>500 Runs</p>"));
    assert!(html.contains("<strong>B</strong><p>20 Wickets</p>"));
    assert!(position(&html, "Top Batsmen") < position(&html, "Top Bowlers"));
}

#[test]
fn test_empty_leaderboard_has_heading_only() {
    let html = render::<EmptyLeaderboardHarness>();
    assert!(html.contains("<h2>Top Bowlers</h2>"));
    assert!(!html.contains("stat-card"));
}

#[test]
fn test_visual_gallery_embeds_payloads() {
    let html = render::<VisualsHarness>();

    assert!(html.contains("<h3>RUNS HISTOGRAM</h3>"));
    assert!(html.contains(r#"src="data:image/png;base64,QUJD""#));
    assert!(position(&html, "RUNS HISTOGRAM") < position(&html, "EXTRAS COUNT"));
}

#[test]
fn test_team_buttons_one_per_team() {
    let html = render::<ButtonsHarness>();

    assert_eq!(html.matches(r#"class="team-button""#).count(), 3);
    assert!(position(&html, "Delhi Capitals") < position(&html, "Rajasthan Royals"));
}

#[test]
fn test_dark_theme_toggle_keeps_root_class_off_button() {
    let html = render::<DarkToggleHarness>();

    assert!(html.contains(r#"class="theme-button on-dark""#));
    assert!(html.contains("☀️ Light Mode"));
    assert!(!html.contains("dark-mode"));
}

#[test]
fn test_logo_grid_marks_selection_and_fallback() {
    let html = render::<LogoGridHarness>();

    assert_eq!(html.matches(r#"class="logo-card active""#).count(), 1);
    assert_eq!(html.matches(r#"class="logo-card""#).count(), 1);
    assert!(html.contains(r#"src="/logos/Mumbai_Indians.png""#));
    assert!(html.contains(r#"src="/logos/All_Teams.png""#));
    assert!(html.contains("<p>Deccan Chargers</p>"));
}

#[test]
fn test_dashboard_initial_render() {
    let html = render::<Dashboard>();

    assert!(html.contains("IPL Team Analytics Dashboard"));
    assert!(html.contains("🌙 Dark Mode"));
    assert!(html.contains(r#"placeholder="Search team...""#));
    assert!(html.contains("Top Batsmen"));
    assert!(!html.contains("Loading data..."));
    assert!(!html.contains("Team Visualizations"));
    assert!(!html.contains("dark-mode"));
}
