pub mod footer;
pub mod leaderboard;
pub mod logo_grid;
pub mod search_bar;
pub mod stats_cards;
pub mod team_buttons;
pub mod theme_toggle;
pub mod visual_gallery;
