use log::{debug, warn};
use shared::{
    fallback_logo_path, filter_teams, logo_path, SharedError, TeamAnalytics, TeamSnapshot,
    TeamVisuals, TopPlayersDto, ALL_TEAMS,
};
use std::collections::HashSet;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Extra class on the application root.
    pub fn class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark-mode",
        }
    }

    /// Modifier for the toggle button itself; never the root `dark-mode` class.
    pub fn button_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "on-dark",
        }
    }

    /// The toggle offers the theme you would switch to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark Mode",
            Theme::Dark => "☀️ Light Mode",
        }
    }
}

/// Where the per-team fetch triple currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(SharedError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub teams: Vec<String>,
    pub filtered_teams: Vec<String>,
    pub search: String,
    pub selected_team: String,
    /// Bumped on every accepted selection; completions carrying an older
    /// token are dropped.
    pub request_token: u64,
    pub phase: LoadPhase,
    pub analytics: TeamAnalytics,
    pub visuals: TeamVisuals,
    pub top_players: TopPlayersDto,
    pub theme: Theme,
    pub fallback_logos: HashSet<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            teams: Vec::new(),
            filtered_teams: Vec::new(),
            search: String::new(),
            selected_team: ALL_TEAMS.to_string(),
            request_token: 0,
            phase: LoadPhase::Idle,
            analytics: TeamAnalytics::default(),
            visuals: TeamVisuals::default(),
            top_players: TopPlayersDto::default(),
            theme: Theme::default(),
            fallback_logos: HashSet::new(),
        }
    }
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_selected(&self, team: &str) -> bool {
        self.selected_team == team
    }

    pub fn logo_src(&self, team: &str) -> String {
        if self.fallback_logos.contains(team) {
            fallback_logo_path()
        } else {
            logo_path(team)
        }
    }
}

#[derive(Clone, Debug)]
pub enum DashboardAction {
    TeamsLoaded(Vec<String>),
    Search(String),
    SelectTeam(String),
    SnapshotLoaded { token: u64, snapshot: TeamSnapshot },
    SnapshotFailed { token: u64, error: SharedError },
    ToggleTheme,
    LogoFailed(String),
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DashboardAction::TeamsLoaded(teams) => {
                let filtered_teams = filter_teams(&teams, &self.search);
                Rc::new(Self {
                    teams,
                    filtered_teams,
                    ..(*self).clone()
                })
            }
            DashboardAction::Search(input) => {
                let search = input.to_lowercase();
                let filtered_teams = filter_teams(&self.teams, &search);
                Rc::new(Self {
                    search,
                    filtered_teams,
                    ..(*self).clone()
                })
            }
            DashboardAction::SelectTeam(team) => {
                if self.phase != LoadPhase::Idle && self.selected_team == team {
                    return self;
                }
                debug!("Selecting team: {}", team);
                Rc::new(Self {
                    selected_team: team,
                    request_token: self.request_token + 1,
                    phase: LoadPhase::Loading,
                    ..(*self).clone()
                })
            }
            DashboardAction::SnapshotLoaded { token, snapshot } => {
                if token != self.request_token {
                    debug!(
                        "Discarding snapshot for superseded request {} (current {})",
                        token, self.request_token
                    );
                    return self;
                }
                let TeamSnapshot {
                    analytics,
                    visuals,
                    top_players,
                } = snapshot;
                Rc::new(Self {
                    analytics,
                    visuals,
                    top_players,
                    phase: LoadPhase::Loaded,
                    ..(*self).clone()
                })
            }
            DashboardAction::SnapshotFailed { token, error } => {
                if token != self.request_token {
                    debug!("Ignoring failure of superseded request {}", token);
                    return self;
                }
                // Previous data stays on screen.
                Rc::new(Self {
                    phase: LoadPhase::Failed(error),
                    ..(*self).clone()
                })
            }
            DashboardAction::ToggleTheme => Rc::new(Self {
                theme: self.theme.toggled(),
                ..(*self).clone()
            }),
            DashboardAction::LogoFailed(team) => {
                if self.fallback_logos.contains(&team) {
                    return self;
                }
                warn!("Logo missing for {}, using fallback", team);
                let mut fallback_logos = self.fallback_logos.clone();
                fallback_logos.insert(team);
                Rc::new(Self {
                    fallback_logos,
                    ..(*self).clone()
                })
            }
        }
    }
}
