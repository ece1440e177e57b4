use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatsmanDto {
    pub name: String,
    pub runs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BowlerRecord")]
pub struct BowlerDto {
    pub name: String,
    pub wickets: u64,
}

/// The two record shapes `/top-players` emits for a bowler. Older pandas
/// yields `{name, wickets}`; pandas >= 2 leaves the bowler's name under
/// `wickets` and the tally under `count`.
#[derive(Deserialize)]
#[serde(untagged)]
enum BowlerRecord {
    Named { name: String, wickets: u64 },
    Counted { wickets: String, count: u64 },
}

impl From<BowlerRecord> for BowlerDto {
    fn from(record: BowlerRecord) -> Self {
        match record {
            BowlerRecord::Named { name, wickets } => Self { name, wickets },
            BowlerRecord::Counted { wickets, count } => Self {
                name: wickets,
                wickets: count,
            },
        }
    }
}

/// Response of `/top-players`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopPlayersDto {
    #[serde(default)]
    pub top_batsmen: Vec<BatsmanDto>,
    #[serde(default)]
    pub top_bowlers: Vec<BowlerDto>,
}

/// A named count shown as one leaderboard card, e.g. "500 Runs".
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub value: u64,
    pub unit: &'static str,
}

impl LeaderboardEntry {
    pub fn caption(&self) -> String {
        format!("{} {}", self.value, self.unit)
    }
}

impl From<&BatsmanDto> for LeaderboardEntry {
    fn from(batsman: &BatsmanDto) -> Self {
        Self {
            name: batsman.name.clone(),
            value: batsman.runs,
            unit: "Runs",
        }
    }
}

impl From<&BowlerDto> for LeaderboardEntry {
    fn from(bowler: &BowlerDto) -> Self {
        Self {
            name: bowler.name.clone(),
            value: bowler.wickets,
            unit: "Wickets",
        }
    }
}

impl TopPlayersDto {
    pub fn batting_leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.top_batsmen.iter().map(LeaderboardEntry::from).collect()
    }

    pub fn bowling_leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.top_bowlers.iter().map(LeaderboardEntry::from).collect()
    }
}
