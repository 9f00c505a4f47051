use serde::{Deserialize, Serialize};

use super::Team;

/// One row of a competition's league table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub position: u32,
    pub team: Team,
    pub played_games: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub points: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
}
