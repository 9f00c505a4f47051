//! Favorite-team search: candidates projected out of the domestic-league
//! standings tables, filtered by a case-insensitive substring query.

use serde::Serialize;

use crate::leagues::League;
use crate::model::{FavoriteTeam, StandingRow};

/// Queries shorter than this (after trimming) return no candidates.
pub const MIN_QUERY_LEN: usize = 3;

/// A team surfaced by the search, carrying the league context the standings
/// row itself does not have.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCandidate {
    pub id: u64,
    pub name: String,
    pub short_name: Option<String>,
    pub crest: String,
    pub league: &'static str,
    pub country: &'static str,
}

impl TeamCandidate {
    /// Project a standings row into a candidate for the given league.
    pub fn from_standing(row: &StandingRow, league: &League) -> Self {
        Self {
            id: row.team.id,
            name: row.team.name.clone(),
            short_name: row.team.short_name.clone(),
            crest: row.team.crest.clone(),
            league: league.name,
            country: league.country,
        }
    }

    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self
                .short_name
                .as_ref()
                .is_some_and(|name| name.to_lowercase().contains(query))
    }
}

/// The five-field selection payload for a picked candidate.
impl From<TeamCandidate> for FavoriteTeam {
    fn from(candidate: TeamCandidate) -> Self {
        FavoriteTeam {
            favorite_team_id: Some(candidate.id),
            favorite_team_name: Some(candidate.name),
            favorite_team_crest: Some(candidate.crest),
            favorite_team_league: Some(candidate.league.to_string()),
            favorite_team_country: Some(candidate.country.to_string()),
        }
    }
}

/// Filter candidates by a case-insensitive substring over name and short
/// name. Queries under [`MIN_QUERY_LEN`] characters match nothing.
pub fn filter_teams(teams: &[TeamCandidate], query: &str) -> Vec<TeamCandidate> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    teams
        .iter()
        .filter(|team| team.matches(&query))
        .cloned()
        .collect()
}
