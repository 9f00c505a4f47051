use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// Lifecycle state of a fixture as reported by the upstream provider.
///
/// Unknown wire values are preserved verbatim rather than rejected, so a new
/// upstream status degrades to a literal label instead of a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumString, strum_macros::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(from = "String", into = "String")]
pub enum MatchStatus {
    Scheduled,
    Timed,
    InPlay,
    Paused,
    Finished,
    Postponed,
    #[strum(default)]
    Unknown(String),
}

impl MatchStatus {
    /// True for fixtures that have not kicked off yet.
    pub fn is_upcoming(&self) -> bool {
        matches!(self, MatchStatus::Scheduled | MatchStatus::Timed)
    }
}

impl From<String> for MatchStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(MatchStatus::Unknown(s))
    }
}

impl From<MatchStatus> for String {
    fn from(status: MatchStatus) -> Self {
        status.to_string()
    }
}

/// A competition (league or cup) a fixture belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// One of the two sides of a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub crest: String,
}

impl Team {
    /// The name shown on cards: the short name when the provider has one.
    pub fn display_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }
}

/// Full-time score; both sides absent until the match has started.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScorePair {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(default)]
    pub full_time: ScorePair,
}

/// A scheduled or played match between two teams, as supplied upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: u64,
    pub status: MatchStatus,
    pub utc_date: DateTime<Utc>,
    pub competition: Competition,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub score: Score,
}

impl Fixture {
    /// True when the given team plays on either side of this fixture.
    pub fn involves(&self, team_id: u64) -> bool {
        self.home_team.id == team_id || self.away_team.id == team_id
    }
}
