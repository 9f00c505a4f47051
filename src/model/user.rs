use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token response returned by the login and register endpoints.
///
/// Registration only returns the token; login also carries the user identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Details of the authenticated account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetails {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// The authenticated user's favorite-team selection.
///
/// All fields are null together (no team picked) or set together. Clearing
/// the selection is done by PUTting the all-null payload, never by a delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoriteTeam {
    pub favorite_team_id: Option<u64>,
    pub favorite_team_name: Option<String>,
    pub favorite_team_crest: Option<String>,
    pub favorite_team_league: Option<String>,
    pub favorite_team_country: Option<String>,
}

impl FavoriteTeam {
    /// Whether a team is currently selected.
    pub fn is_set(&self) -> bool {
        self.favorite_team_id.is_some()
    }

    /// The all-null payload that clears the selection.
    pub fn cleared() -> Self {
        Self::default()
    }
}

/// Favorite team as embedded in a public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileTeam {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub crest: Option<String>,
}

/// Another user's public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicProfile {
    pub username: String,
    #[serde(default)]
    pub join_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub favorite_team: Option<ProfileTeam>,
    #[serde(default)]
    pub favorite_team_league: Option<String>,
    #[serde(default)]
    pub favorite_team_country: Option<String>,
}
