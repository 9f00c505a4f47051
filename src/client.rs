use std::sync::{Mutex, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

use crate::api::{self, Backend};
use crate::assemble::{self, RenderEntry};
use crate::cache::MatchCache;
use crate::error::Result;
use crate::leagues::{self, LEAGUE_PRIORITY};
use crate::model::*;
use crate::search::{self, TeamCandidate};
use crate::stream;

/// The main entry point for talking to the companion backend.
///
/// `PitchsideClient` wraps a [`reqwest::Client`], the backend base URL, a
/// bearer-token slot filled by [`login`](Self::login), and the single-slot
/// live match list memo.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> pitchside::Result<()> {
/// use pitchside::PitchsideClient;
///
/// let client = PitchsideClient::new("https://api.example.com");
/// let fixtures = client.live_fixtures().await?;
/// println!("{} fixtures on today", fixtures.len());
/// # Ok(())
/// # }
/// ```
pub struct PitchsideClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
    cache: Mutex<MatchCache>,
}

impl PitchsideClient {
    /// Create a new client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            http: client,
            base_url: base_url.into(),
            token: RwLock::new(None),
            cache: Mutex::new(MatchCache::new()),
        }
    }

    /// Install a previously persisted auth token.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// The current auth token, for persisting across runs.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drop the auth token. Subsequent requests go out unauthenticated.
    pub fn logout(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn backend(&self) -> Backend<'_> {
        Backend {
            http: &self.http,
            base_url: &self.base_url,
            token: self.token(),
        }
    }

    /// Today's match list across the covered top leagues, postponed
    /// fixtures excluded.
    ///
    /// Served from the in-process memo while it is inside its 180-second
    /// window; otherwise fetched and re-memoized. The memo stores the raw
    /// payload, the league filter applies on every read.
    #[instrument(skip(self))]
    pub async fn live_fixtures(&self) -> Result<Vec<Fixture>> {
        self.live_fixtures_at(Utc::now()).await
    }

    async fn live_fixtures_at(&self, now: DateTime<Utc>) -> Result<Vec<Fixture>> {
        {
            let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = cache.get(now) {
                debug!(count = cached.len(), "serving match list from cache");
                return Ok(filter_top_flight(cached));
            }
        }

        let fixtures = api::matches::get_live(&self.backend()).await?;
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.set(fixtures.clone(), now);
        Ok(filter_top_flight(&fixtures))
    }

    /// The ordered render plan for the match list view: the favorite team's
    /// fixture pinned first (when one resolves), then league groups in
    /// priority order.
    ///
    /// When the favorite team is not in the live list, its next upcoming
    /// fixture is pinned instead; a failure of that fallback fetch degrades
    /// to no pin at all.
    #[instrument(skip(self))]
    pub async fn match_plan(&self, favorite_team_id: Option<u64>) -> Result<Vec<RenderEntry>> {
        let fixtures = self.live_fixtures().await?;
        let pinned = match favorite_team_id {
            Some(team_id) => self.resolve_pinned(&fixtures, team_id).await,
            None => None,
        };
        Ok(assemble::assemble(&fixtures, &LEAGUE_PRIORITY, pinned.as_ref()))
    }

    async fn resolve_pinned(&self, fixtures: &[Fixture], team_id: u64) -> Option<Fixture> {
        if let Some(found) = assemble::find_team_fixture(fixtures, team_id) {
            return Some(found.clone());
        }
        match api::matches::get_team_fixtures(&self.backend(), team_id).await {
            Ok(team_fixtures) => assemble::next_upcoming(&team_fixtures),
            Err(e) => {
                warn!(error = %e, team_id, "failed to fetch favorite team fixtures");
                None
            }
        }
    }

    /// League table for a competition.
    #[instrument(skip(self))]
    pub async fn standings(&self, competition_id: u32) -> Result<Vec<StandingRow>> {
        api::matches::get_standings(&self.backend(), competition_id).await
    }

    /// League table for the Premier League, the default standings view.
    #[instrument(skip(self))]
    pub async fn standings_default(&self) -> Result<Vec<StandingRow>> {
        self.standings(leagues::PREMIER_LEAGUE.id).await
    }

    /// Search the domestic leagues' standings for favorite-team candidates.
    ///
    /// Walks every league in [`leagues::DOMESTIC_LEAGUES`]; a league whose
    /// standings fetch fails is skipped, not fatal. Queries shorter than
    /// three characters return nothing without touching the network.
    #[instrument(skip(self))]
    pub async fn search_teams(&self, query: &str) -> Result<Vec<TeamCandidate>> {
        if query.trim().chars().count() < search::MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let mut candidates = Vec::new();
        for league in &leagues::DOMESTIC_LEAGUES {
            match self.standings(league.id).await {
                Ok(table) => candidates.extend(
                    table
                        .iter()
                        .map(|row| TeamCandidate::from_standing(row, league)),
                ),
                Err(e) => {
                    warn!(error = %e, league = league.name, "standings fetch failed during team search");
                }
            }
        }
        Ok(search::filter_teams(&candidates, query))
    }

    /// Full details for a single fixture.
    #[instrument(skip(self))]
    pub async fn fixture_detail(&self, match_id: u64) -> Result<Fixture> {
        api::matches::get_fixture(&self.backend(), match_id).await
    }

    /// All fixtures of a team, past and upcoming.
    #[instrument(skip(self))]
    pub async fn team_fixtures(&self, team_id: u64) -> Result<Vec<Fixture>> {
        api::matches::get_team_fixtures(&self.backend(), team_id).await
    }

    /// Try to locate a playback URL for a fixture on the schedule page.
    ///
    /// Best effort by design: fetch failures and non-matches both come back
    /// as `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn locate_stream(&self, fixture: &Fixture) -> Result<Option<String>> {
        let source = match api::matches::fetch_source(&self.backend(), stream::SCHEDULE_URL).await {
            Ok(source) => source,
            Err(e) => {
                debug!(error = %e, "schedule page fetch failed");
                return Ok(None);
            }
        };
        Ok(stream::locate_stream(
            &source,
            fixture.home_team.display_name(),
            fixture.away_team.display_name(),
            fixture.utc_date,
        ))
    }

    /// Log in and store the returned token on the client.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let session = api::users::login(&self.backend(), username, password).await?;
        self.set_token(session.token.clone());
        Ok(session)
    }

    /// Register a new account. The caller still logs in afterwards.
    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<Session> {
        api::users::register(&self.backend(), username, email, password).await
    }

    /// Details of the authenticated account.
    #[instrument(skip(self))]
    pub async fn user_details(&self) -> Result<UserDetails> {
        api::users::get_details(&self.backend()).await
    }

    /// Another user's public profile.
    #[instrument(skip(self))]
    pub async fn public_profile(&self, username: &str) -> Result<PublicProfile> {
        api::users::get_public_profile(&self.backend(), username).await
    }

    /// The authenticated user's favorite-team selection.
    #[instrument(skip(self))]
    pub async fn favorite_team(&self) -> Result<FavoriteTeam> {
        api::users::get_favorite_team(&self.backend()).await
    }

    /// Replace the favorite-team selection. Passing
    /// [`FavoriteTeam::cleared`] unsets it.
    #[instrument(skip(self, favorite))]
    pub async fn set_favorite_team(&self, favorite: &FavoriteTeam) -> Result<FavoriteTeam> {
        api::users::put_favorite_team(&self.backend(), favorite).await
    }

    /// Comments on a match, newest first.
    #[instrument(skip(self))]
    pub async fn comments(&self, match_id: u64) -> Result<Vec<Comment>> {
        api::comments::get_for_match(&self.backend(), match_id).await
    }

    /// Post a comment on a match. Requires a token; a 401/403 here means
    /// "re-authenticate to act", not that the session is dead.
    #[instrument(skip(self, content))]
    pub async fn post_comment(&self, match_id: u64, content: &str) -> Result<Comment> {
        api::comments::post(&self.backend(), match_id, content).await
    }

    /// Delete one of the authenticated user's comments.
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, comment_id: u64) -> Result<()> {
        api::comments::delete(&self.backend(), comment_id).await
    }

    /// All comments a user has made, for their profile view.
    #[instrument(skip(self))]
    pub async fn user_comments(&self, username: &str) -> Result<Vec<Comment>> {
        api::comments::get_for_user(&self.backend(), username).await
    }
}

fn filter_top_flight(fixtures: &[Fixture]) -> Vec<Fixture> {
    fixtures
        .iter()
        .filter(|fixture| {
            leagues::is_top_league(fixture.competition.id)
                && fixture.status != MatchStatus::Postponed
        })
        .cloned()
        .collect()
}
