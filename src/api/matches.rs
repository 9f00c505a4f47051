use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api::Backend;
use crate::error::Result;
use crate::model::{Fixture, StandingRow};

#[derive(Debug, Deserialize)]
struct FixturesEnvelope {
    matches: Vec<Fixture>,
}

#[derive(Debug, Deserialize)]
struct StandingsEnvelope {
    standings: Vec<StandingGroup>,
}

#[derive(Debug, Deserialize)]
struct StandingGroup {
    table: Vec<StandingRow>,
}

#[derive(Debug, Deserialize)]
struct SourceEnvelope {
    source: String,
}

#[instrument(skip(backend))]
pub(crate) async fn get_live(backend: &Backend<'_>) -> Result<Vec<Fixture>> {
    let envelope: FixturesEnvelope = backend.get_json("/matches/live/").await?;
    debug!(count = envelope.matches.len(), "fetched live match list");
    Ok(envelope.matches)
}

#[instrument(skip(backend))]
pub(crate) async fn get_standings(
    backend: &Backend<'_>,
    competition_id: u32,
) -> Result<Vec<StandingRow>> {
    let envelope: StandingsEnvelope = backend
        .get_json(&format!("/matches/standings/{competition_id}/"))
        .await?;
    // Only the first standing carries the overall table.
    let table = envelope
        .standings
        .into_iter()
        .next()
        .map(|group| group.table)
        .unwrap_or_default();
    debug!(rows = table.len(), competition_id, "fetched standings");
    Ok(table)
}

#[instrument(skip(backend))]
pub(crate) async fn get_fixture(backend: &Backend<'_>, match_id: u64) -> Result<Fixture> {
    backend.get_json(&format!("/matches/match/{match_id}/")).await
}

#[instrument(skip(backend))]
pub(crate) async fn get_team_fixtures(backend: &Backend<'_>, team_id: u64) -> Result<Vec<Fixture>> {
    let envelope: FixturesEnvelope = backend
        .get_json(&format!("/matches/team/{team_id}/"))
        .await?;
    debug!(count = envelope.matches.len(), team_id, "fetched team fixtures");
    Ok(envelope.matches)
}

/// Fetch a third-party page's HTML through the backend proxy.
#[instrument(skip(backend))]
pub(crate) async fn fetch_source(backend: &Backend<'_>, target_url: &str) -> Result<String> {
    let envelope: SourceEnvelope = backend
        .get_json_query("/matches/fetch-source/", &[("url", target_url)])
        .await?;
    Ok(envelope.source)
}
