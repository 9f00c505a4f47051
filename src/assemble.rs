//! Match list assembly: turns a flat live match list plus an optional pinned
//! favorite-team fixture into an ordered render plan.

use itertools::Itertools;

use crate::model::Fixture;

/// One entry of the assembled render plan.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEntry {
    /// The favorite team's fixture, pinned ahead of all league groups and
    /// carrying no league header of its own.
    Favorite(Fixture),
    /// Start of a league group.
    LeagueHeader { competition_id: u32 },
    /// A fixture inside the current league group.
    Entry(Fixture),
}

/// First fixture in which the given team plays, on either side.
pub fn find_team_fixture(fixtures: &[Fixture], team_id: u64) -> Option<&Fixture> {
    fixtures.iter().find(|fixture| fixture.involves(team_id))
}

/// The earliest upcoming fixture out of a team's fixture list.
///
/// This is the fallback pin when the favorite team is not in the live list:
/// callers fetch the team's fixtures and pin whatever this resolves.
pub fn next_upcoming(fixtures: &[Fixture]) -> Option<Fixture> {
    fixtures
        .iter()
        .filter(|fixture| fixture.status.is_upcoming())
        .sorted_by_key(|fixture| fixture.utc_date)
        .next()
        .cloned()
}

/// Assemble the render plan.
///
/// The pinned fixture (if any) comes first and is removed from its league's
/// bucket by id. The rest group by competition, emitted in `priority` order,
/// then any competition not in `priority` in the order it was first seen.
/// Every input fixture appears exactly once; the result is deterministic for
/// a fixed input.
pub fn assemble(fixtures: &[Fixture], priority: &[u32], pinned: Option<&Fixture>) -> Vec<RenderEntry> {
    // Vec of buckets rather than a map keeps first-seen order for the
    // unknown-competition tail.
    let mut buckets: Vec<(u32, Vec<&Fixture>)> = Vec::new();
    for fixture in fixtures {
        if pinned.is_some_and(|p| p.id == fixture.id) {
            continue;
        }
        match buckets
            .iter_mut()
            .find(|(id, _)| *id == fixture.competition.id)
        {
            Some((_, bucket)) => bucket.push(fixture),
            None => buckets.push((fixture.competition.id, vec![fixture])),
        }
    }

    let mut plan = Vec::new();
    if let Some(pinned) = pinned {
        plan.push(RenderEntry::Favorite(pinned.clone()));
    }

    fn emit(plan: &mut Vec<RenderEntry>, competition_id: u32, bucket: &[&Fixture]) {
        plan.push(RenderEntry::LeagueHeader { competition_id });
        plan.extend(bucket.iter().map(|f| RenderEntry::Entry((*f).clone())));
    }

    for &competition_id in priority {
        if let Some((_, bucket)) = buckets.iter().find(|(id, _)| *id == competition_id) {
            emit(&mut plan, competition_id, bucket);
        }
    }
    for (competition_id, bucket) in &buckets {
        if !priority.contains(competition_id) {
            emit(&mut plan, *competition_id, bucket);
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::model::{Competition, MatchStatus, Score, Team};

    fn team(id: u64, name: &str) -> Team {
        Team {
            id,
            name: name.to_string(),
            short_name: None,
            crest: String::new(),
        }
    }

    fn fixture(id: u64, competition_id: u32, home: u64, away: u64, status: MatchStatus) -> Fixture {
        Fixture {
            id,
            status,
            utc_date: "2026-03-15T18:00:00Z".parse().unwrap(),
            competition: Competition {
                id: competition_id,
                name: format!("Competition {competition_id}"),
                country: None,
            },
            home_team: team(home, "Home"),
            away_team: team(away, "Away"),
            score: Score::default(),
        }
    }

    fn fixture_at(id: u64, status: MatchStatus, utc_date: &str) -> Fixture {
        let mut f = fixture(id, 2021, 1, 2, status);
        f.utc_date = utc_date.parse::<DateTime<Utc>>().unwrap();
        f
    }

    fn plan_fixture_ids(plan: &[RenderEntry]) -> Vec<u64> {
        plan.iter()
            .filter_map(|entry| match entry {
                RenderEntry::Favorite(f) | RenderEntry::Entry(f) => Some(f.id),
                RenderEntry::LeagueHeader { .. } => None,
            })
            .collect()
    }

    fn sample() -> Vec<Fixture> {
        vec![
            fixture(1, 2019, 10, 11, MatchStatus::Timed),
            fixture(2, 2021, 12, 13, MatchStatus::InPlay),
            fixture(3, 2021, 14, 15, MatchStatus::Timed),
            fixture(4, 2014, 16, 17, MatchStatus::Finished),
        ]
    }

    #[test]
    fn groups_follow_priority_order() {
        let plan = assemble(&sample(), &[2021, 2014, 2019], None);
        assert_eq!(
            plan,
            vec![
                RenderEntry::LeagueHeader {
                    competition_id: 2021
                },
                RenderEntry::Entry(fixture(2, 2021, 12, 13, MatchStatus::InPlay)),
                RenderEntry::Entry(fixture(3, 2021, 14, 15, MatchStatus::Timed)),
                RenderEntry::LeagueHeader {
                    competition_id: 2014
                },
                RenderEntry::Entry(fixture(4, 2014, 16, 17, MatchStatus::Finished)),
                RenderEntry::LeagueHeader {
                    competition_id: 2019
                },
                RenderEntry::Entry(fixture(1, 2019, 10, 11, MatchStatus::Timed)),
            ]
        );
    }

    #[test]
    fn every_fixture_appears_exactly_once() {
        let fixtures = sample();
        let pinned = fixtures[1].clone();
        let plan = assemble(&fixtures, &crate::leagues::LEAGUE_PRIORITY, Some(&pinned));

        let mut ids = plan_fixture_ids(&plan);
        assert_eq!(ids.len(), fixtures.len());
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), fixtures.len());
    }

    #[test]
    fn assembly_is_idempotent() {
        let fixtures = sample();
        let pinned = fixtures[0].clone();
        let first = assemble(&fixtures, &crate::leagues::LEAGUE_PRIORITY, Some(&pinned));
        let second = assemble(&fixtures, &crate::leagues::LEAGUE_PRIORITY, Some(&pinned));
        assert_eq!(first, second);
    }

    #[test]
    fn pinned_fixture_leaves_its_bucket() {
        let fixtures = sample();
        let pinned = fixtures[1].clone(); // id 2, competition 2021
        let plan = assemble(&fixtures, &[2021, 2014, 2019], Some(&pinned));

        assert_eq!(plan[0], RenderEntry::Favorite(pinned.clone()));
        let later_ids: Vec<u64> = plan_fixture_ids(&plan[1..]);
        assert!(!later_ids.contains(&2));
        // Its league group still renders with the remaining fixture.
        assert!(plan.contains(&RenderEntry::LeagueHeader {
            competition_id: 2021
        }));
    }

    #[test]
    fn pinning_the_only_fixture_of_a_league_drops_the_header() {
        let fixtures = sample();
        let pinned = fixtures[3].clone(); // only fixture of 2014
        let plan = assemble(&fixtures, &[2021, 2014, 2019], Some(&pinned));
        assert!(!plan.contains(&RenderEntry::LeagueHeader {
            competition_id: 2014
        }));
    }

    #[test]
    fn unknown_competitions_trail_in_first_seen_order() {
        let fixtures = vec![
            fixture(1, 7777, 10, 11, MatchStatus::Timed),
            fixture(2, 2021, 12, 13, MatchStatus::Timed),
            fixture(3, 8888, 14, 15, MatchStatus::Timed),
            fixture(4, 7777, 16, 17, MatchStatus::Timed),
        ];
        let plan = assemble(&fixtures, &[2021], None);

        let headers: Vec<u32> = plan
            .iter()
            .filter_map(|entry| match entry {
                RenderEntry::LeagueHeader { competition_id } => Some(*competition_id),
                _ => None,
            })
            .collect();
        assert_eq!(headers, vec![2021, 7777, 8888]);
        assert_eq!(plan_fixture_ids(&plan), vec![2, 1, 4, 3]);
    }

    #[test]
    fn empty_input_yields_empty_plan() {
        assert!(assemble(&[], &crate::leagues::LEAGUE_PRIORITY, None).is_empty());
    }

    #[test]
    fn pinned_without_live_list_still_renders() {
        let pinned = fixture(9, 2021, 1, 2, MatchStatus::Timed);
        let plan = assemble(&[], &crate::leagues::LEAGUE_PRIORITY, Some(&pinned));
        assert_eq!(plan, vec![RenderEntry::Favorite(pinned)]);
    }

    #[test]
    fn finds_team_on_either_side() {
        let fixtures = sample();
        assert_eq!(find_team_fixture(&fixtures, 13).map(|f| f.id), Some(2));
        assert_eq!(find_team_fixture(&fixtures, 14).map(|f| f.id), Some(3));
        assert_eq!(find_team_fixture(&fixtures, 99), None);
    }

    #[test]
    fn next_upcoming_skips_played_fixtures_and_sorts() {
        let fixtures = vec![
            fixture_at(1, MatchStatus::Finished, "2026-03-10T18:00:00Z"),
            fixture_at(2, MatchStatus::Timed, "2026-03-22T18:00:00Z"),
            fixture_at(3, MatchStatus::Scheduled, "2026-03-18T18:00:00Z"),
            fixture_at(4, MatchStatus::InPlay, "2026-03-15T18:00:00Z"),
        ];
        assert_eq!(next_upcoming(&fixtures).map(|f| f.id), Some(3));
        assert_eq!(
            next_upcoming(&[fixture_at(1, MatchStatus::Finished, "2026-03-10T18:00:00Z")]),
            None
        );
    }
}
