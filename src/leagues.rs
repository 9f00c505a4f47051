//! Static competition configuration: the leagues the live list covers and
//! the order their groups render in.

/// A competition known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct League {
    pub id: u32,
    pub name: &'static str,
    pub country: &'static str,
}

pub const PREMIER_LEAGUE: League = League {
    id: 2021,
    name: "Premier League",
    country: "England",
};
pub const LA_LIGA: League = League {
    id: 2014,
    name: "La Liga",
    country: "Spain",
};
pub const BUNDESLIGA: League = League {
    id: 2002,
    name: "Bundesliga",
    country: "Germany",
};
pub const SERIE_A: League = League {
    id: 2019,
    name: "Serie A",
    country: "Italy",
};
pub const LIGUE_1: League = League {
    id: 2015,
    name: "Ligue 1",
    country: "France",
};
pub const CHAMPIONS_LEAGUE: League = League {
    id: 2001,
    name: "UEFA Champions League",
    country: "Europe",
};
pub const EUROPA_LEAGUE: League = League {
    id: 2146,
    name: "UEFA Europa League",
    country: "Europe",
};

/// The competitions the live match list is restricted to.
pub const TOP_LEAGUES: [League; 7] = [
    CHAMPIONS_LEAGUE,
    EUROPA_LEAGUE,
    PREMIER_LEAGUE,
    LA_LIGA,
    BUNDESLIGA,
    SERIE_A,
    LIGUE_1,
];

/// The five national leagues, the corpus the favorite-team search draws
/// candidates from.
pub const DOMESTIC_LEAGUES: [League; 5] = [PREMIER_LEAGUE, LA_LIGA, BUNDESLIGA, SERIE_A, LIGUE_1];

/// Display order for league groups in the assembled match list. Domestic
/// leagues lead, European cups trail; unknown competitions go after all of
/// these.
pub const LEAGUE_PRIORITY: [u32; 7] = [2021, 2014, 2002, 2019, 2015, 2001, 2146];

/// Whether a competition is one of the covered top leagues.
pub fn is_top_league(competition_id: u32) -> bool {
    TOP_LEAGUES.iter().any(|league| league.id == competition_id)
}

/// Look up a covered league by its competition id.
pub fn league_by_id(competition_id: u32) -> Option<&'static League> {
    TOP_LEAGUES.iter().find(|league| league.id == competition_id)
}
