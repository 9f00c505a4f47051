//! Match status formatting: pure functions from `(status, kickoff, now)` to
//! the labels and color classes shown on match cards.
//!
//! Kickoff times always render in the Europe/Sofia timezone, 24-hour clock.
//! Nothing here schedules anything; callers re-evaluate on their own timer
//! with a fresh `now`.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Europe::Sofia;

use crate::model::MatchStatus;

/// Color class attached to a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    /// Match in play.
    Live,
    /// Halftime break.
    Accent,
    /// Full time.
    Dim,
    /// Everything else, including upcoming fixtures.
    Neutral,
}

impl StatusColor {
    /// The CSS class string for this color.
    pub fn class(self) -> &'static str {
        match self {
            StatusColor::Live => "bg-live-500 text-white",
            StatusColor::Accent => "bg-purple-600 text-white",
            StatusColor::Dim => "bg-dark-400 text-gray-300",
            StatusColor::Neutral => "bg-dark-300 text-gray-400",
        }
    }
}

/// Color for a status badge.
pub fn status_color(status: &MatchStatus) -> StatusColor {
    match status {
        MatchStatus::InPlay => StatusColor::Live,
        MatchStatus::Paused => StatusColor::Accent,
        MatchStatus::Finished => StatusColor::Dim,
        _ => StatusColor::Neutral,
    }
}

/// Display label for a fixture's status at the evaluation instant `now`.
///
/// In-play fixtures get an approximate match clock: the first 45 elapsed
/// minutes read directly, 45-60 reads as halftime, and from minute 60 a flat
/// 15-minute break is subtracted to produce a continuous second-half clock,
/// capped at `90+`. Upcoming fixtures get a kickoff label instead; statuses
/// with no dedicated arm (Postponed included) render as their literal name.
pub fn status_label(status: &MatchStatus, kickoff: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match status {
        MatchStatus::InPlay => {
            let elapsed = (now - kickoff).num_minutes().max(0);
            if elapsed <= 45 {
                format!("{elapsed}'")
            } else if elapsed < 60 {
                "HT".to_string()
            } else if elapsed <= 105 {
                format!("{}'", elapsed - 15)
            } else {
                "90+".to_string()
            }
        }
        MatchStatus::Paused => "HT".to_string(),
        MatchStatus::Finished => "FT".to_string(),
        MatchStatus::Scheduled | MatchStatus::Timed => kickoff_label(kickoff, now),
        other => other.to_string(),
    }
}

/// Relative kickoff label in Sofia local time.
///
/// Same Sofia calendar date as `now` renders bare `HH:MM`, the next date
/// renders `Tomorrow, HH:MM`, anything else `D Mon, HH:MM`.
pub fn kickoff_label(kickoff: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let local = kickoff.with_timezone(&Sofia);
    let today = now.with_timezone(&Sofia).date_naive();
    let time = local.format("%H:%M");

    if local.date_naive() == today {
        time.to_string()
    } else if local.date_naive() == today + Duration::days(1) {
        format!("Tomorrow, {time}")
    } else {
        format!("{}, {time}", local.format("%-d %b"))
    }
}

/// Whether a card shows the score rather than a kickoff time: final whistle
/// has gone, or the fixture kicked off at least a day ago.
pub fn show_score(status: &MatchStatus, kickoff: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    *status == MatchStatus::Finished || kickoff <= now - Duration::days(1)
}

/// Upstream calls La Liga by its federation name; rewrite it for display.
pub fn format_league_name(name: &str) -> &str {
    if name == "Primera Division" {
        "La Liga"
    } else {
        name
    }
}
