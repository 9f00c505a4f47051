//! Best-effort stream locator: fuzzy-matches a fixture against a scraped
//! third-party schedule page. The page format is not under our control, so
//! every miss or parse hiccup is a silent `None`, never an error.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Europe::Sofia;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

/// The schedule page the locator is pointed at (fetched through the backend
/// CORS proxy).
pub const SCHEDULE_URL: &str = "https://techcabal.net/schedule/soccerstreams/";

const CLIP_URL_PREFIX: &str = "https://techcabal.net/clip/s";

/// Stream hrefs are year-scoped: `/<year>/s<id>/...`.
const STREAM_HREF_PATTERN: &str = r"/\d{4}/s(\d+)/";

/// Locate a playback URL for a fixture inside the schedule page source.
///
/// Scans the first table for a row whose time cell equals the kickoff minus
/// one hour (Sofia local, `HH:MM`) and whose fixture cell contains the first
/// three letters of both team names. The first such row's link yields the
/// stream id.
pub fn locate_stream(
    source: &str,
    home_team: &str,
    away_team: &str,
    kickoff: DateTime<Utc>,
) -> Option<String> {
    let document = Html::parse_document(source);
    let table_selector = Selector::parse("table").ok()?;
    let row_selector = Selector::parse("tr").ok()?;
    let cell_selector = Selector::parse("td").ok()?;
    let link_selector = Selector::parse("a").ok()?;
    let href_pattern = Regex::new(STREAM_HREF_PATTERN).ok()?;

    let target_time = (kickoff - Duration::hours(1))
        .with_timezone(&Sofia)
        .format("%H:%M")
        .to_string();
    let home = name_prefix(home_team);
    let away = name_prefix(away_team);

    let table = document.select(&table_selector).next()?;
    for row in table.select(&row_selector) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        if cells.len() < 3 {
            continue;
        }
        let Some(link) = cells[2].select(&link_selector).next() else {
            continue;
        };

        let time_text = cells[1].text().collect::<String>().trim().to_string();
        if time_text != target_time {
            continue;
        }
        let fixture_text = cells[2].text().collect::<String>().to_lowercase();
        if !(fixture_text.contains(&home) && fixture_text.contains(&away)) {
            continue;
        }

        // First row matching time and both names decides the outcome, even
        // when its link carries no usable id.
        let stream_id = href_pattern
            .captures(link.value().attr("href")?)?
            .get(1)?
            .as_str();
        debug!(stream_id, "located stream for fixture");
        return Some(format!("{CLIP_URL_PREFIX}{stream_id}.html"));
    }

    None
}

fn name_prefix(name: &str) -> String {
    name.to_lowercase().chars().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Kickoff 2026-08-30 19:00 UTC; minus one hour is 18:00 UTC, which is
    // 21:00 in Sofia (UTC+3 in summer).
    const KICKOFF: &str = "2026-08-30T19:00:00Z";

    fn page(rows: &str) -> String {
        format!("<html><body><table><tbody>{rows}</tbody></table></body></html>")
    }

    fn kickoff() -> DateTime<Utc> {
        KICKOFF.parse().unwrap()
    }

    #[test]
    fn finds_the_matching_row() {
        let source = page(concat!(
            "<tr><td>Soccer</td><td>20:00</td>",
            "<td><a href=\"/2026/s111/arsenal-vs-spurs/\">Arsenal vs Spurs</a></td></tr>",
            "<tr><td>Soccer</td><td>21:00</td>",
            "<td><a href=\"/2026/s222/arsenal-vs-chelsea/\">Arsenal vs Chelsea</a></td></tr>",
        ));
        assert_eq!(
            locate_stream(&source, "Arsenal", "Chelsea", kickoff()),
            Some("https://techcabal.net/clip/s222.html".to_string())
        );
    }

    #[test]
    fn team_name_matching_is_case_insensitive_and_prefix_based() {
        let source = page(concat!(
            "<tr><td>Soccer</td><td>21:00</td>",
            "<td><a href=\"/2026/s333/live/\">ARSENAL - CHELSEA FC</a></td></tr>",
        ));
        assert_eq!(
            locate_stream(&source, "Arsenal FC", "Chelsea FC", kickoff()),
            Some("https://techcabal.net/clip/s333.html".to_string())
        );
    }

    #[test]
    fn wrong_time_is_a_miss() {
        let source = page(concat!(
            "<tr><td>Soccer</td><td>19:00</td>",
            "<td><a href=\"/2026/s444/live/\">Arsenal vs Chelsea</a></td></tr>",
        ));
        assert_eq!(locate_stream(&source, "Arsenal", "Chelsea", kickoff()), None);
    }

    #[test]
    fn missing_away_team_is_a_miss() {
        let source = page(concat!(
            "<tr><td>Soccer</td><td>21:00</td>",
            "<td><a href=\"/2026/s555/live/\">Arsenal vs Tottenham</a></td></tr>",
        ));
        assert_eq!(locate_stream(&source, "Arsenal", "Chelsea", kickoff()), None);
    }

    #[test]
    fn short_rows_and_rows_without_links_are_skipped() {
        let source = page(concat!(
            "<tr><td>Header</td></tr>",
            "<tr><td>Soccer</td><td>21:00</td><td>Arsenal vs Chelsea</td></tr>",
            "<tr><td>Soccer</td><td>21:00</td>",
            "<td><a href=\"/2026/s666/live/\">Arsenal vs Chelsea</a></td></tr>",
        ));
        assert_eq!(
            locate_stream(&source, "Arsenal", "Chelsea", kickoff()),
            Some("https://techcabal.net/clip/s666.html".to_string())
        );
    }

    #[test]
    fn href_without_stream_id_is_a_miss() {
        let source = page(concat!(
            "<tr><td>Soccer</td><td>21:00</td>",
            "<td><a href=\"/schedule/other/\">Arsenal vs Chelsea</a></td></tr>",
        ));
        assert_eq!(locate_stream(&source, "Arsenal", "Chelsea", kickoff()), None);
    }

    #[test]
    fn page_without_tables_is_a_miss() {
        assert_eq!(
            locate_stream("<html><body><p>gone</p></body></html>", "A", "B", kickoff()),
            None
        );
    }
}
