pub use assemble::{assemble, find_team_fixture, next_upcoming, RenderEntry};
pub use cache::{MatchCache, CACHE_TTL_SECS};
pub use client::PitchsideClient;
pub use error::{PitchsideError, Result};
pub use format::{
    format_league_name, kickoff_label, show_score, status_color, status_label, StatusColor,
};
pub use search::{filter_teams, TeamCandidate};
pub use stream::locate_stream;

mod api;
pub mod assemble;
pub mod cache;
pub mod client;
pub mod error;
pub mod format;
pub mod leagues;
pub mod model;
pub mod search;
pub mod stream;
