mod comment;
mod fixture;
mod standings;
mod user;

pub use comment::*;
pub use fixture::*;
pub use standings::*;
pub use user::*;
