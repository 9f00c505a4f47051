use serde_json::json;
use tracing::instrument;

use crate::api::Backend;
use crate::error::Result;
use crate::model::{FavoriteTeam, PublicProfile, Session, UserDetails};

#[instrument(skip(backend, password))]
pub(crate) async fn login(
    backend: &Backend<'_>,
    username: &str,
    password: &str,
) -> Result<Session> {
    backend
        .post_json(
            "/users/login/",
            &json!({ "username": username, "password": password }),
        )
        .await
}

#[instrument(skip(backend, password))]
pub(crate) async fn register(
    backend: &Backend<'_>,
    username: &str,
    email: &str,
    password: &str,
) -> Result<Session> {
    backend
        .post_json(
            "/users/register/",
            &json!({ "username": username, "email": email, "password": password }),
        )
        .await
}

#[instrument(skip(backend))]
pub(crate) async fn get_details(backend: &Backend<'_>) -> Result<UserDetails> {
    backend.get_json("/users/details/").await
}

#[instrument(skip(backend))]
pub(crate) async fn get_public_profile(
    backend: &Backend<'_>,
    username: &str,
) -> Result<PublicProfile> {
    backend.get_json(&format!("/users/profile/{username}/")).await
}

#[instrument(skip(backend))]
pub(crate) async fn get_favorite_team(backend: &Backend<'_>) -> Result<FavoriteTeam> {
    backend.get_json("/users/favorite-team/").await
}

#[instrument(skip(backend))]
pub(crate) async fn put_favorite_team(
    backend: &Backend<'_>,
    favorite: &FavoriteTeam,
) -> Result<FavoriteTeam> {
    backend.put_json("/users/favorite-team/", favorite).await
}
