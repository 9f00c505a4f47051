use serde_json::json;
use tracing::{debug, instrument};

use crate::api::Backend;
use crate::error::Result;
use crate::model::Comment;

#[instrument(skip(backend))]
pub(crate) async fn get_for_match(backend: &Backend<'_>, match_id: u64) -> Result<Vec<Comment>> {
    let comments: Vec<Comment> = backend.get_json(&format!("/comments/{match_id}/")).await?;
    debug!(count = comments.len(), match_id, "fetched comments");
    Ok(comments)
}

#[instrument(skip(backend, content))]
pub(crate) async fn post(
    backend: &Backend<'_>,
    match_id: u64,
    content: &str,
) -> Result<Comment> {
    backend
        .post_json(
            &format!("/comments/{match_id}/"),
            &json!({ "content": content }),
        )
        .await
}

#[instrument(skip(backend))]
pub(crate) async fn delete(backend: &Backend<'_>, comment_id: u64) -> Result<()> {
    backend.delete(&format!("/comments/delete/{comment_id}/")).await
}

#[instrument(skip(backend))]
pub(crate) async fn get_for_user(backend: &Backend<'_>, username: &str) -> Result<Vec<Comment>> {
    backend.get_json(&format!("/comments/user/{username}/")).await
}
