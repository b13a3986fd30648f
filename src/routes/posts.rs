use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::error::{AppResult, OptionExt};
use crate::middleware::auth::CurrentUser;
use crate::services::posts::PostService;
use crate::state::AppState;
use crate::store::Session;

pub async fn get_posts(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let items = PostService::new(&mut session).get_posts().await?;
    session.commit().await?;
    Ok(Json(items))
}

pub async fn get_post(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(post_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let post = PostService::new(&mut session).get_post(post_id).await?;
    let post = post.ok_or_not_found("Post")?;
    session.commit().await?;
    Ok(Json(post))
}
