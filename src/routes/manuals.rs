use axum::{
    extract::{Multipart, Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::error::{validation, AppError, AppResult, OptionExt};
use crate::middleware::auth::CurrentUser;
use crate::models::manuals::{CategorySchema, GroupSchema, ManualSchema};
use crate::services::manuals::ManualService;
use crate::state::AppState;
use crate::store::Session;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

// ---------------------- LISTINGS ----------------------

/// The full Category -> Group -> Manual tree. Public - it backs the landing
/// page.
pub async fn get_nested_manuals(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let tree = ManualService::new(&mut session).get_nested_manuals().await?;
    session.commit().await?;
    Ok(Json(tree))
}

pub async fn get_manuals(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let items = ManualService::new(&mut session).get_manuals().await?;
    session.commit().await?;
    Ok(Json(items))
}

pub async fn get_groups(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let items = ManualService::new(&mut session).get_groups().await?;
    session.commit().await?;
    Ok(Json(items))
}

pub async fn get_groups_by_category(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(category_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let items = ManualService::new(&mut session).get_groups_by_category(category_id).await?;
    session.commit().await?;
    Ok(Json(items))
}

pub async fn get_categories(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let items = ManualService::new(&mut session).get_categories().await?;
    session.commit().await?;
    Ok(Json(items))
}

// ---------------------- SEARCH ----------------------

pub async fn search_manuals(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<impl IntoResponse> {
    validation::validate_search_query(&query.q)?;
    let mut session = Session::begin(&state.db).await?;
    let items = ManualService::new(&mut session).search_manuals(&query.q).await?;
    session.commit().await?;
    Ok(Json(items))
}

pub async fn search_groups(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<impl IntoResponse> {
    validation::validate_search_query(&query.q)?;
    let mut session = Session::begin(&state.db).await?;
    let items = ManualService::new(&mut session).search_groups(&query.q).await?;
    session.commit().await?;
    Ok(Json(items))
}

pub async fn search_categories(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<impl IntoResponse> {
    validation::validate_search_query(&query.q)?;
    let mut session = Session::begin(&state.db).await?;
    let items = ManualService::new(&mut session).search_categories(&query.q).await?;
    session.commit().await?;
    Ok(Json(items))
}

// ---------------------- WRITES ----------------------

pub async fn post_manual(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(manual): Json<ManualSchema>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let created = ManualService::new(&mut session).add_manual(&manual).await?;
    session.commit().await?;
    Ok(Json(created))
}

pub async fn post_group(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(group): Json<GroupSchema>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let created = ManualService::new(&mut session).add_group(&group).await?;
    session.commit().await?;
    Ok(Json(created))
}

pub async fn post_category(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(category): Json<CategorySchema>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let created = ManualService::new(&mut session).add_category(&category).await?;
    session.commit().await?;
    Ok(Json(created))
}

pub async fn put_manual(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(manual_id): Path<i64>,
    Json(manual): Json<ManualSchema>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let updated = ManualService::new(&mut session).update_manual(manual_id, &manual).await?;
    let updated = updated.ok_or_not_found("Manual")?;
    session.commit().await?;
    Ok(Json(updated))
}

pub async fn put_group(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(group_id): Path<i64>,
    Json(group): Json<GroupSchema>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let updated = ManualService::new(&mut session).update_group(group_id, &group).await?;
    let updated = updated.ok_or_not_found("Group")?;
    session.commit().await?;
    Ok(Json(updated))
}

pub async fn put_category(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(category_id): Path<i64>,
    Json(category): Json<CategorySchema>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let updated = ManualService::new(&mut session).update_category(category_id, &category).await?;
    let updated = updated.ok_or_not_found("Category")?;
    session.commit().await?;
    Ok(Json(updated))
}

pub async fn delete_manual(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(manual_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let deleted = ManualService::new(&mut session).delete_manual(manual_id).await?;
    session.commit().await?;
    Ok(Json(deleted))
}

pub async fn delete_manuals(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let deleted = ManualService::new(&mut session).delete_manuals().await?;
    session.commit().await?;
    Ok(Json(deleted))
}

pub async fn delete_group(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(group_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let deleted = ManualService::new(&mut session).delete_group(group_id).await?;
    session.commit().await?;
    Ok(Json(deleted))
}

pub async fn delete_category(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(category_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let deleted = ManualService::new(&mut session).delete_category(category_id).await?;
    session.commit().await?;
    Ok(Json(deleted))
}

// ---------------------- SEEDING ----------------------

pub async fn add_all_manuals(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let count =
        ManualService::new(&mut session).add_all_manuals(&state.config.fixtures.dir).await?;
    session.commit().await?;
    Ok(Json(serde_json::json!({ "added": count })))
}

pub async fn add_all_groups(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let count = ManualService::new(&mut session).add_all_groups(&state.config.fixtures.dir).await?;
    session.commit().await?;
    Ok(Json(serde_json::json!({ "added": count })))
}

pub async fn add_all_categories(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let count =
        ManualService::new(&mut session).add_all_categories(&state.config.fixtures.dir).await?;
    session.commit().await?;
    Ok(Json(serde_json::json!({ "added": count })))
}

// ---------------------- UPLOAD ----------------------

/// Accepts a multipart `manual` field holding a PDF, stores it in the object
/// store and extracts the first page as the cover image.
pub async fn upload_manual(
    State(state): State<AppState>,
    _user: CurrentUser,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let objects = state
        .objects
        .as_deref()
        .ok_or_else(|| AppError::ServiceUnavailable("object storage is not configured".to_string()))?;

    let mut file_name: Option<String> = None;
    let mut bytes: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {}", e)))?
    {
        if field.name() == Some("manual") {
            file_name = field.file_name().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("failed to read upload: {}", e)))?;
            bytes = Some(data.to_vec());
        }
    }

    let bytes = bytes.ok_or_else(|| AppError::ValidationError {
        field: "manual".to_string(),
        message: "multipart field 'manual' is required".to_string(),
    })?;
    let file_name = file_name.unwrap_or_else(|| "manual.pdf".to_string());

    let mut session = Session::begin(&state.db).await?;
    let uploaded = ManualService::new(&mut session)
        .upload_file(objects, state.rasterizer.as_ref(), &file_name, bytes)
        .await?;
    session.commit().await?;
    Ok(Json(uploaded))
}
