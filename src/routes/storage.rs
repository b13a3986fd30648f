use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::error::AppResult;
use crate::services::storage::StorageService;
use crate::state::AppState;
use crate::store::Session;

pub async fn get_locations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let items = StorageService::new(&mut session).get_locations().await?;
    session.commit().await?;
    Ok(Json(items))
}

pub async fn get_equipment(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let items = StorageService::new(&mut session).get_equipment().await?;
    session.commit().await?;
    Ok(Json(items))
}

pub async fn get_equipment_by_location(
    State(state): State<AppState>,
    Path(location_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let items = StorageService::new(&mut session).get_equipment_by_location(location_id).await?;
    session.commit().await?;
    Ok(Json(items))
}
