use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::error::{validation, AppError, AppResult};
use crate::services::converters::ConverterService;
use crate::state::AppState;
use crate::store::Session;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

pub async fn get_converters(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let items = ConverterService::new(&mut session).get_converters().await?;
    session.commit().await?;
    Ok(Json(items))
}

pub async fn get_converters_paginated(
    State(state): State<AppState>,
    Query(q): Query<PageQuery>,
) -> AppResult<impl IntoResponse> {
    let page = q.page.unwrap_or(1);
    let page_size = q.page_size.unwrap_or(10);
    validation::validate_pagination(page, page_size)?;

    let mut session = Session::begin(&state.db).await?;
    let result = ConverterService::new(&mut session).get_converters_paginated(page, page_size).await?;
    session.commit().await?;
    Ok(Json(result))
}

/// Seeds the whole inventory from the converters fixture.
pub async fn add_all_data(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let count =
        ConverterService::new(&mut session).add_all_converters(&state.config.fixtures.dir).await?;
    session.commit().await?;
    Ok(Json(serde_json::json!({ "added": count })))
}

pub async fn delete_converter(
    State(state): State<AppState>,
    Path(converter_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let deleted = ConverterService::new(&mut session).delete_converter(converter_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Converter not found".to_string()));
    }
    session.commit().await?;
    Ok(Json(deleted))
}

pub async fn delete_cabinet(
    State(state): State<AppState>,
    Path(cabinet_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let deleted = ConverterService::new(&mut session).delete_cabinet(cabinet_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Cabinet not found".to_string()));
    }
    session.commit().await?;
    Ok(Json(deleted))
}

pub async fn delete_location(
    State(state): State<AppState>,
    Path(location_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let deleted = ConverterService::new(&mut session).delete_location(location_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Location not found".to_string()));
    }
    session.commit().await?;
    Ok(Json(deleted))
}

pub async fn delete_production_line(
    State(state): State<AppState>,
    Path(production_line_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let deleted =
        ConverterService::new(&mut session).delete_production_line(production_line_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Production line not found".to_string()));
    }
    session.commit().await?;
    Ok(Json(deleted))
}

pub async fn delete_mill_shop(
    State(state): State<AppState>,
    Path(mill_shop_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let deleted = ConverterService::new(&mut session).delete_mill_shop(mill_shop_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Mill shop not found".to_string()));
    }
    session.commit().await?;
    Ok(Json(deleted))
}

pub async fn delete_unit(
    State(state): State<AppState>,
    Path(unit_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let deleted = ConverterService::new(&mut session).delete_unit(unit_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Unit not found".to_string()));
    }
    session.commit().await?;
    Ok(Json(deleted))
}

/// Empties every table of the hierarchy; reports the per-table outcome.
pub async fn delete_all_data(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let result = ConverterService::new(&mut session).delete_all_data().await?;
    session.commit().await?;
    Ok(Json(result))
}
