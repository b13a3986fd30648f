//! HTTP route handlers for the AEDB API.
//!
//! One sub-module per domain. Handlers open the request's session, delegate
//! to a domain service, commit on success and map absence to 404. The full
//! application router is assembled here so the binary and the tests serve the
//! exact same surface.

pub mod auth;
pub mod converters;
pub mod health;
pub mod manuals;
pub mod menu;
pub mod posts;
pub mod sensors;
pub mod storage;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::state::AppState;

/// Builds the application router: health endpoints at the root, everything
/// else under `/api/v1`.
pub fn router(state: AppState) -> Router {
    let manuals = Router::new()
        .route("/", get(manuals::get_manuals).post(manuals::post_manual).delete(manuals::delete_manuals))
        .route("/nested", get(manuals::get_nested_manuals))
        .route("/categories", get(manuals::get_categories))
        .route("/groups", get(manuals::get_groups))
        .route("/groups/{category_id}", get(manuals::get_groups_by_category))
        .route("/search", get(manuals::search_manuals))
        .route("/search_groups", get(manuals::search_groups))
        .route("/search_categories", get(manuals::search_categories))
        .route("/group", post(manuals::post_group))
        .route("/category", post(manuals::post_category))
        .route("/upload", post(manuals::upload_manual))
        .route("/add_all", post(manuals::add_all_manuals))
        .route("/add_groups", post(manuals::add_all_groups))
        .route("/add_categories", post(manuals::add_all_categories))
        .route("/{manual_id}", put(manuals::put_manual).delete(manuals::delete_manual))
        .route("/group/{group_id}", put(manuals::put_group).delete(manuals::delete_group))
        .route("/category/{category_id}", put(manuals::put_category).delete(manuals::delete_category));

    let converters = Router::new()
        .route("/", get(converters::get_converters))
        .route("/paginated", get(converters::get_converters_paginated))
        .route("/add_all", post(converters::add_all_data))
        .route("/delete_all", delete(converters::delete_all_data))
        .route("/{converter_id}", delete(converters::delete_converter))
        .route("/cabinets/{cabinet_id}", delete(converters::delete_cabinet))
        .route("/locations/{location_id}", delete(converters::delete_location))
        .route("/production_lines/{production_line_id}", delete(converters::delete_production_line))
        .route("/mill_shops/{mill_shop_id}", delete(converters::delete_mill_shop))
        .route("/units/{unit_id}", delete(converters::delete_unit));

    let api = Router::new()
        .route("/token", post(auth::authenticate))
        .route("/token/signup", post(auth::signup))
        .nest("/manuals", manuals)
        .nest("/converters", converters)
        .route("/posts", get(posts::get_posts))
        .route("/posts/{post_id}", get(posts::get_post))
        .route("/menu", get(menu::get_menu_items))
        .route("/sensors/receive_data", post(sensors::receive_data))
        .route("/storage/locations", get(storage::get_locations))
        .route("/storage/equipment", get(storage::get_equipment))
        .route("/storage/equipment/{location_id}", get(storage::get_equipment_by_location));

    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/version", get(health::version))
        .nest("/api/v1", api)
        .with_state(state)
}
