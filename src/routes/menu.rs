use axum::{extract::State, response::IntoResponse, Json};

use crate::error::AppResult;
use crate::services::menu::MenuService;
use crate::state::AppState;
use crate::store::Session;

pub async fn get_menu_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let items = MenuService::new(&mut session).get_menu_items().await?;
    session.commit().await?;
    Ok(Json(items))
}
