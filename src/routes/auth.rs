use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};

use crate::error::AppResult;
use crate::models::auth::{CreateUserSchema, LoginForm};
use crate::services::auth::AuthService;
use crate::state::AppState;
use crate::store::Session;

/// User authentication. OAuth2-style password form; `username` carries the
/// email. 404 for unknown users, 401 for a wrong password.
pub async fn authenticate(
    State(state): State<AppState>,
    Form(login): Form<LoginForm>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let token = AuthService::new(&mut session)
        .authenticate(&login.username, &login.password, &state.config.auth)
        .await?;
    session.commit().await?;
    Ok(Json(token))
}

/// Account creation. 409 when the email is already taken.
pub async fn signup(
    State(state): State<AppState>,
    Json(user): Json<CreateUserSchema>,
) -> AppResult<impl IntoResponse> {
    let mut session = Session::begin(&state.db).await?;
    let created = AuthService::new(&mut session).create_user(&user).await?;
    session.commit().await?;
    Ok((StatusCode::CREATED, Json(created)))
}
