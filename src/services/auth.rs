//! Account creation and authentication.
//!
//! Users are keyed by email. Authentication distinguishes "no such user"
//! (404) from "wrong password" (401); success issues a bearer token whose
//! subject is the email.

use crate::auth::{jwt, password};
use crate::config::AuthConfig;
use crate::error::{AppError, AppResult};
use crate::models::auth::{CreateUserSchema, TokenSchema, UserRecord, UserSchema};
use crate::store::{DataManager, Session};

const TOKEN_TYPE: &str = "bearer";

pub struct AuthService<'a> {
    session: &'a mut Session,
    users: DataManager<UserRecord>,
}

impl<'a> AuthService<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session, users: DataManager::new() }
    }

    /// Registers a new user, rejecting duplicate emails with a conflict.
    /// Only the salted Argon2id hash of the password is stored.
    pub async fn create_user(&mut self, user: &CreateUserSchema) -> AppResult<UserSchema> {
        if self.get_user_by_email(&user.email).await?.is_some() {
            return Err(AppError::Conflict(format!("User {} already exists", user.email)));
        }

        let hashed_password = password::hash_password(&user.password)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("password hashing failed: {}", e)))?;

        let record = UserRecord {
            id: 0,
            email: user.email.clone(),
            name: user.name.clone(),
            hashed_password,
        };
        self.users.add_item(self.session, &record).await
    }

    /// Verifies credentials and issues a signed access token.
    pub async fn authenticate(
        &mut self,
        email: &str,
        plain_password: &str,
        config: &AuthConfig,
    ) -> AppResult<TokenSchema> {
        let user = self
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let verified = password::verify_password(plain_password, &user.hashed_password)
            .map_err(|_| AppError::Unauthorized("Incorrect password".to_string()))?;
        if !verified {
            return Err(AppError::Unauthorized("Incorrect password".to_string()));
        }

        let access_token = jwt::generate_access_token(&user.name, &user.email, config)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("token signing failed: {}", e)))?;
        Ok(TokenSchema { access_token, token_type: TOKEN_TYPE.to_string() })
    }

    async fn get_user_by_email(&mut self, email: &str) -> AppResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(self.session.conn())
            .await?;
        Ok(user)
    }
}
