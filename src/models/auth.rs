//! User accounts and token transport shapes. Passwords never cross the API
//! boundary back out - `UserSchema` carries identity only.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteArguments;
use sqlx::{FromRow, Sqlite};

use crate::store::Model;

#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub hashed_password: String,
}

impl Model for UserRecord {
    type Schema = UserSchema;

    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["email", "name", "hashed_password"];
    const SEARCH_COLUMN: Option<&'static str> = Some("name");

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.email.clone())
            .bind(self.name.clone())
            .bind(self.hashed_password.clone())
    }
}

/// Identity as exposed to handlers and embedded in tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSchema {
    pub name: String,
    pub email: String,
}

impl From<UserRecord> for UserSchema {
    fn from(m: UserRecord) -> Self {
        Self { name: m.name, email: m.email }
    }
}

/// Sign-up request body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserSchema {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// OAuth2-style password login form (`username` carries the email).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSchema {
    pub access_token: String,
    pub token_type: String,
}
