//! Blog-style posts; each post belongs to exactly one user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteArguments;
use sqlx::{FromRow, Sqlite};

use crate::store::Model;

#[derive(Debug, Clone, FromRow)]
pub struct PostRecord {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSchema {
    #[serde(default)]
    pub id: Option<i64>,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<PostRecord> for PostSchema {
    fn from(m: PostRecord) -> Self {
        Self {
            id: Some(m.id),
            user_id: m.user_id,
            title: m.title,
            description: m.description,
            content: m.content,
            created_at: Some(m.created_at),
            updated_at: Some(m.updated_at),
        }
    }
}

impl PostRecord {
    pub fn from_schema(s: &PostSchema) -> Self {
        let now = Utc::now();
        Self {
            id: s.id.unwrap_or_default(),
            user_id: s.user_id,
            title: s.title.clone(),
            description: s.description.clone(),
            content: s.content.clone(),
            created_at: s.created_at.unwrap_or(now),
            updated_at: now,
        }
    }
}

impl Model for PostRecord {
    type Schema = PostSchema;

    const TABLE: &'static str = "posts";
    const COLUMNS: &'static [&'static str] =
        &["user_id", "title", "description", "content", "created_at", "updated_at"];
    const SEARCH_COLUMN: Option<&'static str> = Some("title");

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.user_id)
            .bind(self.title.clone())
            .bind(self.description.clone())
            .bind(self.content.clone())
            .bind(self.created_at)
            .bind(self.updated_at)
    }
}
