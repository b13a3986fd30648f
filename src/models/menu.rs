//! Site navigation menu entries.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteArguments;
use sqlx::{FromRow, Sqlite};

use crate::store::Model;

#[derive(Debug, Clone, FromRow)]
pub struct MenuItemRecord {
    pub id: i64,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemSchema {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
}

impl From<MenuItemRecord> for MenuItemSchema {
    fn from(m: MenuItemRecord) -> Self {
        Self { id: Some(m.id), title: m.title, url: m.url }
    }
}

impl MenuItemRecord {
    pub fn from_schema(s: &MenuItemSchema) -> Self {
        Self { id: s.id.unwrap_or_default(), title: s.title.clone(), url: s.url.clone() }
    }
}

impl Model for MenuItemRecord {
    type Schema = MenuItemSchema;

    const TABLE: &'static str = "menu";
    const COLUMNS: &'static [&'static str] = &["title", "url"];
    const SEARCH_COLUMN: Option<&'static str> = Some("title");

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.title.clone()).bind(self.url.clone())
    }
}
