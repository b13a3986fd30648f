//! Equipment-manual catalog: categories contain groups, groups contain
//! manuals. The nested schemas mirror that tree for the `/manuals/nested`
//! endpoint.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteArguments;
use sqlx::{FromRow, Sqlite};

use crate::store::Model;

#[derive(Debug, Clone, FromRow)]
pub struct CategoryRecord {
    pub id: i64,
    #[sqlx(rename = "category_name")]
    pub name: String,
    pub logo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySchema {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub logo_url: String,
}

impl From<CategoryRecord> for CategorySchema {
    fn from(m: CategoryRecord) -> Self {
        Self { id: Some(m.id), name: m.name, logo_url: m.logo_url }
    }
}

impl CategoryRecord {
    pub fn from_schema(s: &CategorySchema) -> Self {
        Self { id: s.id.unwrap_or_default(), name: s.name.clone(), logo_url: s.logo_url.clone() }
    }
}

impl Model for CategoryRecord {
    type Schema = CategorySchema;

    const TABLE: &'static str = "categories";
    const COLUMNS: &'static [&'static str] = &["category_name", "logo_url"];
    const SEARCH_COLUMN: Option<&'static str> = Some("category_name");

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.name.clone()).bind(self.logo_url.clone())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct GroupRecord {
    pub id: i64,
    #[sqlx(rename = "group_name")]
    pub name: String,
    pub category_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSchema {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub category_id: i64,
}

impl From<GroupRecord> for GroupSchema {
    fn from(m: GroupRecord) -> Self {
        Self { id: Some(m.id), name: m.name, category_id: m.category_id }
    }
}

impl GroupRecord {
    pub fn from_schema(s: &GroupSchema) -> Self {
        Self { id: s.id.unwrap_or_default(), name: s.name.clone(), category_id: s.category_id }
    }
}

impl Model for GroupRecord {
    type Schema = GroupSchema;

    const TABLE: &'static str = "groups";
    const COLUMNS: &'static [&'static str] = &["group_name", "category_id"];
    const SEARCH_COLUMN: Option<&'static str> = Some("group_name");

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.name.clone()).bind(self.category_id)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ManualRecord {
    pub id: i64,
    pub title: String,
    pub file_url: String,
    pub cover_image_url: String,
    pub group_id: i64,
}

/// Transport shape of a manual. `cover_image_url` may be omitted on creation;
/// the service derives it from `file_url` in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualSchema {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub file_url: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    pub group_id: i64,
}

impl From<ManualRecord> for ManualSchema {
    fn from(m: ManualRecord) -> Self {
        Self {
            id: Some(m.id),
            title: m.title,
            file_url: m.file_url,
            cover_image_url: Some(m.cover_image_url),
            group_id: m.group_id,
        }
    }
}

impl ManualRecord {
    /// Builds a persistence record with the cover URL already resolved.
    pub fn from_schema(s: &ManualSchema, cover_image_url: String) -> Self {
        Self {
            id: s.id.unwrap_or_default(),
            title: s.title.clone(),
            file_url: s.file_url.clone(),
            cover_image_url,
            group_id: s.group_id,
        }
    }
}

impl Model for ManualRecord {
    type Schema = ManualSchema;

    const TABLE: &'static str = "manuals";
    const COLUMNS: &'static [&'static str] = &["title", "file_url", "cover_image_url", "group_id"];
    const SEARCH_COLUMN: Option<&'static str> = Some("title");

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.title.clone())
            .bind(self.file_url.clone())
            .bind(self.cover_image_url.clone())
            .bind(self.group_id)
    }
}

// Nested tree returned by /manuals/nested.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualNestedSchema {
    pub id: i64,
    pub title: String,
    pub file_url: String,
    pub group_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupNestedSchema {
    pub id: i64,
    pub name: String,
    pub manuals: Vec<ManualNestedSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryNestedSchema {
    pub id: i64,
    pub name: String,
    pub logo_url: String,
    pub groups: Vec<GroupNestedSchema>,
}
