//! Warehouse storage inventory: locations and the equipment stored in them.
//! The `group` attribute is stored as `grp` (SQL keyword) but keeps its name
//! on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteArguments;
use sqlx::{FromRow, Sqlite};

use crate::store::Model;

#[derive(Debug, Clone, FromRow)]
pub struct StorageLocationRecord {
    pub id: i64,
    pub name: String,
    pub place: Option<String>,
    pub used_place: Option<String>,
    pub new_place: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageLocationSchema {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub place: Option<String>,
    pub used_place: Option<String>,
    pub new_place: Option<String>,
}

impl From<StorageLocationRecord> for StorageLocationSchema {
    fn from(m: StorageLocationRecord) -> Self {
        Self {
            id: Some(m.id),
            name: m.name,
            place: m.place,
            used_place: m.used_place,
            new_place: m.new_place,
        }
    }
}

impl StorageLocationRecord {
    pub fn from_schema(s: &StorageLocationSchema) -> Self {
        Self {
            id: s.id.unwrap_or_default(),
            name: s.name.clone(),
            place: s.place.clone(),
            used_place: s.used_place.clone(),
            new_place: s.new_place.clone(),
        }
    }
}

impl Model for StorageLocationRecord {
    type Schema = StorageLocationSchema;

    const TABLE: &'static str = "storage_locations";
    const COLUMNS: &'static [&'static str] = &["name", "place", "used_place", "new_place"];
    const SEARCH_COLUMN: Option<&'static str> = Some("name");

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.name.clone())
            .bind(self.place.clone())
            .bind(self.used_place.clone())
            .bind(self.new_place.clone())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct StorageEquipmentRecord {
    pub id: i64,
    pub location_id: i64,
    pub grp: String,
    pub name: Option<String>,
    pub specs: Option<String>,
    pub qty: i64,
    pub install: Option<String>,
    pub number: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageEquipmentSchema {
    #[serde(default)]
    pub id: Option<i64>,
    pub location_id: i64,
    #[serde(rename = "group")]
    pub grp: String,
    pub name: Option<String>,
    pub specs: Option<String>,
    pub qty: i64,
    pub install: Option<String>,
    pub number: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<StorageEquipmentRecord> for StorageEquipmentSchema {
    fn from(m: StorageEquipmentRecord) -> Self {
        Self {
            id: Some(m.id),
            location_id: m.location_id,
            grp: m.grp,
            name: m.name,
            specs: m.specs,
            qty: m.qty,
            install: m.install,
            number: m.number,
            notes: m.notes,
            created_at: Some(m.created_at),
            updated_at: Some(m.updated_at),
        }
    }
}

impl StorageEquipmentRecord {
    pub fn from_schema(s: &StorageEquipmentSchema) -> Self {
        let now = Utc::now();
        Self {
            id: s.id.unwrap_or_default(),
            location_id: s.location_id,
            grp: s.grp.clone(),
            name: s.name.clone(),
            specs: s.specs.clone(),
            qty: s.qty,
            install: s.install.clone(),
            number: s.number.clone(),
            notes: s.notes.clone(),
            created_at: s.created_at.unwrap_or(now),
            updated_at: now,
        }
    }
}

impl Model for StorageEquipmentRecord {
    type Schema = StorageEquipmentSchema;

    const TABLE: &'static str = "storage_equipment";
    const COLUMNS: &'static [&'static str] = &[
        "location_id",
        "grp",
        "name",
        "specs",
        "qty",
        "install",
        "number",
        "notes",
        "created_at",
        "updated_at",
    ];
    const SEARCH_COLUMN: Option<&'static str> = Some("name");

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.location_id)
            .bind(self.grp.clone())
            .bind(self.name.clone())
            .bind(self.specs.clone())
            .bind(self.qty)
            .bind(self.install.clone())
            .bind(self.number.clone())
            .bind(self.notes.clone())
            .bind(self.created_at)
            .bind(self.updated_at)
    }
}
