//! Frequency-converter inventory, six levels deep:
//! mill shop -> production line -> location -> cabinet -> converter -> unit.
//! Each level is deleted independently by identifier; cascades, if any, are a
//! database concern.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteArguments;
use sqlx::{FromRow, Sqlite};

use crate::store::Model;

#[derive(Debug, Clone, FromRow)]
pub struct MillShopRecord {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MillShopSchema {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

impl From<MillShopRecord> for MillShopSchema {
    fn from(m: MillShopRecord) -> Self {
        Self { id: Some(m.id), name: m.name }
    }
}

impl MillShopRecord {
    pub fn from_schema(s: &MillShopSchema) -> Self {
        Self { id: s.id.unwrap_or_default(), name: s.name.clone() }
    }
}

impl Model for MillShopRecord {
    type Schema = MillShopSchema;

    const TABLE: &'static str = "mill_shops";
    const COLUMNS: &'static [&'static str] = &["name"];
    const SEARCH_COLUMN: Option<&'static str> = Some("name");

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.name.clone())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ProductionLineRecord {
    pub id: i64,
    pub mill_shop_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionLineSchema {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub mill_shop_id: i64,
}

impl From<ProductionLineRecord> for ProductionLineSchema {
    fn from(m: ProductionLineRecord) -> Self {
        Self { id: Some(m.id), name: m.name, mill_shop_id: m.mill_shop_id }
    }
}

impl ProductionLineRecord {
    pub fn from_schema(s: &ProductionLineSchema) -> Self {
        Self { id: s.id.unwrap_or_default(), mill_shop_id: s.mill_shop_id, name: s.name.clone() }
    }
}

impl Model for ProductionLineRecord {
    type Schema = ProductionLineSchema;

    const TABLE: &'static str = "production_lines";
    const COLUMNS: &'static [&'static str] = &["mill_shop_id", "name"];
    const SEARCH_COLUMN: Option<&'static str> = Some("name");

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.mill_shop_id).bind(self.name.clone())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct LocationRecord {
    pub id: i64,
    pub production_line_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSchema {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub production_line_id: i64,
}

impl From<LocationRecord> for LocationSchema {
    fn from(m: LocationRecord) -> Self {
        Self { id: Some(m.id), name: m.name, production_line_id: m.production_line_id }
    }
}

impl LocationRecord {
    pub fn from_schema(s: &LocationSchema) -> Self {
        Self {
            id: s.id.unwrap_or_default(),
            production_line_id: s.production_line_id,
            name: s.name.clone(),
        }
    }
}

impl Model for LocationRecord {
    type Schema = LocationSchema;

    const TABLE: &'static str = "locations";
    const COLUMNS: &'static [&'static str] = &["production_line_id", "name"];
    const SEARCH_COLUMN: Option<&'static str> = Some("name");

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.production_line_id).bind(self.name.clone())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct CabinetRecord {
    pub id: i64,
    pub location_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinetSchema {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub location_id: i64,
}

impl From<CabinetRecord> for CabinetSchema {
    fn from(m: CabinetRecord) -> Self {
        Self { id: Some(m.id), name: m.name, location_id: m.location_id }
    }
}

impl CabinetRecord {
    pub fn from_schema(s: &CabinetSchema) -> Self {
        Self { id: s.id.unwrap_or_default(), location_id: s.location_id, name: s.name.clone() }
    }
}

impl Model for CabinetRecord {
    type Schema = CabinetSchema;

    const TABLE: &'static str = "cabinets";
    const COLUMNS: &'static [&'static str] = &["location_id", "name"];
    const SEARCH_COLUMN: Option<&'static str> = Some("name");

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.location_id).bind(self.name.clone())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ConverterRecord {
    pub id: i64,
    pub cabinet_id: i64,
    pub brand: String,
    pub model: String,
    pub nominal_current: Option<f64>,
    pub current_type: Option<String>,
    pub power: Option<f64>,
    pub input_voltage: Option<f64>,
    pub output_voltage: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterSchema {
    #[serde(default)]
    pub id: Option<i64>,
    pub cabinet_id: i64,
    pub brand: String,
    pub model: String,
    pub nominal_current: Option<f64>,
    pub current_type: Option<String>,
    pub power: Option<f64>,
    pub input_voltage: Option<f64>,
    pub output_voltage: Option<f64>,
}

impl From<ConverterRecord> for ConverterSchema {
    fn from(m: ConverterRecord) -> Self {
        Self {
            id: Some(m.id),
            cabinet_id: m.cabinet_id,
            brand: m.brand,
            model: m.model,
            nominal_current: m.nominal_current,
            current_type: m.current_type,
            power: m.power,
            input_voltage: m.input_voltage,
            output_voltage: m.output_voltage,
        }
    }
}

impl ConverterRecord {
    pub fn from_schema(s: &ConverterSchema) -> Self {
        Self {
            id: s.id.unwrap_or_default(),
            cabinet_id: s.cabinet_id,
            brand: s.brand.clone(),
            model: s.model.clone(),
            nominal_current: s.nominal_current,
            current_type: s.current_type.clone(),
            power: s.power,
            input_voltage: s.input_voltage,
            output_voltage: s.output_voltage,
        }
    }
}

impl Model for ConverterRecord {
    type Schema = ConverterSchema;

    const TABLE: &'static str = "converters";
    const COLUMNS: &'static [&'static str] = &[
        "cabinet_id",
        "brand",
        "model",
        "nominal_current",
        "current_type",
        "power",
        "input_voltage",
        "output_voltage",
    ];
    // A converter is identified by brand/model, not by a title or name.
    const SEARCH_COLUMN: Option<&'static str> = None;

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.cabinet_id)
            .bind(self.brand.clone())
            .bind(self.model.clone())
            .bind(self.nominal_current)
            .bind(self.current_type.clone())
            .bind(self.power)
            .bind(self.input_voltage)
            .bind(self.output_voltage)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct UnitRecord {
    pub id: i64,
    pub name: String,
    pub converter_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSchema {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub converter_id: i64,
}

impl From<UnitRecord> for UnitSchema {
    fn from(m: UnitRecord) -> Self {
        Self { id: Some(m.id), name: m.name, converter_id: m.converter_id }
    }
}

impl UnitRecord {
    pub fn from_schema(s: &UnitSchema) -> Self {
        Self { id: s.id.unwrap_or_default(), name: s.name.clone(), converter_id: s.converter_id }
    }
}

impl Model for UnitRecord {
    type Schema = UnitSchema;

    const TABLE: &'static str = "units";
    const COLUMNS: &'static [&'static str] = &["name", "converter_id"];
    const SEARCH_COLUMN: Option<&'static str> = Some("name");

    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.name.clone()).bind(self.converter_id)
    }
}
