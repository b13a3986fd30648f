//! Frequency-converter inventory service.
//!
//! One session, six data managers - one per level of the hierarchy. Levels
//! are deleted independently; nothing cascades in application code.

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::converters::{
    CabinetRecord, CabinetSchema, ConverterRecord, ConverterSchema, LocationRecord,
    LocationSchema, MillShopRecord, MillShopSchema, ProductionLineRecord, ProductionLineSchema,
    UnitRecord, UnitSchema,
};
use crate::store::{DataManager, Session};

/// One page of converters plus pagination bookkeeping.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedConverters {
    pub items: Vec<ConverterSchema>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

/// Shape of `converters.json`: the whole inventory, one array per level.
#[derive(Debug, Clone, Deserialize)]
pub struct ConverterFixture {
    #[serde(default)]
    pub mill_shops: Vec<MillShopSchema>,
    #[serde(default)]
    pub production_lines: Vec<ProductionLineSchema>,
    #[serde(default)]
    pub locations: Vec<LocationSchema>,
    #[serde(default)]
    pub cabinets: Vec<CabinetSchema>,
    #[serde(default)]
    pub converters: Vec<ConverterSchema>,
    #[serde(default)]
    pub units: Vec<UnitSchema>,
}

/// Per-table outcome of `delete_all_data`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAllResult {
    pub units: bool,
    pub converters: bool,
    pub cabinets: bool,
    pub locations: bool,
    pub production_lines: bool,
    pub mill_shops: bool,
}

pub struct ConverterService<'a> {
    session: &'a mut Session,
    mill_shops: DataManager<MillShopRecord>,
    production_lines: DataManager<ProductionLineRecord>,
    locations: DataManager<LocationRecord>,
    cabinets: DataManager<CabinetRecord>,
    converters: DataManager<ConverterRecord>,
    units: DataManager<UnitRecord>,
}

impl<'a> ConverterService<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self {
            session,
            mill_shops: DataManager::new(),
            production_lines: DataManager::new(),
            locations: DataManager::new(),
            cabinets: DataManager::new(),
            converters: DataManager::new(),
            units: DataManager::new(),
        }
    }

    pub async fn get_converters(&mut self) -> AppResult<Vec<ConverterSchema>> {
        self.converters.get_items(self.session).await
    }

    pub async fn get_converters_paginated(
        &mut self,
        page: i64,
        page_size: i64,
    ) -> AppResult<PaginatedConverters> {
        let (items, total) =
            self.converters.get_items_paginated(self.session, page, page_size).await?;
        let total_pages = if total == 0 { 0 } else { (total + page_size - 1) / page_size };
        Ok(PaginatedConverters { items, total, page, page_size, total_pages })
    }

    /// Loads the whole inventory from `converters.json`, parents before
    /// children so foreign keys resolve.
    pub async fn add_all_converters(&mut self, fixtures_dir: &str) -> AppResult<usize> {
        let fixture: ConverterFixture = super::load_fixture(fixtures_dir, "converters.json").await?;

        for item in &fixture.mill_shops {
            self.mill_shops.add_item(self.session, &MillShopRecord::from_schema(item)).await?;
        }
        for item in &fixture.production_lines {
            self.production_lines
                .add_item(self.session, &ProductionLineRecord::from_schema(item))
                .await?;
        }
        for item in &fixture.locations {
            self.locations.add_item(self.session, &LocationRecord::from_schema(item)).await?;
        }
        for item in &fixture.cabinets {
            self.cabinets.add_item(self.session, &CabinetRecord::from_schema(item)).await?;
        }
        for item in &fixture.converters {
            self.converters.add_item(self.session, &ConverterRecord::from_schema(item)).await?;
        }
        for item in &fixture.units {
            self.units.add_item(self.session, &UnitRecord::from_schema(item)).await?;
        }

        Ok(fixture.mill_shops.len()
            + fixture.production_lines.len()
            + fixture.locations.len()
            + fixture.cabinets.len()
            + fixture.converters.len()
            + fixture.units.len())
    }

    pub async fn delete_converter(&mut self, id: i64) -> AppResult<bool> {
        self.converters.delete_item(self.session, id).await
    }

    pub async fn delete_cabinet(&mut self, id: i64) -> AppResult<bool> {
        self.cabinets.delete_item(self.session, id).await
    }

    pub async fn delete_location(&mut self, id: i64) -> AppResult<bool> {
        self.locations.delete_item(self.session, id).await
    }

    pub async fn delete_production_line(&mut self, id: i64) -> AppResult<bool> {
        self.production_lines.delete_item(self.session, id).await
    }

    pub async fn delete_mill_shop(&mut self, id: i64) -> AppResult<bool> {
        self.mill_shops.delete_item(self.session, id).await
    }

    pub async fn delete_unit(&mut self, id: i64) -> AppResult<bool> {
        self.units.delete_item(self.session, id).await
    }

    /// Empties every table of the hierarchy, children first so the
    /// foreign-key constraints hold throughout.
    pub async fn delete_all_data(&mut self) -> AppResult<DeleteAllResult> {
        Ok(DeleteAllResult {
            units: self.units.delete_items(self.session).await?,
            converters: self.converters.delete_items(self.session).await?,
            cabinets: self.cabinets.delete_items(self.session).await?,
            locations: self.locations.delete_items(self.session).await?,
            production_lines: self.production_lines.delete_items(self.session).await?,
            mill_shops: self.mill_shops.delete_items(self.session).await?,
        })
    }
}
