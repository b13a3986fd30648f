//! Warehouse storage inventory: locations and their equipment.

use crate::error::AppResult;
use crate::models::storage::{
    StorageEquipmentRecord, StorageEquipmentSchema, StorageLocationRecord, StorageLocationSchema,
};
use crate::store::{DataManager, Session};

pub struct StorageService<'a> {
    session: &'a mut Session,
    locations: DataManager<StorageLocationRecord>,
    equipment: DataManager<StorageEquipmentRecord>,
}

impl<'a> StorageService<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session, locations: DataManager::new(), equipment: DataManager::new() }
    }

    pub async fn get_locations(&mut self) -> AppResult<Vec<StorageLocationSchema>> {
        self.locations.get_items(self.session).await
    }

    pub async fn get_equipment(&mut self) -> AppResult<Vec<StorageEquipmentSchema>> {
        self.equipment.get_items(self.session).await
    }

    pub async fn get_equipment_by_location(
        &mut self,
        location_id: i64,
    ) -> AppResult<Vec<StorageEquipmentSchema>> {
        self.equipment.get_items_by(self.session, "location_id", location_id).await
    }
}
