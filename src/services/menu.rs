//! Site navigation menu.

use crate::error::AppResult;
use crate::models::menu::{MenuItemRecord, MenuItemSchema};
use crate::store::{DataManager, Session};

pub struct MenuService<'a> {
    session: &'a mut Session,
    items: DataManager<MenuItemRecord>,
}

impl<'a> MenuService<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session, items: DataManager::new() }
    }

    pub async fn get_menu_items(&mut self) -> AppResult<Vec<MenuItemSchema>> {
        self.items.get_items(self.session).await
    }
}
