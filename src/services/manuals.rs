//! Equipment-manual catalog service: CRUD over categories, groups and
//! manuals, substring search, the nested category tree, fixture seeding and
//! PDF upload with cover extraction.

use sqlx::Row;

use crate::cover::{self, Rasterizer};
use crate::error::AppResult;
use crate::models::manuals::{
    CategoryNestedSchema, CategoryRecord, CategorySchema, GroupNestedSchema, GroupRecord,
    GroupSchema, ManualNestedSchema, ManualRecord, ManualSchema,
};
use crate::objects::ObjectStore;
use crate::store::{DataManager, Session};

/// Result of a manual file upload: where the PDF and its extracted cover live.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UploadedManual {
    pub file_url: String,
    pub cover_image_url: String,
}

pub struct ManualService<'a> {
    session: &'a mut Session,
    manuals: DataManager<ManualRecord>,
    groups: DataManager<GroupRecord>,
    categories: DataManager<CategoryRecord>,
}

impl<'a> ManualService<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self {
            session,
            manuals: DataManager::new(),
            groups: DataManager::new(),
            categories: DataManager::new(),
        }
    }

    // -- listings --

    pub async fn get_manuals(&mut self) -> AppResult<Vec<ManualSchema>> {
        self.manuals.get_items(self.session).await
    }

    pub async fn get_groups(&mut self) -> AppResult<Vec<GroupSchema>> {
        self.groups.get_items(self.session).await
    }

    pub async fn get_groups_by_category(&mut self, category_id: i64) -> AppResult<Vec<GroupSchema>> {
        self.groups.get_items_by(self.session, "category_id", category_id).await
    }

    pub async fn get_categories(&mut self) -> AppResult<Vec<CategorySchema>> {
        self.categories.get_items(self.session).await
    }

    // -- search --

    pub async fn search_manuals(&mut self, q: &str) -> AppResult<Vec<ManualSchema>> {
        self.manuals.search_items(self.session, q).await
    }

    pub async fn search_groups(&mut self, q: &str) -> AppResult<Vec<GroupSchema>> {
        self.groups.search_items(self.session, q).await
    }

    pub async fn search_categories(&mut self, q: &str) -> AppResult<Vec<CategorySchema>> {
        self.categories.search_items(self.session, q).await
    }

    // -- writes --

    /// Inserts a manual. A missing cover URL is derived from the file URL, so
    /// every stored manual has one.
    pub async fn add_manual(&mut self, manual: &ManualSchema) -> AppResult<ManualSchema> {
        let cover = match &manual.cover_image_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => cover::derive_cover_url(&manual.file_url),
        };
        let record = ManualRecord::from_schema(manual, cover);
        self.manuals.add_item(self.session, &record).await
    }

    pub async fn add_group(&mut self, group: &GroupSchema) -> AppResult<GroupSchema> {
        self.groups.add_item(self.session, &GroupRecord::from_schema(group)).await
    }

    pub async fn add_category(&mut self, category: &CategorySchema) -> AppResult<CategorySchema> {
        self.categories.add_item(self.session, &CategoryRecord::from_schema(category)).await
    }

    pub async fn update_manual(
        &mut self,
        id: i64,
        manual: &ManualSchema,
    ) -> AppResult<Option<ManualSchema>> {
        let cover = match &manual.cover_image_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => cover::derive_cover_url(&manual.file_url),
        };
        let record = ManualRecord::from_schema(manual, cover);
        self.manuals.update_item(self.session, id, &record).await
    }

    pub async fn update_group(&mut self, id: i64, group: &GroupSchema) -> AppResult<Option<GroupSchema>> {
        self.groups.update_item(self.session, id, &GroupRecord::from_schema(group)).await
    }

    pub async fn update_category(
        &mut self,
        id: i64,
        category: &CategorySchema,
    ) -> AppResult<Option<CategorySchema>> {
        self.categories.update_item(self.session, id, &CategoryRecord::from_schema(category)).await
    }

    pub async fn delete_manual(&mut self, id: i64) -> AppResult<bool> {
        self.manuals.delete_item(self.session, id).await
    }

    pub async fn delete_manuals(&mut self) -> AppResult<bool> {
        self.manuals.delete_items(self.session).await
    }

    pub async fn delete_group(&mut self, id: i64) -> AppResult<bool> {
        self.groups.delete_item(self.session, id).await
    }

    pub async fn delete_category(&mut self, id: i64) -> AppResult<bool> {
        self.categories.delete_item(self.session, id).await
    }

    // -- nested tree --

    /// Materializes the full Category -> Group -> Manual tree from one
    /// eager-loaded query. Categories without groups and groups without
    /// manuals are preserved with empty child lists.
    pub async fn get_nested_manuals(&mut self) -> AppResult<Vec<CategoryNestedSchema>> {
        let rows = sqlx::query(
            r#"SELECT c.id AS category_id, c.category_name, c.logo_url,
                      g.id AS group_id, g.group_name,
                      m.id AS manual_id, m.title, m.file_url
               FROM categories c
               LEFT JOIN groups g ON g.category_id = c.id
               LEFT JOIN manuals m ON m.group_id = g.id
               ORDER BY c.id, g.id, m.id"#,
        )
        .fetch_all(self.session.conn())
        .await?;

        let mut result: Vec<CategoryNestedSchema> = Vec::new();
        for row in rows {
            let category_id: i64 = row.get("category_id");
            if result.last().map(|c| c.id) != Some(category_id) {
                result.push(CategoryNestedSchema {
                    id: category_id,
                    name: row.get("category_name"),
                    logo_url: row.get("logo_url"),
                    groups: Vec::new(),
                });
            }
            let category = result.last_mut().expect("category pushed above");

            let Some(group_id) = row.get::<Option<i64>, _>("group_id") else {
                continue;
            };
            if category.groups.last().map(|g| g.id) != Some(group_id) {
                category.groups.push(GroupNestedSchema {
                    id: group_id,
                    name: row.get("group_name"),
                    manuals: Vec::new(),
                });
            }
            let group = category.groups.last_mut().expect("group pushed above");

            let Some(manual_id) = row.get::<Option<i64>, _>("manual_id") else {
                continue;
            };
            group.manuals.push(ManualNestedSchema {
                id: manual_id,
                title: row.get("title"),
                file_url: row.get("file_url"),
                group_id,
            });
        }
        Ok(result)
    }

    // -- fixture seeding --

    pub async fn add_all_categories(&mut self, fixtures_dir: &str) -> AppResult<usize> {
        let items: Vec<CategorySchema> = super::load_fixture(fixtures_dir, "categories.json").await?;
        for item in &items {
            self.add_category(item).await?;
        }
        Ok(items.len())
    }

    pub async fn add_all_groups(&mut self, fixtures_dir: &str) -> AppResult<usize> {
        let items: Vec<GroupSchema> = super::load_fixture(fixtures_dir, "groups.json").await?;
        for item in &items {
            self.add_group(item).await?;
        }
        Ok(items.len())
    }

    pub async fn add_all_manuals(&mut self, fixtures_dir: &str) -> AppResult<usize> {
        let items: Vec<ManualSchema> = super::load_fixture(fixtures_dir, "manuals.json").await?;
        for item in &items {
            self.add_manual(item).await?;
        }
        Ok(items.len())
    }

    // -- upload --

    /// Stores an uploaded PDF in the object store, renders its first page and
    /// stores that as the cover image next to it.
    pub async fn upload_file(
        &mut self,
        objects: &ObjectStore,
        rasterizer: &dyn Rasterizer,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> AppResult<UploadedManual> {
        let png = rasterizer
            .first_page_png(&bytes)
            .await
            .map_err(|e| crate::error::AppError::BadRequest(format!("cover extraction failed: {}", e)))?;

        let pdf_key = ObjectStore::unique_key("manuals", file_name);
        let file_url = objects.put_object(&pdf_key, bytes).await?;

        let stem = file_name.rsplit_once('.').map(|(s, _)| s).unwrap_or(file_name);
        let cover_key = ObjectStore::unique_key("covers", &format!("{}.png", stem));
        let cover_image_url = objects.put_object(&cover_key, png).await?;

        Ok(UploadedManual { file_url, cover_image_url })
    }
}
