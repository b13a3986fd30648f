//! Blog-style posts, read-only over the API.

use crate::error::AppResult;
use crate::models::posts::{PostRecord, PostSchema};
use crate::store::{DataManager, Session};

pub struct PostService<'a> {
    session: &'a mut Session,
    posts: DataManager<PostRecord>,
}

impl<'a> PostService<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session, posts: DataManager::new() }
    }

    pub async fn get_post(&mut self, post_id: i64) -> AppResult<Option<PostSchema>> {
        self.posts.get_item(self.session, post_id).await
    }

    pub async fn get_posts(&mut self) -> AppResult<Vec<PostSchema>> {
        self.posts.get_items(self.session).await
    }
}
