//! S3-compatible object storage for uploaded files.
//!
//! Bucket-scoped put/get/list/delete over any endpoint speaking the S3 API
//! (AWS, Yandex Object Storage, MinIO). Every stored key resolves to a stable
//! public URL under the configured base.

use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{Delete, ObjectIdentifier};
use uuid::Uuid;

use crate::config::ObjectStoreConfig;
use crate::error::{AppError, AppResult};

pub struct ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl ObjectStore {
    /// Builds a client against the configured endpoint. Credentials come from
    /// the standard AWS environment/profile chain.
    pub async fn from_config(cfg: &ObjectStoreConfig) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(cfg.region.clone()))
            .endpoint_url(cfg.endpoint.clone())
            .load()
            .await;
        Self {
            client: aws_sdk_s3::Client::new(&shared),
            bucket: cfg.bucket.clone(),
            public_base_url: cfg.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The stable, publicly resolvable URL for a stored key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, self.bucket, key)
    }

    /// Uniquifies a file name with a UUID prefix, optionally under a folder.
    pub fn unique_key(folder: &str, file_name: &str) -> String {
        let unique = format!("{}_{}", Uuid::new_v4(), file_name);
        if folder.is_empty() {
            unique
        } else {
            format!("{}/{}", folder.trim_end_matches('/'), unique)
        }
    }

    /// Stores a byte payload under `key` and returns its public URL.
    pub async fn put_object(&self, key: &str, body: Vec<u8>) -> AppResult<String> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| AppError::ObjectStore(format!("put {}: {}", key, e)))?;
        Ok(self.public_url(key))
    }

    /// Fetches a stored object. Absence is a 404 at the boundary.
    pub async fn get_object(&self, key: &str) -> AppResult<Vec<u8>> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|_| AppError::NotFound("File not found".to_string()))?;
        let data = resp
            .body
            .collect()
            .await
            .map_err(|e| AppError::ObjectStore(format!("read {}: {}", key, e)))?;
        Ok(data.into_bytes().to_vec())
    }

    /// Lists every key in the bucket.
    pub async fn list_objects(&self) -> AppResult<Vec<String>> {
        let resp = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| AppError::ObjectStore(format!("list: {}", e)))?;
        Ok(resp
            .contents()
            .iter()
            .filter_map(|o| o.key().map(String::from))
            .collect())
    }

    /// Deletes a batch of keys.
    pub async fn delete_objects(&self, keys: &[String]) -> AppResult<()> {
        if keys.is_empty() {
            return Ok(());
        }
        let objects: Vec<ObjectIdentifier> = keys
            .iter()
            .map(|k| {
                ObjectIdentifier::builder()
                    .key(k)
                    .build()
                    .map_err(|e| AppError::ObjectStore(format!("bad key {}: {}", k, e)))
            })
            .collect::<AppResult<_>>()?;
        let delete = Delete::builder()
            .set_objects(Some(objects))
            .build()
            .map_err(|e| AppError::ObjectStore(format!("delete batch: {}", e)))?;
        self.client
            .delete_objects()
            .bucket(&self.bucket)
            .delete(delete)
            .send()
            .await
            .map_err(|e| AppError::ObjectStore(format!("delete: {}", e)))?;
        Ok(())
    }
}
