use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use super::{ObjectRef, ObjectStorage};
use crate::errors::StorageError;

/// インメモリストレージに保存されたオブジェクト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: String,
}

/// テストやローカル実行用のインメモリストレージ
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    objects: RwLock<HashMap<ObjectRef, StoredObject>>,
    denied: RwLock<HashSet<String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// オブジェクトを直接配置する
    pub async fn insert(
        &self,
        container: &str,
        key: &str,
        body: impl Into<Bytes>,
        content_type: &str,
    ) {
        self.objects.write().await.insert(
            ObjectRef::new(container, key),
            StoredObject {
                body: body.into(),
                content_type: content_type.to_string(),
            },
        );
    }

    /// 指定したコンテナへのアクセスをすべて拒否する
    pub async fn deny(&self, container: &str) {
        self.denied.write().await.insert(container.to_string());
    }

    pub async fn object(&self, container: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .read()
            .await
            .get(&ObjectRef::new(container, key))
            .cloned()
    }

    /// 指定したコンテナに含まれるキーの一覧（ソート済み）
    pub async fn keys(&self, container: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .objects
            .read()
            .await
            .keys()
            .filter(|r| r.container == container)
            .map(|r| r.key.clone())
            .collect();
        keys.sort();
        keys
    }

    async fn is_denied(&self, container: &str) -> bool {
        self.denied.read().await.contains(container)
    }
}

#[async_trait]
impl ObjectStorage for InMemoryStorage {
    async fn get_object(&self, container: &str, key: &str) -> Result<Bytes, StorageError> {
        if self.is_denied(container).await {
            return Err(StorageError::AccessDenied {
                container: container.to_string(),
                key: key.to_string(),
            });
        }

        self.object(container, key)
            .await
            .map(|o| o.body)
            .ok_or_else(|| StorageError::NotFound {
                container: container.to_string(),
                key: key.to_string(),
            })
    }

    async fn put_object(
        &self,
        container: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        if self.is_denied(container).await {
            return Err(StorageError::WriteFailed {
                container: container.to_string(),
                key: key.to_string(),
                reason: "access denied".to_string(),
            });
        }

        self.insert(container, key, body, content_type).await;
        Ok(())
    }
}
