pub mod memory;

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;

pub use memory::{InMemoryStorage, StoredObject};
// StorageError は errors モジュールで定義済み
pub use crate::errors::StorageError;

/// ストレージ上のオブジェクトの位置（コンテナ名とキー）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    pub container: String,
    pub key: String,
}

impl ObjectRef {
    pub fn new(container: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.container, self.key)
    }
}

/// オブジェクトストレージの読み書き
///
/// ハンドラはこのトレイト越しにストレージへアクセスするため、
/// S3 とインメモリ実装を差し替えられる。
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// オブジェクトの内容をすべて読み込む
    async fn get_object(&self, container: &str, key: &str) -> Result<Bytes, StorageError>;

    /// オブジェクトを書き込む（既存のオブジェクトは上書き）
    async fn put_object(
        &self,
        container: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError>;
}
