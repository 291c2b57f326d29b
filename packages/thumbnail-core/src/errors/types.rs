use thiserror::Error;

/// サムネイル生成の統合エラー型
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("malformed notification: {0}")]
    Notification(#[from] NotificationError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

/// 通知ペイロードの検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotificationError {
    #[error("notification contains no records")]
    NoRecords,

    #[error("record {index} has no bucket name")]
    MissingBucket { index: usize },

    #[error("record {index} has no object key")]
    MissingKey { index: usize },

    #[error("invalid object key: {0}")]
    InvalidKey(String),
}

/// ストレージアクセスエラー
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {container}/{key}")]
    NotFound { container: String, key: String },

    #[error("access denied: {container}/{key}")]
    AccessDenied { container: String, key: String },

    #[error("failed to write {container}/{key}: {reason}")]
    WriteFailed {
        container: String,
        key: String,
        reason: String,
    },

    #[error("storage error: {0}")]
    Internal(String),
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}
