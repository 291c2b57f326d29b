mod types;

pub use types::{NotificationError, StorageError, ThumbnailError, TransformError};
