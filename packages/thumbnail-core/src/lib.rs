pub mod constants;
pub mod errors;
pub mod storage;
pub mod transform;
pub mod validation;

// 公開API
pub use constants::{
    DEFAULT_QUALITY, MAX_BYTES_PER_PIXEL, MAX_DIMENSION, MAX_KEY_LENGTH, MAX_PIXELS, RESIZED_KEY_PREFIX,
    THUMBNAIL_CONTENT_TYPE, THUMBNAIL_MAX_DIMENSION,
};
pub use errors::{NotificationError, StorageError, ThumbnailError, TransformError};
pub use storage::{InMemoryStorage, ObjectRef, ObjectStorage, StoredObject};
pub use transform::{
    apply_orientation, calculate_thumbnail_dimensions, decode_image, encode_jpeg, flatten_to_rgb,
    read_orientation, resize_image, DecodedImage, Orientation, ThumbnailParams,
};
pub use validation::{decode_object_key, validate_params};
