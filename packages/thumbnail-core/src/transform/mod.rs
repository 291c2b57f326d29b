pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod orientation;
pub mod params;
pub mod resize;

pub use decode::{decode_image, DecodedImage};
pub use dimensions::calculate_thumbnail_dimensions;
pub use encode::{encode_jpeg, flatten_to_rgb};
pub use orientation::{apply_orientation, read_orientation, Orientation};
pub use params::ThumbnailParams;
pub use resize::resize_image;
