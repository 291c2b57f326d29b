pub mod key;
pub mod params;

pub use key::decode_object_key;
pub use params::validate_params;
