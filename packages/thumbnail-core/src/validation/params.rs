use crate::constants::MAX_DIMENSION;
use crate::errors::TransformError;

/// サムネイルパラメータを検証する
pub fn validate_params(max_dimension: u32, quality: u8) -> Result<(), TransformError> {
    // 品質の検証
    if quality == 0 || quality > 100 {
        return Err(TransformError::InvalidParams(format!(
            "quality must be 1-100, got {quality}"
        )));
    }

    // 寸法の検証
    if max_dimension == 0 || max_dimension > MAX_DIMENSION {
        return Err(TransformError::InvalidParams(format!(
            "max dimension must be 1-{MAX_DIMENSION}, got {max_dimension}"
        )));
    }

    Ok(())
}
