use crate::constants::{DEFAULT_QUALITY, THUMBNAIL_MAX_DIMENSION};

/// サムネイル生成パラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailParams {
    /// 幅・高さの上限
    pub max_dimension: u32,
    /// JPEG 品質（1-100）
    pub quality: u8,
}

impl ThumbnailParams {
    /// 未指定の項目はデフォルト値で補う
    pub fn new(max_dimension: Option<u32>, quality: Option<u8>) -> Self {
        Self {
            max_dimension: max_dimension.unwrap_or(THUMBNAIL_MAX_DIMENSION),
            quality: quality.unwrap_or(DEFAULT_QUALITY),
        }
    }
}

impl Default for ThumbnailParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}
