/// サムネイルの最大寸法（幅・高さ）のデフォルト値
pub const THUMBNAIL_MAX_DIMENSION: u32 = 128;

/// 設定で許可する最大寸法の上限
pub const MAX_DIMENSION: u32 = 4096;

/// ソース画像の最大ピクセル数（100MP、Lambda のメモリに収まる範囲）
pub const MAX_PIXELS: u64 = 100_000_000;

/// デコード時に 1 ピクセルあたり確保を許可するバイト数（RGBA 16bit）
pub const MAX_BYTES_PER_PIXEL: u64 = 8;

/// デフォルト JPEG 品質（1-100）
pub const DEFAULT_QUALITY: u8 = 75;

/// 出力キーの接頭辞
pub const RESIZED_KEY_PREFIX: &str = "resized_";

/// オブジェクトキーの最大長（バイト）
pub const MAX_KEY_LENGTH: usize = 1024;

/// サムネイルの Content-Type
pub const THUMBNAIL_CONTENT_TYPE: &str = "image/jpeg";
