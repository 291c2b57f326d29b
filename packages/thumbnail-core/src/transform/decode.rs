use crate::constants::{MAX_BYTES_PER_PIXEL, MAX_PIXELS};
use crate::errors::TransformError;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, Limits};
use std::io::Cursor;

/// デコード済み画像と元のフォーマット
#[derive(Debug)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

/// デコード時のメモリ上限（MAX_PIXELS 分の RGBA 16bit バッファ）
fn default_limits() -> Limits {
    let mut limits = Limits::default();
    limits.max_alloc = Some(MAX_PIXELS * MAX_BYTES_PER_PIXEL);
    limits
}

/// 画像バイト列をデコードする
///
/// フォーマットはマジックナンバーから推測する。推測できない場合や
/// デコードに失敗した場合は `UnsupportedFormat`、ピクセル数やメモリ上限を
/// 超える場合は `ResolutionTooLarge` を返す。
pub fn decode_image(data: &[u8]) -> Result<DecodedImage, TransformError> {
    decode_with_limits(data, default_limits())
}

fn decode_with_limits(data: &[u8], limits: Limits) -> Result<DecodedImage, TransformError> {
    let format = image::guess_format(data)
        .map_err(|e| TransformError::UnsupportedFormat(format!("unrecognized image format: {e}")))?;

    // ヘッダだけ読んでピクセル数を検証し、巨大画像のデコードを避ける
    // （ヘッダの読み取りでは画素バッファを確保しないため上限は外す）
    let mut header = ImageReader::with_format(Cursor::new(data), format);
    header.no_limits();
    let (width, height) = header
        .into_dimensions()
        .map_err(|e| TransformError::UnsupportedFormat(format!("{format:?}: {e}")))?;
    if width as u64 * height as u64 > MAX_PIXELS {
        return Err(TransformError::ResolutionTooLarge { width, height });
    }

    let mut reader = ImageReader::with_format(Cursor::new(data), format);
    reader.limits(limits);
    let image = reader.decode().map_err(|e| match e {
        ImageError::Limits(_) => TransformError::ResolutionTooLarge { width, height },
        e => TransformError::UnsupportedFormat(format!("{format:?}: {e}")),
    })?;

    Ok(DecodedImage { image, format })
}
