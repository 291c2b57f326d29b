use bytes::Bytes;
use image::ImageFormat;

use thumbnail_core::{
    apply_orientation, calculate_thumbnail_dimensions, decode_image, encode_jpeg, flatten_to_rgb,
    read_orientation, resize_image, validate_params, Orientation, ThumbnailParams, TransformError,
    THUMBNAIL_CONTENT_TYPE,
};

/// 生成されたサムネイル
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub body: Bytes,
    pub width: u32,
    pub height: u32,
    pub source_format: ImageFormat,
    pub source_width: u32,
    pub source_height: u32,
}

impl Thumbnail {
    pub fn content_type(&self) -> &'static str {
        THUMBNAIL_CONTENT_TYPE
    }
}

/// 画像バイト列からサムネイルを生成する。
///
/// EXIF Orientation を適用してから、幅・高さが `max_dimension` に収まるよう
/// アスペクト比を維持して縮小する（拡大はしない）。出力は常に JPEG で、
/// メタデータ (EXIF/XMP) はデコード・エンコードサイクルで削除される。
pub fn make_thumbnail(input: &[u8], params: &ThumbnailParams) -> Result<Thumbnail, TransformError> {
    validate_params(params.max_dimension, params.quality)?;

    let decoded = decode_image(input)?;

    let orientation = read_orientation(input).unwrap_or(Orientation::NoTransforms);
    let img = apply_orientation(decoded.image, orientation);

    let (src_w, src_h) = (img.width(), img.height());
    let (dst_w, dst_h) =
        calculate_thumbnail_dimensions(src_w, src_h, params.max_dimension, params.max_dimension);

    let rgb = flatten_to_rgb(&img);
    drop(img);

    // 寸法が変わらない場合はリサンプリングせずに再エンコードのみ
    let resized = if (dst_w, dst_h) != (src_w, src_h) {
        resize_image(&rgb, dst_w, dst_h)?
    } else {
        rgb
    };

    let body = encode_jpeg(&resized, params.quality)?;

    Ok(Thumbnail {
        body: Bytes::from(body),
        width: dst_w,
        height: dst_h,
        source_format: decoded.format,
        source_width: src_w,
        source_height: src_h,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage, RgbaImage};
    use std::io::Cursor;

    /// テスト用の画像を指定フォーマットでエンコードする
    pub(crate) fn encoded_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
        });
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img).write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    /// SOI の直後に EXIF Orientation だけを持つ APP1 セグメントを挿入する
    pub(crate) fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
        let mut tiff = vec![b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08];
        tiff.extend_from_slice(&1u16.to_be_bytes()); // エントリ数
        tiff.extend_from_slice(&0x0112u16.to_be_bytes()); // Orientation
        tiff.extend_from_slice(&3u16.to_be_bytes()); // SHORT
        tiff.extend_from_slice(&1u32.to_be_bytes());
        tiff.extend_from_slice(&orientation.to_be_bytes());
        tiff.extend_from_slice(&[0x00, 0x00]);
        tiff.extend_from_slice(&0u32.to_be_bytes()); // 次の IFD なし

        let mut app1 = b"Exif\0\0".to_vec();
        app1.extend_from_slice(&tiff);

        let mut out = jpeg[..2].to_vec();
        out.extend_from_slice(&[0xFF, 0xE1]);
        out.extend_from_slice(&((app1.len() + 2) as u16).to_be_bytes());
        out.extend_from_slice(&app1);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    pub(crate) fn decoded_dimensions(data: &[u8]) -> (ImageFormat, u32, u32) {
        let format = image::guess_format(data).unwrap();
        let img = image::load_from_memory(data).unwrap();
        (format, img.width(), img.height())
    }

    #[test]
    fn test_downscale_landscape_jpeg() {
        let input = encoded_image(4000, 3000, ImageFormat::Jpeg);
        let thumb = make_thumbnail(&input, &ThumbnailParams::default()).unwrap();

        assert_eq!((thumb.width, thumb.height), (128, 96));
        assert_eq!((thumb.source_width, thumb.source_height), (4000, 3000));
        assert_eq!(thumb.source_format, ImageFormat::Jpeg);
        assert_eq!(decoded_dimensions(&thumb.body), (ImageFormat::Jpeg, 128, 96));
    }

    #[test]
    fn test_downscale_portrait_png() {
        let input = encoded_image(300, 900, ImageFormat::Png);
        let thumb = make_thumbnail(&input, &ThumbnailParams::default()).unwrap();

        assert_eq!(decoded_dimensions(&thumb.body), (ImageFormat::Jpeg, 43, 128));
    }

    #[test]
    fn test_exif_orientation_applied_before_bound() {
        // 横長で保存されているが、EXIF では 90 度回転して表示する画像
        let input = with_exif_orientation(&encoded_image(300, 100, ImageFormat::Jpeg), 6);
        let thumb = make_thumbnail(&input, &ThumbnailParams::default()).unwrap();

        assert_eq!((thumb.source_width, thumb.source_height), (100, 300));
        assert_eq!((thumb.width, thumb.height), (43, 128));
        assert_eq!(decoded_dimensions(&thumb.body), (ImageFormat::Jpeg, 43, 128));
    }

    #[test]
    fn test_exif_orientation_small_image() {
        let input = with_exif_orientation(&encoded_image(60, 20, ImageFormat::Jpeg), 8);
        let thumb = make_thumbnail(&input, &ThumbnailParams::default()).unwrap();

        assert_eq!(decoded_dimensions(&thumb.body), (ImageFormat::Jpeg, 20, 60));
    }

    #[test]
    fn test_small_png_is_not_upscaled() {
        let input = encoded_image(50, 50, ImageFormat::Png);
        let thumb = make_thumbnail(&input, &ThumbnailParams::default()).unwrap();

        assert_eq!(thumb.source_format, ImageFormat::Png);
        assert_eq!(thumb.content_type(), "image/jpeg");
        assert_eq!(decoded_dimensions(&thumb.body), (ImageFormat::Jpeg, 50, 50));
    }

    #[test]
    fn test_transparent_png() {
        let img = RgbaImage::from_pixel(200, 100, image::Rgba([0, 0, 0, 0]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();

        let thumb = make_thumbnail(buf.get_ref(), &ThumbnailParams::default()).unwrap();
        assert_eq!((thumb.width, thumb.height), (128, 64));

        // 透過部分は白で塗られる
        let out = image::load_from_memory(&thumb.body).unwrap().to_rgb8();
        let [r, g, b] = out.get_pixel(64, 32).0;
        assert!(r > 245 && g > 245 && b > 245);
    }

    #[test]
    fn test_custom_bound() {
        let input = encoded_image(1000, 500, ImageFormat::Png);
        let thumb = make_thumbnail(&input, &ThumbnailParams::new(Some(200), Some(90))).unwrap();

        assert_eq!((thumb.width, thumb.height), (200, 100));
    }

    #[test]
    fn test_not_an_image() {
        let result = make_thumbnail(b"%PDF-1.7 not an image", &ThumbnailParams::default());
        assert!(matches!(result, Err(TransformError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_invalid_params() {
        let input = encoded_image(10, 10, ImageFormat::Png);
        let result = make_thumbnail(&input, &ThumbnailParams::new(Some(0), None));
        assert!(matches!(result, Err(TransformError::InvalidParams(_))));
    }
}
