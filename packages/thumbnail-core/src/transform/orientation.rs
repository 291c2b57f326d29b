use image::DynamicImage;
pub use image::metadata::Orientation;

/// バイト列から EXIF Orientation タグを読み取る
///
/// EXIF を持たない画像や値が範囲外の場合は `None`
pub fn read_orientation(data: &[u8]) -> Option<Orientation> {
    let mut cursor = std::io::Cursor::new(data);
    let exif = exif::Reader::new().read_from_container(&mut cursor).ok()?;

    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    let value = field.value.get_uint(0)?;

    Orientation::from_exif(u8::try_from(value).ok()?)
}

/// EXIF Orientation に基づいて画像を正立させる
pub fn apply_orientation(mut img: DynamicImage, orientation: Orientation) -> DynamicImage {
    if orientation != Orientation::NoTransforms {
        img.apply_orientation(orientation);
    }
    img
}
