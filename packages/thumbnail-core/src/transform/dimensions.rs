/// 縮小倍率を計算する（拡大はしない）
///
/// アスペクト比を維持しつつ、`max_w`×`max_h` の領域に収まる最大の倍率を返す（最大1.0）
fn calculate_scale_factor(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> f64 {
    let scale_w = max_w as f64 / src_w as f64;
    let scale_h = max_h as f64 / src_h as f64;

    scale_w.min(scale_h).min(1.0)
}

/// 倍率を適用して新しい寸法を計算する
fn apply_scale(src_w: u32, src_h: u32, scale: f64) -> (u32, u32) {
    let new_w = (src_w as f64 * scale).round() as u32;
    let new_h = (src_h as f64 * scale).round() as u32;

    // 最小1pxを保証
    (new_w.max(1), new_h.max(1))
}

/// サムネイルの寸法を計算する
///
/// 幅・高さのどちらも上限を超えないように縮小する。上限に収まっている
/// 画像は元の寸法のまま返す。
pub fn calculate_thumbnail_dimensions(
    src_w: u32,
    src_h: u32,
    max_w: u32,
    max_h: u32,
) -> (u32, u32) {
    if src_w <= max_w && src_h <= max_h {
        return (src_w, src_h);
    }

    let scale = calculate_scale_factor(src_w, src_h, max_w, max_h);
    let (w, h) = apply_scale(src_w, src_h, scale);

    // 丸め誤差で上限を 1px 超えないようにする
    (w.min(max_w), h.min(max_h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_scale_factor() {
        // 横長画像を正方形領域に収める
        let scale = calculate_scale_factor(1000, 500, 400, 400);
        assert_eq!(scale, 0.4);

        // 縦長画像を正方形領域に収める
        let scale = calculate_scale_factor(500, 1000, 400, 400);
        assert_eq!(scale, 0.4);

        // 拡大は防止
        let scale = calculate_scale_factor(100, 100, 200, 200);
        assert_eq!(scale, 1.0);
    }

    #[test]
    fn test_apply_scale() {
        let (w, h) = apply_scale(1000, 500, 0.4);
        assert_eq!((w, h), (400, 200));

        // 最小1pxを保証
        let (w, h) = apply_scale(10, 10, 0.05);
        assert_eq!((w, h), (1, 1));
    }

    #[test]
    fn test_landscape_thumbnail() {
        assert_eq!(calculate_thumbnail_dimensions(4000, 3000, 128, 128), (128, 96));
        assert_eq!(calculate_thumbnail_dimensions(1920, 1080, 128, 128), (128, 72));
    }

    #[test]
    fn test_portrait_thumbnail() {
        assert_eq!(calculate_thumbnail_dimensions(3000, 4000, 128, 128), (96, 128));
    }

    #[test]
    fn test_one_side_over_limit() {
        assert_eq!(calculate_thumbnail_dimensions(256, 100, 128, 128), (128, 50));
        assert_eq!(calculate_thumbnail_dimensions(100, 129, 128, 128), (99, 128));
    }

    #[test]
    fn test_no_upscale() {
        assert_eq!(calculate_thumbnail_dimensions(50, 50, 128, 128), (50, 50));
        assert_eq!(calculate_thumbnail_dimensions(128, 128, 128, 128), (128, 128));
        assert_eq!(calculate_thumbnail_dimensions(1, 128, 128, 128), (1, 128));
    }

    #[test]
    fn test_extreme_aspect_ratio() {
        // 極端に細長い画像でも 1px は残す
        assert_eq!(calculate_thumbnail_dimensions(10000, 10, 128, 128), (128, 1));
    }

    #[test]
    fn test_longer_side_is_bound() {
        for (w, h) in [(129, 7), (500, 499), (4096, 4095), (333, 1000), (7001, 3)] {
            let (tw, th) = calculate_thumbnail_dimensions(w, h, 128, 128);
            assert_eq!(tw.max(th), 128, "{w}x{h} -> {tw}x{th}");

            // アスペクト比は丸め誤差の範囲で維持される
            let src_ratio = w as f64 / h as f64;
            let dst_ratio = tw as f64 / th as f64;
            let tolerance = src_ratio * (1.0 / tw.min(th) as f64);
            assert!(
                (src_ratio - dst_ratio).abs() <= tolerance,
                "{w}x{h} -> {tw}x{th}"
            );
        }
    }
}
