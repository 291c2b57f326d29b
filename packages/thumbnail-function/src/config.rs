use thumbnail_core::{
    validate_params, ThumbnailParams, DEFAULT_QUALITY, RESIZED_KEY_PREFIX, THUMBNAIL_MAX_DIMENSION,
};

/// 設定読み込みエラー
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has invalid value `{value}`: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Lambda 関数の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    pub destination_bucket: String,
    pub key_prefix: String,
    pub params: ThumbnailParams,
}

impl FunctionConfig {
    /// 環境変数から設定を読み込む
    ///
    /// 必須の環境変数:
    /// - DESTINATION_BUCKET
    ///
    /// 任意の環境変数:
    /// - THUMBNAIL_MAX_DIMENSION (デフォルト 128)
    /// - THUMBNAIL_QUALITY (デフォルト 75)
    /// - THUMBNAIL_KEY_PREFIX (デフォルト `resized_`、空文字は不可)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let destination_bucket = required("DESTINATION_BUCKET")?;

        let max_dimension = parse_optional::<u32>(&lookup, "THUMBNAIL_MAX_DIMENSION")?
            .unwrap_or(THUMBNAIL_MAX_DIMENSION);
        let quality =
            parse_optional::<u8>(&lookup, "THUMBNAIL_QUALITY")?.unwrap_or(DEFAULT_QUALITY);
        validate_params(max_dimension, quality).map_err(|e| ConfigError::Invalid {
            name: "THUMBNAIL_MAX_DIMENSION/THUMBNAIL_QUALITY",
            value: format!("{max_dimension}/{quality}"),
            reason: e.to_string(),
        })?;

        // 空の接頭辞だと出力キーが入力キーと同じになり、同一バケットでは
        // 書き込みが再びトリガーされ続ける
        let key_prefix =
            lookup("THUMBNAIL_KEY_PREFIX").unwrap_or_else(|| RESIZED_KEY_PREFIX.to_string());
        if key_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid {
                name: "THUMBNAIL_KEY_PREFIX",
                value: key_prefix,
                reason: "prefix must not be empty".to_string(),
            });
        }

        Ok(Self {
            destination_bucket,
            key_prefix,
            params: ThumbnailParams::new(Some(max_dimension), Some(quality)),
        })
    }
}

fn parse_optional<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Invalid {
                name,
                reason: e.to_string(),
                value,
            }),
    }
}
