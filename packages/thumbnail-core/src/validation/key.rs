use crate::constants::MAX_KEY_LENGTH;
use crate::errors::NotificationError;

/// S3 通知に含まれるオブジェクトキーをデコード・検証する
///
/// 通知のキーは URL エンコードされており、スペースは `+` で表現される。
/// `+` を先に置換してからデコードするため、`%2B` はリテラルの `+` になる。
pub fn decode_object_key(raw: &str) -> Result<String, NotificationError> {
    if raw.is_empty() {
        return Err(NotificationError::InvalidKey("key is empty".to_string()));
    }

    let decoded = urlencoding::decode(&raw.replace('+', " "))
        .map_err(|_| NotificationError::InvalidKey("invalid URL encoding".to_string()))?
        .into_owned();

    if decoded.is_empty() {
        return Err(NotificationError::InvalidKey("key is empty".to_string()));
    }

    if decoded.len() > MAX_KEY_LENGTH {
        return Err(NotificationError::InvalidKey(format!(
            "key is too long (max {MAX_KEY_LENGTH})"
        )));
    }

    Ok(decoded)
}
