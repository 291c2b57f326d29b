use aws_lambda_events::event::s3::S3Event;
use thumbnail_core::{decode_object_key, NotificationError, ObjectRef};

/// S3 通知から処理対象のオブジェクト一覧を取り出す
///
/// すべてのレコードを検証し、バケット名・キーが欠けているレコードが
/// 一つでもあれば通知全体を不正として扱う。キーは URL デコード済み。
pub fn object_refs(event: &S3Event) -> Result<Vec<ObjectRef>, NotificationError> {
    if event.records.is_empty() {
        return Err(NotificationError::NoRecords);
    }

    event
        .records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let container = record
                .s3
                .bucket
                .name
                .as_deref()
                .filter(|name| !name.is_empty())
                .ok_or(NotificationError::MissingBucket { index })?;
            let raw_key = record
                .s3
                .object
                .key
                .as_deref()
                .filter(|key| !key.is_empty())
                .ok_or(NotificationError::MissingKey { index })?;

            Ok(ObjectRef::new(container, decode_object_key(raw_key)?))
        })
        .collect()
}
