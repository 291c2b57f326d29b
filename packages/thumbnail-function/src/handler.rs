use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;

use thumbnail_core::{
    NotificationError, ObjectStorage, StorageError, ThumbnailError, TransformError,
};

use crate::notification::object_refs;
use crate::processor::ThumbnailProcessor;

/// Lambda の戻り値
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ResizeResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// S3 通知を受け取り、含まれるすべてのオブジェクトのサムネイルを生成する。
///
/// レコードは順番に処理し、最初に失敗したレコードで呼び出し全体を失敗させる。
/// 再試行は Lambda の非同期呼び出しの再試行ポリシーに任せる（出力キーは
/// 元のキーから決まるため、再実行しても同じオブジェクトを上書きするだけ）。
pub(crate) async fn function_handler<S: ObjectStorage + ?Sized>(
    event: LambdaEvent<S3Event>,
    processor: &ThumbnailProcessor<S>,
) -> Result<ResizeResponse, Error> {
    let request_id = event.context.request_id.clone();
    let response = handle_event(&event.payload, processor)
        .await
        .inspect_err(|err| log_failure(&request_id, err))?;
    Ok(response)
}

async fn handle_event<S: ObjectStorage + ?Sized>(
    event: &S3Event,
    processor: &ThumbnailProcessor<S>,
) -> Result<ResizeResponse, ThumbnailError> {
    let sources = object_refs(event)?;
    if sources.len() > 1 {
        tracing::info!(records = sources.len(), "notification contains multiple records");
    }

    let mut messages = Vec::with_capacity(sources.len());
    for source in &sources {
        if processor.is_own_output(source) {
            tracing::info!(container = %source.container, key = %source.key, "skipping generated thumbnail");
            messages.push(format!("Image {} is a generated thumbnail, skipped", source.key));
            continue;
        }

        let processed = processor.process(source).await?;
        messages.push(format!(
            "Image {} successfully resized to {}x{} and saved to {}",
            processed.source.key, processed.width, processed.height, processed.destination
        ));
    }

    Ok(ResizeResponse {
        status_code: 200,
        body: messages.join("\n"),
    })
}

/// 失敗の種類に応じたレベルでログを出す
fn log_failure(request_id: &str, err: &ThumbnailError) {
    match err {
        ThumbnailError::Notification(e) => match e {
            NotificationError::NoRecords => {
                tracing::warn!(request_id = %request_id, "notification contains no records")
            }
            other => tracing::warn!(request_id = %request_id, error = %other, "malformed notification"),
        },
        ThumbnailError::Storage(e) => match e {
            StorageError::NotFound { container, key } => {
                tracing::warn!(request_id = %request_id, container = %container, key = %key, "source object not found")
            }
            StorageError::AccessDenied { container, key } => {
                tracing::error!(request_id = %request_id, container = %container, key = %key, "access denied (check function role permissions)")
            }
            StorageError::WriteFailed { container, key, reason } => {
                tracing::error!(request_id = %request_id, container = %container, key = %key, reason = %reason, "failed to write thumbnail")
            }
            StorageError::Internal(msg) => {
                tracing::error!(request_id = %request_id, error = %msg, "storage error")
            }
        },
        ThumbnailError::Transform(e) => match e {
            TransformError::UnsupportedFormat(msg) => {
                tracing::warn!(request_id = %request_id, error = %msg, "source object is not a supported image")
            }
            TransformError::ResolutionTooLarge { width, height } => {
                tracing::warn!(request_id = %request_id, width = %width, height = %height, "image resolution too large")
            }
            TransformError::InvalidParams(msg) => {
                tracing::error!(request_id = %request_id, error = %msg, "invalid thumbnail parameters")
            }
            TransformError::ProcessingFailed(msg) => {
                tracing::error!(request_id = %request_id, error = %msg, "image processing failed")
            }
        },
    }
}
