use async_trait::async_trait;
use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;

use thumbnail_core::{ObjectStorage, StorageError};

/// aws-sdk-s3 を使った ObjectStorage 実装
#[derive(Clone, Debug)]
pub struct S3Storage {
    client: S3Client,
}

impl S3Storage {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

/// GetObject のエラーを StorageError に変換する
fn map_get_error(err: SdkError<GetObjectError>, container: &str, key: &str) -> StorageError {
    let status = err.raw_response().map(|r| r.status().as_u16());
    let service_err = match err {
        SdkError::ServiceError(e) => e.into_err(),
        other => return StorageError::Internal(other.to_string()),
    };

    match service_err {
        GetObjectError::NoSuchKey(_) => StorageError::NotFound {
            container: container.to_string(),
            key: key.to_string(),
        },
        e if e.code() == Some("NoSuchBucket") || status == Some(404) => StorageError::NotFound {
            container: container.to_string(),
            key: key.to_string(),
        },
        e if e.code() == Some("AccessDenied") || status == Some(403) => {
            StorageError::AccessDenied {
                container: container.to_string(),
                key: key.to_string(),
            }
        }
        e => StorageError::Internal(format!(
            "GetObject failed: {}",
            e.message().unwrap_or("unknown error")
        )),
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn get_object(&self, container: &str, key: &str) -> Result<Bytes, StorageError> {
        let output = self
            .client
            .get_object()
            .bucket(container)
            .key(key)
            .send()
            .await
            .map_err(|e| map_get_error(e, container, key))?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Internal(format!("failed to read object body: {e}")))?;

        Ok(body.into_bytes())
    }

    async fn put_object(
        &self,
        container: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(container)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                let reason = match e.as_service_error() {
                    Some(service_err) => format!(
                        "{}: {}",
                        service_err.code().unwrap_or("Unknown"),
                        service_err.message().unwrap_or("no message")
                    ),
                    None => e.to_string(),
                };
                StorageError::WriteFailed {
                    container: container.to_string(),
                    key: key.to_string(),
                    reason,
                }
            })?;

        Ok(())
    }
}
