use std::sync::Arc;

use thumbnail_core::{ObjectRef, ObjectStorage, ThumbnailError, ThumbnailParams};

use crate::config::FunctionConfig;
use crate::transform::make_thumbnail;

/// 1 オブジェクト分の処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedObject {
    pub source: ObjectRef,
    pub destination: ObjectRef,
    pub width: u32,
    pub height: u32,
}

/// 元画像を読み込み、サムネイルを生成して出力先へ書き込む
///
/// 状態を持たないため、同じインスタンスを複数の呼び出しで共有できる
pub struct ThumbnailProcessor<S: ObjectStorage + ?Sized> {
    storage: Arc<S>,
    destination_bucket: String,
    key_prefix: String,
    params: ThumbnailParams,
}

impl<S: ObjectStorage + ?Sized> ThumbnailProcessor<S> {
    pub fn new(
        storage: Arc<S>,
        destination_bucket: impl Into<String>,
        key_prefix: impl Into<String>,
        params: ThumbnailParams,
    ) -> Self {
        Self {
            storage,
            destination_bucket: destination_bucket.into(),
            key_prefix: key_prefix.into(),
            params,
        }
    }

    pub fn from_config(storage: Arc<S>, config: &FunctionConfig) -> Self {
        Self::new(
            storage,
            config.destination_bucket.clone(),
            config.key_prefix.clone(),
            config.params,
        )
    }

    /// 出力先のキー（接頭辞 + 元のキー）
    pub fn destination_key(&self, source_key: &str) -> String {
        format!("{}{}", self.key_prefix, source_key)
    }

    /// 自分が書き込んだサムネイルかどうか
    ///
    /// 出力先が入力と同じバケットの場合、書き込みが再び通知されるため
    /// 接頭辞付きのキーは処理しない
    pub fn is_own_output(&self, source: &ObjectRef) -> bool {
        source.container == self.destination_bucket && source.key.starts_with(&self.key_prefix)
    }

    /// 1 オブジェクトを処理する。書き込みは最後の 1 回だけなので、
    /// 途中で失敗した場合は何も書き込まれない。
    pub async fn process(&self, source: &ObjectRef) -> Result<ProcessedObject, ThumbnailError> {
        tracing::info!(container = %source.container, key = %source.key, "fetching source object");
        let input = self
            .storage
            .get_object(&source.container, &source.key)
            .await?;

        tracing::info!(
            key = %source.key,
            bytes = input.len(),
            max = self.params.max_dimension,
            q = self.params.quality,
            "creating thumbnail"
        );
        let thumbnail = make_thumbnail(&input, &self.params)?;
        drop(input);

        let destination = ObjectRef::new(
            self.destination_bucket.as_str(),
            self.destination_key(&source.key),
        );
        tracing::info!(
            container = %destination.container,
            key = %destination.key,
            src_format = ?thumbnail.source_format,
            src_w = thumbnail.source_width,
            src_h = thumbnail.source_height,
            w = thumbnail.width,
            h = thumbnail.height,
            bytes = thumbnail.body.len(),
            "writing thumbnail"
        );
        self.storage
            .put_object(
                &destination.container,
                &destination.key,
                thumbnail.body.clone(),
                thumbnail.content_type(),
            )
            .await?;

        Ok(ProcessedObject {
            source: source.clone(),
            destination,
            width: thumbnail.width,
            height: thumbnail.height,
        })
    }
}
