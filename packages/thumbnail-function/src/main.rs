use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{run, service_fn, Error};
use tracing_subscriber::EnvFilter;

mod config;
mod handler;
mod notification;
mod processor;
mod storage;
mod transform;

use config::FunctionConfig;
use handler::function_handler;
use processor::ThumbnailProcessor;
use storage::S3Storage;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch がタイムスタンプを付与するため時刻は出力しない
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_current_span(false)
        .without_time()
        .init();

    let config = FunctionConfig::from_env()?;
    tracing::info!(
        destination = %config.destination_bucket,
        prefix = %config.key_prefix,
        max = config.params.max_dimension,
        q = config.params.quality,
        "starting thumbnail function"
    );

    let shared_config = aws_config::load_from_env().await;
    let storage = Arc::new(S3Storage::new(S3Client::new(&shared_config)));

    let processor = ThumbnailProcessor::from_config(storage, &config);
    run(service_fn(|event| function_handler(event, &processor))).await
}
