use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use tracing_subscriber::{fmt, EnvFilter};
use uploader::{
    items::Deps,
    object_store::{ObjectStore, S3ObjectStore},
    server,
    types::Environment,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // JSON logs for deployed stages, human-readable output for development
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    tracing::info!("Starting Item Uploader in {:?} environment", environment);

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let store: Arc<dyn ObjectStore> = Arc::new(S3ObjectStore::new(s3_client));
    let deps = Deps::new(store, environment.items_bucket());

    tracing::info!("✅ Initialized object store for bucket: {}", deps.bucket);

    server::start(environment, deps).await
}
