use std::env;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_sdk_s3::Client as S3Client;
use uuid::Uuid;

const DEFAULT_LOCALSTACK_ENDPOINT: &str = "http://localhost:4566";
const TEST_REGION: &str = "ca-central-1";

/// S3 client pointed at LocalStack with static test credentials
pub async fn localstack_s3_client() -> S3Client {
    let endpoint = env::var("LOCALSTACK_ENDPOINT")
        .unwrap_or_else(|_| DEFAULT_LOCALSTACK_ENDPOINT.to_string());

    let credentials = Credentials::from_keys(
        "test", // AWS_ACCESS_KEY_ID
        "test", // AWS_SECRET_ACCESS_KEY
        None,   // no session token
    );
    let config = aws_config::defaults(BehaviorVersion::latest())
        .endpoint_url(endpoint)
        .region(Region::new(TEST_REGION))
        .credentials_provider(credentials)
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&config)
        .force_path_style(true)
        .build();

    S3Client::from_conf(s3_config)
}

/// Creates a uniquely named bucket and returns its name
pub async fn create_test_bucket(s3_client: &S3Client) -> String {
    let bucket = format!("it-items-{}", Uuid::new_v4().simple());

    // Outside us-east-1 the location constraint is mandatory
    s3_client
        .create_bucket()
        .bucket(&bucket)
        .create_bucket_configuration(
            CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::CaCentral1)
                .build(),
        )
        .send()
        .await
        .expect("Failed to create test bucket");

    bucket
}

/// Download data from S3 using S3 client
pub async fn download_from_s3(
    s3_client: &S3Client,
    bucket: &str,
    key: &str,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let response = s3_client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await?;

    let body = response.body.collect().await?;
    Ok(body.into_bytes().to_vec())
}
