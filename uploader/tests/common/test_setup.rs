use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use tower::ServiceExt;
use uploader::{
    items::Deps,
    object_store::{mock::RecordingObjectStore, ObjectStore},
    server,
    types::Environment,
};

pub const TEST_BUCKET: &str = "test-bucket";

/// Setup test environment variables with all the required configuration
pub fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.example").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Router wired to an in-memory object store
pub struct TestSetup {
    pub router: Router,
    pub store: Arc<RecordingObjectStore>,
}

impl TestSetup {
    pub fn new() -> Self {
        Self::with_store(RecordingObjectStore::new())
    }

    /// Every write is rejected with `message`
    pub fn failing(message: &str) -> Self {
        Self::with_store(RecordingObjectStore::failing(message))
    }

    fn with_store(store: RecordingObjectStore) -> Self {
        setup_test_env();

        let store = Arc::new(store);
        let dyn_store: Arc<dyn ObjectStore> = store.clone();
        let deps = Deps::new(dyn_store, TEST_BUCKET.to_string());

        let environment = Environment::Development {
            endpoint_override: None,
        };

        Self {
            router: server::router(environment, deps),
            store,
        }
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_raw_post_request(route, payload.to_string()).await
    }

    pub async fn send_raw_post_request(
        &self,
        route: &str,
        body: String,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(body))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
