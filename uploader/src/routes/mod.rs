mod docs;
mod health;
/// Item upload endpoint
pub mod items;

use aide::axum::{
    routing::{get, post},
    ApiRouter,
};

use crate::types::Environment;

/// Creates the router with all handler routes
///
/// API docs are only mounted for stages that expose them.
pub fn handler(environment: &Environment) -> ApiRouter {
    let router = ApiRouter::new()
        .api_route("/health", get(health::handler))
        .api_route("/v1/items", post(items::create_item));

    if environment.show_api_docs() {
        router.merge(docs::handler())
    } else {
        router
    }
}
