use bazaar_config::config;
use rocket::serde::json::Json;
use schemars::JsonSchema;
use serde::Serialize;

/// # Node Configuration
#[derive(Serialize, JsonSchema, Debug)]
pub struct ApiConfig {
    /// Version of this node
    pub version: String,
    /// URL pointing to the client serving this node
    pub app: String,
}

/// # Query Node
///
/// Fetch metadata about this API node.
#[openapi(tag = "Core")]
#[get("/")]
pub async fn root() -> Json<ApiConfig> {
    let config = config().await;

    Json(ApiConfig {
        version: env!("CARGO_PKG_VERSION").to_string(),
        app: config.hosts.app,
    })
}
