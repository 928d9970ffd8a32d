#![allow(dead_code)]

use aws_credential_types::Credentials;
use aws_sdk_dynamodb::config::{retry::RetryConfig, BehaviorVersion, Region};
use serde_json::Value;
use std::sync::Arc;
use user_lookup_service::handlers::lookup::handle;
use user_lookup_service::models::{CorsHeaders, GatewayRequest, GatewayResponse, UserRecord};
use user_lookup_service::services::MockUserStore;
use user_lookup_service::AppState;

pub const TEST_TABLE: &str = "UsersTable";

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<MockUserStore>,
}

impl TestApp {
    /// App backed by an in-memory store holding a single user, `u1`.
    pub fn spawn() -> Self {
        Self::spawn_with_cors(CorsHeaders::default())
    }

    pub fn spawn_with_cors(cors: CorsHeaders) -> Self {
        let store = Arc::new(MockUserStore::new());
        store
            .insert(
                "u1",
                record(serde_json::json!({ "userId": "u1", "name": "Ana" })),
            )
            .expect("Failed to seed mock store");

        let state = AppState::new(store.clone(), cors);
        TestApp { state, store }
    }

    pub async fn send(&self, request: GatewayRequest) -> GatewayResponse {
        handle(&self.state, request).await
    }

    pub async fn get_user(&self, user_id: &str) -> GatewayResponse {
        self.send(GatewayRequest::new("GET").with_query_param("userId", user_id))
            .await
    }
}

pub fn record(value: Value) -> UserRecord {
    UserRecord::try_from(value).expect("Test record must be an object")
}

pub fn body_json(response: &GatewayResponse) -> Value {
    serde_json::from_str(&response.body).expect("Response body is not JSON")
}

pub fn assert_cors(response: &GatewayResponse) {
    assert_eq!(response.headers.allow_origin, "*");
    assert_eq!(response.headers.allow_methods, "GET, OPTIONS");
    assert_eq!(response.headers.allow_headers, "Content-Type");
    assert_eq!(response.headers.content_type, "application/json");
}

/// DynamoDB client pointed at a mock endpoint with static credentials and
/// retries disabled.
pub fn dynamo_client(endpoint: &str) -> aws_sdk_dynamodb::Client {
    let config = aws_sdk_dynamodb::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("test", "test", None, None, "test"))
        .endpoint_url(endpoint)
        .retry_config(RetryConfig::disabled())
        .build();
    aws_sdk_dynamodb::Client::from_conf(config)
}
