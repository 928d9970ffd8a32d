pub mod config;
pub mod handlers;
pub mod models;
pub mod services;

use models::CorsHeaders;
use services::UserStore;
use std::sync::Arc;

pub const SERVICE_NAME: &str = "user-lookup-service";

/// State shared by every invocation handled by this process.
///
/// Built once during cold start. The store handle is read-only, so clones
/// share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub cors: CorsHeaders,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, cors: CorsHeaders) -> Self {
        Self { store, cors }
    }
}
