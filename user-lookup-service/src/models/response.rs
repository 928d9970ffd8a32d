use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use service_core::error::AppError;

/// Headers attached to every response, whatever the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsHeaders {
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub allow_origin: String,
    #[serde(rename = "Access-Control-Allow-Methods")]
    pub allow_methods: String,
    #[serde(rename = "Access-Control-Allow-Headers")]
    pub allow_headers: String,
    #[serde(rename = "Content-Type")]
    pub content_type: String,
}

impl CorsHeaders {
    pub fn new(allow_origin: impl Into<String>) -> Self {
        Self {
            allow_origin: allow_origin.into(),
            allow_methods: "GET, OPTIONS".to_string(),
            allow_headers: "Content-Type".to_string(),
            content_type: "application/json".to_string(),
        }
    }
}

impl Default for CorsHeaders {
    fn default() -> Self {
        Self::new("*")
    }
}

/// API Gateway proxy response. `body` is already JSON-encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: CorsHeaders,
    pub body: String,
}

impl GatewayResponse {
    pub fn json<T: Serialize>(
        status: StatusCode,
        headers: &CorsHeaders,
        body: &T,
    ) -> Result<Self, AppError> {
        Ok(Self {
            status_code: status.as_u16(),
            headers: headers.clone(),
            body: serde_json::to_string(body)?,
        })
    }

    pub fn preflight(headers: &CorsHeaders) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            headers: headers.clone(),
            body: json!({ "message": "CORS preflight" }).to_string(),
        }
    }

    pub fn from_error(err: &AppError, headers: &CorsHeaders) -> Self {
        Self {
            status_code: err.status_code().as_u16(),
            headers: headers.clone(),
            body: json!({ "error": err.client_message() }).to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
