pub mod request;
pub mod response;
pub mod user;

pub use request::GatewayRequest;
pub use response::{CorsHeaders, GatewayResponse};
pub use user::UserRecord;
