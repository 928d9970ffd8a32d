pub mod attribute;
pub mod dynamo;
pub mod repository;

pub use dynamo::DynamoUserStore;
pub use repository::{MockUserStore, UserStore};
