pub mod errors;
pub mod image_host;
pub mod lead;
pub mod upload;

pub use errors::{ServiceError, ServiceResult};
