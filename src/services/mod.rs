pub mod errors;
pub mod meetings;
pub mod members;
pub mod minutes;

pub use errors::{ServiceError, ServiceResult};
