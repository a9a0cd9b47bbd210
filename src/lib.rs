pub mod error;
pub mod response;

pub use error::{FirebaseError, Result};
pub use response::error_for_status;
