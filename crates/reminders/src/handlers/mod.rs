pub mod error;
pub mod health;
pub mod reminders;
pub mod root;

pub use error::ApiError;
