mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::{repository_error_to_status_code, write_error_to_status_code};
pub use traits::ReminderRepository;
pub use types::{ListRemindersQuery, Page, QueryError, DEFAULT_LIMIT};
