mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{reminder_key, REMINDER_KEY_PREFIX};
pub use serialization::{deserialize_reminder, serialize_reminder, SerializationError};
pub use traits::Cache;
