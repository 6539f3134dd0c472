mod requests;
mod responses;
mod types;
mod validation;

pub use requests::ReminderRequest;
pub use responses::{ApiResponse, Deleted, ErrorBody, Pagination};
pub use types::{new_reminder_id, Reminder, ReminderPayload, ReminderStatus, UnknownStatus};
pub use validation::{validate_request, ValidationErrors, LATITUDE_RANGE, LONGITUDE_RANGE};
