use std::str::FromStr;

use thiserror::Error;

use crate::reminder::{Pagination, ReminderStatus};

use super::RepositoryError;

/// Default page size when `limit` is omitted.
pub const DEFAULT_LIMIT: u32 = 10;

/// Errors that can occur when building a list query from raw parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("status can either be incomplete or complete")]
    InvalidStatus(String),
    #[error("limit and offset must be positive integers")]
    InvalidPagination,
}

impl From<QueryError> for RepositoryError {
    fn from(err: QueryError) -> Self {
        RepositoryError::InvalidArgument(err.to_string())
    }
}

/// A validated filter and page window for listing reminders.
///
/// Holding one of these guarantees the status filter is a known status and
/// that `limit` is at least 1, so the store never sees unchecked arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRemindersQuery {
    pub status: Option<ReminderStatus>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for ListRemindersQuery {
    fn default() -> Self {
        Self {
            status: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl ListRemindersQuery {
    /// Creates a query, rejecting a zero `limit`.
    pub fn new(
        status: Option<ReminderStatus>,
        limit: u32,
        offset: u32,
    ) -> Result<Self, QueryError> {
        if limit == 0 {
            return Err(QueryError::InvalidPagination);
        }
        Ok(Self {
            status,
            limit,
            offset,
        })
    }

    /// Parses raw query-string values.
    ///
    /// Missing or empty values take their defaults. `status` is matched
    /// case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use reminders_core::reminder::ReminderStatus;
    /// use reminders_core::storage::ListRemindersQuery;
    ///
    /// let query = ListRemindersQuery::parse(Some("Complete"), Some("5"), None).unwrap();
    /// assert_eq!(query.status, Some(ReminderStatus::Complete));
    /// assert_eq!(query.limit, 5);
    /// assert_eq!(query.offset, 0);
    ///
    /// assert!(ListRemindersQuery::parse(Some("done"), None, None).is_err());
    /// ```
    pub fn parse(
        status: Option<&str>,
        limit: Option<&str>,
        offset: Option<&str>,
    ) -> Result<Self, QueryError> {
        let status = match non_empty(status) {
            Some(raw) => Some(
                ReminderStatus::from_str(raw)
                    .map_err(|_| QueryError::InvalidStatus(raw.to_string()))?,
            ),
            None => None,
        };
        let limit = match non_empty(limit) {
            Some(raw) => parse_number(raw)?,
            None => DEFAULT_LIMIT,
        };
        let offset = match non_empty(offset) {
            Some(raw) => parse_number(raw)?,
            None => 0,
        };

        Self::new(status, limit, offset)
    }

    /// Builds the pagination metadata for a page of `total` matches.
    pub fn pagination(&self, total: u64) -> Pagination {
        Pagination {
            limit: self.limit,
            offset: self.offset,
            total,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_number(raw: &str) -> Result<u32, QueryError> {
    raw.parse::<u32>().map_err(|_| QueryError::InvalidPagination)
}

/// A page of results together with the unpaginated match count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }
}
