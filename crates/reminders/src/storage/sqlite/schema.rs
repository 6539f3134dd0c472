//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the reminders table and its indexes.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS reminders (
    id TEXT PRIMARY KEY,
    message TEXT NOT NULL,
    time TEXT NOT NULL,
    latitude REAL NOT NULL CHECK (latitude BETWEEN -90 AND 90),
    longitude REAL NOT NULL CHECK (longitude BETWEEN -180 AND 180),
    status TEXT NOT NULL DEFAULT 'incomplete' CHECK (status IN ('incomplete', 'complete')),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_reminders_status ON reminders(status);
CREATE INDEX IF NOT EXISTS idx_reminders_created_at ON reminders(created_at, id);
"#;

pub const INSERT_REMINDER: &str = r#"
INSERT INTO reminders (id, message, time, latitude, longitude, status, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
RETURNING id, message, time, latitude, longitude, status, created_at, updated_at
"#;

pub const SELECT_REMINDER_BY_ID: &str = r#"
SELECT id, message, time, latitude, longitude, status, created_at, updated_at
FROM reminders
WHERE id = ?1
"#;

/// `?1` is an optional status filter; NULL matches every row.
pub const SELECT_REMINDERS_PAGE: &str = r#"
SELECT id, message, time, latitude, longitude, status, created_at, updated_at
FROM reminders
WHERE (?1 IS NULL OR status = ?1)
ORDER BY created_at ASC, id ASC
LIMIT ?2 OFFSET ?3
"#;

pub const COUNT_REMINDERS: &str = r#"
SELECT COUNT(*)
FROM reminders
WHERE (?1 IS NULL OR status = ?1)
"#;

/// Status-guarded: completed reminders match no row.
pub const UPDATE_REMINDER: &str = r#"
UPDATE reminders
SET message = ?2, time = ?3, latitude = ?4, longitude = ?5, updated_at = ?6
WHERE id = ?1 AND status != 'complete'
RETURNING id, message, time, latitude, longitude, status, created_at, updated_at
"#;

/// Status-guarded: a second completion matches no row.
pub const MARK_REMINDER_COMPLETE: &str = r#"
UPDATE reminders
SET status = 'complete', updated_at = ?2
WHERE id = ?1 AND status != 'complete'
RETURNING id, message, time, latitude, longitude, status, created_at, updated_at
"#;

pub const DELETE_REMINDER: &str = r#"
DELETE FROM reminders
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS reminders"));
        assert!(CREATE_TABLES.contains("CREATE INDEX IF NOT EXISTS"));
    }

    #[test]
    fn test_guarded_writes_exclude_complete() {
        assert!(UPDATE_REMINDER.contains("status != 'complete'"));
        assert!(MARK_REMINDER_COMPLETE.contains("status != 'complete'"));
    }

    #[test]
    fn test_list_and_count_share_filter() {
        assert!(SELECT_REMINDERS_PAGE.contains("(?1 IS NULL OR status = ?1)"));
        assert!(COUNT_REMINDERS.contains("(?1 IS NULL OR status = ?1)"));
        assert!(SELECT_REMINDERS_PAGE.contains("ORDER BY created_at ASC, id ASC"));
    }
}
