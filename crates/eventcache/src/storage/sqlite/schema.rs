//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Events table
CREATE TABLE IF NOT EXISTS events (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    location TEXT,
    category TEXT,
    organizer TEXT,
    date TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
"#;

// Event queries
pub const INSERT_EVENT: &str = r#"
INSERT INTO events (id, title, description, location, category, organizer, date, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const SELECT_EVENT_BY_ID: &str = r#"
SELECT id, title, description, location, category, organizer, date, created_at
FROM events
WHERE id = ?1
"#;

pub const SELECT_ALL_EVENTS: &str = r#"
SELECT id, title, description, location, category, organizer, date, created_at
FROM events
ORDER BY date ASC, title ASC
"#;

pub const DELETE_EVENT: &str = r#"
DELETE FROM events
WHERE id = ?1
"#;

pub const PING: &str = "SELECT 1";
