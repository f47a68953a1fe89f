//! SQLite repository implementation.
//!
//! Implements `EventRepository` from `eventcache_core::storage` using SQLite.

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use eventcache_core::event::{Event, EventId, NewEvent};
use eventcache_core::storage::{EventRepository, RepositoryError, Result};

use super::conversions::{format_date, format_datetime, row_to_event};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl EventRepository for SqliteRepository {
    async fn get_event(&self, id: EventId) -> Result<Option<Event>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_EVENT_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_event) {
                    Ok(event) => Ok(Some(event)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Event", id.to_string()))
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_EVENTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_event).map_err(wrap_err)?;

                let mut events = Vec::new();
                for row_result in rows {
                    events.push(row_result.map_err(wrap_err)?);
                }
                Ok(events)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Event"))
    }

    async fn insert_event(&self, event: &NewEvent) -> Result<Event> {
        let created = event.clone().into_event(EventId::new(), Utc::now());

        let id = created.id.to_string();
        let title = created.title.clone();
        let description = created.description.clone();
        let location = created.location.clone();
        let category = created.category.clone();
        let organizer = created.organizer.clone();
        let date = format_date(&created.date);
        let created_at = format_datetime(&created.created_at);
        let event_id = created.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_EVENT,
                    rusqlite::params![
                        id,
                        title,
                        description,
                        location,
                        category,
                        organizer,
                        date,
                        created_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Event", event_id))?;

        Ok(created)
    }

    async fn delete_event(&self, id: EventId) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_EVENT, [&id_str])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Event", id.to_string()))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Event"))
    }
}
