//! Redis cache implementation.
//!
//! The connection is established lazily. If Redis is down when the service
//! starts, every cache call reports `ConnectionFailed` until a later call
//! manages to connect; the service itself keeps running on the record store.
//!
//! A failed connection attempt costs up to `CONNECTION_TIMEOUT` per retry.
//! After a failure, further attempts are held off for `RECONNECT_COOLDOWN`,
//! so while Redis stays down most calls fail immediately instead.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use tokio::sync::RwLock;

use eventcache_core::cache::{Cache, CacheError, Result};

use super::error::map_redis_error;

/// Upper bound for establishing a connection.
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(1);

/// Upper bound for a single command round trip.
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(1);

/// Reconnect attempts made by the connection manager before a command fails.
const RECONNECT_RETRIES: usize = 1;

/// Time to wait after a failed connection attempt before trying again.
const RECONNECT_COOLDOWN: Duration = Duration::from_secs(5);

/// Redis cache backend using connection manager for pooling.
pub struct RedisCache {
    client: redis::Client,
    conn: RwLock<Option<ConnectionManager>>,
    /// Earliest instant at which a new connection attempt is allowed.
    retry_after: RwLock<Option<Instant>>,
}

impl RedisCache {
    /// Creates a new Redis cache.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::OperationFailed` if the URL is invalid. An
    /// unreachable server is not an error here; it is logged and retried on
    /// the next cache call.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let cache = Self {
            client,
            conn: RwLock::new(None),
            retry_after: RwLock::new(None),
        };

        if let Err(err) = cache.connection().await {
            tracing::warn!(error = %err, "Redis unreachable at startup, continuing without cache");
        }

        Ok(cache)
    }

    fn manager_config() -> ConnectionManagerConfig {
        ConnectionManagerConfig::new()
            .set_connection_timeout(CONNECTION_TIMEOUT)
            .set_response_timeout(RESPONSE_TIMEOUT)
            .set_number_of_retries(RECONNECT_RETRIES)
    }

    /// Returns a handle to the shared connection, connecting first if needed.
    async fn connection(&self) -> Result<ConnectionManager> {
        if let Some(conn) = self.conn.read().await.as_ref() {
            return Ok(conn.clone());
        }

        if let Some(retry_after) = *self.retry_after.read().await {
            let now = Instant::now();
            if now < retry_after {
                return Err(CacheError::ConnectionFailed(format!(
                    "waiting before reconnecting to Redis ({:?} left)",
                    retry_after - now
                )));
            }
        }

        match ConnectionManager::new_with_config(self.client.clone(), Self::manager_config()).await
        {
            Ok(conn) => {
                tracing::info!("Connected to Redis");
                *self.conn.write().await = Some(conn.clone());
                *self.retry_after.write().await = None;
                Ok(conn)
            }
            Err(err) => {
                *self.retry_after.write().await = Some(Instant::now() + RECONNECT_COOLDOWN);
                Err(CacheError::ConnectionFailed(err.to_string()))
            }
        }
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection().await?;
        let result: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.connection().await?;

        match ttl {
            Some(duration) => {
                let seconds = duration.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, seconds)
                    .await
                    .map_err(map_redis_error)?;
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(map_redis_error)?;
            }
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(key).await.map_err(map_redis_error)?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        let _pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }
}
