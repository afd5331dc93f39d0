use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisResult};
use tracing::warn;

use super::{SessionStore, StoreError};
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Redis-backed store. Every call is bounded by `timeout`.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
    timeout: Duration,
}

impl RedisStore {
    pub async fn connect(redis_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::open(redis_url)
            .map_err(|err| AppError::config(format!("Invalid REDIS_URL: {err}")))?;

        let conn = ConnectionManager::new(client).await.map_err(|err| {
            AppError::unavailable(
                ErrorCode::StoreUnavailable,
                format!("Unable to initialize Redis connection manager: {err}"),
            )
        })?;

        Ok(Self { conn, timeout })
    }

    async fn run<T, F>(&self, op: &'static str, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = RedisResult<T>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                warn!(op, error = %err, "Redis call failed");
                Err(StoreError::Unavailable(err.to_string()))
            }
            Err(_) => {
                warn!(op, timeout_ms = self.timeout.as_millis() as u64, "Redis call timed out");
                Err(StoreError::Timeout(op))
            }
        }
    }
}

#[async_trait]
impl SessionStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        self.run("get", conn.get::<_, Option<String>>(key)).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        self.run("set", conn.set::<_, _, ()>(key, value)).await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        self.run("del", conn.del::<_, ()>(key)).await
    }

    async fn increment(&self, key: &str) -> Result<i64, StoreError> {
        // INCR treats an absent key as 0 and is atomic server-side.
        let mut conn = self.conn.clone();
        self.run("incr", conn.incr::<_, _, i64>(key, 1)).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let reply: String = self
            .run("ping", redis::cmd("PING").query_async::<String>(&mut conn))
            .await?;
        if reply == "PONG" {
            Ok(())
        } else {
            Err(StoreError::Unavailable(format!("unexpected PING reply: {reply}")))
        }
    }
}
