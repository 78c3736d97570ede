use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;

use crate::domain::repository::PinStore;
use crate::domain::types::{PinCode, Role};
use crate::error::GateError;

#[derive(Clone)]
pub struct RedisPinStore {
    pub pool: Pool,
}

fn pin_key(code: &PinCode) -> String {
    format!("pin:{}", code)
}

impl PinStore for RedisPinStore {
    async fn get(&self, code: &PinCode) -> Result<Option<Role>, GateError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| GateError::Internal(e.into()))?;
        let tag: Option<String> = conn
            .get(pin_key(code))
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| GateError::Internal(e.into()))?;
        match tag {
            None => Ok(None),
            Some(tag) => Role::from_tag(&tag)
                .map(Some)
                .ok_or_else(|| anyhow::anyhow!("unrecognized role tag in store: {tag:?}").into()),
        }
    }

    async fn put(&self, code: &PinCode, role: Role, ttl_secs: u64) -> Result<(), GateError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| GateError::Internal(e.into()))?;
        let (): () = conn
            .set_ex(pin_key(code), role.tag(), ttl_secs)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| GateError::Internal(e.into()))?;
        Ok(())
    }

    async fn delete(&self, code: &PinCode) -> Result<(), GateError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| GateError::Internal(e.into()))?;
        let _removed: u64 = conn
            .del(pin_key(code))
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| GateError::Internal(e.into()))?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), GateError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| GateError::Internal(e.into()))?;
        let _pong: String = deadpool_redis::redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| GateError::Internal(e.into()))?;
        Ok(())
    }
}
