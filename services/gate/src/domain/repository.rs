use std::future::Future;

use crate::domain::types::{PinCode, Role};
use crate::error::GateError;

/// Expiring PIN → role mapping. Expiry is enforced by the store itself: once a
/// record's TTL has elapsed, `get` must report it as absent.
///
/// Methods return `Send` futures so generic axum handlers stay `Send`.
pub trait PinStore: Send + Sync {
    fn get(&self, code: &PinCode) -> impl Future<Output = Result<Option<Role>, GateError>> + Send;

    /// Store `code → role`, replacing any existing record for the same code.
    fn put(
        &self,
        code: &PinCode,
        role: Role,
        ttl_secs: u64,
    ) -> impl Future<Output = Result<(), GateError>> + Send;

    fn delete(&self, code: &PinCode) -> impl Future<Output = Result<(), GateError>> + Send;

    /// Cheap reachability check used by the readiness probe.
    fn ping(&self) -> impl Future<Output = Result<(), GateError>> + Send;
}

/// Remote relay controller.
pub trait HardwareGateway: Send + Sync {
    fn is_online(&self) -> impl Future<Output = Result<bool, GateError>> + Send;

    /// Fire the relay. Any non-success answer is a `GateError::Gateway`.
    fn trigger(&self) -> impl Future<Output = Result<(), GateError>> + Send;
}
