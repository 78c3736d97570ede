use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use pingate::domain::repository::{HardwareGateway, PinStore};
use pingate::domain::types::{PinCode, Role};
use pingate::error::GateError;
use pingate::router::build_router;
use pingate::state::AppState;

// ── MemoryPinStore ───────────────────────────────────────────────────────────

#[derive(Default)]
struct MemoryInner {
    records: HashMap<String, (Role, DateTime<Utc>)>,
    clock_offset_secs: i64,
    fail_gets: bool,
    fail_puts: bool,
    fail_deletes: bool,
    unreachable: bool,
    get_calls: usize,
    puts: Vec<(String, Role, u64)>,
}

impl MemoryInner {
    fn now(&self) -> DateTime<Utc> {
        Utc::now() + Duration::seconds(self.clock_offset_secs)
    }
}

/// Expiring in-memory store. Its clock can be moved forward with `advance`.
#[derive(Clone, Default)]
pub struct MemoryPinStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryPinStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an active PIN with its role's regular TTL.
    pub fn with_pin(self, code: &str, role: Role) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            let expires_at = inner.now() + Duration::seconds(role.ttl_secs() as i64);
            inner.records.insert(code.to_owned(), (role, expires_at));
        }
        self
    }

    pub fn failing_gets(self) -> Self {
        self.inner.lock().unwrap().fail_gets = true;
        self
    }

    pub fn failing_puts(self) -> Self {
        self.inner.lock().unwrap().fail_puts = true;
        self
    }

    pub fn failing_deletes(self) -> Self {
        self.inner.lock().unwrap().fail_deletes = true;
        self
    }

    pub fn unreachable(self) -> Self {
        self.inner.lock().unwrap().unreachable = true;
        self
    }

    pub fn advance(&self, by: Duration) {
        self.inner.lock().unwrap().clock_offset_secs += by.num_seconds();
    }

    pub fn contains(&self, code: &str) -> bool {
        self.inner.lock().unwrap().records.contains_key(code)
    }

    pub fn get_calls(&self) -> usize {
        self.inner.lock().unwrap().get_calls
    }

    pub fn puts(&self) -> Vec<(String, Role, u64)> {
        self.inner.lock().unwrap().puts.clone()
    }
}

impl PinStore for MemoryPinStore {
    async fn get(&self, code: &PinCode) -> Result<Option<Role>, GateError> {
        let mut inner = self.inner.lock().unwrap();
        inner.get_calls += 1;
        if inner.fail_gets {
            return Err(anyhow::anyhow!("store unavailable").into());
        }
        let now = inner.now();
        match inner.records.get(code.as_str()).copied() {
            Some((_, expires_at)) if expires_at <= now => {
                inner.records.remove(code.as_str());
                Ok(None)
            }
            Some((role, _)) => Ok(Some(role)),
            None => Ok(None),
        }
    }

    async fn put(&self, code: &PinCode, role: Role, ttl_secs: u64) -> Result<(), GateError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_puts {
            return Err(anyhow::anyhow!("store unavailable").into());
        }
        let expires_at = inner.now() + Duration::seconds(ttl_secs as i64);
        inner.records.insert(code.to_string(), (role, expires_at));
        inner.puts.push((code.to_string(), role, ttl_secs));
        Ok(())
    }

    async fn delete(&self, code: &PinCode) -> Result<(), GateError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_deletes {
            return Err(anyhow::anyhow!("store unavailable").into());
        }
        inner.records.remove(code.as_str());
        Ok(())
    }

    async fn ping(&self) -> Result<(), GateError> {
        if self.inner.lock().unwrap().unreachable {
            return Err(anyhow::anyhow!("store unavailable").into());
        }
        Ok(())
    }
}

// ── MockGateway ──────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockGateway {
    online: Option<bool>,
    trigger_ok: bool,
    triggers: Arc<AtomicUsize>,
}

impl MockGateway {
    pub fn online() -> Self {
        Self {
            online: Some(true),
            trigger_ok: true,
            triggers: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn offline() -> Self {
        Self {
            online: Some(false),
            ..Self::online()
        }
    }

    /// Status checks fail and every trigger is answered with an error.
    pub fn broken() -> Self {
        Self {
            online: None,
            trigger_ok: false,
            ..Self::online()
        }
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.load(Ordering::SeqCst)
    }
}

impl HardwareGateway for MockGateway {
    async fn is_online(&self) -> Result<bool, GateError> {
        self.online
            .ok_or_else(|| GateError::Gateway(anyhow::anyhow!("connection refused")))
    }

    async fn trigger(&self) -> Result<(), GateError> {
        self.triggers.fetch_add(1, Ordering::SeqCst);
        if self.trigger_ok {
            Ok(())
        } else {
            Err(GateError::Gateway(anyhow::anyhow!(
                "gateway responded with status 500 Internal Server Error"
            )))
        }
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub const ADMIN_PIN: &str = "4821";
pub const GUEST_PIN: &str = "1234";

pub fn test_state(
    pins: MemoryPinStore,
    gateway: MockGateway,
    require_admin_pin: bool,
) -> AppState<MemoryPinStore, MockGateway> {
    AppState {
        pins,
        gateway,
        require_admin_pin,
        cors_allow_origin: None,
    }
}

pub fn test_server(state: AppState<MemoryPinStore, MockGateway>) -> axum_test::TestServer {
    axum_test::TestServer::new(build_router(state)).unwrap()
}
