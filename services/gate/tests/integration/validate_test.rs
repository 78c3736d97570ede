use chrono::Duration;

use pingate::domain::types::Role;
use pingate::error::GateError;
use pingate::usecase::pin::ValidatePinUseCase;

use crate::helpers::{ADMIN_PIN, GUEST_PIN, MemoryPinStore};

fn reusable(pins: MemoryPinStore) -> ValidatePinUseCase<MemoryPinStore> {
    ValidatePinUseCase {
        pins,
        consume: false,
    }
}

fn single_use(pins: MemoryPinStore) -> ValidatePinUseCase<MemoryPinStore> {
    ValidatePinUseCase {
        pins,
        consume: true,
    }
}

#[tokio::test]
async fn should_reject_malformed_pin_without_store_lookup() {
    let store = MemoryPinStore::new().with_pin(GUEST_PIN, Role::Guest);
    for raw in ["", "123", "12345", "12a4", "12 4", "abcd"] {
        let result = reusable(store.clone()).execute(raw).await;
        assert!(
            matches!(result, Err(GateError::MalformedPin)),
            "expected MalformedPin for {raw:?}, got {result:?}"
        );
    }
    assert_eq!(store.get_calls(), 0);
}

#[tokio::test]
async fn should_return_role_of_active_pin() {
    let store = MemoryPinStore::new()
        .with_pin(GUEST_PIN, Role::Guest)
        .with_pin(ADMIN_PIN, Role::Admin);

    assert_eq!(reusable(store.clone()).execute(GUEST_PIN).await.unwrap(), Role::Guest);
    assert_eq!(reusable(store).execute(ADMIN_PIN).await.unwrap(), Role::Admin);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_pin() {
    let result = reusable(MemoryPinStore::new()).execute("0000").await;
    assert!(
        matches!(result, Err(GateError::PinNotFound)),
        "expected PinNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_keep_reusable_pin_valid_within_ttl() {
    let store = MemoryPinStore::new().with_pin(GUEST_PIN, Role::Guest);
    let uc = reusable(store.clone());

    for _ in 0..3 {
        assert_eq!(uc.execute(GUEST_PIN).await.unwrap(), Role::Guest);
    }
    assert!(store.contains(GUEST_PIN));
}

#[tokio::test]
async fn should_consume_single_use_pin() {
    let store = MemoryPinStore::new().with_pin(GUEST_PIN, Role::Guest);
    let uc = single_use(store.clone());

    assert_eq!(uc.execute(GUEST_PIN).await.unwrap(), Role::Guest);
    assert!(!store.contains(GUEST_PIN));

    let second = uc.execute(GUEST_PIN).await;
    assert!(
        matches!(second, Err(GateError::PinNotFound)),
        "expected PinNotFound, got {second:?}"
    );
}

#[tokio::test]
async fn should_succeed_when_consuming_delete_fails() {
    let store = MemoryPinStore::new()
        .with_pin(GUEST_PIN, Role::Guest)
        .failing_deletes();

    let role = single_use(store.clone()).execute(GUEST_PIN).await.unwrap();
    assert_eq!(role, Role::Guest);
    assert!(store.contains(GUEST_PIN));
}

#[tokio::test]
async fn should_treat_expired_pin_as_never_issued() {
    let store = MemoryPinStore::new().with_pin(GUEST_PIN, Role::Guest);

    store.advance(Duration::hours(23));
    assert_eq!(reusable(store.clone()).execute(GUEST_PIN).await.unwrap(), Role::Guest);

    store.advance(Duration::hours(1));
    let expired = reusable(store.clone()).execute(GUEST_PIN).await;
    let never = reusable(store).execute("5555").await;
    assert!(matches!(expired, Err(GateError::PinNotFound)), "got {expired:?}");
    assert!(matches!(never, Err(GateError::PinNotFound)), "got {never:?}");
}
