use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use crate::errors::DomainError;
use crate::services::otp::{ManualClock, MemoryOtpStore, OtpConfig, OtpManager, OtpStore};

struct FailingOtpStore;

#[async_trait]
impl OtpStore for FailingOtpStore {
    async fn put(&self, _email: &str, _code: &str, _ttl: Duration) -> Result<(), String> {
        Err("connection refused".to_string())
    }

    async fn consume_if_match(&self, _email: &str, _candidate: &str) -> Result<bool, String> {
        Err("connection refused".to_string())
    }
}

fn manager_with_manual_clock() -> (OtpManager<MemoryOtpStore>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    ));
    let store = Arc::new(MemoryOtpStore::with_clock(clock.clone()));
    let manager = OtpManager::new(store, OtpConfig::default());
    (manager, clock)
}

fn wrong_candidate_for(code: &str) -> &'static str {
    if code == "000000" {
        "111111"
    } else {
        "000000"
    }
}

#[tokio::test]
async fn issue_returns_six_digit_code() {
    let manager = OtpManager::new(Arc::new(MemoryOtpStore::new()), OtpConfig::default());

    let code = manager.issue("priya@example.com").await.unwrap();

    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn issued_code_verifies_exactly_once() {
    let manager = OtpManager::new(Arc::new(MemoryOtpStore::new()), OtpConfig::default());

    let code = manager.issue("priya@example.com").await.unwrap();

    assert!(manager.verify("priya@example.com", &code).await.unwrap());
    assert!(!manager.verify("priya@example.com", &code).await.unwrap());
}

#[tokio::test]
async fn verify_without_issue_is_false() {
    let manager = OtpManager::new(Arc::new(MemoryOtpStore::new()), OtpConfig::default());

    let verified = manager.verify("priya@example.com", "123456").await.unwrap();

    assert!(!verified);
}

#[tokio::test]
async fn code_expires_after_configured_ttl() {
    let (manager, clock) = manager_with_manual_clock();

    let code = manager.issue("priya@example.com").await.unwrap();
    clock.advance(Duration::seconds(240));

    let verified = manager.verify("priya@example.com", &code).await.unwrap();

    assert!(!verified);
}

#[tokio::test]
async fn code_still_valid_just_before_ttl() {
    let (manager, clock) = manager_with_manual_clock();

    let code = manager.issue("priya@example.com").await.unwrap();
    clock.advance(Duration::seconds(239));

    let verified = manager.verify("priya@example.com", &code).await.unwrap();

    assert!(verified);
}

#[tokio::test]
async fn failed_attempt_does_not_consume_code() {
    let manager = OtpManager::new(Arc::new(MemoryOtpStore::new()), OtpConfig::default());

    let code = manager.issue("priya@example.com").await.unwrap();
    let wrong = wrong_candidate_for(&code);

    assert!(!manager.verify("priya@example.com", wrong).await.unwrap());
    assert!(manager.verify("priya@example.com", &code).await.unwrap());
}

#[tokio::test]
async fn last_issued_code_wins() {
    let manager = OtpManager::new(Arc::new(MemoryOtpStore::new()), OtpConfig::default());

    manager.issue("priya@example.com").await.unwrap();
    let latest = manager.issue("priya@example.com").await.unwrap();

    assert!(manager.verify("priya@example.com", &latest).await.unwrap());
}

#[tokio::test]
async fn numeric_candidate_is_left_padded_before_comparison() {
    let store = Arc::new(MemoryOtpStore::new());
    let manager = OtpManager::new(store.clone(), OtpConfig::default());

    store
        .put("priya@example.com", "012345", Duration::seconds(240))
        .await
        .unwrap();

    // A numeric submission of 12345 arrives as "12345" and must match.
    assert!(manager.verify("priya@example.com", "12345").await.unwrap());
}

#[tokio::test]
async fn candidate_whitespace_is_trimmed() {
    let store = Arc::new(MemoryOtpStore::new());
    let manager = OtpManager::new(store.clone(), OtpConfig::default());

    store
        .put("priya@example.com", "123456", Duration::seconds(240))
        .await
        .unwrap();

    assert!(manager
        .verify("priya@example.com", " 123456 ")
        .await
        .unwrap());
}

#[tokio::test]
async fn malformed_candidate_is_false_without_touching_store() {
    // The failing store would error on any call, so Ok(false) proves the
    // candidate was rejected before reaching storage.
    let manager = OtpManager::new(Arc::new(FailingOtpStore), OtpConfig::default());

    let verified = manager.verify("priya@example.com", "12a456").await.unwrap();

    assert!(!verified);
}

#[tokio::test]
async fn issue_maps_store_failure_to_store_unavailable() {
    let manager = OtpManager::new(Arc::new(FailingOtpStore), OtpConfig::default());

    let err = manager.issue("priya@example.com").await.unwrap_err();

    assert!(matches!(err, DomainError::StoreUnavailable { .. }));
}

#[tokio::test]
async fn verify_maps_store_failure_to_store_unavailable() {
    let manager = OtpManager::new(Arc::new(FailingOtpStore), OtpConfig::default());

    let err = manager
        .verify("priya@example.com", "123456")
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::StoreUnavailable { .. }));
}
