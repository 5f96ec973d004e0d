//! Unit tests for the mock user repository

use chrono::NaiveDate;

use crate::domain::entities::user::NewUser;
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

fn sample_new_user(email: &str) -> NewUser {
    NewUser::new(
        "Priya Sharma",
        email,
        NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
    )
}

#[tokio::test]
async fn test_mock_repository_create_assigns_ids() {
    let repo = MockUserRepository::new();

    let first = repo.create(sample_new_user("a@example.com")).await.unwrap();
    let second = repo.create(sample_new_user("b@example.com")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(first.is_active);
    assert!(!first.is_verified);
}

#[tokio::test]
async fn test_mock_repository_find_by_email() {
    let repo = MockUserRepository::new();
    repo.create(sample_new_user("priya@example.com")).await.unwrap();

    let found = repo.find_by_email("priya@example.com").await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "Priya Sharma");

    let missing = repo.find_by_email("other@example.com").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_mock_repository_duplicate_email() {
    let repo = MockUserRepository::new();
    repo.create(sample_new_user("same@example.com")).await.unwrap();

    let result = repo.create(sample_new_user("same@example.com")).await;
    assert!(matches!(result.unwrap_err(), DomainError::Validation { .. }));
}

#[tokio::test]
async fn test_mock_repository_exists_by_email() {
    let repo = MockUserRepository::new();
    assert!(!repo.exists_by_email("priya@example.com").await.unwrap());

    repo.create(sample_new_user("priya@example.com")).await.unwrap();
    assert!(repo.exists_by_email("priya@example.com").await.unwrap());
}

#[tokio::test]
async fn test_mock_repository_mark_verified() {
    let repo = MockUserRepository::new();
    let user = repo.create(sample_new_user("priya@example.com")).await.unwrap();
    assert!(!user.is_verified);

    repo.mark_verified(user.id).await.unwrap();

    let reloaded = repo.find_by_email("priya@example.com").await.unwrap().unwrap();
    assert!(reloaded.is_verified);
}

#[tokio::test]
async fn test_mock_repository_mark_verified_missing_user() {
    let repo = MockUserRepository::new();

    let result = repo.mark_verified(42).await;
    assert!(matches!(result.unwrap_err(), DomainError::NotFound { .. }));
}
