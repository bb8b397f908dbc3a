use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use user_backend::errors::ApiError;
use user_backend::models::{CreateUserRequest, UpdateUserRequest};
use user_backend::repositories::UserRepository;
use user_backend::services::UserService;

async fn repo_in_memory() -> Arc<UserRepository> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let repo = Arc::new(UserRepository::new(pool));
    repo.ensure_schema().await.unwrap();
    repo
}

#[actix_rt::test]
async fn create_and_find_roundtrip() {
    let repo = repo_in_memory().await;

    let created = repo.create("Alice", "alice@example.com").await.unwrap();
    assert_eq!(created.name, "Alice");
    assert_eq!(created.email, "alice@example.com");

    let by_email = repo.find_by_email("alice@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, created.id);
    assert_eq!(by_email.name, "Alice");

    let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "alice@example.com");
}

#[actix_rt::test]
async fn duplicate_create_is_rejected_and_adds_no_row() {
    let repo = repo_in_memory().await;

    repo.create("Alice", "a@x.com").await.unwrap();
    let err = repo.create("Bob", "a@x.com").await.unwrap_err();
    assert!(matches!(err, ApiError::DuplicateEmail(_)));

    let users = repo.list_all().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Alice");
}

#[actix_rt::test]
async fn update_missing_id_is_not_found() {
    let repo = repo_in_memory().await;

    let err = repo.update(42, Some("Nobody"), None).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[actix_rt::test]
async fn delete_missing_id_is_not_found() {
    let repo = repo_in_memory().await;

    let err = repo.delete(42).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[actix_rt::test]
async fn update_to_email_of_other_user_is_rejected() {
    let repo = repo_in_memory().await;

    let alice = repo.create("Alice", "alice@x.com").await.unwrap();
    repo.create("Bob", "bob@x.com").await.unwrap();

    let err = repo
        .update(alice.id, None, Some("bob@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::DuplicateEmail(_)));

    // Target row is unchanged after the rejected update.
    let unchanged = repo.find_by_id(alice.id).await.unwrap().unwrap();
    assert_eq!(unchanged.email, "alice@x.com");
}

#[actix_rt::test]
async fn update_to_own_email_is_allowed() {
    let repo = repo_in_memory().await;

    let alice = repo.create("Alice", "alice@x.com").await.unwrap();
    let updated = repo
        .update(alice.id, Some("Alice B."), Some("alice@x.com"))
        .await
        .unwrap();
    assert_eq!(updated.name, "Alice B.");
    assert_eq!(updated.email, "alice@x.com");
}

#[actix_rt::test]
async fn name_only_update_leaves_email_untouched() {
    let repo = repo_in_memory().await;

    let alice = repo.create("Alice", "alice@x.com").await.unwrap();
    let updated = repo.update(alice.id, Some("Alicia"), None).await.unwrap();
    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.email, "alice@x.com");
}

#[actix_rt::test]
async fn email_only_update_leaves_name_untouched() {
    let repo = repo_in_memory().await;

    let alice = repo.create("Alice", "alice@x.com").await.unwrap();
    let updated = repo
        .update(alice.id, None, Some("alice2@x.com"))
        .await
        .unwrap();
    assert_eq!(updated.name, "Alice");
    assert_eq!(updated.email, "alice2@x.com");
}

#[actix_rt::test]
async fn delete_removes_row_permanently() {
    let repo = repo_in_memory().await;

    let alice = repo.create("Alice", "alice@x.com").await.unwrap();
    repo.delete(alice.id).await.unwrap();

    assert!(repo.find_by_id(alice.id).await.unwrap().is_none());
    assert!(repo.list_all().await.unwrap().is_empty());

    let err = repo.delete(alice.id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[actix_rt::test]
async fn service_normalizes_email_case() {
    let repo = repo_in_memory().await;
    let service = UserService::with_repository(Arc::clone(&repo));

    let created = service
        .create_user(CreateUserRequest {
            name: "Alice".to_string(),
            email: "  Alice@Example.COM ".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.email, "alice@example.com");

    // A differently-cased duplicate is still a duplicate.
    let err = service
        .create_user(CreateUserRequest {
            name: "Bob".to_string(),
            email: "ALICE@example.com".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::DuplicateEmail(_)));

    let found = service
        .get_user_by_email("Alice@Example.com")
        .await
        .unwrap();
    assert!(found.is_some());
}

#[actix_rt::test]
async fn service_partial_update_normalizes_email() {
    let repo = repo_in_memory().await;
    let service = UserService::with_repository(Arc::clone(&repo));

    let alice = repo.create("Alice", "alice@x.com").await.unwrap();
    let updated = service
        .update_user(
            alice.id,
            UpdateUserRequest {
                name: None,
                email: Some("Alice2@X.com".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.email, "alice2@x.com");
    assert_eq!(updated.name, "Alice");
}

#[actix_rt::test]
async fn service_delete_of_missing_user_is_not_found() {
    let repo = repo_in_memory().await;
    let service = UserService::with_repository(repo);

    assert!(service.get_user_by_id(7).await.unwrap().is_none());
    let err = service.delete_user(7).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}
