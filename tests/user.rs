use pretty_assertions::assert_eq;

use user_service::app::use_case;
use user_service::error::app::ApplicationError;

use crate::setup::{request, MemoryUserRepository};

mod setup;

fn assert_not_found(err: ApplicationError, id: i64) {
    match err {
        ApplicationError::NotFound(not_found) => {
            assert_eq!(not_found.message, format!("User not found with id: {id}"));
        }
        other => panic!("expected a not-found error, got: {other}"),
    }
}

#[tokio::test]
async fn create_user_assigns_id_and_round_trips_fields() {
    let repository = MemoryUserRepository::new();

    let created = use_case::create_user(
        &repository,
        request("Ada", "Lovelace", "ada@example.com", Some("1234567890")),
    )
    .await
    .unwrap();

    assert_eq!(created.first_name, "Ada");
    assert_eq!(created.last_name, "Lovelace");
    assert_eq!(created.email, "ada@example.com");
    assert_eq!(created.phone_number.as_deref(), Some("1234567890"));
    assert_eq!(repository.stored_ids(), vec![created.id]);
}

#[tokio::test]
async fn get_user_by_id_returns_the_stored_user() {
    let repository = MemoryUserRepository::new();

    let created = use_case::create_user(
        &repository,
        request("Ada", "Lovelace", "ada@example.com", None),
    )
    .await
    .unwrap();

    let fetched = use_case::get_user_by_id(&repository, created.id)
        .await
        .unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_user_by_id_missing_fails_without_mutating_the_store() {
    let repository = MemoryUserRepository::new();

    let err = use_case::get_user_by_id(&repository, 42).await.unwrap_err();

    assert_not_found(err, 42);
    assert_eq!(repository.stored_ids(), Vec::<i64>::new());
}

#[tokio::test]
async fn update_user_preserves_id_and_overwrites_every_field() {
    let repository = MemoryUserRepository::new();

    let created = use_case::create_user(
        &repository,
        request("Ada", "Lovelace", "ada@example.com", Some("1234567890")),
    )
    .await
    .unwrap();

    let updated = use_case::update_user(
        &repository,
        created.id,
        request("Grace", "Hopper", "grace@example.com", None),
    )
    .await
    .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, "Grace");
    assert_eq!(updated.last_name, "Hopper");
    assert_eq!(updated.email, "grace@example.com");
    // Wholesale overwrite: the previous phone number is discarded.
    assert_eq!(updated.phone_number, None);

    let fetched = use_case::get_user_by_id(&repository, created.id)
        .await
        .unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_user_missing_fails_before_validation() {
    let repository = MemoryUserRepository::new();

    // The id check runs first, so even an invalid payload reports not-found.
    let err = use_case::update_user(&repository, 7, request("", "", "invalid", None))
        .await
        .unwrap_err();

    assert_not_found(err, 7);
}

#[tokio::test]
async fn update_user_with_invalid_payload_leaves_the_row_untouched() {
    let repository = MemoryUserRepository::new();

    let created = use_case::create_user(
        &repository,
        request("Ada", "Lovelace", "ada@example.com", None),
    )
    .await
    .unwrap();

    let err = use_case::update_user(
        &repository,
        created.id,
        request("Grace", "Hopper", "not-an-email", None),
    )
    .await
    .unwrap_err();

    match err {
        ApplicationError::Validation(validation) => {
            assert_eq!(validation.messages(), vec!["Email should be valid"]);
        }
        other => panic!("expected a validation error, got: {other}"),
    }

    let fetched = use_case::get_user_by_id(&repository, created.id)
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn delete_user_removes_the_row() {
    let repository = MemoryUserRepository::new();

    let created = use_case::create_user(
        &repository,
        request("Ada", "Lovelace", "ada@example.com", None),
    )
    .await
    .unwrap();

    use_case::delete_user(&repository, created.id).await.unwrap();

    let err = use_case::get_user_by_id(&repository, created.id)
        .await
        .unwrap_err();
    assert_not_found(err, created.id);
    assert_eq!(repository.stored_ids(), Vec::<i64>::new());
}

#[tokio::test]
async fn delete_user_missing_reports_not_found() {
    let repository = MemoryUserRepository::new();

    let err = use_case::delete_user(&repository, 99).await.unwrap_err();

    assert_not_found(err, 99);
}

#[tokio::test]
async fn get_all_users_returns_exactly_the_stored_set() {
    let repository = MemoryUserRepository::new();

    let mut expected_ids = Vec::new();
    for (first, last, email) in [
        ("Ada", "Lovelace", "ada@example.com"),
        ("Grace", "Hopper", "grace@example.com"),
        ("Alan", "Turing", "alan@example.com"),
    ] {
        let created = use_case::create_user(&repository, request(first, last, email, None))
            .await
            .unwrap();
        expected_ids.push(created.id);
    }
    expected_ids.sort_unstable();

    let mut listed_ids: Vec<i64> = use_case::get_all_users(&repository)
        .await
        .unwrap()
        .into_iter()
        .map(|user| user.id)
        .collect();
    listed_ids.sort_unstable();

    assert_eq!(listed_ids, expected_ids);
}

#[tokio::test]
async fn create_user_with_invalid_input_never_reaches_the_repository() {
    let repository = MemoryUserRepository::new();

    let err = use_case::create_user(
        &repository,
        request("Ada", "Lovelace", "ada@example.com", Some("12345")),
    )
    .await
    .unwrap_err();

    match err {
        ApplicationError::Validation(validation) => {
            assert_eq!(
                validation.messages(),
                vec!["Phone number must be between 10 and 20 characters"]
            );
        }
        other => panic!("expected a validation error, got: {other}"),
    }
    assert_eq!(repository.stored_ids(), Vec::<i64>::new());
}
