use crate::{
    app::{
        resource::{UserRequest, UserResponse},
        transform, validation,
    },
    domain::{entity::User, repository::UserRepository},
    error::{app::ApplicationError, resource::NotFoundError},
};

/// Validates the request, persists a new entity and returns it with the
/// store-assigned id.
pub async fn create_user(
    repository: &dyn UserRepository,
    request: UserRequest,
) -> Result<UserResponse, ApplicationError> {
    validation::user_request(&request)?;

    let user = User::from(&request);
    let saved = repository.save(user).await?;

    Ok(saved.into())
}

pub async fn get_user_by_id(
    repository: &dyn UserRepository,
    id: i64,
) -> Result<UserResponse, ApplicationError> {
    let user = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| NotFoundError::user(id))?;

    Ok(user.into())
}

/// Order follows the store's iteration order and is not otherwise
/// guaranteed.
pub async fn get_all_users(
    repository: &dyn UserRepository,
) -> Result<Vec<UserResponse>, ApplicationError> {
    let users = repository.find_all().await?;

    Ok(users.into_iter().map(UserResponse::from).collect())
}

/// Overwrites every non-id field of an existing entity with the request
/// values. No partial-field patch semantics.
pub async fn update_user(
    repository: &dyn UserRepository,
    id: i64,
    request: UserRequest,
) -> Result<UserResponse, ApplicationError> {
    let mut user = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| NotFoundError::user(id))?;

    validation::user_request(&request)?;
    transform::user::apply_to_entity(&request, &mut user);

    let saved = repository.save(user).await?;

    Ok(saved.into())
}

/// Existence is re-checked immediately before deletion.
pub async fn delete_user(
    repository: &dyn UserRepository,
    id: i64,
) -> Result<(), ApplicationError> {
    let user = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| NotFoundError::user(id))?;

    repository.delete(&user).await?;

    Ok(())
}
