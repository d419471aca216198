pub mod controller;
pub mod database;

pub mod router {
    use std::sync::Arc;

    use salvo::{logging::Logger, Router};

    use super::controller::*;
    use crate::domain::repository::UserRepository;

    pub fn app(repository: Arc<dyn UserRepository>) -> Router {
        Router::new()
            .push(
                Router::with_path("users")
                    .post(CreateUserController::new(repository.clone()))
                    .get(ListUsersController::new(repository.clone()))
                    .push(
                        Router::with_path("<id>")
                            .get(GetUserController::new(repository.clone()))
                            .put(UpdateUserController::new(repository.clone()))
                            .delete(DeleteUserController::new(repository)),
                    ),
            )
            .hoop(Logger)
    }
}
