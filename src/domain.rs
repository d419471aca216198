pub mod entity {
    /// Durable representation of a user record as stored.
    ///
    /// The id is assigned by the store on first save and is immutable
    /// afterwards. Field constraints are enforced at the request boundary,
    /// not re-checked here.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct User {
        pub id: Option<i64>,
        pub first_name: String,
        pub last_name: String,
        pub email: String,
        pub phone_number: Option<String>,
    }
}

pub mod repository {
    use async_trait::async_trait;

    use super::entity::User;
    use crate::error::persistence::PersistenceError;

    /// Persistence operations required by the user use cases.
    ///
    /// Implementations must guarantee single-row atomicity for `save` and
    /// `delete`; no transaction spanning multiple operations is required.
    #[async_trait]
    pub trait UserRepository: Send + Sync {
        async fn find_by_id(&self, id: i64) -> Result<Option<User>, PersistenceError>;

        /// All current rows, one pass. No ordering guarantee.
        async fn find_all(&self) -> Result<Vec<User>, PersistenceError>;

        /// Inserts the entity when its id is unset, assigning one from the
        /// store, otherwise updates the row matching the id. Returns the
        /// persisted entity with the id always set.
        async fn save(&self, user: User) -> Result<User, PersistenceError>;

        /// Removes the row matching the entity id.
        async fn delete(&self, user: &User) -> Result<(), PersistenceError>;
    }
}
