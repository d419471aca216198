pub mod connection {
    use std::time::Duration;

    use crate::config::env_var;

    pub async fn create_pool() -> sqlx::PgPool {
        let dburl = env_var::get().database_url.clone();
        sqlx::postgres::PgPoolOptions::new()
            .min_connections(1)
            .max_connections(5)
            .acquire_timeout(Duration::from_millis(1000))
            .idle_timeout(Duration::from_millis(1000 * 30))
            .max_lifetime(Duration::from_millis(1000 * 10))
            .connect(&dburl)
            .await
            .expect("Expect to create a database pool with a open connection")
    }
}

pub mod repository {
    use async_trait::async_trait;
    use futures::TryStreamExt;
    use sqlx::{postgres::PgRow, PgPool, Row};

    use crate::{
        domain::{entity::User, repository::UserRepository},
        error::persistence::PersistenceError,
    };

    /// Postgres adapter of the [`UserRepository`] seam. Schema in
    /// `dbschema.sql`; ids come from the `users` id sequence.
    pub struct PgUserRepository {
        pool: PgPool,
    }

    impl PgUserRepository {
        pub fn new(pool: PgPool) -> Self {
            Self { pool }
        }
    }

    fn decode_user(row: &PgRow) -> Result<User, sqlx::Error> {
        Ok(User {
            id: Some(row.try_get("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone_number: row.try_get("phone_number")?,
        })
    }

    #[async_trait]
    impl UserRepository for PgUserRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<User>, PersistenceError> {
            let row = sqlx::query(concat!(
                "SELECT id, first_name, last_name, email, phone_number ",
                "FROM users WHERE id = $1",
            ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

            match row {
                Some(row) => Ok(Some(decode_user(&row)?)),
                None => Ok(None),
            }
        }

        async fn find_all(&self) -> Result<Vec<User>, PersistenceError> {
            let mut rows =
                sqlx::query("SELECT id, first_name, last_name, email, phone_number FROM users")
                    .fetch(&self.pool);

            let mut users = Vec::new();
            while let Some(row) = rows.try_next().await? {
                users.push(decode_user(&row)?);
            }

            Ok(users)
        }

        async fn save(&self, user: User) -> Result<User, PersistenceError> {
            match user.id {
                Some(id) => {
                    sqlx::query(concat!(
                        "UPDATE users SET first_name = $1, last_name = $2, ",
                        "email = $3, phone_number = $4 WHERE id = $5",
                    ))
                    .bind(&user.first_name)
                    .bind(&user.last_name)
                    .bind(&user.email)
                    .bind(&user.phone_number)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;

                    Ok(user)
                }
                None => {
                    let row = sqlx::query(concat!(
                        "INSERT INTO users (first_name, last_name, email, phone_number) ",
                        "VALUES ($1, $2, $3, $4) RETURNING id",
                    ))
                    .bind(&user.first_name)
                    .bind(&user.last_name)
                    .bind(&user.email)
                    .bind(&user.phone_number)
                    .fetch_one(&self.pool)
                    .await?;

                    let id: i64 = row.try_get("id")?;
                    Ok(User {
                        id: Some(id),
                        ..user
                    })
                }
            }
        }

        async fn delete(&self, user: &User) -> Result<(), PersistenceError> {
            if let Some(id) = user.id {
                sqlx::query("DELETE FROM users WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
            }

            Ok(())
        }
    }
}
