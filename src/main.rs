use std::sync::Arc;

use salvo::{listener::TcpListener, Server};

use user_service::config::env_var;
use user_service::infra::database::repository::PgUserRepository;
use user_service::infra::{database, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let pool = database::connection::create_pool().await;
    let repository = Arc::new(PgUserRepository::new(pool));

    let address = format!("0.0.0.0:{}", env_var::get().port);
    tracing::info!("user service listening on {address}");

    let listener = TcpListener::bind(&address);
    Server::new(listener).serve(router::app(repository)).await;
}
