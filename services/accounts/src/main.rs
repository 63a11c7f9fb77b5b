use sea_orm::Database;
use tracing::info;

use aegis_accounts::config::AccountsConfig;
use aegis_accounts::delivery::spawn_delivery_worker;
use aegis_accounts::infra::mailer::HttpMailer;
use aegis_accounts::router::build_router;
use aegis_accounts::state::AppState;

#[tokio::main]
async fn main() {
    aegis_core::tracing::init_tracing();

    let config = AccountsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let redis_cfg = deadpool_redis::Config::from_url(&config.redis_url);
    let redis = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("failed to create Redis pool");

    let mailer = HttpMailer::new(config.mail_api_url, config.mail_api_key, config.mail_sender);
    let delivery = spawn_delivery_worker(mailer);

    let state = AppState {
        db,
        redis,
        delivery,
        cookie_domain: config.cookie_domain,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.accounts_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("accounts service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
