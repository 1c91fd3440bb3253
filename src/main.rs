mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use std::net::SocketAddr;

use axum::Router;
use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher, hex_token_generator::HexTokenGenerator,
        http_mailer::HttpApiMailer, user_registration_repository::PostgresUserRegistrationRepository,
        user_repository::PostgresUserRepository,
    },
    presentation::handlers::user_handler::create_user_router,
    usecase::register_user_usecase::RegisterUserUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let mut opt = ConnectOptions::new(dotenvy::var("DATABASE_URL")?);
    opt.max_connections(10).min_connections(1).sqlx_logging(true);

    let db = Database::connect(opt).await.expect("Connection to DB failed");
    let user_repository = PostgresUserRepository::new(db.clone());
    let registration_repository = PostgresUserRegistrationRepository::new(db.clone());
    let password_hasher = Argon2PasswordHasher::new();
    let token_generator = HexTokenGenerator::new();
    let mailer = HttpApiMailer::new(dotenvy::var("MAIL_API_URL")?, dotenvy::var("MAIL_FROM")?)?;

    let register_user_usecase = RegisterUserUsecase::new(
        user_repository,
        registration_repository,
        password_hasher,
        token_generator,
        mailer,
    );

    let app = Router::new().nest("/api", create_user_router(register_user_usecase));

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!(%addr, "listening");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
