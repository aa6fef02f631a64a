//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, PgAccountRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use platform::token::TokenAuthority;
use progress::{PgProgressRepository, ProgressConfig, progress_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Default token validity when TOKEN_TTL_SECS is not set: 2 hours
const DEFAULT_TOKEN_TTL_SECS: u64 = 2 * 3600;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,progress=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token configuration. Auth mints tokens and progress verifies
    // them, so both features share one authority.
    let token_authority = load_token_authority()?;
    let password_pepper = load_password_pepper()?;

    let auth_config = AuthConfig::new(token_authority.clone(), password_pepper);
    let progress_config = ProgressConfig::new(token_authority);

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router. Auth routes sit at the root; progress routes follow
    // the /{module}/... shape, so both merge at the top level.
    let app = Router::new()
        .merge(auth_router(PgAccountRepository::new(pool.clone()), auth_config))
        .merge(progress_router(
            PgProgressRepository::new(pool.clone()),
            progress_config,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the token authority from the environment.
///
/// TOKEN_SECRET (base64, 32 bytes) is required in release builds; debug
/// builds fall back to a random per-process secret, which means tokens
/// do not survive restarts there.
fn load_token_authority() -> anyhow::Result<TokenAuthority> {
    let ttl_secs = env::var("TOKEN_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TOKEN_TTL_SECS);
    let ttl = Duration::from_secs(ttl_secs);

    let secret = match env::var("TOKEN_SECRET") {
        Ok(secret_b64) => {
            let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
            let mut secret = [0u8; 32];
            if secret_bytes.len() != secret.len() {
                anyhow::bail!("TOKEN_SECRET must decode to exactly 32 bytes");
            }
            secret.copy_from_slice(&secret_bytes);
            secret
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("TOKEN_SECRET not set, using a random per-process secret");
            rand::random()
        }
        Err(_) => anyhow::bail!("TOKEN_SECRET must be set in production"),
    };

    Ok(TokenAuthority::new(secret, ttl))
}

/// Optional application-wide pepper for password hashing (base64).
fn load_password_pepper() -> anyhow::Result<Option<Vec<u8>>> {
    match env::var("PASSWORD_PEPPER") {
        Ok(pepper_b64) => Ok(Some(Engine::decode(
            &general_purpose::STANDARD,
            &pepper_b64,
        )?)),
        Err(_) => Ok(None),
    }
}
