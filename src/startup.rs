//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use chrono::Utc;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::hash_password;
use crate::config::Settings;
use crate::domain::{Account, AccountRepository, Role};
use crate::infrastructure::repositories::PgAccountRepository;
use crate::infrastructure::{database, metrics};
use crate::presentation::http::routes;
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub settings: Arc<Settings>,
}

/// Build the router with all middleware applied.
///
/// Split out of [`Application::build`] so tests can assemble a router
/// around their own state.
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);
    routes::create_router(state)
        .layer(create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        // Run migrations
        database::run_migrations(&db).await?;
        tracing::info!("Database migrations applied");

        // Seed operator accounts defined in configuration
        seed_bootstrap_accounts(&db, &settings).await?;

        metrics::update_db_pool_stats(
            db.num_idle() as u32,
            db.size().saturating_sub(db.num_idle() as u32),
            settings.database.max_connections,
        );

        // Create app state
        let state = AppState {
            db,
            settings: Arc::new(settings.clone()),
        };

        // Build router with middleware
        let router = build_router(state);

        // Bind to address
        let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Create the operator accounts listed in `bootstrap.accounts` if they do
/// not exist yet. Passwords are hashed before storage; entries with an
/// unknown role are skipped with a warning.
async fn seed_bootstrap_accounts(db: &PgPool, settings: &Settings) -> Result<()> {
    let repo = PgAccountRepository::new(db.clone());

    for entry in &settings.bootstrap.accounts {
        let Some(role) = Role::parse(&entry.role) else {
            tracing::warn!(
                username = %entry.username,
                role = %entry.role,
                "Skipping bootstrap account with unknown role"
            );
            continue;
        };

        if repo.username_exists(&entry.username).await? {
            continue;
        }

        let now = Utc::now();
        let account = Account {
            id: uuid::Uuid::new_v4(),
            username: entry.username.clone(),
            password_hash: hash_password(&entry.password)
                .map_err(|e| anyhow::anyhow!("bootstrap account hashing failed: {e}"))?,
            role,
            created_at: now,
            updated_at: now,
        };

        repo.create(&account).await?;
        tracing::info!(username = %entry.username, role = %role, "Bootstrap account created");
    }

    Ok(())
}
