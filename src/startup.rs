use crate::config::GlossaryConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::{EntryRepository, MongoDb, MongoEntryRepository};
use axum::{routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: GlossaryConfig,
    pub db: MongoDb,
    pub repository: Arc<dyn EntryRepository>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: GlossaryConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;
        db.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        let repository: Arc<dyn EntryRepository> = Arc::new(MongoEntryRepository::new(db.clone()));

        let state = AppState {
            config: config.clone(),
            db,
            repository,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route(
                "/entries",
                get(handlers::list_entries).post(handlers::create_entry),
            )
            .route(
                "/entries/:id",
                get(handlers::get_entry)
                    .put(handlers::update_entry)
                    .delete(handlers::delete_entry),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.http.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
