//! Application state - shared across all handlers.

use std::sync::Arc;

use mays_core::service::{CommentService, LikeService};
use mays_infra::database::DatabaseConfig;
use mays_infra::{InMemoryDatabase, Repositories};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub comments: CommentService,
    pub likes: LikeService,
    /// Which backend the repositories run on, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            match db_config {
                Some(config) => match mays_infra::database::connect(config).await {
                    Ok(conn) => {
                        tracing::info!("Application state initialized");
                        return Self::from_repositories(Repositories::sea_orm(conn), "database");
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                },
                None => {
                    tracing::warn!(
                        "DATABASE_URL not set. Running without database (in-memory mode)."
                    );
                }
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
        }

        tracing::info!("Application state initialized");
        Self::in_memory(InMemoryDatabase::new())
    }

    pub fn in_memory(db: Arc<InMemoryDatabase>) -> Self {
        Self::from_repositories(Repositories::in_memory(db), "memory")
    }

    fn from_repositories(repos: Repositories, storage: &'static str) -> Self {
        Self {
            comments: repos.comment_service(),
            likes: repos.like_service(),
            storage,
        }
    }
}
