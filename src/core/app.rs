use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::board::service::{AnonymousBoardService, BoardService};
use crate::core::config::Config;
use crate::storage::database::Database;
use crate::storage::repositories::SqliteBoardPostRepository;
use crate::web::routes;

pub struct App {
    config: Config,
    board_service: Arc<dyn BoardService>,
}

impl App {
    pub async fn new(config: Config) -> Result<Self> {
        info!("Initializing application components");

        // Initialize database
        let db = Arc::new(Database::new(&config.database).await?);

        // Run migrations
        db.migrate().await?;

        let repository = Arc::new(SqliteBoardPostRepository::new(db));
        let board_service: Arc<dyn BoardService> = Arc::new(AnonymousBoardService::new(repository));

        Ok(Self {
            config,
            board_service,
        })
    }

    pub async fn run(self) -> Result<()> {
        let app_state = AppState::new(self.board_service);
        let app = routes::create_router(Arc::new(app_state));

        let addr = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub board_service: Arc<dyn BoardService>,
}

impl AppState {
    pub fn new(board_service: Arc<dyn BoardService>) -> Self {
        Self { board_service }
    }
}
