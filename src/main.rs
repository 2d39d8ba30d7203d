//! Liberator - 图书与书架 REST 服务
//!
//! 启动流程: 配置 -> 日志 -> 仓储 -> 种子数据 -> HTTP 服务器

use std::sync::Arc;

use liberator::application::{LibraryRepositoryPort, SeedLibrary, SeedLibraryHandler};
use liberator::config::{load_config, print_config, AppConfig, StorageBackend};
use liberator::infrastructure::http::{AppState, HttpServer, ServerConfig};
use liberator::infrastructure::memory::InMemoryLibraryRepository;
use liberator::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteLibraryRepository,
};

/// 初始化日志（RUST_LOG 优先于配置文件中的级别）
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},liberator={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 按配置创建仓储
async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn LibraryRepositoryPort>> {
    match config.storage.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryLibraryRepository::new())),
        StorageBackend::Sqlite => {
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            Ok(Arc::new(SqliteLibraryRepository::new(pool)))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Starting liberator v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let library_repo = build_repository(&config).await?;

    if config.seed.enabled {
        SeedLibraryHandler::new(library_repo.clone())
            .handle(SeedLibrary::builtin())
            .await?;
    }

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, AppState::new(library_repo));

    server
        .run_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Received shutdown signal"),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to listen for ctrl-c, running until killed");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
