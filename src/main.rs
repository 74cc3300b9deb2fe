//! msgboard - 留言板 HTTP 服务
//!
//! 启动流程: 配置 → 日志 → 数据库 → HTTP 服务器

use std::sync::Arc;

use msgboard::config::{load_config, print_config, LogConfig};
use msgboard::infrastructure::http::{AppState, HttpServer, ServerConfig};
use msgboard::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteMessageRepository,
};

/// 初始化日志，`RUST_LOG` 优先于配置文件
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},msgboard={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("msgboard - message board service");
    print_config(&config);

    // 确保数据库目录存在
    if !config.database.is_in_memory() {
        if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let message_repo = Arc::new(SqliteMessageRepository::new(pool.clone()));

    let state = AppState::new(message_repo);
    let server = HttpServer::new(ServerConfig::from(&config.server), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
