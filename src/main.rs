//! Reel - 电影文档 CRUD API
//!
//! 启动顺序：加载配置 → 初始化日志 → 连接数据库 → 监听端口
//! 数据库初始化失败时直接退出，不会开始监听

use std::sync::Arc;

use reel::config::{load_config, print_config};
use reel::infrastructure::http::{AppState, HttpServer};
use reel::infrastructure::persistence::sqlite::{DatabaseConfig, SqliteMovieRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：PORT/DATABASE_URL > 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},reel={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Reel - Movies API");
    print_config(&config);

    // 确保数据库文件所在目录存在
    if let Some(parent) = config
        .database
        .file_path()
        .and_then(|path| path.parent().map(|p| p.to_path_buf()))
    {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(&parent).await?;
        }
    }

    // 初始化数据库，必须在监听之前完成
    let db_config = DatabaseConfig::new(&config.database.url, config.database.max_connections);
    let movie_repo = match SqliteMovieRepository::initialize(&db_config).await {
        Ok(repo) => repo,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database");
            return Err(e.into());
        }
    };
    tracing::info!("Connected to database");

    let state = AppState::new(Arc::new(movie_repo), config.query.title_match);
    let server = HttpServer::new(config.server.clone(), state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
