//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 部署平台通用变量 `PORT` / `DATABASE_URL`
//! 2. 环境变量（前缀 `REEL_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 启动前读取的 env 文件（不存在则忽略）
const ENV_FILE_NAMES: &[&str] = &["keys.env", ".env"];

/// 加载应用配置
///
/// 先把 `keys.env` / `.env` 读入进程环境，再按优先级合并：
/// 1. `PORT`、`DATABASE_URL`
/// 2. 环境变量（前缀 `REEL_`，层级分隔符 `__`）
/// 3. 配置文件（config.toml 或 config.local.toml）
/// 4. 默认值
///
/// # 环境变量示例
/// - `REEL_SERVER__PORT=8080`
/// - `REEL_DATABASE__URL=sqlite:/data/movies.db?mode=rwc`
/// - `REEL_QUERY__TITLE_MATCH=exact`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_env_files();
    load_config_from_path(None)
}

/// 读取 env 文件，已存在的进程环境变量不会被覆盖
fn load_env_files() {
    for name in ENV_FILE_NAMES {
        dotenvy::from_filename(name).ok();
    }
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.max_body_size", 100 * 1024)?
        .set_default("database.url", "sqlite:data/movies.db?mode=rwc")?
        .set_default("database.max_connections", 5)?
        .set_default("query.title_match", "contains")?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量
    // 例如: REEL_DATABASE__URL=sqlite:movies.db
    builder = builder.add_source(
        Environment::with_prefix("REEL")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 平台通用变量
    builder = builder
        .set_override_option("server.port", std::env::var("PORT").ok())?
        .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.max_body_size == 0 {
        return Err(ConfigError::ValidationError(
            "Max body size cannot be 0".to_string(),
        ));
    }

    if config.database.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Database connection string cannot be empty".to_string(),
        ));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max connections cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_size);
    tracing::info!("Database: {}", config.database.url);
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Title Match: {}", config.query.title_match.as_str());
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
