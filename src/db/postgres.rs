//! PostgreSQL 连接池管理

use crate::config::DatabaseSettings;
use crate::errors::AppError;
use secrecy::{ExposeSecret, SecretString};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::{Duration, Instant};

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

/// PostgreSQL 连接池包装
#[derive(Clone)]
pub struct PostgresPool {
    pool: PgPool,
}

impl PostgresPool {
    /// 创建新的数据库连接池
    pub async fn new(settings: &DatabaseSettings, database_url: &SecretString) -> Result<Self, AppError> {
        let mut options = PgConnectOptions::from_str(database_url.expose_secret())
            .map_err(|e| AppError::ConfigError(format!("数据库 URL 无效: {}", e)))?;

        if settings.require_ssl {
            options = options.ssl_mode(PgSslMode::Require);
        }

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .acquire_timeout(Duration::from_secs(settings.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(settings.idle_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!("数据库连接失败: {}", e);
                AppError::DatabaseError(e)
            })?;

        tracing::info!(
            max_connections = settings.max_connections,
            "数据库连接池已创建"
        );

        Ok(Self { pool })
    }

    /// 包装已有连接池
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 获取内部连接池引用
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// 健康检查，返回往返耗时（毫秒）
    pub async fn health_check(&self) -> Result<u64, AppError> {
        let started = Instant::now();
        tokio::time::timeout(HEALTH_CHECK_TIMEOUT, sqlx::query("SELECT 1").execute(&self.pool))
            .await
            .map_err(|_| AppError::InternalError("数据库健康检查超时".to_string()))??;
        Ok(started.elapsed().as_millis() as u64)
    }

    /// 运行数据库迁移
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::InternalError(format!("迁移失败: {}", e)))?;

        tracing::info!("数据库迁移完成");
        Ok(())
    }
}
