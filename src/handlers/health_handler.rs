//! 健康检查 API 处理器

use crate::db::PostgresPool;
use crate::fake_data::FakeDataService;
use crate::models::{HealthCheckResponse, ServiceStatus};
use actix_web::{web, HttpResponse};
use std::sync::Arc;
use std::time::Instant;

/// 应用启动时间
static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

/// 可选的数据库连接池
pub type OptionalPool = Option<Arc<PostgresPool>>;

async fn database_status(pool: &OptionalPool) -> ServiceStatus {
    match pool {
        Some(pool) => match pool.health_check().await {
            Ok(latency_ms) => ServiceStatus::healthy(latency_ms),
            Err(e) => {
                tracing::warn!(error = %e, "数据库健康检查失败");
                ServiceStatus::unhealthy()
            }
        },
        None => ServiceStatus::disabled(),
    }
}

/// 简单健康检查（用于负载均衡器）
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok"
    }))
}

/// 详细健康检查
///
/// 数据库异常时服务仍可用演示数据响应，整体状态记为 degraded。
pub async fn health_detailed(
    pool: web::Data<OptionalPool>,
    fake_data: web::Data<Arc<FakeDataService>>,
) -> HttpResponse {
    let database = database_status(&pool).await;

    let status = if database.status == "unhealthy" {
        "degraded"
    } else {
        "healthy"
    };

    let response = HealthCheckResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        fake_data_mode: fake_data.mode().to_string(),
        uptime_seconds: START_TIME.elapsed().as_secs(),
    };

    HttpResponse::Ok().json(response)
}

/// 就绪检查（用于 Kubernetes）
///
/// 演示数据随时可用，因此只要进程在运行就视为就绪。
pub async fn ready(pool: web::Data<OptionalPool>) -> HttpResponse {
    let database = database_status(&pool).await;

    HttpResponse::Ok().json(serde_json::json!({
        "ready": true,
        "database": database.status,
    }))
}

/// 存活检查（用于 Kubernetes）
pub async fn live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "alive": true
    }))
}
