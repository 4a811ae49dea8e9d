//! 业务逻辑层（Service）
//!
//! 读操作优先访问数据库，失败时回退到演示数据并标记数据来源。
//! 写操作同样优先写库；数据库不可用时只返回模拟结果，业务错误（重名、不存在）照常返回。

mod alert_service;
mod auth_service;
mod category_service;
mod dashboard_service;
mod device_service;
mod grid_map_service;
mod user_service;

pub use alert_service::AlertService;
pub use auth_service::{AuthService, LoginResponse, LogoutResponse};
pub use category_service::CategoryService;
pub use dashboard_service::DashboardService;
pub use device_service::DeviceService;
pub use grid_map_service::GridMapService;
pub use user_service::UserService;

use crate::errors::AppError;
use crate::models::Sourced;
use std::future::Future;

/// 先执行数据库查询，未配置数据库或查询失败时使用演示数据
pub(crate) async fn with_fallback<T, Fut, F>(what: &'static str, query: Option<Fut>, fake: F) -> Sourced<T>
where
    Fut: Future<Output = Result<T, AppError>>,
    F: FnOnce() -> T,
{
    match query {
        Some(query) => match query.await {
            Ok(data) => return Sourced::database(data),
            Err(e) => {
                tracing::warn!(resource = what, error = %e, "数据库查询失败，回退到演示数据");
            }
        },
        None => {
            tracing::debug!(resource = what, "未配置数据库，使用演示数据");
        }
    }

    Sourced::fake(fake())
}

/// 先执行数据库写操作，未配置数据库或数据库故障时返回模拟结果
pub(crate) async fn write_or_simulate<T, Fut, F>(
    what: &'static str,
    write: Option<Fut>,
    simulate: F,
) -> Result<Sourced<T>, AppError>
where
    Fut: Future<Output = Result<T, AppError>>,
    F: FnOnce() -> Result<T, AppError>,
{
    match write {
        Some(write) => match write.await {
            Ok(data) => return Ok(Sourced::database(data)),
            Err(AppError::DatabaseError(e)) => {
                tracing::warn!(resource = what, error = %e, "数据库写入失败，返回模拟结果");
            }
            Err(e) => return Err(e),
        },
        None => {
            tracing::debug!(resource = what, "未配置数据库，模拟写操作");
        }
    }

    simulate().map(Sourced::fake)
}

/// 模拟写操作使用的 ID（毫秒时间戳）
pub(crate) fn simulated_id() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
