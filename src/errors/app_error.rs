//! 统一错误类型定义

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

/// 应用错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // 认证错误 (401)
    #[error("认证失败")]
    Unauthorized(String),

    // 权限错误 (403)
    #[error("权限不足")]
    Forbidden(String),

    // 资源不存在 (404)
    #[error("资源不存在: {0}")]
    NotFound(String),

    // 请求验证错误 (400)
    #[error("请求参数无效: {0}")]
    ValidationError(String),

    // 数据库错误 (500)
    #[error("数据库错误: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // 内部错误 (500)
    #[error("内部服务错误: {0}")]
    InternalError(String),

    // 配置错误
    #[error("配置错误: {0}")]
    ConfigError(String),
}

/// API 错误响应结构
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    code: u16,
    message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // 对外只返回概括信息，细节只进日志
        let message = match self {
            AppError::Unauthorized(_) => "认证失败".to_string(),
            AppError::Forbidden(_) => "权限不足".to_string(),
            AppError::NotFound(what) => format!("{}不存在", what),
            AppError::ValidationError(msg) => msg.clone(),
            AppError::DatabaseError(_) => "服务暂时不可用".to_string(),
            AppError::InternalError(_) => "服务内部错误".to_string(),
            AppError::ConfigError(_) => "服务配置错误".to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "请求处理错误");
        } else {
            tracing::debug!(error = %self, status = %status, "请求被拒绝");
        }

        HttpResponse::build(status).json(ErrorResponse {
            code: status.as_u16(),
            message,
        })
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}
