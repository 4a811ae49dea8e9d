//! 认证中间件

use crate::errors::AppError;
use crate::models::UserRole;
use crate::security::JwtManager;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpMessage,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use std::rc::Rc;
use std::sync::Arc;

/// 认证信息（存储在请求扩展中）
#[derive(Debug, Clone, PartialEq)]
pub struct AuthInfo {
    pub user_id: i64,
    pub email: String,
    pub role: UserRole,
}

impl AuthInfo {
    /// 要求当前用户属于给定角色之一
    pub fn require_any(&self, roles: &[UserRole]) -> Result<(), AppError> {
        if roles.contains(&self.role) {
            Ok(())
        } else {
            tracing::debug!(user_id = self.user_id, role = %self.role, "角色权限不足");
            Err(AppError::Forbidden("权限不足".to_string()))
        }
    }
}

/// 管理员
pub const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];

/// 可以维护基础目录的角色
pub const CATALOG_WRITERS: &[UserRole] = &[UserRole::Admin, UserRole::Operator];

/// 可以修改设备的角色
pub const DEVICE_WRITERS: &[UserRole] = &[UserRole::Admin, UserRole::Operator];

/// 可以创建与处理预警的角色
pub const ALERT_WRITERS: &[UserRole] = &[UserRole::Admin, UserRole::Operator, UserRole::User];

/// 提取 Bearer 令牌
fn bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// JWT 认证中间件
#[derive(Clone)]
pub struct JwtAuth {
    jwt_manager: Arc<JwtManager>,
}

impl JwtAuth {
    pub fn new(jwt_manager: Arc<JwtManager>) -> Self {
        Self { jwt_manager }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(JwtAuthMiddleware {
            service: Rc::new(service),
            jwt_manager: self.jwt_manager.clone(),
        })
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    jwt_manager: Arc<JwtManager>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let jwt_manager = self.jwt_manager.clone();

        Box::pin(async move {
            let token = bearer_token(&req)
                .ok_or_else(|| AppError::Unauthorized("缺少认证令牌".to_string()))?;

            let claims = jwt_manager.validate_access_token(token)?;

            let auth_info = AuthInfo {
                user_id: claims.user_id()?,
                email: claims.email,
                role: claims.role,
            };
            req.extensions_mut().insert(auth_info);

            service.call(req).await
        })
    }
}
