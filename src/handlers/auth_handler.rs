//! 认证 API 处理器

use super::{sourced, written};
use crate::errors::AppError;
use crate::middleware::AuthInfo;
use crate::models::{LoginRequest, RefreshTokenRequest, RegisterRequest, UserRole};
use crate::services::{AuthService, UserService};
use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;
use validator::Validate;

/// 用户登录
pub async fn login(
    req: HttpRequest,
    auth_service: web::Data<Arc<AuthService>>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = auth_service.login(&body).await?;

    Ok(sourced(&req, response))
}

/// 刷新令牌
pub async fn refresh_token(
    req: HttpRequest,
    auth_service: web::Data<Arc<AuthService>>,
    body: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    let tokens = auth_service.refresh_token(&body.refresh_token).await?;

    Ok(sourced(&req, tokens))
}

/// 当前登录用户
pub async fn me(
    req: HttpRequest,
    auth_service: web::Data<Arc<AuthService>>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    let user = auth_service.current_user(auth.user_id).await?;

    Ok(sourced(&req, user))
}

/// 自助注册，角色固定为普通用户
pub async fn register(
    req: HttpRequest,
    user_service: web::Data<Arc<UserService>>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let mut request = body.into_inner();
    request.role = UserRole::User;

    let user = user_service.create_user(&request).await?;

    Ok(written(&req, user, "演示模式：注册仅为模拟"))
}

/// 退出登录
pub async fn logout(
    req: HttpRequest,
    auth_service: web::Data<Arc<AuthService>>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    let response = auth_service.logout(auth.user_id).await?;

    Ok(sourced(&req, response))
}
