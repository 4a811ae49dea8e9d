//! 用户管理 API 处理器
//!
//! 个人资料接口对所有登录用户开放，其余仅管理员。

use super::{sourced, written};
use crate::errors::AppError;
use crate::middleware::{AuthInfo, ADMIN_ONLY};
use crate::models::{RegisterRequest, UpdateProfileRequest, UpdateUserRequest, UserListQuery};
use crate::services::UserService;
use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;
use validator::Validate;

/// 获取用户列表
pub async fn list_users(
    req: HttpRequest,
    user_service: web::Data<Arc<UserService>>,
    query: web::Query<UserListQuery>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let users = user_service.list_users(&query).await?;

    Ok(sourced(&req, users))
}

/// 获取用户详情
pub async fn get_user(
    req: HttpRequest,
    user_service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;

    let user = user_service.get_user(path.into_inner()).await?;

    Ok(sourced(&req, user))
}

/// 创建用户
pub async fn create_user(
    req: HttpRequest,
    user_service: web::Data<Arc<UserService>>,
    body: web::Json<RegisterRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = user_service.create_user(&body).await?;

    Ok(written(&req, user, "演示模式：用户创建仅为模拟"))
}

/// 修改用户
pub async fn update_user(
    req: HttpRequest,
    user_service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
    body: web::Json<UpdateUserRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = user_service.update_user(path.into_inner(), &body).await?;

    Ok(written(&req, user, "演示模式：用户修改仅为模拟"))
}

/// 停用用户
pub async fn delete_user(
    req: HttpRequest,
    user_service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;

    let deleted = user_service.delete_user(path.into_inner()).await?;

    Ok(written(&req, deleted, "演示模式：用户停用仅为模拟"))
}

/// 当前用户资料
pub async fn get_profile(
    req: HttpRequest,
    user_service: web::Data<Arc<UserService>>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_user(auth.user_id).await?;

    Ok(sourced(&req, user))
}

/// 修改当前用户资料
pub async fn update_profile(
    req: HttpRequest,
    user_service: web::Data<Arc<UserService>>,
    body: web::Json<UpdateProfileRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = user_service.update_profile(auth.user_id, &body).await?;

    Ok(written(&req, user, "演示模式：资料修改仅为模拟"))
}

/// 用户登录记录
pub async fn login_history(
    req: HttpRequest,
    user_service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;

    let history = user_service.login_history(path.into_inner()).await?;

    Ok(sourced(&req, history))
}

pub async fn user_statistics(
    req: HttpRequest,
    user_service: web::Data<Arc<UserService>>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;

    Ok(sourced(&req, user_service.statistics().await))
}
