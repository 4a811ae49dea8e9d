//! 预警管理 API 处理器

use super::{respond, sourced};
use crate::errors::AppError;
use crate::middleware::{AuthInfo, ADMIN_ONLY, ALERT_WRITERS};
use crate::models::{
    AlertListQuery, AlertStatisticsQuery, ApiResponse, CreateAlertRequest, UnresolvedAlertQuery,
    UpdateAlertRequest,
};
use crate::services::{AlertService, AuthService};
use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;
use validator::Validate;

/// 获取预警列表
pub async fn list_alerts(
    req: HttpRequest,
    alert_service: web::Data<Arc<AlertService>>,
    query: web::Query<AlertListQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    Ok(sourced(&req, alert_service.list_alerts(&query)))
}

/// 创建预警（演示模式下只做模拟）
pub async fn create_alert(
    req: HttpRequest,
    alert_service: web::Data<Arc<AlertService>>,
    body: web::Json<CreateAlertRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ALERT_WRITERS)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let alert = alert_service.create_alert(&body)?;

    Ok(respond(
        &req,
        ApiResponse::simulated(alert.data, "演示模式：预警创建仅为模拟"),
    ))
}

/// 预警统计
pub async fn alert_statistics(
    req: HttpRequest,
    alert_service: web::Data<Arc<AlertService>>,
    query: web::Query<AlertStatisticsQuery>,
) -> HttpResponse {
    sourced(&req, alert_service.statistics(query.period.as_deref()))
}

/// 未解决的预警
pub async fn unresolved_alerts(
    req: HttpRequest,
    alert_service: web::Data<Arc<AlertService>>,
    query: web::Query<UnresolvedAlertQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    Ok(sourced(&req, alert_service.unresolved_alerts(query.page, query.size)))
}

/// 未解决的严重预警
pub async fn critical_alerts(
    req: HttpRequest,
    alert_service: web::Data<Arc<AlertService>>,
) -> HttpResponse {
    sourced(&req, alert_service.critical_alerts())
}

/// 获取预警详情
pub async fn get_alert(
    req: HttpRequest,
    alert_service: web::Data<Arc<AlertService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let alert = alert_service.get_alert(path.into_inner())?;

    Ok(sourced(&req, alert))
}

/// 处理预警，处理人为当前用户
pub async fn resolve_alert(
    req: HttpRequest,
    alert_service: web::Data<Arc<AlertService>>,
    auth_service: web::Data<Arc<AuthService>>,
    path: web::Path<i64>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ALERT_WRITERS)?;

    let resolver = auth_service.current_user(auth.user_id).await?;
    let alert = alert_service.resolve_alert(path.into_inner(), resolver.data)?;

    Ok(respond(
        &req,
        ApiResponse::simulated(alert.data, "演示模式：预警处理仅为模拟"),
    ))
}

/// 修改预警（模拟）
pub async fn update_alert(
    req: HttpRequest,
    alert_service: web::Data<Arc<AlertService>>,
    path: web::Path<i64>,
    body: web::Json<UpdateAlertRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ALERT_WRITERS)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let alert = alert_service.update_alert(path.into_inner(), &body)?;

    Ok(respond(
        &req,
        ApiResponse::simulated(alert.data, "演示模式：预警修改仅为模拟"),
    ))
}

/// 删除预警（模拟，仅管理员）
pub async fn delete_alert(
    req: HttpRequest,
    alert_service: web::Data<Arc<AlertService>>,
    path: web::Path<i64>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;

    let deleted = alert_service.delete_alert(path.into_inner())?;

    Ok(respond(
        &req,
        ApiResponse::simulated(deleted.data, "演示模式：预警删除仅为模拟"),
    ))
}
