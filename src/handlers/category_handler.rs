//! 基础目录 API 处理器

use super::{sourced, written};
use crate::errors::AppError;
use crate::middleware::{AuthInfo, ADMIN_ONLY, CATALOG_WRITERS};
use crate::models::{
    AlertLevelRequest, AlertStatusRequest, DeviceTypeRequest, ManufacturerRequest, StationRequest,
};
use crate::services::CategoryService;
use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;
use validator::Validate;

const SIMULATED_WRITE: &str = "演示模式：目录修改仅为模拟";

pub async fn list_device_types(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
) -> HttpResponse {
    sourced(&req, category_service.device_types().await)
}

pub async fn list_manufacturers(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
) -> HttpResponse {
    sourced(&req, category_service.manufacturers().await)
}

pub async fn list_stations(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
) -> HttpResponse {
    sourced(&req, category_service.stations().await)
}

pub async fn list_alert_levels(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
) -> HttpResponse {
    sourced(&req, category_service.alert_levels().await)
}

pub async fn list_alert_statuses(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
) -> HttpResponse {
    sourced(&req, category_service.alert_statuses().await)
}

/// 系统配置（仅管理员）
pub async fn list_system_configs(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;

    Ok(sourced(&req, category_service.system_configs().await))
}

pub async fn create_device_type(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
    body: web::Json<DeviceTypeRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(CATALOG_WRITERS)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let device_type = category_service.create_device_type(&body).await?;

    Ok(written(&req, device_type, SIMULATED_WRITE))
}

pub async fn update_device_type(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
    path: web::Path<i64>,
    body: web::Json<DeviceTypeRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(CATALOG_WRITERS)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let device_type = category_service
        .update_device_type(path.into_inner(), &body)
        .await?;

    Ok(written(&req, device_type, SIMULATED_WRITE))
}

/// 停用设备类型（仅管理员）
pub async fn delete_device_type(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
    path: web::Path<i64>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;

    let deleted = category_service.delete_device_type(path.into_inner()).await?;

    Ok(written(&req, deleted, SIMULATED_WRITE))
}

pub async fn create_manufacturer(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
    body: web::Json<ManufacturerRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(CATALOG_WRITERS)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let manufacturer = category_service.create_manufacturer(&body).await?;

    Ok(written(&req, manufacturer, SIMULATED_WRITE))
}

pub async fn update_manufacturer(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
    path: web::Path<i64>,
    body: web::Json<ManufacturerRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(CATALOG_WRITERS)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let manufacturer = category_service
        .update_manufacturer(path.into_inner(), &body)
        .await?;

    Ok(written(&req, manufacturer, SIMULATED_WRITE))
}

/// 停用制造商（仅管理员）
pub async fn delete_manufacturer(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
    path: web::Path<i64>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;

    let deleted = category_service.delete_manufacturer(path.into_inner()).await?;

    Ok(written(&req, deleted, SIMULATED_WRITE))
}

pub async fn create_station(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
    body: web::Json<StationRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(CATALOG_WRITERS)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let station = category_service.create_station(&body).await?;

    Ok(written(&req, station, SIMULATED_WRITE))
}

/// 新增预警级别（仅管理员）
pub async fn create_alert_level(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
    body: web::Json<AlertLevelRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let level = category_service.create_alert_level(&body).await?;

    Ok(written(&req, level, SIMULATED_WRITE))
}

/// 新增预警状态（仅管理员）
pub async fn create_alert_status(
    req: HttpRequest,
    category_service: web::Data<Arc<CategoryService>>,
    body: web::Json<AlertStatusRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let status = category_service.create_alert_status(&body).await?;

    Ok(written(&req, status, SIMULATED_WRITE))
}
