//! 设备管理 API 处理器

use super::{respond, sourced};
use crate::errors::AppError;
use crate::middleware::{AuthInfo, ADMIN_ONLY, DEVICE_WRITERS};
use crate::models::{
    ApiResponse, CreateDeviceRequest, DeviceDataQuery, DeviceHistoryQuery, DeviceListQuery,
    MaintenanceQuery, UpdateDeviceRequest,
};
use crate::services::DeviceService;
use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;
use validator::Validate;

/// 获取设备列表
pub async fn list_devices(
    req: HttpRequest,
    device_service: web::Data<Arc<DeviceService>>,
    query: web::Query<DeviceListQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let devices = device_service.list_devices(&query)?;

    Ok(sourced(&req, devices))
}

/// 创建设备（演示模式下只做模拟）
pub async fn create_device(
    req: HttpRequest,
    device_service: web::Data<Arc<DeviceService>>,
    body: web::Json<CreateDeviceRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(DEVICE_WRITERS)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let device = device_service.create_device(&body)?;

    Ok(respond(
        &req,
        ApiResponse::simulated(device.data, "演示模式：设备创建仅为模拟"),
    ))
}

/// 修改设备（模拟）
pub async fn update_device(
    req: HttpRequest,
    device_service: web::Data<Arc<DeviceService>>,
    path: web::Path<i64>,
    body: web::Json<UpdateDeviceRequest>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(DEVICE_WRITERS)?;
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let device = device_service.update_device(path.into_inner(), &body)?;

    Ok(respond(
        &req,
        ApiResponse::simulated(device.data, "演示模式：设备修改仅为模拟"),
    ))
}

/// 删除设备（模拟，仅管理员）
pub async fn delete_device(
    req: HttpRequest,
    device_service: web::Data<Arc<DeviceService>>,
    path: web::Path<i64>,
    auth: web::ReqData<AuthInfo>,
) -> Result<HttpResponse, AppError> {
    auth.require_any(ADMIN_ONLY)?;

    let deleted = device_service.delete_device(path.into_inner())?;

    Ok(respond(
        &req,
        ApiResponse::simulated(deleted.data, "演示模式：设备删除仅为模拟"),
    ))
}

/// 设备统计
pub async fn device_statistics(
    req: HttpRequest,
    device_service: web::Data<Arc<DeviceService>>,
) -> HttpResponse {
    sourced(&req, device_service.statistics())
}

/// 获取设备详情
pub async fn get_device(
    req: HttpRequest,
    device_service: web::Data<Arc<DeviceService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let device = device_service.get_device(path.into_inner())?;

    Ok(sourced(&req, device))
}

/// 设备实时数据
pub async fn get_device_data(
    req: HttpRequest,
    device_service: web::Data<Arc<DeviceService>>,
    path: web::Path<i64>,
    query: web::Query<DeviceDataQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let data = device_service.device_data(path.into_inner(), query.size)?;

    Ok(sourced(&req, data))
}

/// 设备历史数据
pub async fn get_device_history(
    req: HttpRequest,
    device_service: web::Data<Arc<DeviceService>>,
    path: web::Path<i64>,
    query: web::Query<DeviceHistoryQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let history = device_service.device_history(path.into_inner(), &query)?;

    Ok(sourced(&req, history))
}

/// 设备维护记录
pub async fn get_device_maintenance(
    req: HttpRequest,
    device_service: web::Data<Arc<DeviceService>>,
    path: web::Path<i64>,
    query: web::Query<MaintenanceQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let records = device_service.maintenance_records(path.into_inner(), query.size)?;

    Ok(sourced(&req, records))
}
