//! 电网地图 API 处理器（公开访问）

use super::sourced;
use crate::services::GridMapService;
use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;

pub async fn grid_map(req: HttpRequest, grid_map_service: web::Data<Arc<GridMapService>>) -> HttpResponse {
    sourced(&req, grid_map_service.map_data())
}

pub async fn grid_facilities(
    req: HttpRequest,
    grid_map_service: web::Data<Arc<GridMapService>>,
) -> HttpResponse {
    sourced(&req, grid_map_service.facilities())
}

pub async fn grid_lines(req: HttpRequest, grid_map_service: web::Data<Arc<GridMapService>>) -> HttpResponse {
    sourced(&req, grid_map_service.power_lines())
}

pub async fn grid_statistics(
    req: HttpRequest,
    grid_map_service: web::Data<Arc<GridMapService>>,
) -> HttpResponse {
    sourced(&req, grid_map_service.statistics())
}
