//! 仪表盘 API 处理器

use super::sourced;
use crate::services::DashboardService;
use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;

pub async fn dashboard_overview(
    req: HttpRequest,
    dashboard_service: web::Data<Arc<DashboardService>>,
) -> HttpResponse {
    sourced(&req, dashboard_service.overview())
}

pub async fn dashboard_statistics(
    req: HttpRequest,
    dashboard_service: web::Data<Arc<DashboardService>>,
) -> HttpResponse {
    sourced(&req, dashboard_service.statistics())
}

pub async fn dashboard_alert_summary(
    req: HttpRequest,
    dashboard_service: web::Data<Arc<DashboardService>>,
) -> HttpResponse {
    sourced(&req, dashboard_service.alert_summary())
}
