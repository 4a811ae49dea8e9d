//! HTTP 处理器模块

mod alert_handler;
mod auth_handler;
mod category_handler;
mod dashboard_handler;
mod device_handler;
mod grid_map_handler;
mod health_handler;
mod user_handler;

pub use alert_handler::*;
pub use auth_handler::*;
pub use category_handler::*;
pub use dashboard_handler::*;
pub use device_handler::*;
pub use grid_map_handler::*;
pub use health_handler::*;
pub use user_handler::*;

use crate::middleware::RequestId;
use crate::models::{ApiResponse, DataSource, Sourced};
use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use serde::Serialize;

/// 数据来源响应头
pub const DATA_SOURCE_HEADER: &str = "X-Data-Source";

/// 输出统一响应，附带数据来源头与请求 ID
fn respond<T: Serialize>(req: &HttpRequest, body: ApiResponse<T>) -> HttpResponse {
    let body = match req.extensions().get::<RequestId>() {
        Some(request_id) => body.with_request_id(request_id.0.clone()),
        None => body,
    };

    HttpResponse::Ok()
        .insert_header((DATA_SOURCE_HEADER, body.data_source.as_str()))
        .json(body)
}

/// 服务层结果的成功响应
fn sourced<T: Serialize>(req: &HttpRequest, result: Sourced<T>) -> HttpResponse {
    respond(req, ApiResponse::sourced(result))
}

/// 写操作响应：写入数据库时按来源输出，模拟写入时附带提示信息
fn written<T: Serialize>(req: &HttpRequest, result: Sourced<T>, simulated_message: &str) -> HttpResponse {
    match result.source {
        DataSource::Database => sourced(req, result),
        DataSource::FakeData => respond(req, ApiResponse::simulated(result.data, simulated_message)),
    }
}
