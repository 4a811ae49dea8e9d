//! PowerGrid - 电网设备管理后端服务
//!
//! 设备、站点、预警与用户管理，支持：
//! - JWT 认证与角色权限
//! - 仪表盘与统计汇总
//! - 电网地图设施与线路
//! - 数据库不可用时自动回退到演示数据

pub mod config;
pub mod db;
pub mod errors;
pub mod fake_data;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod security;
pub mod services;
pub mod utils;

pub use errors::AppError;
