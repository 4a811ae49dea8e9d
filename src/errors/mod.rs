//! 错误处理模块

mod app_error;

pub use app_error::AppError;
