//! 中间件模块

mod auth;
mod logging;

pub use auth::*;
pub use logging::*;
