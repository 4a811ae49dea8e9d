//! 安全模块

mod jwt;
mod password;
mod secrets;

pub use jwt::*;
pub use password::*;
pub use secrets::*;
