//! 数据模型模块

mod alert;
mod catalog;
mod common;
mod dashboard;
mod device;
mod grid_map;
mod telemetry;
mod user;

pub use alert::*;
pub use catalog::*;
pub use common::*;
pub use dashboard::*;
pub use device::*;
pub use grid_map::*;
pub use telemetry::*;
pub use user::*;
