//! 单元测试入口

#[path = "../helpers/mod.rs"]
mod helpers;
#[path = "../mocks/mod.rs"]
mod mocks;

mod aggregate_tests;
mod catalog_tests;
mod filter_tests;
mod jwt_tests;
mod service_tests;
