//! 设备数据模型

use super::catalog::{DeviceType, Manufacturer, Station};
use super::common::{de_optional_variant, parse_variant, UnknownVariant};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// 设备状态枚举
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceStatus {
    Online,
    #[default]
    Offline,
    Maintenance,
    Error,
    Warning,
}

impl DeviceStatus {
    pub const ALL: [DeviceStatus; 5] = [
        DeviceStatus::Online,
        DeviceStatus::Offline,
        DeviceStatus::Maintenance,
        DeviceStatus::Error,
        DeviceStatus::Warning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "ONLINE",
            DeviceStatus::Offline => "OFFLINE",
            DeviceStatus::Maintenance => "MAINTENANCE",
            DeviceStatus::Error => "ERROR",
            DeviceStatus::Warning => "WARNING",
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "设备状态", s)
    }
}

/// 设备实体
///
/// 引用的设备类型、制造商、站点以完整对象内嵌返回。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: i64,
    pub device_type: Option<DeviceType>,
    pub manufacturer: Option<Manufacturer>,
    pub station: Option<Station>,
    pub name: String,
    pub model: String,
    pub serial_number: String,
    pub status: DeviceStatus,
    pub installation_date: Option<NaiveDate>,
    pub last_maintenance: Option<NaiveDate>,
    pub specifications: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// 创建设备请求
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceRequest {
    pub device_type_id: Option<i64>,
    pub manufacturer_id: Option<i64>,
    pub station_id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "设备名称长度应在 1-100 字符之间"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "设备型号长度应在 1-50 字符之间"))]
    pub model: String,

    #[validate(custom(function = "crate::utils::validate_serial_number"))]
    pub serial_number: String,

    pub installation_date: Option<NaiveDate>,

    #[serde(default)]
    #[validate(length(max = 500, message = "规格说明不能超过 500 字符"))]
    pub specifications: String,
}

/// 修改设备请求，缺省字段保持不变
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceRequest {
    pub station_id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "设备名称长度应在 1-100 字符之间"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "设备型号长度应在 1-50 字符之间"))]
    pub model: Option<String>,

    #[serde(default, deserialize_with = "de_optional_variant")]
    pub status: Option<DeviceStatus>,

    pub last_maintenance: Option<NaiveDate>,

    #[validate(length(max = 500, message = "规格说明不能超过 500 字符"))]
    pub specifications: Option<String>,
}

/// 设备列表查询参数（页码从 0 开始）
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeviceListQuery {
    #[serde(default)]
    pub page: usize,

    #[validate(range(min = 1, max = 100, message = "每页数量应在 1-100 之间"))]
    #[serde(default = "default_page_size")]
    pub size: usize,

    pub search: Option<String>,
    pub status: Option<String>,
    pub station_id: Option<i64>,
    pub device_type_id: Option<i64>,
}

fn default_page_size() -> usize {
    10
}

/// 实时数据查询参数
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeviceDataQuery {
    #[validate(range(min = 1, max = 500, message = "数据条数应在 1-500 之间"))]
    #[serde(default = "default_reading_count")]
    pub size: usize,
}

fn default_reading_count() -> usize {
    20
}

/// 历史数据查询参数
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeviceHistoryQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,

    #[validate(range(min = 1, max = 250, message = "数据条数应在 1-250 之间"))]
    #[serde(default = "default_history_size")]
    pub size: usize,
}

fn default_history_size() -> usize {
    50
}

/// 维护记录查询参数
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MaintenanceQuery {
    #[validate(range(min = 1, max = 100, message = "记录条数应在 1-100 之间"))]
    #[serde(default = "default_page_size")]
    pub size: usize,
}
