//! 设备运行数据与维护记录模型

use super::alert::AlertSeverity;
use super::common::{parse_variant, UnknownVariant};
use super::device::Device;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 单条设备读数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceReading {
    pub id: i64,
    pub device_id: i64,
    pub timestamp: DateTime<Utc>,
    /// 电压（V）
    pub voltage: f64,
    /// 电流（A）
    pub current: f64,
    /// 功率（W）
    pub power: f64,
    /// 频率（Hz）
    pub frequency: f64,
    /// 温度（°C）
    pub temperature: f64,
    /// 湿度（%）
    pub humidity: f64,
    pub vibration: f64,
}

/// 实时数据响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDataResponse {
    pub device: Device,
    pub data: Vec<DeviceReading>,
    pub status: String,
    pub last_updated: DateTime<Utc>,
}

/// 历史数据响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceHistoryResponse {
    pub device: Device,
    pub history: Vec<DeviceReading>,
    pub total_records: usize,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// 维护类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaintenanceType {
    Preventive,
    Corrective,
    Emergency,
    Inspection,
}

impl MaintenanceType {
    pub const ALL: [MaintenanceType; 4] = [
        MaintenanceType::Preventive,
        MaintenanceType::Corrective,
        MaintenanceType::Emergency,
        MaintenanceType::Inspection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceType::Preventive => "PREVENTIVE",
            MaintenanceType::Corrective => "CORRECTIVE",
            MaintenanceType::Emergency => "EMERGENCY",
            MaintenanceType::Inspection => "INSPECTION",
        }
    }
}

impl FromStr for MaintenanceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "维护类型", s)
    }
}

/// 维护状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl MaintenanceStatus {
    pub const ALL: [MaintenanceStatus; 4] = [
        MaintenanceStatus::Scheduled,
        MaintenanceStatus::InProgress,
        MaintenanceStatus::Completed,
        MaintenanceStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Scheduled => "SCHEDULED",
            MaintenanceStatus::InProgress => "IN_PROGRESS",
            MaintenanceStatus::Completed => "COMPLETED",
            MaintenanceStatus::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for MaintenanceStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "维护状态", s)
    }
}

/// 维护记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: i64,
    pub device_id: i64,
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    pub status: MaintenanceStatus,
    /// 与预警严重程度共用 LOW..CRITICAL 四档
    pub priority: AlertSeverity,
    pub scheduled_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub technician: String,
    pub description: String,
    pub duration_hours: Option<f64>,
    pub cost: Option<f64>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
