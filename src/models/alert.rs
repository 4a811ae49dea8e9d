//! 预警数据模型

use super::common::{de_variant, parse_variant, UnknownVariant};
use super::device::Device;
use super::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use validator::Validate;

/// 预警严重程度
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    pub const ALL: [AlertSeverity; 4] = [
        AlertSeverity::Low,
        AlertSeverity::Medium,
        AlertSeverity::High,
        AlertSeverity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "LOW",
            AlertSeverity::Medium => "MEDIUM",
            AlertSeverity::High => "HIGH",
            AlertSeverity::Critical => "CRITICAL",
        }
    }
}

impl FromStr for AlertSeverity {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "预警严重程度", s)
    }
}

impl TryFrom<String> for AlertSeverity {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// 预警处理状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatusKind {
    New,
    Acknowledged,
    InProgress,
    Resolved,
    Closed,
    Escalated,
}

impl AlertStatusKind {
    pub const ALL: [AlertStatusKind; 6] = [
        AlertStatusKind::New,
        AlertStatusKind::Acknowledged,
        AlertStatusKind::InProgress,
        AlertStatusKind::Resolved,
        AlertStatusKind::Closed,
        AlertStatusKind::Escalated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatusKind::New => "NEW",
            AlertStatusKind::Acknowledged => "ACKNOWLEDGED",
            AlertStatusKind::InProgress => "IN_PROGRESS",
            AlertStatusKind::Resolved => "RESOLVED",
            AlertStatusKind::Closed => "CLOSED",
            AlertStatusKind::Escalated => "ESCALATED",
        }
    }

    /// 仍需处理（未解决、未关闭）
    pub fn is_open(&self) -> bool {
        !matches!(self, AlertStatusKind::Resolved | AlertStatusKind::Closed)
    }
}

impl FromStr for AlertStatusKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "预警状态", s)
    }
}

/// 预警类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    OverVoltage,
    OverCurrent,
    OverTemperature,
    UnderVoltage,
    UnderCurrent,
    DeviceOffline,
    DeviceError,
    MaintenanceDue,
}

impl AlertType {
    pub const ALL: [AlertType; 8] = [
        AlertType::OverVoltage,
        AlertType::OverCurrent,
        AlertType::OverTemperature,
        AlertType::UnderVoltage,
        AlertType::UnderCurrent,
        AlertType::DeviceOffline,
        AlertType::DeviceError,
        AlertType::MaintenanceDue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::OverVoltage => "OVER_VOLTAGE",
            AlertType::OverCurrent => "OVER_CURRENT",
            AlertType::OverTemperature => "OVER_TEMPERATURE",
            AlertType::UnderVoltage => "UNDER_VOLTAGE",
            AlertType::UnderCurrent => "UNDER_CURRENT",
            AlertType::DeviceOffline => "DEVICE_OFFLINE",
            AlertType::DeviceError => "DEVICE_ERROR",
            AlertType::MaintenanceDue => "MAINTENANCE_DUE",
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "预警类型", s)
    }
}

/// 预警级别（目录项）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AlertLevel {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub severity: AlertSeverity,
    pub threshold: f64,
    pub color: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// 预警状态（目录项）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AlertStatus {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub color: String,
    pub priority: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl AlertStatus {
    /// 目录名称对应的状态种类，无法识别时为 None
    pub fn kind(&self) -> Option<AlertStatusKind> {
        self.name.parse().ok()
    }

    pub fn is_open(&self) -> bool {
        self.kind().map_or(false, |kind| kind.is_open())
    }
}

/// 创建预警级别
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AlertLevelRequest {
    #[validate(length(min = 1, max = 50, message = "名称长度应在 1-50 字符之间"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "de_variant")]
    pub severity: AlertSeverity,
    #[validate(range(min = 0.0, message = "阈值不能为负数"))]
    pub threshold: f64,
    #[serde(default)]
    pub color: String,
}

impl AlertLevelRequest {
    pub fn to_alert_level(&self, id: i64, created_at: DateTime<Utc>) -> AlertLevel {
        AlertLevel {
            id,
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            severity: self.severity,
            threshold: self.threshold,
            color: self.color.clone(),
            is_active: true,
            created_at,
        }
    }
}

/// 创建预警状态
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AlertStatusRequest {
    #[validate(length(min = 1, max = 50, message = "名称长度应在 1-50 字符之间"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[validate(range(min = 1, max = 100, message = "优先级应在 1-100 之间"))]
    pub priority: i32,
}

impl AlertStatusRequest {
    pub fn to_alert_status(&self, id: i64, created_at: DateTime<Utc>) -> AlertStatus {
        AlertStatus {
            id,
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            color: self.color.clone(),
            priority: self.priority,
            is_active: true,
            created_at,
        }
    }
}

/// 预警处理结果，解决时间与处理人总是同时出现
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertResolution {
    pub resolved_at: DateTime<Utc>,
    pub resolved_by_user: User,
}

/// 预警实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: i64,
    pub device: Device,
    pub alert_level: AlertLevel,
    pub alert_status: AlertStatus,
    pub title: String,
    pub description: String,
    pub alert_type: AlertType,
    pub threshold_value: f64,
    pub actual_value: f64,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub resolution: Option<AlertResolution>,
}

impl Alert {
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    /// 未解决的 CRITICAL 级别预警
    pub fn is_unresolved_critical(&self) -> bool {
        !self.is_resolved() && self.alert_level.severity == AlertSeverity::Critical
    }
}

/// 创建预警请求
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertRequest {
    pub device_id: Option<i64>,
    pub alert_level_id: Option<i64>,
    pub alert_status_id: Option<i64>,

    #[validate(length(min = 1, max = 200, message = "预警标题长度应在 1-200 字符之间"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "预警描述不能超过 1000 字符"))]
    pub description: String,

    pub alert_type: Option<String>,
    pub threshold_value: Option<f64>,
    pub actual_value: Option<f64>,
}

/// 修改预警请求，缺省字段保持不变
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlertRequest {
    #[validate(length(min = 1, max = 200, message = "预警标题长度应在 1-200 字符之间"))]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "预警描述不能超过 1000 字符"))]
    pub description: Option<String>,

    pub alert_level_id: Option<i64>,
    pub alert_status_id: Option<i64>,
}

/// 预警列表查询参数（页码从 0 开始）
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AlertListQuery {
    #[serde(default)]
    pub page: usize,

    #[validate(range(min = 1, max = 100, message = "每页数量应在 1-100 之间"))]
    #[serde(default = "default_page_size")]
    pub size: usize,

    pub level: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
    pub device_id: Option<i64>,
    pub resolved: Option<bool>,
}

fn default_page_size() -> usize {
    10
}

/// 未解决预警查询参数
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UnresolvedAlertQuery {
    #[serde(default)]
    pub page: usize,

    #[validate(range(min = 1, max = 100, message = "每页数量应在 1-100 之间"))]
    #[serde(default = "default_unresolved_size")]
    pub size: usize,
}

fn default_unresolved_size() -> usize {
    20
}

/// 预警统计查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct AlertStatisticsQuery {
    pub period: Option<String>,
}
