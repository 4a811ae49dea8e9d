//! 仪表盘与统计数据模型

use super::alert::Alert;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 各状态设备数量
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatusCounts {
    pub total_devices: usize,
    pub online_devices: usize,
    pub offline_devices: usize,
    pub maintenance_devices: usize,
    pub error_devices: usize,
    pub warning_devices: usize,
}

/// 预警汇总（按级别与处理状态计数）
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub total_alerts: usize,
    pub critical_alerts: usize,
    pub high_alerts: usize,
    pub medium_alerts: usize,
    pub low_alerts: usize,
    /// 处于 NEW / ACKNOWLEDGED / IN_PROGRESS / ESCALATED 的预警
    pub active_alerts: usize,
    pub new_alerts: usize,
    pub acknowledged_alerts: usize,
    pub in_progress_alerts: usize,
    pub resolved_alerts: usize,
    pub closed_alerts: usize,
    pub escalated_alerts: usize,
}

/// 周用电量数据点
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsumptionPoint {
    pub period: String,
    pub consumption: u32,
}

/// 24 小时功率趋势数据点
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub time: String,
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
}

/// 电压分布区间
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoltageRange {
    pub range: String,
    pub count: u32,
    pub percentage: u32,
}

/// 仪表盘总览
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    #[serde(flatten)]
    pub devices: DeviceStatusCounts,
    pub total_power: f64,
    pub total_voltage: f64,
    /// 活动预警数
    pub alerts: usize,
    pub power_consumption: Vec<ConsumptionPoint>,
    pub voltage_distribution: Vec<VoltageRange>,
    pub power_trend: Vec<TrendPoint>,
}

/// 预警总量统计
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertTotals {
    pub total: usize,
    pub resolved: usize,
    pub unresolved: usize,
    /// 未解决的 CRITICAL 预警
    pub critical: usize,
}

/// 用户数量统计
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserTotals {
    pub total: usize,
    pub active: usize,
    pub admin: usize,
    pub operator: usize,
    pub user: usize,
    pub viewer: usize,
}

/// 系统统计
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatistics {
    pub devices: DeviceStatusCounts,
    pub alerts: AlertTotals,
    pub users: UserTotals,
    pub system_status: String,
    pub last_updated: DateTime<Utc>,
}

/// 预警统计
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertStatistics {
    pub total_alerts: usize,
    pub resolved_alerts: usize,
    pub unresolved_alerts: usize,
    pub critical_alerts: usize,
    /// 级别名称（小写） -> 数量
    pub level_distribution: BTreeMap<String, usize>,
    /// 预警类型（小写） -> 数量
    pub type_distribution: BTreeMap<String, usize>,
    pub period: String,
    pub last_updated: DateTime<Utc>,
}

/// 设备统计
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatistics {
    #[serde(flatten)]
    pub status: DeviceStatusCounts,
    pub by_station: BTreeMap<String, usize>,
    pub by_device_type: BTreeMap<String, usize>,
    pub total_power: f64,
    pub last_updated: DateTime<Utc>,
}

/// 未解决的严重预警列表
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalAlerts {
    pub critical_alerts: Vec<Alert>,
    pub count: usize,
    pub last_updated: DateTime<Utc>,
}
