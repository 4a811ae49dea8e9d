//! 电网地图数据模型

use serde::{Deserialize, Serialize};

/// 电力设施类别
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FacilityKind {
    PowerPlant,
    Substation,
    TransmissionTower,
    Renewable,
    DistributionCenter,
    Transformer,
}

/// 设施运行状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FacilityStatus {
    Online,
    Maintenance,
    Offline,
}

/// 地图上的电力设施
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PowerFacility {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FacilityKind,
    pub latitude: f64,
    pub longitude: f64,
    /// 电压等级（kV）
    pub voltage: u32,
    /// 容量（MW）
    pub capacity: u32,
    pub status: FacilityStatus,
    pub operator: String,
    pub commissioned: String,
    pub description: String,
}

/// 线路状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    Active,
    Inactive,
    Maintenance,
}

/// 线路类别
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Transmission,
    Distribution,
}

/// 输配电线路
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PowerLine {
    pub id: String,
    pub name: String,
    /// 起点设施 ID
    pub from: String,
    /// 终点设施 ID
    pub to: String,
    /// 折线坐标 [纬度, 经度]
    pub positions: Vec<[f64; 2]>,
    pub voltage: u32,
    pub capacity: u32,
    pub status: LineStatus,
    #[serde(rename = "type")]
    pub kind: LineKind,
}

/// 地图总览
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridMapData {
    pub facilities: Vec<PowerFacility>,
    pub power_lines: Vec<PowerLine>,
    pub total_facilities: usize,
    pub total_lines: usize,
}

/// 地图统计
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridStatistics {
    pub total_facilities: usize,
    pub online_facilities: usize,
    pub maintenance_facilities: usize,
    pub offline_facilities: usize,
    pub total_lines: usize,
    pub active_lines: usize,
    pub total_capacity: u64,
}
