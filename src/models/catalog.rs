//! 基础目录数据模型（设备类型、制造商、站点、系统配置）

use super::common::{parse_variant, UnknownVariant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use validator::Validate;

/// 设备类型
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DeviceType {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub specifications: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// 制造商
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub country: String,
    pub website: String,
    pub contact_info: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// 变电站 / 站点
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// 创建或修改设备类型
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeviceTypeRequest {
    #[validate(length(min = 1, max = 100, message = "名称长度应在 1-100 字符之间"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "规格说明不能超过 500 字符"))]
    pub specifications: String,
}

impl DeviceTypeRequest {
    pub fn to_device_type(&self, id: i64, created_at: DateTime<Utc>) -> DeviceType {
        DeviceType {
            id,
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            specifications: self.specifications.clone(),
            is_active: true,
            created_at,
        }
    }
}

/// 创建或修改制造商
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerRequest {
    #[validate(length(min = 1, max = 100, message = "名称长度应在 1-100 字符之间"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub contact_info: String,
}

impl ManufacturerRequest {
    pub fn to_manufacturer(&self, id: i64, created_at: DateTime<Utc>) -> Manufacturer {
        Manufacturer {
            id,
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            country: self.country.clone(),
            website: self.website.clone(),
            contact_info: self.contact_info.clone(),
            is_active: true,
            created_at,
        }
    }
}

/// 创建站点
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StationRequest {
    #[validate(length(min = 1, max = 100, message = "名称长度应在 1-100 字符之间"))]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[validate(range(min = -90.0, max = 90.0, message = "纬度应在 -90 到 90 之间"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "经度应在 -180 到 180 之间"))]
    pub longitude: f64,
    #[serde(default)]
    pub address: String,
}

impl StationRequest {
    pub fn to_station(&self, id: i64, created_at: DateTime<Utc>) -> Station {
        Station {
            id,
            name: self.name.trim().to_string(),
            location: self.location.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address.clone(),
            is_active: true,
            created_at,
        }
    }
}

/// 配置值类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfigDataType {
    String,
    Integer,
    Decimal,
    Boolean,
    Json,
}

impl ConfigDataType {
    pub const ALL: [ConfigDataType; 5] = [
        ConfigDataType::String,
        ConfigDataType::Integer,
        ConfigDataType::Decimal,
        ConfigDataType::Boolean,
        ConfigDataType::Json,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigDataType::String => "STRING",
            ConfigDataType::Integer => "INTEGER",
            ConfigDataType::Decimal => "DECIMAL",
            ConfigDataType::Boolean => "BOOLEAN",
            ConfigDataType::Json => "JSON",
        }
    }
}

impl FromStr for ConfigDataType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "配置类型", s)
    }
}

impl TryFrom<String> for ConfigDataType {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// 系统配置项
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    pub id: i64,
    pub config_key: String,
    pub config_value: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub data_type: ConfigDataType,
    pub created_at: DateTime<Utc>,
}
