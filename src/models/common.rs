//! 通用数据结构

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// 数据来源标记（响应中必带，便于区分真实数据与演示数据）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSource {
    Database,
    FakeData,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Database => "DATABASE",
            DataSource::FakeData => "FAKE_DATA",
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 枚举字符串解析失败
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("未知的{kind}取值: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// 按名称（忽略大小写）在枚举全集中查找
pub(crate) fn parse_variant<T: Copy>(
    all: &[T],
    name_of: fn(&T) -> &'static str,
    kind: &'static str,
    value: &str,
) -> Result<T, UnknownVariant> {
    let value = value.trim();
    all.iter()
        .copied()
        .find(|v| name_of(v).eq_ignore_ascii_case(value))
        .ok_or_else(|| UnknownVariant::new(kind, value))
}

/// 请求体中的枚举名称忽略大小写
pub(crate) fn de_variant<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = UnknownVariant>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

pub(crate) fn de_optional_variant<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = UnknownVariant>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// 删除（停用）操作的结果
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeletedRecord {
    pub id: i64,
}

/// 携带数据来源的服务层结果
#[derive(Debug, Clone)]
pub struct Sourced<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    pub fn database(data: T) -> Self {
        Self {
            data,
            source: DataSource::Database,
        }
    }

    pub fn fake(data: T) -> Self {
        Self {
            data,
            source: DataSource::FakeData,
        }
    }

    /// 转换数据，保留来源
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Sourced<U> {
        Sourced {
            data: f(self.data),
            source: self.source,
        }
    }
}

impl<T> Sourced<Option<T>> {
    /// 数据缺失时返回错误，存在时保留来源
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, err: F) -> Result<Sourced<T>, E> {
        match self.data {
            Some(data) => Ok(Sourced {
                data,
                source: self.source,
            }),
            None => Err(err()),
        }
    }
}

/// 统一 API 响应结构
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub data_source: DataSource,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T, data_source: DataSource) -> Self {
        Self {
            code: 200,
            message: "success".to_string(),
            data: Some(data),
            data_source,
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    /// 从服务层结果创建成功响应
    pub fn sourced(result: Sourced<T>) -> Self {
        Self::success(result.data, result.source)
    }

    /// 演示模式下的模拟写操作
    pub fn simulated(data: T, message: &str) -> Self {
        Self {
            code: 200,
            message: message.to_string(),
            data: Some(data),
            data_source: DataSource::FakeData,
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    /// 设置请求 ID
    pub fn with_request_id(mut self, request_id: String) -> Self {
        self.request_id = Some(request_id);
        self
    }
}

/// 分页结果（页码从 0 开始）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// 由当前页数据与总数组装分页结果
    pub fn from_parts(items: Vec<T>, page: usize, size: usize, total_items: usize) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_items.div_ceil(size)
        };
        let end = page.saturating_mul(size).saturating_add(items.len());

        Self {
            items,
            current_page: page,
            page_size: size,
            total_items,
            total_pages,
            has_next: size > 0 && end < total_items,
            has_previous: page > 0,
        }
    }

    pub fn empty(page: usize, size: usize) -> Self {
        Self::from_parts(Vec::new(), page, size, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 健康检查响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub database: ServiceStatus,
    pub fake_data_mode: String,
    pub uptime_seconds: u64,
}

/// 服务状态
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub status: String,
    pub latency_ms: Option<u64>,
}

impl ServiceStatus {
    pub fn healthy(latency_ms: u64) -> Self {
        Self {
            status: "healthy".to_string(),
            latency_ms: Some(latency_ms),
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            status: "unhealthy".to_string(),
            latency_ms: None,
        }
    }

    /// 未配置数据库
    pub fn disabled() -> Self {
        Self {
            status: "disabled".to_string(),
            latency_ms: None,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
