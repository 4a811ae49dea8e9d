//! 过滤、搜索与分页
//!
//! 所有过滤条件按 AND 组合并保持原有顺序。枚举类条件按名称忽略大小写匹配，
//! 无法识别的名称不匹配任何记录。

use crate::models::{Alert, AlertType, Device, DeviceStatus, Page, User, UserRole};

/// 预警过滤条件，None 表示不限制
#[derive(Debug, Clone, Default)]
pub struct AlertFilter {
    pub level: Option<String>,
    pub status: Option<String>,
    pub alert_type: Option<String>,
    pub device_id: Option<i64>,
    pub resolved: Option<bool>,
}

impl AlertFilter {
    fn matches(&self, alert: &Alert, alert_type: Option<Option<AlertType>>) -> bool {
        if let Some(level) = &self.level {
            if !alert.alert_level.name.eq_ignore_ascii_case(level.trim()) {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if !alert.alert_status.name.eq_ignore_ascii_case(status.trim()) {
                return false;
            }
        }
        if let Some(wanted) = alert_type {
            if wanted != Some(alert.alert_type) {
                return false;
            }
        }
        if let Some(device_id) = self.device_id {
            if alert.device.id != device_id {
                return false;
            }
        }
        if let Some(resolved) = self.resolved {
            if alert.is_resolved() != resolved {
                return false;
            }
        }
        true
    }
}

pub fn filter_alerts(alerts: &[Alert], filter: &AlertFilter) -> Vec<Alert> {
    // 外层 Some 表示有类型条件，内层 None 表示名称无法识别
    let alert_type = filter.alert_type.as_deref().map(|t| t.parse::<AlertType>().ok());

    alerts
        .iter()
        .filter(|alert| filter.matches(alert, alert_type))
        .cloned()
        .collect()
}

/// 设备过滤条件
#[derive(Debug, Clone, Default)]
pub struct DeviceFilter {
    pub search: Option<String>,
    pub status: Option<String>,
    pub station_id: Option<i64>,
    pub device_type_id: Option<i64>,
}

pub fn filter_devices(devices: &[Device], filter: &DeviceFilter) -> Vec<Device> {
    let status = match filter.status.as_deref() {
        Some(name) => match name.parse::<DeviceStatus>() {
            Ok(status) => Some(status),
            Err(_) => return Vec::new(),
        },
        None => None,
    };
    let query = filter.search.as_deref().unwrap_or_default().to_lowercase();

    devices
        .iter()
        .filter(|d| device_matches_query(d, &query))
        .filter(|d| status.map_or(true, |s| d.status == s))
        .filter(|d| {
            filter
                .station_id
                .map_or(true, |id| d.station.as_ref().map(|s| s.id) == Some(id))
        })
        .filter(|d| {
            filter
                .device_type_id
                .map_or(true, |id| d.device_type.as_ref().map(|t| t.id) == Some(id))
        })
        .cloned()
        .collect()
}

/// 用户过滤条件
///
/// `active = Some(true)` 只保留启用用户；`Some(false)` 与 None 一样不做限制。
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub search: Option<String>,
    pub role: Option<String>,
    pub active: Option<bool>,
}

pub fn filter_users(users: &[User], filter: &UserFilter) -> Vec<User> {
    let role = match filter.role.as_deref() {
        Some(name) => match name.parse::<UserRole>() {
            Ok(role) => Some(role),
            Err(_) => return Vec::new(),
        },
        None => None,
    };
    let query = filter.search.as_deref().unwrap_or_default().to_lowercase();
    let active_only = filter.active == Some(true);

    users
        .iter()
        .filter(|u| user_matches_query(u, &query))
        .filter(|u| role.map_or(true, |r| u.role == r))
        .filter(|u| !active_only || u.is_active)
        .cloned()
        .collect()
}

/// `query` 须已转为小写
fn device_matches_query(device: &Device, query: &str) -> bool {
    query.is_empty()
        || device.name.to_lowercase().contains(query)
        || device.model.to_lowercase().contains(query)
        || device.serial_number.to_lowercase().contains(query)
}

fn user_matches_query(user: &User, query: &str) -> bool {
    query.is_empty()
        || user.name.to_lowercase().contains(query)
        || user.email.to_lowercase().contains(query)
        || user.department.to_lowercase().contains(query)
}

/// 按名称、型号、序列号搜索设备（忽略大小写，空查询匹配全部）
pub fn search_devices(devices: &[Device], query: &str) -> Vec<Device> {
    let query = query.to_lowercase();
    devices
        .iter()
        .filter(|d| device_matches_query(d, &query))
        .cloned()
        .collect()
}

/// 按姓名、邮箱、部门搜索用户（忽略大小写，空查询匹配全部）
pub fn search_users(users: &[User], query: &str) -> Vec<User> {
    let query = query.to_lowercase();
    users
        .iter()
        .filter(|u| user_matches_query(u, &query))
        .cloned()
        .collect()
}

/// 取第 `page` 页（从 0 开始）
///
/// 超出末尾的页返回空列表且 `has_next = false`；`size = 0` 视为空页。
pub fn paginate<T: Clone>(items: &[T], page: usize, size: usize) -> Page<T> {
    let total_items = items.len();
    let start = page.saturating_mul(size).min(total_items);
    let end = start.saturating_add(size).min(total_items);

    Page::from_parts(items[start..end].to_vec(), page, size, total_items)
}
