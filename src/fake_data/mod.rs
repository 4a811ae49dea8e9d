//! 演示数据生成
//!
//! 数据库不可用时由此模块生成完整、自洽的演示数据。每次调用都重新构建目录，
//! 不做缓存；配置了种子时相同种子与相同时间点得到完全相同的数据。

pub mod activity;
pub mod aggregate;
pub mod alerts;
pub mod catalog;
pub mod filter;
pub mod grid_map;
pub mod telemetry;

use crate::models::{
    Alert, AlertLevel, AlertStatus, DashboardOverview, Device, DeviceReading, DeviceStatistics,
    DeviceType, LoginHistoryEntry, MaintenanceRecord, Manufacturer, Station, User,
};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 一次生成得到的全部目录
#[derive(Debug, Clone, PartialEq)]
pub struct FakeSnapshot {
    pub generated_at: DateTime<Utc>,
    pub users: Vec<User>,
    pub device_types: Vec<DeviceType>,
    pub manufacturers: Vec<Manufacturer>,
    pub stations: Vec<Station>,
    pub devices: Vec<Device>,
    pub alert_levels: Vec<AlertLevel>,
    pub alert_statuses: Vec<AlertStatus>,
    pub alerts: Vec<Alert>,
}

impl FakeSnapshot {
    pub fn device(&self, id: i64) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn alert(&self, id: i64) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email.eq_ignore_ascii_case(email))
    }
}

/// 按依赖顺序构建全部目录
pub fn build_snapshot<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> FakeSnapshot {
    let users = catalog::build_users(rng, now);
    let device_types = catalog::build_device_types(rng, now);
    let manufacturers = catalog::build_manufacturers(rng, now);
    let stations = catalog::build_stations(rng, now);
    let devices = catalog::build_devices(rng, now, &device_types, &manufacturers, &stations);
    let alert_levels = catalog::build_alert_levels(rng, now);
    let alert_statuses = catalog::build_alert_statuses(rng, now);
    let alerts = alerts::generate_alerts(rng, now, &devices, &alert_levels, &alert_statuses, &users);

    FakeSnapshot {
        generated_at: now,
        users,
        device_types,
        manufacturers,
        stations,
        devices,
        alert_levels,
        alert_statuses,
        alerts,
    }
}

/// 演示数据服务
///
/// 只持有不可变的种子配置，可直接以 `Arc` 在各 worker 间共享。
#[derive(Debug, Clone, Default)]
pub struct FakeDataService {
    seed: Option<u64>,
}

impl FakeDataService {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// 种子模式描述，用于健康检查
    pub fn mode(&self) -> &'static str {
        if self.seed.is_some() {
            "seeded"
        } else {
            "random"
        }
    }

    /// 每次调用都返回新的随机源
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// 按实体 ID（设备、用户）派生的随机源，种子模式下不同实体得到不同序列
    pub fn rng_for(&self, id: i64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ id as u64),
            None => StdRng::from_entropy(),
        }
    }

    pub fn snapshot(&self) -> FakeSnapshot {
        self.snapshot_at(Utc::now())
    }

    pub fn snapshot_at(&self, now: DateTime<Utc>) -> FakeSnapshot {
        let mut rng = self.rng();
        let snapshot = build_snapshot(&mut rng, now);
        tracing::debug!(
            devices = snapshot.devices.len(),
            alerts = snapshot.alerts.len(),
            seeded = self.seed.is_some(),
            "生成演示数据"
        );
        snapshot
    }

    pub fn dashboard_overview(&self) -> DashboardOverview {
        let mut rng = self.rng();
        let snapshot = build_snapshot(&mut rng, Utc::now());
        aggregate::dashboard_overview(&mut rng, &snapshot.devices, &snapshot.alerts)
    }

    pub fn device_statistics(&self) -> DeviceStatistics {
        let mut rng = self.rng();
        let now = Utc::now();
        let snapshot = build_snapshot(&mut rng, now);
        aggregate::device_statistics(&mut rng, &snapshot.devices, now)
    }

    pub fn readings(&self, device_id: i64, count: usize) -> Vec<DeviceReading> {
        telemetry::generate_readings(&mut self.rng_for(device_id), Utc::now(), device_id, count)
    }

    pub fn maintenance_records(&self, device: &Device, count: usize) -> Vec<MaintenanceRecord> {
        telemetry::generate_maintenance_records(&mut self.rng_for(device.id), Utc::now(), device, count)
    }

    pub fn login_history(&self, user_id: i64, count: usize) -> Vec<LoginHistoryEntry> {
        activity::generate_login_history(&mut self.rng_for(user_id), Utc::now(), user_id, count)
    }
}
