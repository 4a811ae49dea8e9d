//! 仪表盘汇总与统计

use super::FakeSnapshot;
use crate::models::{
    Alert, AlertSeverity, AlertStatistics, AlertStatusKind, AlertSummary, AlertTotals, AlertType,
    ConsumptionPoint, DashboardOverview, Device, DeviceStatistics, DeviceStatus,
    DeviceStatusCounts, FacilityStatus, GridStatistics, LineStatus, PowerFacility, PowerLine,
    SystemStatistics, TrendPoint, User, UserRole, UserTotals, VoltageRange,
};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::collections::BTreeMap;

/// 周用电量基准（T2..CN）
const WEEKLY_BASE: [(&str, u32); 7] = [
    ("T2", 1200),
    ("T3", 1100),
    ("T4", 1350),
    ("T5", 1280),
    ("T6", 1450),
    ("T7", 980),
    ("CN", 890),
];

/// (时刻, 电压, 电流, 功率)
const TREND_BASE: [(&str, f64, f64, f64); 6] = [
    ("00:00", 220.0, 30.0, 2200.0),
    ("04:00", 218.0, 25.0, 1744.0),
    ("08:00", 222.0, 35.0, 3375.0),
    ("12:00", 225.0, 40.0, 4440.0),
    ("16:00", 223.0, 38.0, 3942.0),
    ("20:00", 221.0, 28.0, 2652.0),
];

const VOLTAGE_RANGES: [(&str, u32, u32); 5] = [
    ("220-230V", 45, 65),
    ("210-220V", 15, 22),
    ("200-210V", 8, 11),
    (">230V", 1, 1),
    ("<200V", 1, 1),
];

pub const SYSTEM_STATUS_OPERATIONAL: &str = "OPERATIONAL";

/// 保留一位小数
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn count_device_statuses(devices: &[Device]) -> DeviceStatusCounts {
    let mut counts = DeviceStatusCounts {
        total_devices: devices.len(),
        ..Default::default()
    };

    for device in devices {
        match device.status {
            DeviceStatus::Online => counts.online_devices += 1,
            DeviceStatus::Offline => counts.offline_devices += 1,
            DeviceStatus::Maintenance => counts.maintenance_devices += 1,
            DeviceStatus::Error => counts.error_devices += 1,
            DeviceStatus::Warning => counts.warning_devices += 1,
        }
    }

    counts
}

/// 按级别名称与处理状态统计预警
pub fn summarize_alerts(alerts: &[Alert]) -> AlertSummary {
    let mut summary = AlertSummary {
        total_alerts: alerts.len(),
        ..Default::default()
    };

    for alert in alerts {
        match alert.alert_level.name.parse::<AlertSeverity>() {
            Ok(AlertSeverity::Critical) => summary.critical_alerts += 1,
            Ok(AlertSeverity::High) => summary.high_alerts += 1,
            Ok(AlertSeverity::Medium) => summary.medium_alerts += 1,
            Ok(AlertSeverity::Low) => summary.low_alerts += 1,
            Err(_) => {}
        }

        let Some(kind) = alert.alert_status.kind() else {
            continue;
        };
        if kind.is_open() {
            summary.active_alerts += 1;
        }
        match kind {
            AlertStatusKind::New => summary.new_alerts += 1,
            AlertStatusKind::Acknowledged => summary.acknowledged_alerts += 1,
            AlertStatusKind::InProgress => summary.in_progress_alerts += 1,
            AlertStatusKind::Resolved => summary.resolved_alerts += 1,
            AlertStatusKind::Closed => summary.closed_alerts += 1,
            AlertStatusKind::Escalated => summary.escalated_alerts += 1,
        }
    }

    summary
}

pub fn weekly_consumption<R: Rng + ?Sized>(rng: &mut R) -> Vec<ConsumptionPoint> {
    WEEKLY_BASE
        .iter()
        .map(|&(period, base)| ConsumptionPoint {
            period: period.to_string(),
            consumption: base + rng.gen_range(0..200),
        })
        .collect()
}

/// 24 小时功率趋势，每 4 小时一个点
pub fn power_trend<R: Rng + ?Sized>(rng: &mut R) -> Vec<TrendPoint> {
    TREND_BASE
        .iter()
        .map(|&(time, voltage, current, power)| TrendPoint {
            time: time.to_string(),
            voltage: round1(voltage + rng.gen::<f64>() * 4.0 - 2.0),
            current: round1(current + rng.gen::<f64>() * 6.0 - 3.0),
            power: round1(power + f64::from(rng.gen_range(-100..100i32))),
        })
        .collect()
}

pub fn voltage_distribution() -> Vec<VoltageRange> {
    VOLTAGE_RANGES
        .iter()
        .map(|&(range, count, percentage)| VoltageRange {
            range: range.to_string(),
            count,
            percentage,
        })
        .collect()
}

/// 按设备名称估算单台功率（kW）
fn estimate_device_power<R: Rng + ?Sized>(rng: &mut R, device: &Device) -> f64 {
    let name = device.name.to_lowercase();
    let watts = if name.contains("transformer") {
        1000 + rng.gen_range(0..2000u32)
    } else if name.contains("generator") {
        500 + rng.gen_range(0..1000u32)
    } else if name.contains("motor") {
        100 + rng.gen_range(0..500u32)
    } else {
        50 + rng.gen_range(0..200u32)
    };
    f64::from(watts)
}

pub fn estimate_total_power<R: Rng + ?Sized>(rng: &mut R, devices: &[Device]) -> f64 {
    devices.iter().map(|d| estimate_device_power(rng, d)).sum()
}

pub fn dashboard_overview<R: Rng + ?Sized>(
    rng: &mut R,
    devices: &[Device],
    alerts: &[Alert],
) -> DashboardOverview {
    let total_power = estimate_total_power(rng, devices);
    let total_voltage = 220.0 + (rng.gen::<f64>() - 0.5) * 20.0;
    let power_consumption = weekly_consumption(rng);
    let power_trend = power_trend(rng);

    DashboardOverview {
        devices: count_device_statuses(devices),
        total_power: round1(total_power),
        total_voltage: round1(total_voltage),
        alerts: summarize_alerts(alerts).active_alerts,
        power_consumption,
        voltage_distribution: voltage_distribution(),
        power_trend,
    }
}

fn alert_totals(alerts: &[Alert]) -> AlertTotals {
    let resolved = alerts.iter().filter(|a| a.is_resolved()).count();
    AlertTotals {
        total: alerts.len(),
        resolved,
        unresolved: alerts.len() - resolved,
        critical: alerts.iter().filter(|a| a.is_unresolved_critical()).count(),
    }
}

fn user_totals(users: &[User]) -> UserTotals {
    let by_role = |role: UserRole| users.iter().filter(|u| u.role == role).count();
    UserTotals {
        total: users.len(),
        active: users.iter().filter(|u| u.is_active).count(),
        admin: by_role(UserRole::Admin),
        operator: by_role(UserRole::Operator),
        user: by_role(UserRole::User),
        viewer: by_role(UserRole::Viewer),
    }
}

pub fn system_statistics(snapshot: &FakeSnapshot) -> SystemStatistics {
    SystemStatistics {
        devices: count_device_statuses(&snapshot.devices),
        alerts: alert_totals(&snapshot.alerts),
        users: user_totals(&snapshot.users),
        system_status: SYSTEM_STATUS_OPERATIONAL.to_string(),
        last_updated: snapshot.generated_at,
    }
}

/// 统计周期对应的时间窗口，无法识别的周期按全部统计
fn period_window(period: &str) -> Option<Duration> {
    match period.trim().to_ascii_lowercase().as_str() {
        "day" | "today" | "24h" => Some(Duration::hours(24)),
        "week" | "7d" => Some(Duration::days(7)),
        "month" | "30d" => Some(Duration::days(30)),
        _ => None,
    }
}

pub fn alert_statistics(
    alerts: &[Alert],
    period: Option<&str>,
    now: DateTime<Utc>,
) -> AlertStatistics {
    let window = period.and_then(period_window);
    let in_period: Vec<&Alert> = alerts
        .iter()
        .filter(|a| window.map_or(true, |w| now - a.created_at <= w))
        .collect();

    let mut level_distribution: BTreeMap<String, usize> = AlertSeverity::ALL
        .iter()
        .map(|s| (s.as_str().to_lowercase(), 0))
        .collect();
    let mut type_distribution: BTreeMap<String, usize> = AlertType::ALL
        .iter()
        .map(|t| (t.as_str().to_lowercase(), 0))
        .collect();

    for alert in &in_period {
        *level_distribution
            .entry(alert.alert_level.name.to_lowercase())
            .or_default() += 1;
        *type_distribution
            .entry(alert.alert_type.as_str().to_lowercase())
            .or_default() += 1;
    }

    let resolved = in_period.iter().filter(|a| a.is_resolved()).count();

    AlertStatistics {
        total_alerts: in_period.len(),
        resolved_alerts: resolved,
        unresolved_alerts: in_period.len() - resolved,
        critical_alerts: in_period.iter().filter(|a| a.is_unresolved_critical()).count(),
        level_distribution,
        type_distribution,
        period: period.unwrap_or("all").to_string(),
        last_updated: now,
    }
}

pub fn device_statistics<R: Rng + ?Sized>(
    rng: &mut R,
    devices: &[Device],
    now: DateTime<Utc>,
) -> DeviceStatistics {
    let mut by_station = BTreeMap::new();
    let mut by_device_type = BTreeMap::new();

    for device in devices {
        if let Some(station) = &device.station {
            *by_station.entry(station.name.clone()).or_insert(0) += 1;
        }
        if let Some(device_type) = &device.device_type {
            *by_device_type.entry(device_type.name.clone()).or_insert(0) += 1;
        }
    }

    DeviceStatistics {
        status: count_device_statuses(devices),
        by_station,
        by_device_type,
        total_power: round1(estimate_total_power(rng, devices)),
        last_updated: now,
    }
}

pub fn grid_statistics(facilities: &[PowerFacility], lines: &[PowerLine]) -> GridStatistics {
    let with_status = |status: FacilityStatus| facilities.iter().filter(|f| f.status == status).count();

    GridStatistics {
        total_facilities: facilities.len(),
        online_facilities: with_status(FacilityStatus::Online),
        maintenance_facilities: with_status(FacilityStatus::Maintenance),
        offline_facilities: with_status(FacilityStatus::Offline),
        total_lines: lines.len(),
        active_lines: lines.iter().filter(|l| l.status == LineStatus::Active).count(),
        total_capacity: facilities.iter().map(|f| u64::from(f.capacity)).sum(),
    }
}
