//! 设备读数与维护记录生成

use crate::models::{
    AlertSeverity, Device, DeviceReading, MaintenanceRecord, MaintenanceStatus, MaintenanceType,
};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand_distr::StandardNormal;

/// 读数间隔（分钟）
pub const READING_INTERVAL_MINUTES: i64 = 5;

/// 维护周期（天）
pub const MAINTENANCE_CYCLE_DAYS: i64 = 90;

/// 各测量量的 (均值, 标准差)
const VOLTAGE: (f64, f64) = (220.0, 10.0);
const CURRENT: (f64, f64) = (30.0, 5.0);
const POWER: (f64, f64) = (6600.0, 500.0);
const FREQUENCY: (f64, f64) = (50.0, 0.5);
const TEMPERATURE: (f64, f64) = (25.0, 10.0);
const HUMIDITY: (f64, f64) = (60.0, 20.0);
const VIBRATION: (f64, f64) = (0.0, 2.0);

const TECHNICIANS: [&str; 4] = ["John Doe", "Mike Wilson", "Regular User", "Jane Smith"];

fn gaussian<R: Rng + ?Sized>(rng: &mut R, (mean, std_dev): (f64, f64)) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + z * std_dev
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

/// 生成最近的设备读数，第 i 条时间戳为 now - 5i 分钟
pub fn generate_readings<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    device_id: i64,
    count: usize,
) -> Vec<DeviceReading> {
    (0..count)
        .map(|i| DeviceReading {
            id: i as i64 + 1,
            device_id,
            timestamp: now - Duration::minutes(i as i64 * READING_INTERVAL_MINUTES),
            voltage: gaussian(rng, VOLTAGE),
            current: gaussian(rng, CURRENT),
            power: gaussian(rng, POWER),
            frequency: gaussian(rng, FREQUENCY),
            temperature: gaussian(rng, TEMPERATURE),
            humidity: gaussian(rng, HUMIDITY),
            vibration: gaussian(rng, VIBRATION),
        })
        .collect()
}

fn maintenance_description(kind: MaintenanceType, device: &Device) -> String {
    match kind {
        MaintenanceType::Preventive => format!("Scheduled preventive maintenance for {}", device.name),
        MaintenanceType::Corrective => format!("Corrective repair after fault on {}", device.name),
        MaintenanceType::Emergency => format!("Emergency intervention on {}", device.name),
        MaintenanceType::Inspection => format!("Routine inspection of {}", device.name),
    }
}

fn pick_status<R: Rng + ?Sized>(rng: &mut R) -> MaintenanceStatus {
    match rng.gen_range(0..10) {
        0..=6 => MaintenanceStatus::Completed,
        7 => MaintenanceStatus::InProgress,
        8 => MaintenanceStatus::Scheduled,
        _ => MaintenanceStatus::Cancelled,
    }
}

/// 生成过去一年内的维护记录，按计划日期从新到旧排列
///
/// 完成的记录带完成日期、工时与费用；最近一次完成的记录给出下次维护日期。
pub fn generate_maintenance_records<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    device: &Device,
    count: usize,
) -> Vec<MaintenanceRecord> {
    let today = now.date_naive();

    let mut offsets: Vec<i64> = (0..count).map(|_| rng.gen_range(0..365)).collect();
    offsets.sort_unstable();

    let mut records: Vec<MaintenanceRecord> = offsets
        .into_iter()
        .enumerate()
        .map(|(i, days_ago)| {
            let maintenance_type = MaintenanceType::ALL[rng.gen_range(0..MaintenanceType::ALL.len())];
            let priority = AlertSeverity::ALL[rng.gen_range(0..AlertSeverity::ALL.len())];
            let status = pick_status(rng);
            let scheduled_date = today - Duration::days(days_ago);

            let (completed_date, duration_hours, cost) = if status == MaintenanceStatus::Completed {
                let completed = (scheduled_date + Duration::days(rng.gen_range(0..3))).min(today);
                let hours = round_to(rng.gen_range(1.0..8.0), 10.0);
                let cost = round_to(rng.gen_range(100.0..5000.0), 100.0);
                (Some(completed), Some(hours), Some(cost))
            } else {
                (None, None, None)
            };

            MaintenanceRecord {
                id: i as i64 + 1,
                device_id: device.id,
                maintenance_type,
                status,
                priority,
                scheduled_date,
                completed_date,
                technician: TECHNICIANS[rng.gen_range(0..TECHNICIANS.len())].to_string(),
                description: maintenance_description(maintenance_type, device),
                duration_hours,
                cost,
                next_maintenance_date: None,
                created_at: now - Duration::days(days_ago + rng.gen_range(1..15)),
            }
        })
        .collect();

    if let Some(latest) = records
        .iter_mut()
        .filter(|r| r.completed_date.is_some())
        .max_by_key(|r| r.completed_date)
    {
        latest.next_maintenance_date = latest
            .completed_date
            .map(|done| done + Duration::days(MAINTENANCE_CYCLE_DAYS));
    }

    records
}
