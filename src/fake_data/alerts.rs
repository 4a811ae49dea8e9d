//! 预警生成

use crate::models::{
    Alert, AlertLevel, AlertResolution, AlertStatus, AlertType, Device, User,
};
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// 每次生成的预警数量
pub const ALERT_COUNT: usize = 25;

const ALERT_TITLES: [&str; 16] = [
    "High Temperature Warning",
    "Voltage Deviation Alert",
    "Current Overload",
    "Communication Failure",
    "Equipment Malfunction",
    "Power Quality Issue",
    "Maintenance Required",
    "Security Breach",
    "System Overload",
    "Frequency Deviation",
    "Phase Imbalance",
    "Ground Fault",
    "Arc Flash Warning",
    "Insulation Failure",
    "Cooling System Alert",
    "Battery Backup Low",
];

const ALERT_DESCRIPTION: &str =
    "Alert generated by monitoring system. Device parameter exceeded threshold limits.";

/// 生成最近一周内的预警
///
/// 设备、级别、状态任一为空时返回空列表。约一半的预警带有处理结果，
/// 处理时间为创建后 1-24 小时；用户目录为空时不产生处理结果。
pub fn generate_alerts<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    devices: &[Device],
    levels: &[AlertLevel],
    statuses: &[AlertStatus],
    users: &[User],
) -> Vec<Alert> {
    if devices.is_empty() || levels.is_empty() || statuses.is_empty() {
        return Vec::new();
    }

    (0..ALERT_COUNT)
        .map(|i| {
            let device = devices[rng.gen_range(0..devices.len())].clone();
            let alert_level = levels[rng.gen_range(0..levels.len())].clone();
            let alert_status = statuses[rng.gen_range(0..statuses.len())].clone();
            let title = ALERT_TITLES[rng.gen_range(0..ALERT_TITLES.len())];
            let alert_type = AlertType::ALL[rng.gen_range(0..AlertType::ALL.len())];
            let threshold_value = f64::from(50 + rng.gen_range(0..50u32));
            let actual_value = f64::from(60 + rng.gen_range(0..100u32));
            let created_at = now - Duration::hours(rng.gen_range(0..168));

            let resolution = if rng.gen_bool(0.5) {
                let resolved_at = created_at + Duration::hours(1 + rng.gen_range(0..24));
                users.choose(rng).map(|user| AlertResolution {
                    resolved_at,
                    resolved_by_user: user.clone(),
                })
            } else {
                None
            };

            Alert {
                id: i as i64 + 1,
                device,
                alert_level,
                alert_status,
                title: title.to_string(),
                description: ALERT_DESCRIPTION.to_string(),
                alert_type,
                threshold_value,
                actual_value,
                created_at,
                resolution,
            }
        })
        .collect()
}
