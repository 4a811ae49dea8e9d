//! 统计汇总单元测试

use chrono::{Duration, Utc};
use powergrid::fake_data::aggregate::{
    alert_statistics, count_device_statuses, summarize_alerts, system_statistics,
};
use powergrid::fake_data::FakeDataService;

#[test]
fn test_device_counts_add_up() {
    let snapshot = FakeDataService::new(Some(11)).snapshot();
    let counts = count_device_statuses(&snapshot.devices);

    assert_eq!(counts.total_devices, 55);
    assert_eq!(
        counts.online_devices
            + counts.offline_devices
            + counts.maintenance_devices
            + counts.error_devices
            + counts.warning_devices,
        counts.total_devices
    );
}

#[test]
fn test_alert_summary_levels_add_up() {
    let snapshot = FakeDataService::new(Some(12)).snapshot();
    let summary = summarize_alerts(&snapshot.alerts);

    assert_eq!(summary.total_alerts, 25);
    assert_eq!(
        summary.critical_alerts + summary.high_alerts + summary.medium_alerts + summary.low_alerts,
        summary.total_alerts
    );
}

#[test]
fn test_alert_statistics_all_periods() {
    let snapshot = FakeDataService::new(Some(13)).snapshot();
    let stats = alert_statistics(&snapshot.alerts, None, snapshot.generated_at);

    assert_eq!(stats.total_alerts, 25);
    assert_eq!(stats.resolved_alerts + stats.unresolved_alerts, 25);
    assert_eq!(stats.level_distribution.values().sum::<usize>(), 25);
    assert_eq!(stats.type_distribution.values().sum::<usize>(), 25);
    assert_eq!(stats.period, "all");
}

#[test]
fn test_alert_statistics_period_window() {
    let snapshot = FakeDataService::new(Some(14)).snapshot();
    // 统计时间点远在所有预警之后，窗口内没有数据
    let later = snapshot.generated_at + Duration::days(400);
    let stats = alert_statistics(&snapshot.alerts, Some("week"), later);

    assert_eq!(stats.total_alerts, 0);
    assert_eq!(stats.period, "week");
}

#[test]
fn test_system_statistics_users() {
    let snapshot = FakeDataService::new(Some(15)).snapshot_at(Utc::now());
    let stats = system_statistics(&snapshot);

    assert_eq!(stats.users.total, 8);
    assert_eq!(stats.users.admin, 1);
    assert_eq!(stats.users.operator + stats.users.user + stats.users.viewer, 7);
    assert_eq!(stats.alerts.total, 25);
    assert_eq!(stats.last_updated, snapshot.generated_at);
}
