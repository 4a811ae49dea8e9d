//! 演示目录单元测试

use chrono::{Duration, Utc};
use powergrid::fake_data::{alerts, build_snapshot, catalog, FakeDataService};
use powergrid::models::DeviceStatus;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod devices {
    use super::*;

    #[test]
    fn test_device_count_and_ids() {
        let snapshot = FakeDataService::new(Some(1)).snapshot();

        assert_eq!(snapshot.devices.len(), catalog::DEVICE_COUNT);
        for (i, device) in snapshot.devices.iter().enumerate() {
            assert_eq!(device.id, i as i64 + 1);
            assert!(device.is_active);
        }
    }

    #[test]
    fn test_device_statuses_follow_table() {
        let snapshot = FakeDataService::new(Some(2)).snapshot();

        // 每组五台设备的状态排布一致
        assert_eq!(snapshot.devices[0].status, DeviceStatus::Online);
        assert_eq!(snapshot.devices[3].status, DeviceStatus::Maintenance);
        assert_eq!(snapshot.devices[4].status, DeviceStatus::Offline);
        assert_eq!(snapshot.devices[54].status, DeviceStatus::Offline);
    }

    #[test]
    fn test_device_references_resolve() {
        let snapshot = FakeDataService::new(Some(3)).snapshot();

        for device in &snapshot.devices {
            let device_type = device.device_type.as_ref().expect("设备类型缺失");
            let station = device.station.as_ref().expect("站点缺失");
            assert!(snapshot.device_types.iter().any(|t| t.id == device_type.id));
            assert!(snapshot.stations.iter().any(|s| s.id == station.id));
        }
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_device_type_names_are_stable() {
        let now = Utc::now();
        let first = catalog::build_device_types(&mut StdRng::seed_from_u64(10), now);
        let second = catalog::build_device_types(&mut StdRng::seed_from_u64(99), now);

        let names = |types: &[powergrid::models::DeviceType]| -> Vec<String> {
            types.iter().map(|t| t.name.clone()).collect()
        };
        assert_eq!(names(&first[..]), names(&second[..]));
    }

    #[test]
    fn test_same_seed_same_snapshot() {
        let now = Utc::now();
        let a = build_snapshot(&mut StdRng::seed_from_u64(5), now);
        let b = build_snapshot(&mut StdRng::seed_from_u64(5), now);
        assert_eq!(a, b);
    }
}

mod alert_generation {
    use super::*;

    #[test]
    fn test_exactly_twenty_five_alerts() {
        let snapshot = FakeDataService::new(Some(4)).snapshot();
        assert_eq!(snapshot.alerts.len(), alerts::ALERT_COUNT);
        assert_eq!(alerts::ALERT_COUNT, 25);
    }

    #[test]
    fn test_resolution_follows_creation() {
        for seed in 0..10 {
            let snapshot = FakeDataService::new(Some(seed)).snapshot();
            for alert in &snapshot.alerts {
                if let Some(resolution) = &alert.resolution {
                    let elapsed = resolution.resolved_at - alert.created_at;
                    assert!(elapsed >= Duration::hours(1));
                    assert!(elapsed <= Duration::hours(24));
                }
            }
        }
    }

    #[test]
    fn test_alerts_reference_catalog_devices() {
        let snapshot = FakeDataService::new(Some(6)).snapshot();
        for alert in &snapshot.alerts {
            assert!(snapshot.device(alert.device.id).is_some());
            assert!(snapshot.alert_levels.iter().any(|l| l.id == alert.alert_level.id));
            assert!(snapshot.alert_statuses.iter().any(|s| s.id == alert.alert_status.id));
        }
    }
}
