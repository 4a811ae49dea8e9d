//! 过滤与分页单元测试

use powergrid::fake_data::filter::{
    filter_alerts, filter_devices, filter_users, paginate, search_devices, search_users, AlertFilter,
    DeviceFilter, UserFilter,
};
use powergrid::fake_data::FakeDataService;
use powergrid::models::{DeviceStatus, UserRole};

fn snapshot() -> powergrid::fake_data::FakeSnapshot {
    FakeDataService::new(Some(crate::helpers::TEST_SEED)).snapshot()
}

mod alerts {
    use super::*;

    #[test]
    fn test_filter_is_idempotent() {
        let snapshot = snapshot();
        let filter = AlertFilter {
            level: Some("critical".to_string()),
            ..Default::default()
        };

        let once = filter_alerts(&snapshot.alerts, &filter);
        let twice = filter_alerts(&once, &filter);
        assert_eq!(once, twice);
        assert!(once.iter().all(|a| a.alert_level.name == "CRITICAL"));
    }

    #[test]
    fn test_unknown_device_matches_nothing() {
        let filter = AlertFilter {
            device_id: Some(999_999),
            ..Default::default()
        };
        assert!(filter_alerts(&snapshot().alerts, &filter).is_empty());
    }

    #[test]
    fn test_unknown_type_matches_nothing() {
        let filter = AlertFilter {
            alert_type: Some("NOT_A_TYPE".to_string()),
            ..Default::default()
        };
        assert!(filter_alerts(&snapshot().alerts, &filter).is_empty());
    }

    #[test]
    fn test_resolved_partition() {
        let snapshot = snapshot();
        let resolved = filter_alerts(
            &snapshot.alerts,
            &AlertFilter {
                resolved: Some(true),
                ..Default::default()
            },
        );
        let open = filter_alerts(
            &snapshot.alerts,
            &AlertFilter {
                resolved: Some(false),
                ..Default::default()
            },
        );
        assert_eq!(resolved.len() + open.len(), snapshot.alerts.len());
    }

    #[test]
    fn test_all_conditions_combine_with_and() {
        let snapshot = snapshot();
        let target = snapshot.alerts[0].clone();
        let combined = AlertFilter {
            level: Some(target.alert_level.name.to_lowercase()),
            status: Some(target.alert_status.name.clone()),
            alert_type: Some(target.alert_type.as_str().to_string()),
            device_id: Some(target.device.id),
            resolved: Some(target.is_resolved()),
        };

        let matched = filter_alerts(&snapshot.alerts, &combined);
        assert!(matched.contains(&target));
        for alert in &matched {
            assert_eq!(alert.alert_level.name, target.alert_level.name);
            assert_eq!(alert.alert_status.name, target.alert_status.name);
            assert_eq!(alert.alert_type, target.alert_type);
            assert_eq!(alert.device.id, target.device.id);
            assert_eq!(alert.is_resolved(), target.is_resolved());
        }

        let singles = [
            AlertFilter { level: combined.level.clone(), ..Default::default() },
            AlertFilter { status: combined.status.clone(), ..Default::default() },
            AlertFilter { alert_type: combined.alert_type.clone(), ..Default::default() },
            AlertFilter { device_id: combined.device_id, ..Default::default() },
            AlertFilter { resolved: combined.resolved, ..Default::default() },
        ];
        let intersection: Vec<_> = snapshot
            .alerts
            .iter()
            .filter(|alert| {
                singles
                    .iter()
                    .all(|single| filter_alerts(std::slice::from_ref(*alert), single).len() == 1)
            })
            .cloned()
            .collect();
        assert_eq!(matched, intersection);
    }
}

mod devices {
    use super::*;

    #[test]
    fn test_search_ignores_case() {
        let devices = snapshot().devices;
        let lower = search_devices(&devices, "transformer");
        let upper = search_devices(&devices, "TRANSFORMER");

        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_empty_search_matches_all() {
        let devices = snapshot().devices;
        assert_eq!(search_devices(&devices, "").len(), devices.len());
    }

    #[test]
    fn test_filter_by_status_and_station() {
        let devices = snapshot().devices;
        let filter = DeviceFilter {
            status: Some("online".to_string()),
            station_id: Some(1),
            ..Default::default()
        };

        let found = filter_devices(&devices, &filter);
        assert!(found.iter().all(|d| d.status == DeviceStatus::Online
            && d.station.as_ref().map(|s| s.id) == Some(1)));
    }
}

mod users {
    use super::*;

    #[test]
    fn test_filter_by_role() {
        let users = snapshot().users;
        let filter = UserFilter {
            role: Some("operator".to_string()),
            ..Default::default()
        };

        let operators = filter_users(&users, &filter);
        assert_eq!(operators.len(), 2);
        assert!(operators.iter().all(|u| u.role == UserRole::Operator));
    }

    #[test]
    fn test_search_by_department() {
        let found = search_users(&snapshot().users, "ENGINEERING");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|u| u.department == "Engineering"));
    }

    #[test]
    fn test_unknown_role_matches_nothing() {
        let filter = UserFilter {
            role: Some("ROOT".to_string()),
            ..Default::default()
        };
        assert!(filter_users(&snapshot().users, &filter).is_empty());
    }
}

mod pagination {
    use super::*;

    #[test]
    fn test_page_beyond_end() {
        let page = paginate(&snapshot().alerts, 100, 10);

        assert!(page.items.is_empty());
        assert!(!page.has_next);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_last_page_is_partial() {
        let page = paginate(&snapshot().devices, 5, 10);

        assert_eq!(page.items.len(), 5);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }
}
