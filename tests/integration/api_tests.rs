//! API 集成测试

use crate::helpers::{bearer, configure_app, demo_user, TestStores, DEMO_PASSWORD};
use crate::mocks::{FailingStore, InMemoryCategoryStore, InMemoryUserStore};
use actix_web::http::StatusCode;
use actix_web::{test, App};
use powergrid::handlers::DATA_SOURCE_HEADER;
use powergrid::middleware::RequestLogger;
use powergrid::models::UserRole;
use serde_json::{json, Value};
use std::sync::Arc;

macro_rules! init_app {
    ($stores:expr) => {{
        let stores = $stores;
        test::init_service(
            App::new()
                .wrap(RequestLogger::new())
                .configure(move |cfg| configure_app(cfg, stores)),
        )
        .await
    }};
}

fn data_source_header<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(DATA_SOURCE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

mod health_api {
    use super::*;

    #[actix_web::test]
    async fn test_health_endpoints() {
        let app = init_app!(TestStores::default());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/health/detailed").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["database"]["status"], "disabled");
        assert_eq!(body["fakeDataMode"], "seeded");
    }
}

mod auth_api {
    use super::*;

    #[actix_web::test]
    async fn test_demo_login_and_me() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "admin@powergrid.com", "password": DEMO_PASSWORD }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(data_source_header(&resp).as_deref(), Some("FAKE_DATA"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user"]["role"], "ADMIN");
        let token = body["data"]["accessToken"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["email"], "admin@powergrid.com");
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "admin@powergrid.com", "password": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_login_rejects_malformed_email() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "not-an-email", "password": DEMO_PASSWORD }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::get().uri("/api/v1/devices").to_request();
        let status = match test::try_call_service(&app, req).await {
            Ok(resp) => resp.status(),
            Err(err) => err.as_response_error().status_code(),
        };
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_refresh_token_cannot_access_api() {
        let app = init_app!(TestStores::default());
        let pair = crate::helpers::jwt_manager()
            .issue_pair(&demo_user(UserRole::Admin))
            .unwrap();

        let req = test::TestRequest::get()
            .uri("/api/v1/devices")
            .insert_header(("Authorization", format!("Bearer {}", pair.refresh_token)))
            .to_request();
        let status = match test::try_call_service(&app, req).await {
            Ok(resp) => resp.status(),
            Err(err) => err.as_response_error().status_code(),
        };
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_register_always_creates_plain_user() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "email": "field.tech@powergrid.com",
                "password": "secret1",
                "name": "Field Tech",
                "role": "ADMIN"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "FAKE_DATA");
        assert_eq!(body["data"]["role"], "USER");
        assert_eq!(body["data"]["email"], "field.tech@powergrid.com");

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({ "email": "Admin@PowerGrid.com", "password": "secret1", "name": "Dup" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_registered_user_can_log_in() {
        let store = InMemoryUserStore::new();
        let app = init_app!(TestStores {
            users: Some(Arc::new(store.clone())),
            categories: None,
        });

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({ "email": "new@powergrid.com", "password": "Secret99", "name": "New" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(data_source_header(&resp).as_deref(), Some("DATABASE"));
        assert_eq!(store.count(), 1);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "new@powergrid.com", "password": "Secret99" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "DATABASE");
        assert_eq!(body["data"]["user"]["role"], "USER");
    }

    #[actix_web::test]
    async fn test_register_validates_body() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({ "email": "short@powergrid.com", "password": "123", "name": "Short" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_logout_requires_token() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/logout")
            .insert_header(bearer(UserRole::Operator))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["userId"], demo_user(UserRole::Operator).id);

        let req = test::TestRequest::post().uri("/api/v1/auth/logout").to_request();
        let status = match test::try_call_service(&app, req).await {
            Ok(resp) => resp.status(),
            Err(err) => err.as_response_error().status_code(),
        };
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

mod user_api {
    use super::*;

    #[actix_web::test]
    async fn test_viewer_cannot_list_users() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::get()
            .uri("/api/v1/users")
            .insert_header(bearer(UserRole::Viewer))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_users_from_database_store() {
        let store = InMemoryUserStore::new();
        store.insert(demo_user(UserRole::Admin), "Secret123");
        let app = init_app!(TestStores {
            users: Some(Arc::new(store)),
            categories: None,
        });

        let req = test::TestRequest::get()
            .uri("/api/v1/users")
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(data_source_header(&resp).as_deref(), Some("DATABASE"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["dataSource"], "DATABASE");
        assert_eq!(body["data"]["totalItems"], 1);
    }

    #[actix_web::test]
    async fn test_users_fall_back_when_store_fails() {
        let app = init_app!(TestStores {
            users: Some(Arc::new(FailingStore)),
            categories: None,
        });

        let req = test::TestRequest::get()
            .uri("/api/v1/users?role=OPERATOR")
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "FAKE_DATA");
        assert_eq!(body["data"]["totalItems"], 2);
    }

    #[actix_web::test]
    async fn test_admin_creates_and_updates_user() {
        let store = InMemoryUserStore::new();
        store.insert(demo_user(UserRole::Admin), "Secret123");
        let app = init_app!(TestStores {
            users: Some(Arc::new(store.clone())),
            categories: None,
        });
        let payload = json!({
            "email": "shift.lead@powergrid.com",
            "password": "secret1",
            "name": "Shift Lead",
            "role": "operator"
        });

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(bearer(UserRole::Admin))
            .set_json(&payload)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "DATABASE");
        assert_eq!(body["data"]["role"], "OPERATOR");
        let id = body["data"]["id"].as_i64().unwrap();

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(bearer(UserRole::Admin))
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/users/{}", id))
            .insert_header(bearer(UserRole::Admin))
            .set_json(json!({ "department": "Dispatch", "isActive": false }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["department"], "Dispatch");
        assert_eq!(body["data"]["isActive"], false);
        assert_eq!(body["data"]["email"], "shift.lead@powergrid.com");
        assert_eq!(store.count(), 2);
    }

    #[actix_web::test]
    async fn test_delete_user_admin_only() {
        let app = init_app!(TestStores {
            users: Some(Arc::new(FailingStore)),
            categories: None,
        });

        let req = test::TestRequest::delete()
            .uri("/api/v1/users/3")
            .insert_header(bearer(UserRole::Operator))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::delete()
            .uri("/api/v1/users/3")
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(data_source_header(&resp).as_deref(), Some("FAKE_DATA"));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], 3);

        let req = test::TestRequest::delete()
            .uri("/api/v1/users/999")
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_profile_open_to_every_role() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::get()
            .uri("/api/v1/users/profile")
            .insert_header(bearer(UserRole::Viewer))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["email"], "viewer@powergrid.com");

        let req = test::TestRequest::put()
            .uri("/api/v1/users/profile")
            .insert_header(bearer(UserRole::Viewer))
            .set_json(json!({ "phone": "+84-900-000-000" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "FAKE_DATA");
        assert_eq!(body["data"]["phone"], "+84-900-000-000");
        assert_eq!(body["data"]["role"], "VIEWER");
    }

    #[actix_web::test]
    async fn test_user_statistics() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::get()
            .uri("/api/v1/users/statistics")
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["totalUsers"], 8);
        assert_eq!(body["data"]["activeUsers"], 8);
        assert_eq!(body["data"]["roleDistribution"]["admin"], 1);
        assert_eq!(body["data"]["roleDistribution"]["user"], 3);
    }

    #[actix_web::test]
    async fn test_login_history() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::get()
            .uri("/api/v1/users/2/login-history")
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "FAKE_DATA");
        assert_eq!(body["data"]["totalRecords"], 10);
        assert_eq!(body["data"]["loginHistory"].as_array().map(Vec::len), Some(10));
        assert_eq!(body["data"]["loginHistory"][0]["userId"], 2);

        let req = test::TestRequest::get()
            .uri("/api/v1/users/999/login-history")
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

mod category_api {
    use super::*;

    #[actix_web::test]
    async fn test_categories_report_their_source() {
        let app = init_app!(TestStores {
            users: None,
            categories: Some(Arc::new(InMemoryCategoryStore::new(1))),
        });

        let req = test::TestRequest::get()
            .uri("/api/v1/categories/stations")
            .insert_header(bearer(UserRole::Viewer))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "DATABASE");
        assert_eq!(body["data"].as_array().map(Vec::len), Some(6));
    }

    #[actix_web::test]
    async fn test_system_configs_admin_only() {
        let app = init_app!(TestStores {
            users: None,
            categories: Some(Arc::new(FailingStore)),
        });

        let req = test::TestRequest::get()
            .uri("/api/v1/system/configs")
            .insert_header(bearer(UserRole::Operator))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/api/v1/system/configs")
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "FAKE_DATA");
    }

    #[actix_web::test]
    async fn test_create_device_type_rejects_duplicate_name() {
        let app = init_app!(TestStores {
            users: None,
            categories: Some(Arc::new(InMemoryCategoryStore::new(1))),
        });

        let req = test::TestRequest::post()
            .uri("/api/v1/categories/device-types")
            .insert_header(bearer(UserRole::Operator))
            .set_json(json!({ "name": "transformer" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/v1/categories/device-types")
            .insert_header(bearer(UserRole::Operator))
            .set_json(json!({ "name": "Surge Arrester", "icon": "⚡" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "DATABASE");
        assert_eq!(body["data"]["name"], "Surge Arrester");

        let req = test::TestRequest::get()
            .uri("/api/v1/categories/device-types")
            .insert_header(bearer(UserRole::Viewer))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(9));
    }

    #[actix_web::test]
    async fn test_category_write_simulated_when_store_fails() {
        let app = init_app!(TestStores {
            users: None,
            categories: Some(Arc::new(FailingStore)),
        });

        let req = test::TestRequest::post()
            .uri("/api/v1/categories/manufacturers")
            .insert_header(bearer(UserRole::Admin))
            .set_json(json!({ "name": "Hyosung", "country": "South Korea" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(data_source_header(&resp).as_deref(), Some("FAKE_DATA"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["country"], "South Korea");
    }

    #[actix_web::test]
    async fn test_category_delete_admin_only() {
        let app = init_app!(TestStores {
            users: None,
            categories: Some(Arc::new(InMemoryCategoryStore::new(1))),
        });

        let req = test::TestRequest::delete()
            .uri("/api/v1/categories/manufacturers/2")
            .insert_header(bearer(UserRole::Operator))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::delete()
            .uri("/api/v1/categories/manufacturers/2")
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "DATABASE");
        assert_eq!(body["data"]["id"], 2);

        let req = test::TestRequest::get()
            .uri("/api/v1/categories/manufacturers")
            .insert_header(bearer(UserRole::Viewer))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(7));

        let req = test::TestRequest::put()
            .uri("/api/v1/categories/manufacturers/999")
            .insert_header(bearer(UserRole::Admin))
            .set_json(json!({ "name": "Nobody" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_alert_catalog_writes_admin_only() {
        let app = init_app!(TestStores::default());
        let level = json!({ "name": "SEVERE", "severity": "critical", "threshold": 95.0, "color": "#8B0000" });

        let req = test::TestRequest::post()
            .uri("/api/v1/categories/alert-levels")
            .insert_header(bearer(UserRole::Operator))
            .set_json(&level)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::post()
            .uri("/api/v1/categories/alert-levels")
            .insert_header(bearer(UserRole::Admin))
            .set_json(&level)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "FAKE_DATA");
        assert_eq!(body["data"]["severity"], "CRITICAL");

        let req = test::TestRequest::post()
            .uri("/api/v1/categories/alert-statuses")
            .insert_header(bearer(UserRole::Admin))
            .set_json(json!({ "name": "new", "priority": 3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_station_validates_coordinates() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/categories/stations")
            .insert_header(bearer(UserRole::Operator))
            .set_json(json!({ "name": "Harbor Substation", "latitude": 120.0, "longitude": 106.7 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/v1/categories/stations")
            .insert_header(bearer(UserRole::Operator))
            .set_json(json!({ "name": "Harbor Substation", "latitude": 10.76, "longitude": 106.7 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(data_source_header(&resp).as_deref(), Some("FAKE_DATA"));
    }
}

mod device_api {
    use super::*;

    #[actix_web::test]
    async fn test_list_devices_paged() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::get()
            .uri("/api/v1/devices?page=1&size=20")
            .insert_header(bearer(UserRole::Viewer))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(data_source_header(&resp).as_deref(), Some("FAKE_DATA"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(20));
        assert_eq!(body["data"]["totalItems"], 55);
        assert_eq!(body["data"]["hasNext"], true);
    }

    #[actix_web::test]
    async fn test_unknown_device_not_found() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::get()
            .uri("/api/v1/devices/999999")
            .insert_header(bearer(UserRole::Viewer))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_device_statistics_route_not_shadowed() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::get()
            .uri("/api/v1/devices/statistics")
            .insert_header(bearer(UserRole::Viewer))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_create_device_requires_writer_role() {
        let app = init_app!(TestStores::default());
        let payload = json!({
            "deviceTypeId": 1,
            "manufacturerId": 1,
            "stationId": 1,
            "name": "Test Transformer",
            "model": "Model-TF-100",
            "serialNumber": "SN-TEST-0001"
        });

        let req = test::TestRequest::post()
            .uri("/api/v1/devices")
            .insert_header(bearer(UserRole::Viewer))
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::post()
            .uri("/api/v1/devices")
            .insert_header(bearer(UserRole::Operator))
            .set_json(&payload)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "FAKE_DATA");
        assert_eq!(body["data"]["status"], "OFFLINE");
        assert_eq!(body["data"]["station"]["id"], 1);
    }

    #[actix_web::test]
    async fn test_device_history_rejects_inverted_range() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::get()
            .uri("/api/v1/devices/1/data/history?startDate=2024-02-01&endDate=2024-01-01")
            .insert_header(bearer(UserRole::Viewer))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_and_delete_device_simulated() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::put()
            .uri("/api/v1/devices/1")
            .insert_header(bearer(UserRole::Operator))
            .set_json(json!({ "status": "maintenance" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "FAKE_DATA");
        assert_eq!(body["data"]["status"], "MAINTENANCE");
        assert_eq!(body["data"]["name"], "Primary Transformer T1");

        let req = test::TestRequest::put()
            .uri("/api/v1/devices/999999")
            .insert_header(bearer(UserRole::Operator))
            .set_json(json!({ "name": "Ghost" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri("/api/v1/devices/1")
            .insert_header(bearer(UserRole::Operator))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::delete()
            .uri("/api/v1/devices/1")
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "FAKE_DATA");
        assert_eq!(body["data"]["id"], 1);
    }
}

mod alert_api {
    use super::*;

    #[actix_web::test]
    async fn test_page_beyond_end_is_empty() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::get()
            .uri("/api/v1/alerts?page=100&size=10")
            .insert_header(bearer(UserRole::Viewer))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["dataSource"], "FAKE_DATA");
        assert_eq!(body["data"]["items"], json!([]));
        assert_eq!(body["data"]["hasNext"], false);
        assert_eq!(body["data"]["totalItems"], 25);
    }

    #[actix_web::test]
    async fn test_critical_alerts_count() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::get()
            .uri("/api/v1/alerts/critical")
            .insert_header(bearer(UserRole::Viewer))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let listed = body["data"]["criticalAlerts"].as_array().map(Vec::len);
        assert_eq!(listed.map(|n| n as u64), body["data"]["count"].as_u64());
    }

    #[actix_web::test]
    async fn test_resolve_alert() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::put()
            .uri("/api/v1/alerts/3/resolve")
            .insert_header(bearer(UserRole::Operator))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["alertStatus"]["name"], "RESOLVED");
        assert_eq!(body["data"]["resolvedByUser"]["role"], "OPERATOR");
    }

    #[actix_web::test]
    async fn test_viewer_cannot_create_alert() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/alerts")
            .insert_header(bearer(UserRole::Viewer))
            .set_json(json!({ "deviceId": 1, "title": "Overheat" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_update_and_delete_alert_simulated() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::put()
            .uri("/api/v1/alerts/2")
            .insert_header(bearer(UserRole::Viewer))
            .set_json(json!({ "title": "Checked on site" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::put()
            .uri("/api/v1/alerts/2")
            .insert_header(bearer(UserRole::User))
            .set_json(json!({ "title": "Checked on site" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataSource"], "FAKE_DATA");
        assert_eq!(body["data"]["title"], "Checked on site");

        let req = test::TestRequest::delete()
            .uri("/api/v1/alerts/26")
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri("/api/v1/alerts/2")
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["id"], 2);
    }
}

mod dashboard_api {
    use super::*;

    #[actix_web::test]
    async fn test_overview_carries_data_source() {
        let app = init_app!(TestStores::default());

        for uri in [
            "/api/v1/dashboard/overview",
            "/api/v1/dashboard/statistics",
            "/api/v1/dashboard/alerts/summary",
        ] {
            let req = test::TestRequest::get()
                .uri(uri)
                .insert_header(bearer(UserRole::Viewer))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
            assert_eq!(data_source_header(&resp).as_deref(), Some("FAKE_DATA"), "{}", uri);
        }
    }
}

mod grid_map_api {
    use super::*;

    #[actix_web::test]
    async fn test_grid_map_is_public() {
        let app = init_app!(TestStores::default());

        let req = test::TestRequest::get().uri("/api/v1/grid-map/facilities").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(13));

        let req = test::TestRequest::get().uri("/api/v1/grid-map/lines").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(5));
    }
}

#[actix_web::test]
async fn test_request_id_echoed() {
    let app = init_app!(TestStores::default());

    let req = test::TestRequest::get()
        .uri("/api/v1/grid-map/statistics")
        .insert_header(("X-Request-ID", "req-12345"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("req-12345")
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["requestId"], "req-12345");
}
