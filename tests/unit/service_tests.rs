//! 服务层单元测试（数据库回退）

use crate::helpers::{demo_user, fake_data, jwt_manager, DEMO_PASSWORD};
use crate::mocks::{FailingStore, InMemoryCategoryStore, InMemoryUserStore};
use crate::{assert_err, assert_ok};
use powergrid::errors::AppError;
use powergrid::models::{
    DataSource, DeviceTypeRequest, LoginRequest, RegisterRequest, UpdateUserRequest, UserListQuery,
    UserRole,
};
use powergrid::repositories::{CategoryStore, UserStore};
use powergrid::security::verify_password;
use powergrid::services::{AuthService, CategoryService, UserService};
use secrecy::SecretString;
use std::sync::Arc;

fn list_query(role: Option<&str>) -> UserListQuery {
    UserListQuery {
        page: 0,
        size: 10,
        search: None,
        role: role.map(str::to_string),
        active: None,
    }
}

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn auth_service(store: Option<Arc<dyn UserStore>>, demo_password: Option<&str>) -> AuthService {
    AuthService::new(
        jwt_manager(),
        store,
        fake_data(),
        demo_password.map(|p| SecretString::new(p.to_string())),
    )
}

mod user_service {
    use super::*;

    #[actix_web::test]
    async fn test_list_users_from_database() {
        let store = InMemoryUserStore::new();
        store.insert(demo_user(UserRole::Admin), "Secret123");
        let service = UserService::new(Some(Arc::new(store)), fake_data());

        let result = assert_ok!(service.list_users(&list_query(None)).await);

        assert_eq!(result.source, DataSource::Database);
        assert_eq!(result.data.total_items, 1);
    }

    #[actix_web::test]
    async fn test_list_users_falls_back_on_failure() {
        let service = UserService::new(Some(Arc::new(FailingStore)), fake_data());

        let result = assert_ok!(service.list_users(&list_query(Some("viewer"))).await);

        assert_eq!(result.source, DataSource::FakeData);
        assert_eq!(result.data.total_items, 2);
        assert!(result.data.items.iter().all(|u| u.role == UserRole::Viewer));
    }

    #[actix_web::test]
    async fn test_get_missing_user() {
        let service = UserService::new(None, fake_data());

        let err = assert_err!(service.get_user(404).await);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "secret1".to_string(),
            name: "Night Shift".to_string(),
            role: UserRole::Operator,
            phone: String::new(),
            department: "Operations".to_string(),
            position: String::new(),
        }
    }

    #[actix_web::test]
    async fn test_create_user_in_database() {
        let store = InMemoryUserStore::new();
        store.insert(demo_user(UserRole::Admin), "Secret123");
        let service = UserService::new(Some(Arc::new(store.clone())), fake_data());

        let created = assert_ok!(service.create_user(&register_request("night@powergrid.com")).await);
        assert_eq!(created.source, DataSource::Database);
        assert_eq!(created.data.id, 2);

        let err = assert_err!(service.create_user(&register_request("ADMIN@powergrid.com")).await);
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(store.count(), 2);
    }

    #[actix_web::test]
    async fn test_update_user_rehashes_password() {
        let store = InMemoryUserStore::new();
        store.insert(demo_user(UserRole::User), "Secret123");
        let service = UserService::new(Some(Arc::new(store.clone())), fake_data());
        let id = demo_user(UserRole::User).id;

        let request = UpdateUserRequest {
            password: Some("Changed456".to_string()),
            ..Default::default()
        };
        assert_ok!(service.update_user(id, &request).await);

        let credentials = assert_ok!(store.find_credentials("user@powergrid.com").await).unwrap();
        assert!(assert_ok!(verify_password("Changed456", &credentials.password_hash)));
        assert!(!assert_ok!(verify_password("Secret123", &credentials.password_hash)));

        let err = assert_err!(service.update_user(404, &request).await);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_statistics_from_database() {
        let store = InMemoryUserStore::new();
        store.insert(demo_user(UserRole::Admin), "Secret123");
        let mut viewer = demo_user(UserRole::Viewer);
        viewer.is_active = false;
        store.insert(viewer, "Secret123");
        let service = UserService::new(Some(Arc::new(store)), fake_data());

        let stats = service.statistics().await;
        assert_eq!(stats.source, DataSource::Database);
        assert_eq!((stats.data.total_users, stats.data.active_users), (2, 1));
        assert_eq!(stats.data.role_distribution["operator"], 0);
    }
}

mod category_service {
    use super::*;

    #[actix_web::test]
    async fn test_categories_from_database() {
        let store: Arc<dyn CategoryStore> = Arc::new(InMemoryCategoryStore::new(3));
        let service = CategoryService::new(Some(store), fake_data());

        let types = service.device_types().await;
        assert_eq!(types.source, DataSource::Database);
        assert_eq!(types.data.len(), 8);
    }

    #[actix_web::test]
    async fn test_categories_fall_back() {
        let service = CategoryService::new(Some(Arc::new(FailingStore)), fake_data());

        let statuses = service.alert_statuses().await;
        assert_eq!(statuses.source, DataSource::FakeData);
        assert_eq!(statuses.data.len(), 6);

        let configs = service.system_configs().await;
        assert_eq!(configs.source, DataSource::FakeData);
        assert_eq!(configs.data.len(), 8);
    }

    #[actix_web::test]
    async fn test_fallback_catalog_matches_snapshot() {
        let service = CategoryService::new(None, fake_data());
        let snapshot = fake_data().snapshot();

        let types = service.device_types().await.data;
        let stations = service.stations().await.data;

        assert_eq!(
            types.iter().map(|t| (t.id, t.name.as_str())).collect::<Vec<_>>(),
            snapshot.device_types.iter().map(|t| (t.id, t.name.as_str())).collect::<Vec<_>>()
        );
        assert_eq!(
            stations.iter().map(|s| s.id).collect::<Vec<_>>(),
            snapshot.stations.iter().map(|s| s.id).collect::<Vec<_>>()
        );
        for (served, expected) in types.iter().zip(&snapshot.device_types) {
            let drift = (served.created_at - expected.created_at).num_seconds().abs();
            assert!(drift <= 1, "created_at drifted by {}s", drift);
        }
    }

    #[actix_web::test]
    async fn test_duplicate_name_checked_before_write() {
        let store = InMemoryCategoryStore::new(3);
        let service = CategoryService::new(Some(Arc::new(store.clone())), fake_data());
        let request = DeviceTypeRequest {
            name: " METER ".to_string(),
            description: String::new(),
            icon: String::new(),
            specifications: String::new(),
        };

        let err = assert_err!(service.create_device_type(&request).await);
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(assert_ok!(store.device_types().await).len(), 8);
    }
}

mod auth_service {
    use super::*;

    #[actix_web::test]
    async fn test_database_login() {
        let store = InMemoryUserStore::new();
        store.insert(demo_user(UserRole::Operator), "Secret123");
        let service = auth_service(Some(Arc::new(store)), None);

        let result = assert_ok!(service.login(&login_request("OPERATOR@powergrid.com", "Secret123")).await);

        assert_eq!(result.source, DataSource::Database);
        assert_eq!(result.data.user.role, UserRole::Operator);
        assert!(!result.data.tokens.access_token.is_empty());
    }

    #[actix_web::test]
    async fn test_wrong_password_rejected() {
        let store = InMemoryUserStore::new();
        store.insert(demo_user(UserRole::Operator), "Secret123");
        let service = auth_service(Some(Arc::new(store)), Some(DEMO_PASSWORD));

        let err = assert_err!(service.login(&login_request("operator@powergrid.com", "wrong")).await);
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[actix_web::test]
    async fn test_unknown_database_user_skips_demo_accounts() {
        let service = auth_service(Some(Arc::new(InMemoryUserStore::new())), Some(DEMO_PASSWORD));

        let err = assert_err!(service.login(&login_request("admin@powergrid.com", DEMO_PASSWORD)).await);
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[actix_web::test]
    async fn test_inactive_user_forbidden() {
        let mut user = demo_user(UserRole::User);
        user.is_active = false;
        let store = InMemoryUserStore::new();
        store.insert(user, "Secret123");
        let service = auth_service(Some(Arc::new(store)), None);

        let err = assert_err!(service.login(&login_request("user@powergrid.com", "Secret123")).await);
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[actix_web::test]
    async fn test_demo_login_when_database_fails() {
        let service = auth_service(Some(Arc::new(FailingStore)), Some(DEMO_PASSWORD));

        let result = assert_ok!(service.login(&login_request("admin@powergrid.com", DEMO_PASSWORD)).await);

        assert_eq!(result.source, DataSource::FakeData);
        assert_eq!(result.data.user.role, UserRole::Admin);
    }

    #[actix_web::test]
    async fn test_demo_login_disabled_without_password() {
        let service = auth_service(None, None);

        let err = assert_err!(service.login(&login_request("admin@powergrid.com", DEMO_PASSWORD)).await);
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[actix_web::test]
    async fn test_refresh_token_issues_new_pair() {
        let service = auth_service(None, Some(DEMO_PASSWORD));
        let login = assert_ok!(service.login(&login_request("viewer@powergrid.com", DEMO_PASSWORD)).await);

        let refreshed = assert_ok!(service.refresh_token(&login.data.tokens.refresh_token).await);

        assert_eq!(refreshed.source, DataSource::FakeData);
        assert!(service.refresh_token(&login.data.tokens.access_token).await.is_err());
    }

    #[actix_web::test]
    async fn test_logout_checks_user() {
        let service = auth_service(None, Some(DEMO_PASSWORD));

        let logout = assert_ok!(service.logout(demo_user(UserRole::Viewer).id).await);
        assert_eq!(logout.source, DataSource::FakeData);
        assert_eq!(logout.data.user_id, demo_user(UserRole::Viewer).id);

        let err = assert_err!(service.logout(404).await);
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
