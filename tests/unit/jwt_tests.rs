//! JWT 单元测试

use crate::helpers::{demo_user, jwt_manager};
use powergrid::models::UserRole;
use powergrid::security::{Claims, JwtTokenType};

mod jwt_token_type {
    use super::*;

    #[test]
    fn test_jwt_token_type_serialization() {
        assert_eq!(serde_json::to_string(&JwtTokenType::Access).unwrap(), "\"access\"");
        assert_eq!(serde_json::to_string(&JwtTokenType::Refresh).unwrap(), "\"refresh\"");
    }
}

mod claims {
    use super::*;

    #[test]
    fn test_claims_user_id() {
        let json = r#"{
            "sub": "42",
            "token_type": "access",
            "iss": "powergrid-test",
            "aud": "client",
            "exp": 9999999999,
            "iat": 1234567800,
            "jti": "abc",
            "email": "admin@powergrid.com",
            "role": "ADMIN"
        }"#;

        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.role, UserRole::Admin);
    }

    #[test]
    fn test_claims_invalid_subject() {
        let json = r#"{
            "sub": "not-a-number",
            "token_type": "access",
            "iss": "i",
            "aud": "a",
            "exp": 9999999999,
            "iat": 0,
            "jti": "x",
            "email": "a@b.c",
            "role": "VIEWER"
        }"#;

        let claims: Claims = serde_json::from_str(json).unwrap();
        assert!(claims.user_id().is_err());
    }
}

mod manager {
    use super::*;

    #[test]
    fn test_access_token_round_trip() {
        let manager = jwt_manager();
        let user = demo_user(UserRole::Operator);

        let token = manager.generate_access_token(&user).unwrap();
        let claims = manager.validate_access_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, UserRole::Operator);
    }

    #[test]
    fn test_token_types_are_not_interchangeable() {
        let manager = jwt_manager();
        let pair = manager.issue_pair(&demo_user(UserRole::Admin)).unwrap();

        assert!(manager.validate_access_token(&pair.refresh_token).is_err());
        assert!(manager.validate_refresh_token(&pair.access_token).is_err());
        assert!(manager.validate_refresh_token(&pair.refresh_token).is_ok());
        assert_eq!(pair.token_type, "Bearer");
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(jwt_manager().validate_token("not.a.jwt").is_err());
    }
}
