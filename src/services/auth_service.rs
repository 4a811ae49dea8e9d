//! 认证服务

use super::with_fallback;
use crate::errors::AppError;
use crate::fake_data::FakeDataService;
use crate::models::{LoginRequest, Sourced, User};
use crate::repositories::UserStore;
use crate::security::{demo_password_matches, verify_password, JwtManager, TokenPair};
use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::Serialize;
use std::sync::Arc;

/// 登录响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub user: User,
}

/// 退出登录响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub user_id: i64,
    pub logged_out_at: DateTime<Utc>,
}

/// 认证服务
pub struct AuthService {
    jwt_manager: Arc<JwtManager>,
    user_store: Option<Arc<dyn UserStore>>,
    fake_data: Arc<FakeDataService>,
    /// 演示账号共用密码，未配置时禁用演示账号登录
    demo_password: Option<SecretString>,
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("邮箱或密码错误".to_string())
}

fn ensure_active(user: &User) -> Result<(), AppError> {
    if user.is_active {
        Ok(())
    } else {
        Err(AppError::Forbidden("账号已停用".to_string()))
    }
}

impl AuthService {
    pub fn new(
        jwt_manager: Arc<JwtManager>,
        user_store: Option<Arc<dyn UserStore>>,
        fake_data: Arc<FakeDataService>,
        demo_password: Option<SecretString>,
    ) -> Self {
        Self {
            jwt_manager,
            user_store,
            fake_data,
            demo_password,
        }
    }

    /// 邮箱密码登录
    ///
    /// 数据库中查无此人直接拒绝；只有数据库不可用时才尝试演示账号。
    pub async fn login(&self, request: &LoginRequest) -> Result<Sourced<LoginResponse>, AppError> {
        if let Some(store) = &self.user_store {
            match store.find_credentials(&request.email).await {
                Ok(Some(credentials)) => {
                    if !verify_password(&request.password, &credentials.password_hash)? {
                        return Err(invalid_credentials());
                    }
                    let response = self.issue(credentials.user)?;
                    return Ok(Sourced::database(response));
                }
                Ok(None) => return Err(invalid_credentials()),
                Err(e) => {
                    tracing::warn!(error = %e, "登录查询失败，尝试演示账号");
                }
            }
        }

        self.login_demo_account(request).map(Sourced::fake)
    }

    fn login_demo_account(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let Some(demo_password) = &self.demo_password else {
            tracing::debug!("未配置演示密码，拒绝演示账号登录");
            return Err(invalid_credentials());
        };

        if !demo_password_matches(&request.password, demo_password) {
            return Err(invalid_credentials());
        }

        let user = self
            .fake_data
            .snapshot()
            .user_by_email(&request.email)
            .cloned()
            .ok_or_else(invalid_credentials)?;

        self.issue(user)
    }

    fn issue(&self, user: User) -> Result<LoginResponse, AppError> {
        ensure_active(&user)?;
        let tokens = self.jwt_manager.issue_pair(&user)?;

        tracing::info!(user_id = user.id, role = %user.role, "用户登录成功");

        Ok(LoginResponse { tokens, user })
    }

    /// 使用刷新令牌换取新的令牌对
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<Sourced<TokenPair>, AppError> {
        let claims = self.jwt_manager.validate_refresh_token(refresh_token)?;
        let user = self.current_user(claims.user_id()?).await?;
        ensure_active(&user.data)?;

        let source = user.source;
        let tokens = self.jwt_manager.issue_pair(&user.data)?;

        Ok(Sourced { data: tokens, source })
    }

    /// 根据令牌中的用户 ID 查找当前用户
    pub async fn current_user(&self, user_id: i64) -> Result<Sourced<User>, AppError> {
        with_fallback(
            "user",
            self.user_store.as_ref().map(|store| store.find_by_id(user_id)),
            || self.fake_data.snapshot().user(user_id).cloned(),
        )
        .await
        .ok_or_else(|| AppError::NotFound("用户".to_string()))
    }

    /// 退出登录
    ///
    /// 令牌无状态，服务端只确认用户存在并记录日志，由客户端丢弃令牌。
    pub async fn logout(&self, user_id: i64) -> Result<Sourced<LogoutResponse>, AppError> {
        let user = self.current_user(user_id).await?;

        tracing::info!(user_id, "用户退出登录");

        Ok(user.map(|user| LogoutResponse {
            user_id: user.id,
            logged_out_at: Utc::now(),
        }))
    }
}
