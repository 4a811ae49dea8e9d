//! 密钥管理

use crate::errors::AppError;
use once_cell::sync::OnceCell;
use secrecy::SecretString;
use std::env;

/// 全局密钥存储
static SECRETS: OnceCell<Secrets> = OnceCell::new();

/// JWT 密钥最小长度
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// 应用密钥集合
pub struct Secrets {
    jwt_secret: SecretString,
    database_url: Option<SecretString>,
    demo_password: Option<SecretString>,
}

impl Secrets {
    /// 从环境变量加载密钥
    ///
    /// JWT_SECRET 必须设置；DATABASE_URL 缺省时以纯演示数据模式运行。
    pub fn load_from_env() -> Result<Self, AppError> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| AppError::ConfigError("JWT_SECRET 未设置".to_string()))?;
        validate_secret_strength(&jwt_secret, MIN_JWT_SECRET_LENGTH)?;

        Ok(Self {
            jwt_secret: SecretString::new(jwt_secret),
            database_url: non_empty_var("DATABASE_URL").map(SecretString::new),
            demo_password: non_empty_var("DEMO_PASSWORD").map(SecretString::new),
        })
    }

    /// 初始化全局密钥
    pub fn init() -> Result<(), AppError> {
        let secrets = Self::load_from_env()?;
        SECRETS
            .set(secrets)
            .map_err(|_| AppError::ConfigError("密钥已初始化".to_string()))?;
        Ok(())
    }

    /// 获取全局密钥实例
    pub fn get() -> Result<&'static Secrets, AppError> {
        SECRETS
            .get()
            .ok_or_else(|| AppError::ConfigError("密钥未初始化".to_string()))
    }

    /// 获取 JWT 密钥
    pub fn jwt_secret(&self) -> &SecretString {
        &self.jwt_secret
    }

    /// 获取数据库 URL
    pub fn database_url(&self) -> Option<&SecretString> {
        self.database_url.as_ref()
    }

    /// 演示账号密码
    pub fn demo_password(&self) -> Option<&SecretString> {
        self.demo_password.as_ref()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// 验证密钥强度
pub fn validate_secret_strength(secret: &str, min_length: usize) -> Result<(), AppError> {
    if secret.len() < min_length {
        return Err(AppError::ConfigError(format!(
            "密钥长度不足，最少需要 {} 字符",
            min_length
        )));
    }

    // 检查是否包含足够的熵
    let has_upper = secret.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = secret.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = secret.chars().any(|c| c.is_ascii_digit());

    if !has_upper || !has_lower || !has_digit {
        return Err(AppError::ConfigError(
            "密钥应包含大写字母、小写字母和数字".to_string(),
        ));
    }

    Ok(())
}
