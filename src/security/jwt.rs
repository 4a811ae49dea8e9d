//! JWT 令牌处理

use crate::config::{JwtSettings, Settings};
use crate::errors::AppError;
use crate::models::{User, UserRole};
use crate::security::Secrets;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT 令牌类型
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum JwtTokenType {
    Access,
    Refresh,
}

/// JWT Claims（载荷）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 主题（用户 ID）
    pub sub: String,
    /// 令牌类型
    pub token_type: JwtTokenType,
    /// 签发者
    pub iss: String,
    /// 受众
    pub aud: String,
    /// 过期时间（Unix 时间戳）
    pub exp: i64,
    /// 签发时间
    pub iat: i64,
    /// 令牌 ID
    pub jti: String,
    pub email: String,
    pub role: UserRole,
}

impl Claims {
    /// 解析用户 ID
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub
            .parse()
            .map_err(|_| AppError::Unauthorized("令牌主题无效".to_string()))
    }
}

/// JWT 管理器
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    access_expiry_seconds: i64,
    refresh_expiry_days: i64,
}

impl JwtManager {
    /// 使用全局密钥创建 JWT 管理器
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let secrets = Secrets::get()?;
        Ok(Self::from_secret(secrets.jwt_secret(), &settings.jwt))
    }

    /// 使用指定密钥创建
    pub fn from_secret(secret: &SecretString, jwt: &JwtSettings) -> Self {
        let secret = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: jwt.issuer.clone(),
            audience: jwt.audience.clone(),
            access_expiry_seconds: jwt.expiry_seconds as i64,
            refresh_expiry_days: jwt.refresh_expiry_days as i64,
        }
    }

    pub fn access_expiry_seconds(&self) -> i64 {
        self.access_expiry_seconds
    }

    /// 生成访问令牌
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        self.generate_token(user, JwtTokenType::Access)
    }

    /// 生成刷新令牌
    pub fn generate_refresh_token(&self, user: &User) -> Result<String, AppError> {
        self.generate_token(user, JwtTokenType::Refresh)
    }

    /// 生成访问令牌与刷新令牌
    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        Ok(TokenPair::new(
            self.generate_access_token(user)?,
            self.generate_refresh_token(user)?,
            self.access_expiry_seconds,
        ))
    }

    fn generate_token(&self, user: &User, token_type: JwtTokenType) -> Result<String, AppError> {
        let now = Utc::now();
        let expiry = match token_type {
            JwtTokenType::Access => now + Duration::seconds(self.access_expiry_seconds),
            JwtTokenType::Refresh => now + Duration::days(self.refresh_expiry_days),
        };

        let claims = Claims {
            sub: user.id.to_string(),
            token_type,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            exp: expiry.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
            email: user.email.clone(),
            role: user.role,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("令牌生成失败: {}", e)))
    }

    /// 验证令牌
    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data: TokenData<Claims> = decode(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!("令牌验证失败: {}", e);
                AppError::Unauthorized("无效的令牌".to_string())
            })?;

        Ok(token_data.claims)
    }

    /// 验证访问令牌
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.validate_token(token)?;

        if claims.token_type != JwtTokenType::Access {
            return Err(AppError::Unauthorized("令牌类型错误".to_string()));
        }

        Ok(claims)
    }

    /// 验证刷新令牌
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.validate_token(token)?;

        if claims.token_type != JwtTokenType::Refresh {
            return Err(AppError::Unauthorized("令牌类型错误".to_string()));
        }

        Ok(claims)
    }
}

/// 令牌对
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
