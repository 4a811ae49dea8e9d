//! 用户凭据校验
//!
//! 数据库中的用户保存 Argon2id（m=19456 KiB, t=2, p=1）哈希；
//! 演示账号共用配置中的口令，比较过程不因首个不同字节提前结束。

use crate::errors::AppError;
use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use secrecy::{ExposeSecret, SecretString};

/// 凭据哈希器
#[derive(Clone, Default)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生成带随机盐的 PHC 字符串
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|phc| phc.to_string())
            .map_err(|e| AppError::InternalError(format!("凭据哈希失败: {}", e)))
    }

    /// 校验口令；存储值不是合法 PHC 字符串时返回错误而不是 false
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        let phc = PasswordHash::new(stored)
            .map_err(|e| AppError::InternalError(format!("存储的凭据格式无效: {}", e)))?;

        match self.argon2.verify_password(password.as_bytes(), &phc) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::InternalError(format!("凭据校验失败: {}", e))),
        }
    }
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    CredentialHasher::new().hash(password)
}

pub fn verify_password(password: &str, stored: &str) -> Result<bool, AppError> {
    CredentialHasher::new().verify(password, stored)
}

/// 比较演示账号口令
pub fn demo_password_matches(candidate: &str, demo_password: &SecretString) -> bool {
    constant_time_eq(candidate.as_bytes(), demo_password.expose_secret().as_bytes())
}

/// 长度相同时遍历全部字节，耗时只与长度有关
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}
