//! 用户数据模型

use super::common::{de_optional_variant, de_variant, parse_variant, UnknownVariant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeMap;
use std::str::FromStr;
use validator::Validate;

/// 用户角色枚举
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// 系统管理员
    Admin,
    /// 运行值班员
    Operator,
    /// 普通用户
    User,
    /// 只读查看者
    Viewer,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Admin,
        UserRole::Operator,
        UserRole::User,
        UserRole::Viewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Operator => "OPERATOR",
            UserRole::User => "USER",
            UserRole::Viewer => "VIEWER",
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Viewer
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "用户角色", s)
    }
}

impl TryFrom<String> for UserRole {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub role: UserRole,
    pub department: String,
    pub position: String,
    pub phone: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// 登录凭据（仅在认证流程内部使用，不返回给客户端）
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
}

/// 登录请求
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "邮箱格式无效"))]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "密码长度应在 1-128 字符之间"))]
    pub password: String,
}

/// 刷新令牌请求
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// 注册或由管理员创建用户
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "邮箱格式无效"))]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "密码长度应在 6-128 字符之间"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "姓名长度应在 1-100 字符之间"))]
    pub name: String,

    #[serde(default = "default_register_role", deserialize_with = "de_variant")]
    pub role: UserRole,

    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
}

fn default_register_role() -> UserRole {
    UserRole::User
}

/// 管理员修改用户，缺省字段保持不变
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 6, max = 128, message = "密码长度应在 6-128 字符之间"))]
    pub password: Option<String>,

    #[validate(length(min = 1, max = 100, message = "姓名长度应在 1-100 字符之间"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "de_optional_variant")]
    pub role: Option<UserRole>,

    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub is_active: Option<bool>,
}

/// 当前用户修改个人资料
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "姓名长度应在 1-100 字符之间"))]
    pub name: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
}

/// 待写入的新用户
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub department: String,
    pub position: String,
    pub phone: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn to_user(&self, id: i64, created_at: DateTime<Utc>) -> User {
        User {
            id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            department: self.department.clone(),
            position: self.position.clone(),
            phone: self.phone.clone(),
            is_active: true,
            created_at,
        }
    }
}

/// 用户字段修改集合，None 表示不修改
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub role: Option<UserRole>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub is_active: Option<bool>,
    pub password_hash: Option<String>,
}

impl UserChanges {
    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(phone) = &self.phone {
            user.phone = phone.clone();
        }
        if let Some(department) = &self.department {
            user.department = department.clone();
        }
        if let Some(position) = &self.position {
            user.position = position.clone();
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
    }
}

impl From<&UpdateProfileRequest> for UserChanges {
    fn from(request: &UpdateProfileRequest) -> Self {
        Self {
            name: request.name.clone(),
            phone: request.phone.clone(),
            department: request.department.clone(),
            position: request.position.clone(),
            ..Default::default()
        }
    }
}

/// 登录记录
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginHistoryEntry {
    pub id: i64,
    pub user_id: i64,
    pub login_time: DateTime<Utc>,
    pub ip_address: String,
    pub location: String,
    pub device: String,
    pub browser: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginHistoryResponse {
    pub login_history: Vec<LoginHistoryEntry>,
    pub total_records: usize,
}

/// 用户统计，角色分布的键为小写角色名
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStatistics {
    pub total_users: usize,
    pub active_users: usize,
    pub role_distribution: BTreeMap<String, usize>,
}

impl UserStatistics {
    pub fn from_users(users: &[User]) -> Self {
        let mut role_distribution: BTreeMap<String, usize> = UserRole::ALL
            .iter()
            .map(|role| (role.as_str().to_lowercase(), 0))
            .collect();
        for user in users {
            *role_distribution
                .entry(user.role.as_str().to_lowercase())
                .or_default() += 1;
        }

        Self {
            total_users: users.len(),
            active_users: users.iter().filter(|u| u.is_active).count(),
            role_distribution,
        }
    }
}

/// 用户列表查询参数
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserListQuery {
    #[serde(default)]
    pub page: usize,

    #[validate(range(min = 1, max = 100, message = "每页数量应在 1-100 之间"))]
    #[serde(default = "default_page_size")]
    pub size: usize,

    pub search: Option<String>,
    pub role: Option<String>,
    pub active: Option<bool>,
}

fn default_page_size() -> usize {
    10
}
