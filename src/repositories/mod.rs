//! 数据访问层（Repository）
//!
//! 服务层只依赖这里的 trait，数据库不可用时由服务层回退到演示数据。

mod category_repo;
mod seed_repo;
mod user_repo;

pub use category_repo::CategoryRepository;
pub use seed_repo::{DemoSeeder, SeedData, SeedSummary};
pub use user_repo::UserRepository;

use crate::errors::AppError;
use crate::fake_data::filter::UserFilter;
use crate::models::{
    AlertLevel, AlertLevelRequest, AlertStatus, AlertStatusRequest, DeviceType, DeviceTypeRequest,
    Manufacturer, ManufacturerRequest, NewUser, Page, Station, StationRequest, SystemConfig, User,
    UserChanges, UserCredentials, UserStatistics,
};

/// 用户存储
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// 按条件分页查询用户（页码从 0 开始）
    async fn list_users(&self, filter: &UserFilter, page: usize, size: usize) -> Result<Page<User>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// 按邮箱（忽略大小写）查找登录凭据
    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>, AppError>;

    async fn email_taken(&self, email: &str) -> Result<bool, AppError>;

    async fn create_user(&self, user: &NewUser) -> Result<User, AppError>;

    /// 用户不存在时返回 None
    async fn update_user(&self, id: i64, changes: &UserChanges) -> Result<Option<User>, AppError>;

    /// 停用用户，用户不存在时返回 false
    async fn deactivate_user(&self, id: i64) -> Result<bool, AppError>;

    async fn user_statistics(&self) -> Result<UserStatistics, AppError>;
}

/// 可写的目录表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTable {
    DeviceTypes,
    Manufacturers,
    Stations,
    AlertLevels,
    AlertStatuses,
}

impl CatalogTable {
    pub fn table_name(&self) -> &'static str {
        match self {
            CatalogTable::DeviceTypes => "device_types",
            CatalogTable::Manufacturers => "manufacturers",
            CatalogTable::Stations => "stations",
            CatalogTable::AlertLevels => "alert_levels",
            CatalogTable::AlertStatuses => "alert_statuses",
        }
    }

    /// 错误信息中的资源名称
    pub fn label(&self) -> &'static str {
        match self {
            CatalogTable::DeviceTypes => "设备类型",
            CatalogTable::Manufacturers => "制造商",
            CatalogTable::Stations => "站点",
            CatalogTable::AlertLevels => "预警级别",
            CatalogTable::AlertStatuses => "预警状态",
        }
    }
}

/// 基础目录存储，列表只返回启用的记录
#[async_trait::async_trait]
pub trait CategoryStore: Send + Sync {
    async fn device_types(&self) -> Result<Vec<DeviceType>, AppError>;

    async fn manufacturers(&self) -> Result<Vec<Manufacturer>, AppError>;

    async fn stations(&self) -> Result<Vec<Station>, AppError>;

    async fn alert_levels(&self) -> Result<Vec<AlertLevel>, AppError>;

    async fn alert_statuses(&self) -> Result<Vec<AlertStatus>, AppError>;

    async fn system_configs(&self) -> Result<Vec<SystemConfig>, AppError>;

    /// 名称（忽略大小写）是否已被其他记录占用；`except` 为正在修改的记录
    async fn name_taken(&self, table: CatalogTable, name: &str, except: Option<i64>) -> Result<bool, AppError>;

    async fn create_device_type(&self, request: &DeviceTypeRequest) -> Result<DeviceType, AppError>;

    async fn update_device_type(&self, id: i64, request: &DeviceTypeRequest) -> Result<Option<DeviceType>, AppError>;

    async fn create_manufacturer(&self, request: &ManufacturerRequest) -> Result<Manufacturer, AppError>;

    async fn update_manufacturer(
        &self,
        id: i64,
        request: &ManufacturerRequest,
    ) -> Result<Option<Manufacturer>, AppError>;

    async fn create_station(&self, request: &StationRequest) -> Result<Station, AppError>;

    async fn create_alert_level(&self, request: &AlertLevelRequest) -> Result<AlertLevel, AppError>;

    async fn create_alert_status(&self, request: &AlertStatusRequest) -> Result<AlertStatus, AppError>;

    /// 停用记录，记录不存在时返回 false
    async fn deactivate(&self, table: CatalogTable, id: i64) -> Result<bool, AppError>;
}

/// 唯一约束冲突转为 400，其余仍按数据库错误处理
pub(crate) fn unique_violation_as_conflict(e: sqlx::Error, what: &str) -> AppError {
    let is_unique = e
        .as_database_error()
        .map_or(false, |db| db.is_unique_violation());

    if is_unique {
        AppError::ValidationError(format!("{}已存在", what))
    } else {
        AppError::DatabaseError(e)
    }
}
