//! 初始数据写入
//!
//! 在迁移之后执行。只向空表写入：目录来自固定目录表，用户只在配置了演示口令时写入，
//! 口令以 Argon2id 哈希保存。整个过程在一个事务内完成。

use crate::db::PostgresPool;
use crate::errors::AppError;
use crate::fake_data::{catalog, FakeDataService};
use crate::models::{
    AlertLevel, AlertStatus, DeviceType, Manufacturer, Station, SystemConfig, UserCredentials,
};
use crate::security::CredentialHasher;
use secrecy::{ExposeSecret, SecretString};
use sqlx::{Postgres, Transaction};

/// 待写入的初始数据
#[derive(Debug, Clone)]
pub struct SeedData {
    pub users: Vec<UserCredentials>,
    pub device_types: Vec<DeviceType>,
    pub manufacturers: Vec<Manufacturer>,
    pub stations: Vec<Station>,
    pub alert_levels: Vec<AlertLevel>,
    pub alert_statuses: Vec<AlertStatus>,
    pub system_configs: Vec<SystemConfig>,
}

impl SeedData {
    /// 取一份演示快照作为初始数据
    pub fn build(fake_data: &FakeDataService, demo_password: Option<&SecretString>) -> Result<Self, AppError> {
        let snapshot = fake_data.snapshot();

        let users = match demo_password {
            Some(password) => {
                let hasher = CredentialHasher::new();
                snapshot
                    .users
                    .into_iter()
                    .map(|user| {
                        Ok(UserCredentials {
                            user,
                            password_hash: hasher.hash(password.expose_secret())?,
                        })
                    })
                    .collect::<Result<Vec<_>, AppError>>()?
            }
            None => Vec::new(),
        };

        Ok(Self {
            users,
            device_types: snapshot.device_types,
            manufacturers: snapshot.manufacturers,
            stations: snapshot.stations,
            alert_levels: snapshot.alert_levels,
            alert_statuses: snapshot.alert_statuses,
            system_configs: catalog::build_system_configs(snapshot.generated_at),
        })
    }
}

/// 各表实际写入的行数，非空表记 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub device_types: usize,
    pub manufacturers: usize,
    pub stations: usize,
    pub alert_levels: usize,
    pub alert_statuses: usize,
    pub system_configs: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.users
            + self.device_types
            + self.manufacturers
            + self.stations
            + self.alert_levels
            + self.alert_statuses
            + self.system_configs
    }
}

type Tx<'a> = Transaction<'a, Postgres>;

async fn is_empty(tx: &mut Tx<'_>, table: &str) -> Result<bool, AppError> {
    let empty: bool = sqlx::query_scalar(&format!("SELECT NOT EXISTS(SELECT 1 FROM {})", table))
        .fetch_one(&mut **tx)
        .await?;
    Ok(empty)
}

/// 初始数据写入器
pub struct DemoSeeder {
    pool: PostgresPool,
}

impl DemoSeeder {
    pub fn new(pool: PostgresPool) -> Self {
        Self { pool }
    }

    pub async fn seed(&self, data: &SeedData) -> Result<SeedSummary, AppError> {
        let mut tx = self.pool.pool().begin().await?;
        let mut summary = SeedSummary::default();

        if !data.users.is_empty() && is_empty(&mut tx, "users").await? {
            for credentials in &data.users {
                let user = &credentials.user;
                sqlx::query(
                    "INSERT INTO users (email, name, password_hash, role, department, position, phone, is_active, created_at)
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
                )
                .bind(&user.email)
                .bind(&user.name)
                .bind(&credentials.password_hash)
                .bind(user.role.as_str())
                .bind(&user.department)
                .bind(&user.position)
                .bind(&user.phone)
                .bind(user.is_active)
                .bind(user.created_at)
                .execute(&mut *tx)
                .await?;
            }
            summary.users = data.users.len();
        }

        if is_empty(&mut tx, "device_types").await? {
            for t in &data.device_types {
                sqlx::query(
                    "INSERT INTO device_types (name, description, icon, specifications, is_active, created_at)
                     VALUES ($1, $2, $3, $4, $5, $6)",
                )
                .bind(&t.name)
                .bind(&t.description)
                .bind(&t.icon)
                .bind(&t.specifications)
                .bind(t.is_active)
                .bind(t.created_at)
                .execute(&mut *tx)
                .await?;
            }
            summary.device_types = data.device_types.len();
        }

        if is_empty(&mut tx, "manufacturers").await? {
            for m in &data.manufacturers {
                sqlx::query(
                    "INSERT INTO manufacturers (name, description, country, website, contact_info, is_active, created_at)
                     VALUES ($1, $2, $3, $4, $5, $6, $7)",
                )
                .bind(&m.name)
                .bind(&m.description)
                .bind(&m.country)
                .bind(&m.website)
                .bind(&m.contact_info)
                .bind(m.is_active)
                .bind(m.created_at)
                .execute(&mut *tx)
                .await?;
            }
            summary.manufacturers = data.manufacturers.len();
        }

        if is_empty(&mut tx, "stations").await? {
            for s in &data.stations {
                sqlx::query(
                    "INSERT INTO stations (name, location, latitude, longitude, address, is_active, created_at)
                     VALUES ($1, $2, $3, $4, $5, $6, $7)",
                )
                .bind(&s.name)
                .bind(&s.location)
                .bind(s.latitude)
                .bind(s.longitude)
                .bind(&s.address)
                .bind(s.is_active)
                .bind(s.created_at)
                .execute(&mut *tx)
                .await?;
            }
            summary.stations = data.stations.len();
        }

        if is_empty(&mut tx, "alert_levels").await? {
            for l in &data.alert_levels {
                sqlx::query(
                    "INSERT INTO alert_levels (name, description, severity, threshold, color, is_active, created_at)
                     VALUES ($1, $2, $3, $4, $5, $6, $7)",
                )
                .bind(&l.name)
                .bind(&l.description)
                .bind(l.severity.as_str())
                .bind(l.threshold)
                .bind(&l.color)
                .bind(l.is_active)
                .bind(l.created_at)
                .execute(&mut *tx)
                .await?;
            }
            summary.alert_levels = data.alert_levels.len();
        }

        if is_empty(&mut tx, "alert_statuses").await? {
            for st in &data.alert_statuses {
                sqlx::query(
                    "INSERT INTO alert_statuses (name, description, color, priority, is_active, created_at)
                     VALUES ($1, $2, $3, $4, $5, $6)",
                )
                .bind(&st.name)
                .bind(&st.description)
                .bind(&st.color)
                .bind(st.priority)
                .bind(st.is_active)
                .bind(st.created_at)
                .execute(&mut *tx)
                .await?;
            }
            summary.alert_statuses = data.alert_statuses.len();
        }

        if is_empty(&mut tx, "system_configs").await? {
            for c in &data.system_configs {
                sqlx::query(
                    "INSERT INTO system_configs (config_key, config_value, description, data_type, created_at)
                     VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(&c.config_key)
                .bind(&c.config_value)
                .bind(&c.description)
                .bind(c.data_type.as_str())
                .bind(c.created_at)
                .execute(&mut *tx)
                .await?;
            }
            summary.system_configs = data.system_configs.len();
        }

        tx.commit().await?;

        tracing::info!(
            users = summary.users,
            device_types = summary.device_types,
            manufacturers = summary.manufacturers,
            stations = summary.stations,
            alert_levels = summary.alert_levels,
            alert_statuses = summary.alert_statuses,
            system_configs = summary.system_configs,
            "初始数据写入完成"
        );

        Ok(summary)
    }
}
