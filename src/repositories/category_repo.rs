//! 基础目录数据仓库

use super::{unique_violation_as_conflict, CatalogTable, CategoryStore};
use crate::db::PostgresPool;
use crate::errors::AppError;
use crate::models::{
    AlertLevel, AlertLevelRequest, AlertStatus, AlertStatusRequest, DeviceType, DeviceTypeRequest,
    Manufacturer, ManufacturerRequest, Station, StationRequest, SystemConfig,
};

const DEVICE_TYPE_COLUMNS: &str = "id, name, description, icon, specifications, is_active, created_at";
const MANUFACTURER_COLUMNS: &str =
    "id, name, description, country, website, contact_info, is_active, created_at";
const STATION_COLUMNS: &str = "id, name, location, latitude, longitude, address, is_active, created_at";
const ALERT_LEVEL_COLUMNS: &str = "id, name, description, severity, threshold, color, is_active, created_at";
const ALERT_STATUS_COLUMNS: &str = "id, name, description, color, priority, is_active, created_at";

/// 基础目录数据仓库
#[derive(Clone)]
pub struct CategoryRepository {
    pool: PostgresPool,
}

impl CategoryRepository {
    pub fn new(pool: PostgresPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CategoryStore for CategoryRepository {
    async fn device_types(&self) -> Result<Vec<DeviceType>, AppError> {
        let rows = sqlx::query_as::<_, DeviceType>(&format!(
            "SELECT {} FROM device_types WHERE is_active = TRUE ORDER BY id",
            DEVICE_TYPE_COLUMNS
        ))
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }

    async fn manufacturers(&self) -> Result<Vec<Manufacturer>, AppError> {
        let rows = sqlx::query_as::<_, Manufacturer>(&format!(
            "SELECT {} FROM manufacturers WHERE is_active = TRUE ORDER BY id",
            MANUFACTURER_COLUMNS
        ))
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }

    async fn stations(&self) -> Result<Vec<Station>, AppError> {
        let rows = sqlx::query_as::<_, Station>(&format!(
            "SELECT {} FROM stations WHERE is_active = TRUE ORDER BY id",
            STATION_COLUMNS
        ))
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }

    async fn alert_levels(&self) -> Result<Vec<AlertLevel>, AppError> {
        let rows = sqlx::query_as::<_, AlertLevel>(&format!(
            "SELECT {} FROM alert_levels WHERE is_active = TRUE ORDER BY id",
            ALERT_LEVEL_COLUMNS
        ))
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }

    async fn alert_statuses(&self) -> Result<Vec<AlertStatus>, AppError> {
        let rows = sqlx::query_as::<_, AlertStatus>(&format!(
            "SELECT {} FROM alert_statuses WHERE is_active = TRUE ORDER BY priority, id",
            ALERT_STATUS_COLUMNS
        ))
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }

    async fn system_configs(&self) -> Result<Vec<SystemConfig>, AppError> {
        let rows = sqlx::query_as::<_, SystemConfig>(
            "SELECT id, config_key, config_value, description, data_type, created_at
             FROM system_configs ORDER BY config_key",
        )
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }

    async fn name_taken(&self, table: CatalogTable, name: &str, except: Option<i64>) -> Result<bool, AppError> {
        let taken: bool = sqlx::query_scalar(&format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE LOWER(name) = LOWER($1) AND ($2::bigint IS NULL OR id <> $2))",
            table.table_name()
        ))
        .bind(name.trim())
        .bind(except)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(taken)
    }

    async fn create_device_type(&self, request: &DeviceTypeRequest) -> Result<DeviceType, AppError> {
        sqlx::query_as::<_, DeviceType>(&format!(
            "INSERT INTO device_types (name, description, icon, specifications)
             VALUES ($1, $2, $3, $4) RETURNING {}",
            DEVICE_TYPE_COLUMNS
        ))
        .bind(request.name.trim())
        .bind(&request.description)
        .bind(&request.icon)
        .bind(&request.specifications)
        .fetch_one(self.pool.pool())
        .await
        .map_err(|e| unique_violation_as_conflict(e, CatalogTable::DeviceTypes.label()))
    }

    async fn update_device_type(&self, id: i64, request: &DeviceTypeRequest) -> Result<Option<DeviceType>, AppError> {
        sqlx::query_as::<_, DeviceType>(&format!(
            "UPDATE device_types SET name = $2, description = $3, icon = $4, specifications = $5
             WHERE id = $1 RETURNING {}",
            DEVICE_TYPE_COLUMNS
        ))
        .bind(id)
        .bind(request.name.trim())
        .bind(&request.description)
        .bind(&request.icon)
        .bind(&request.specifications)
        .fetch_optional(self.pool.pool())
        .await
        .map_err(|e| unique_violation_as_conflict(e, CatalogTable::DeviceTypes.label()))
    }

    async fn create_manufacturer(&self, request: &ManufacturerRequest) -> Result<Manufacturer, AppError> {
        sqlx::query_as::<_, Manufacturer>(&format!(
            "INSERT INTO manufacturers (name, description, country, website, contact_info)
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            MANUFACTURER_COLUMNS
        ))
        .bind(request.name.trim())
        .bind(&request.description)
        .bind(&request.country)
        .bind(&request.website)
        .bind(&request.contact_info)
        .fetch_one(self.pool.pool())
        .await
        .map_err(|e| unique_violation_as_conflict(e, CatalogTable::Manufacturers.label()))
    }

    async fn update_manufacturer(
        &self,
        id: i64,
        request: &ManufacturerRequest,
    ) -> Result<Option<Manufacturer>, AppError> {
        sqlx::query_as::<_, Manufacturer>(&format!(
            "UPDATE manufacturers
             SET name = $2, description = $3, country = $4, website = $5, contact_info = $6
             WHERE id = $1 RETURNING {}",
            MANUFACTURER_COLUMNS
        ))
        .bind(id)
        .bind(request.name.trim())
        .bind(&request.description)
        .bind(&request.country)
        .bind(&request.website)
        .bind(&request.contact_info)
        .fetch_optional(self.pool.pool())
        .await
        .map_err(|e| unique_violation_as_conflict(e, CatalogTable::Manufacturers.label()))
    }

    async fn create_station(&self, request: &StationRequest) -> Result<Station, AppError> {
        sqlx::query_as::<_, Station>(&format!(
            "INSERT INTO stations (name, location, latitude, longitude, address)
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            STATION_COLUMNS
        ))
        .bind(request.name.trim())
        .bind(&request.location)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(&request.address)
        .fetch_one(self.pool.pool())
        .await
        .map_err(|e| unique_violation_as_conflict(e, CatalogTable::Stations.label()))
    }

    async fn create_alert_level(&self, request: &AlertLevelRequest) -> Result<AlertLevel, AppError> {
        sqlx::query_as::<_, AlertLevel>(&format!(
            "INSERT INTO alert_levels (name, description, severity, threshold, color)
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            ALERT_LEVEL_COLUMNS
        ))
        .bind(request.name.trim())
        .bind(&request.description)
        .bind(request.severity.as_str())
        .bind(request.threshold)
        .bind(&request.color)
        .fetch_one(self.pool.pool())
        .await
        .map_err(|e| unique_violation_as_conflict(e, CatalogTable::AlertLevels.label()))
    }

    async fn create_alert_status(&self, request: &AlertStatusRequest) -> Result<AlertStatus, AppError> {
        sqlx::query_as::<_, AlertStatus>(&format!(
            "INSERT INTO alert_statuses (name, description, color, priority)
             VALUES ($1, $2, $3, $4) RETURNING {}",
            ALERT_STATUS_COLUMNS
        ))
        .bind(request.name.trim())
        .bind(&request.description)
        .bind(&request.color)
        .bind(request.priority)
        .fetch_one(self.pool.pool())
        .await
        .map_err(|e| unique_violation_as_conflict(e, CatalogTable::AlertStatuses.label()))
    }

    async fn deactivate(&self, table: CatalogTable, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(&format!(
            "UPDATE {} SET is_active = FALSE WHERE id = $1",
            table.table_name()
        ))
        .bind(id)
        .execute(self.pool.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
