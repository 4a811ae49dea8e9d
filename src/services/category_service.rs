//! 基础目录业务服务

use super::{simulated_id, with_fallback, write_or_simulate};
use crate::errors::AppError;
use crate::fake_data::{catalog, FakeDataService, FakeSnapshot};
use crate::models::{
    AlertLevel, AlertLevelRequest, AlertStatus, AlertStatusRequest, DeletedRecord, DeviceType,
    DeviceTypeRequest, Manufacturer, ManufacturerRequest, Sourced, Station, StationRequest,
    SystemConfig,
};
use crate::repositories::{CatalogTable, CategoryStore};
use chrono::Utc;
use std::sync::Arc;

fn duplicate_name(table: CatalogTable) -> AppError {
    AppError::ValidationError(format!("{}已存在", table.label()))
}

fn not_found(table: CatalogTable) -> AppError {
    AppError::NotFound(table.label().to_string())
}

async fn ensure_name_free(
    store: &dyn CategoryStore,
    table: CatalogTable,
    name: &str,
    except: Option<i64>,
) -> Result<(), AppError> {
    if store.name_taken(table, name.trim(), except).await? {
        return Err(duplicate_name(table));
    }
    Ok(())
}

/// 演示目录中的 (id, 名称)
fn demo_entries(snapshot: &FakeSnapshot, table: CatalogTable) -> Vec<(i64, &str)> {
    match table {
        CatalogTable::DeviceTypes => snapshot.device_types.iter().map(|e| (e.id, e.name.as_str())).collect(),
        CatalogTable::Manufacturers => snapshot.manufacturers.iter().map(|e| (e.id, e.name.as_str())).collect(),
        CatalogTable::Stations => snapshot.stations.iter().map(|e| (e.id, e.name.as_str())).collect(),
        CatalogTable::AlertLevels => snapshot.alert_levels.iter().map(|e| (e.id, e.name.as_str())).collect(),
        CatalogTable::AlertStatuses => snapshot.alert_statuses.iter().map(|e| (e.id, e.name.as_str())).collect(),
    }
}

fn ensure_demo_name_free(
    snapshot: &FakeSnapshot,
    table: CatalogTable,
    name: &str,
    except: Option<i64>,
) -> Result<(), AppError> {
    let taken = demo_entries(snapshot, table)
        .into_iter()
        .any(|(id, existing)| Some(id) != except && existing.eq_ignore_ascii_case(name.trim()));
    if taken {
        return Err(duplicate_name(table));
    }
    Ok(())
}

fn ensure_demo_exists(snapshot: &FakeSnapshot, table: CatalogTable, id: i64) -> Result<(), AppError> {
    if demo_entries(snapshot, table).iter().any(|(existing, _)| *existing == id) {
        Ok(())
    } else {
        Err(not_found(table))
    }
}

/// 基础目录业务服务
pub struct CategoryService {
    category_store: Option<Arc<dyn CategoryStore>>,
    fake_data: Arc<FakeDataService>,
}

impl CategoryService {
    pub fn new(category_store: Option<Arc<dyn CategoryStore>>, fake_data: Arc<FakeDataService>) -> Self {
        Self {
            category_store,
            fake_data,
        }
    }

    pub async fn device_types(&self) -> Sourced<Vec<DeviceType>> {
        with_fallback(
            "device_types",
            self.category_store.as_ref().map(|store| store.device_types()),
            || self.fake_data.snapshot().device_types,
        )
        .await
    }

    pub async fn manufacturers(&self) -> Sourced<Vec<Manufacturer>> {
        with_fallback(
            "manufacturers",
            self.category_store.as_ref().map(|store| store.manufacturers()),
            || self.fake_data.snapshot().manufacturers,
        )
        .await
    }

    pub async fn stations(&self) -> Sourced<Vec<Station>> {
        with_fallback(
            "stations",
            self.category_store.as_ref().map(|store| store.stations()),
            || self.fake_data.snapshot().stations,
        )
        .await
    }

    pub async fn alert_levels(&self) -> Sourced<Vec<AlertLevel>> {
        with_fallback(
            "alert_levels",
            self.category_store.as_ref().map(|store| store.alert_levels()),
            || self.fake_data.snapshot().alert_levels,
        )
        .await
    }

    pub async fn alert_statuses(&self) -> Sourced<Vec<AlertStatus>> {
        with_fallback(
            "alert_statuses",
            self.category_store.as_ref().map(|store| store.alert_statuses()),
            || self.fake_data.snapshot().alert_statuses,
        )
        .await
    }

    /// 系统配置（仅管理员可见）
    pub async fn system_configs(&self) -> Sourced<Vec<SystemConfig>> {
        with_fallback(
            "system_configs",
            self.category_store.as_ref().map(|store| store.system_configs()),
            || catalog::build_system_configs(Utc::now()),
        )
        .await
    }

    pub async fn create_device_type(&self, request: &DeviceTypeRequest) -> Result<Sourced<DeviceType>, AppError> {
        let table = CatalogTable::DeviceTypes;
        write_or_simulate(
            "device_types",
            self.category_store.as_ref().map(|store| async move {
                ensure_name_free(store.as_ref(), table, &request.name, None).await?;
                store.create_device_type(request).await
            }),
            || {
                let snapshot = self.fake_data.snapshot();
                ensure_demo_name_free(&snapshot, table, &request.name, None)?;
                Ok(request.to_device_type(simulated_id(), snapshot.generated_at))
            },
        )
        .await
    }

    pub async fn update_device_type(
        &self,
        id: i64,
        request: &DeviceTypeRequest,
    ) -> Result<Sourced<DeviceType>, AppError> {
        let table = CatalogTable::DeviceTypes;
        write_or_simulate(
            "device_types",
            self.category_store.as_ref().map(|store| async move {
                ensure_name_free(store.as_ref(), table, &request.name, Some(id)).await?;
                store
                    .update_device_type(id, request)
                    .await?
                    .ok_or_else(|| not_found(table))
            }),
            || {
                let snapshot = self.fake_data.snapshot();
                let existing = snapshot
                    .device_types
                    .iter()
                    .find(|t| t.id == id)
                    .ok_or_else(|| not_found(table))?;
                ensure_demo_name_free(&snapshot, table, &request.name, Some(id))?;
                Ok(request.to_device_type(id, existing.created_at))
            },
        )
        .await
    }

    pub async fn delete_device_type(&self, id: i64) -> Result<Sourced<DeletedRecord>, AppError> {
        self.deactivate(CatalogTable::DeviceTypes, id).await
    }

    pub async fn create_manufacturer(
        &self,
        request: &ManufacturerRequest,
    ) -> Result<Sourced<Manufacturer>, AppError> {
        let table = CatalogTable::Manufacturers;
        write_or_simulate(
            "manufacturers",
            self.category_store.as_ref().map(|store| async move {
                ensure_name_free(store.as_ref(), table, &request.name, None).await?;
                store.create_manufacturer(request).await
            }),
            || {
                let snapshot = self.fake_data.snapshot();
                ensure_demo_name_free(&snapshot, table, &request.name, None)?;
                Ok(request.to_manufacturer(simulated_id(), snapshot.generated_at))
            },
        )
        .await
    }

    pub async fn update_manufacturer(
        &self,
        id: i64,
        request: &ManufacturerRequest,
    ) -> Result<Sourced<Manufacturer>, AppError> {
        let table = CatalogTable::Manufacturers;
        write_or_simulate(
            "manufacturers",
            self.category_store.as_ref().map(|store| async move {
                ensure_name_free(store.as_ref(), table, &request.name, Some(id)).await?;
                store
                    .update_manufacturer(id, request)
                    .await?
                    .ok_or_else(|| not_found(table))
            }),
            || {
                let snapshot = self.fake_data.snapshot();
                let existing = snapshot
                    .manufacturers
                    .iter()
                    .find(|m| m.id == id)
                    .ok_or_else(|| not_found(table))?;
                ensure_demo_name_free(&snapshot, table, &request.name, Some(id))?;
                Ok(request.to_manufacturer(id, existing.created_at))
            },
        )
        .await
    }

    pub async fn delete_manufacturer(&self, id: i64) -> Result<Sourced<DeletedRecord>, AppError> {
        self.deactivate(CatalogTable::Manufacturers, id).await
    }

    pub async fn create_station(&self, request: &StationRequest) -> Result<Sourced<Station>, AppError> {
        let table = CatalogTable::Stations;
        write_or_simulate(
            "stations",
            self.category_store.as_ref().map(|store| async move {
                ensure_name_free(store.as_ref(), table, &request.name, None).await?;
                store.create_station(request).await
            }),
            || {
                let snapshot = self.fake_data.snapshot();
                ensure_demo_name_free(&snapshot, table, &request.name, None)?;
                Ok(request.to_station(simulated_id(), snapshot.generated_at))
            },
        )
        .await
    }

    pub async fn create_alert_level(&self, request: &AlertLevelRequest) -> Result<Sourced<AlertLevel>, AppError> {
        let table = CatalogTable::AlertLevels;
        write_or_simulate(
            "alert_levels",
            self.category_store.as_ref().map(|store| async move {
                ensure_name_free(store.as_ref(), table, &request.name, None).await?;
                store.create_alert_level(request).await
            }),
            || {
                let snapshot = self.fake_data.snapshot();
                ensure_demo_name_free(&snapshot, table, &request.name, None)?;
                Ok(request.to_alert_level(simulated_id(), snapshot.generated_at))
            },
        )
        .await
    }

    pub async fn create_alert_status(
        &self,
        request: &AlertStatusRequest,
    ) -> Result<Sourced<AlertStatus>, AppError> {
        let table = CatalogTable::AlertStatuses;
        write_or_simulate(
            "alert_statuses",
            self.category_store.as_ref().map(|store| async move {
                ensure_name_free(store.as_ref(), table, &request.name, None).await?;
                store.create_alert_status(request).await
            }),
            || {
                let snapshot = self.fake_data.snapshot();
                ensure_demo_name_free(&snapshot, table, &request.name, None)?;
                Ok(request.to_alert_status(simulated_id(), snapshot.generated_at))
            },
        )
        .await
    }

    /// 停用目录项（软删除）
    async fn deactivate(&self, table: CatalogTable, id: i64) -> Result<Sourced<DeletedRecord>, AppError> {
        let deleted = write_or_simulate(
            table.table_name(),
            self.category_store.as_ref().map(|store| async move {
                if store.deactivate(table, id).await? {
                    Ok(DeletedRecord { id })
                } else {
                    Err(not_found(table))
                }
            }),
            || {
                ensure_demo_exists(&self.fake_data.snapshot(), table, id)?;
                Ok(DeletedRecord { id })
            },
        )
        .await?;

        tracing::info!(table = table.table_name(), id, source = ?deleted.source, "目录项已停用");

        Ok(deleted)
    }
}
