//! 设备业务服务
//!
//! 设备数据只由演示数据生成器提供，写操作只做模拟。

use crate::errors::AppError;
use crate::fake_data::filter::{filter_devices, paginate, DeviceFilter};
use crate::fake_data::FakeDataService;
use crate::models::{
    CreateDeviceRequest, DeletedRecord, Device, DeviceDataResponse, DeviceHistoryQuery,
    DeviceHistoryResponse, DeviceListQuery, DeviceStatistics, DeviceStatus, MaintenanceRecord, Page,
    Sourced, UpdateDeviceRequest,
};
use crate::utils::{normalize_search, validate_date_range};
use chrono::Utc;
use std::sync::Arc;

/// 历史数据条数相对于请求数量的倍数
const HISTORY_MULTIPLIER: usize = 2;

/// 设备业务服务
pub struct DeviceService {
    fake_data: Arc<FakeDataService>,
}

fn device_not_found() -> AppError {
    AppError::NotFound("设备".to_string())
}

impl DeviceService {
    pub fn new(fake_data: Arc<FakeDataService>) -> Self {
        Self { fake_data }
    }

    /// 分页查询设备列表
    pub fn list_devices(&self, query: &DeviceListQuery) -> Result<Sourced<Page<Device>>, AppError> {
        let filter = DeviceFilter {
            search: normalize_search(query.search.as_deref())?,
            status: query.status.clone(),
            station_id: query.station_id,
            device_type_id: query.device_type_id,
        };

        let devices = filter_devices(&self.fake_data.snapshot().devices, &filter);
        Ok(Sourced::fake(paginate(&devices, query.page, query.size)))
    }

    pub fn get_device(&self, id: i64) -> Result<Sourced<Device>, AppError> {
        self.fake_data
            .snapshot()
            .device(id)
            .cloned()
            .map(Sourced::fake)
            .ok_or_else(device_not_found)
    }

    /// 模拟创建设备，不做持久化
    ///
    /// 引用的类型、制造商、站点必须存在于当前目录中。
    pub fn create_device(&self, request: &CreateDeviceRequest) -> Result<Sourced<Device>, AppError> {
        let snapshot = self.fake_data.snapshot();
        let now = snapshot.generated_at;

        let device_type = request
            .device_type_id
            .map(|id| {
                snapshot
                    .device_types
                    .iter()
                    .find(|t| t.id == id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound("设备类型".to_string()))
            })
            .transpose()?;
        let manufacturer = request
            .manufacturer_id
            .map(|id| {
                snapshot
                    .manufacturers
                    .iter()
                    .find(|m| m.id == id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound("制造商".to_string()))
            })
            .transpose()?;
        let station = request
            .station_id
            .map(|id| {
                snapshot
                    .stations
                    .iter()
                    .find(|s| s.id == id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound("站点".to_string()))
            })
            .transpose()?;

        let device = Device {
            id: now.timestamp_millis(),
            device_type,
            manufacturer,
            station,
            name: request.name.trim().to_string(),
            model: request.model.trim().to_string(),
            serial_number: request.serial_number.clone(),
            status: DeviceStatus::Offline,
            installation_date: request.installation_date,
            last_maintenance: None,
            specifications: request.specifications.clone(),
            is_active: true,
            created_at: now,
        };

        tracing::info!(device_id = device.id, name = %device.name, "模拟创建设备");

        Ok(Sourced::fake(device))
    }

    /// 模拟修改设备，缺省字段保持不变
    pub fn update_device(&self, id: i64, request: &UpdateDeviceRequest) -> Result<Sourced<Device>, AppError> {
        let snapshot = self.fake_data.snapshot();
        let mut device = snapshot.device(id).cloned().ok_or_else(device_not_found)?;

        if let Some(station_id) = request.station_id {
            let station = snapshot
                .stations
                .iter()
                .find(|s| s.id == station_id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("站点".to_string()))?;
            device.station = Some(station);
        }
        if let Some(name) = &request.name {
            device.name = name.trim().to_string();
        }
        if let Some(model) = &request.model {
            device.model = model.trim().to_string();
        }
        if let Some(status) = request.status {
            device.status = status;
        }
        if let Some(last_maintenance) = request.last_maintenance {
            device.last_maintenance = Some(last_maintenance);
        }
        if let Some(specifications) = &request.specifications {
            device.specifications = specifications.clone();
        }

        tracing::info!(device_id = id, status = %device.status, "模拟修改设备");

        Ok(Sourced::fake(device))
    }

    /// 模拟删除设备
    pub fn delete_device(&self, id: i64) -> Result<Sourced<DeletedRecord>, AppError> {
        self.get_device(id)?;
        tracing::info!(device_id = id, "模拟删除设备");
        Ok(Sourced::fake(DeletedRecord { id }))
    }

    pub fn statistics(&self) -> Sourced<DeviceStatistics> {
        Sourced::fake(self.fake_data.device_statistics())
    }

    /// 最近的实时读数
    pub fn device_data(&self, id: i64, size: usize) -> Result<Sourced<DeviceDataResponse>, AppError> {
        let device = self.get_device(id)?.data;
        let data = self.fake_data.readings(id, size);

        Ok(Sourced::fake(DeviceDataResponse {
            status: device.status.as_str().to_string(),
            device,
            data,
            last_updated: Utc::now(),
        }))
    }

    /// 历史读数，条数为请求数量的两倍，起止日期原样回显
    pub fn device_history(
        &self,
        id: i64,
        query: &DeviceHistoryQuery,
    ) -> Result<Sourced<DeviceHistoryResponse>, AppError> {
        validate_date_range(query.start_date.as_deref(), query.end_date.as_deref())?;

        let device = self.get_device(id)?.data;
        let history = self
            .fake_data
            .readings(id, query.size.saturating_mul(HISTORY_MULTIPLIER));

        Ok(Sourced::fake(DeviceHistoryResponse {
            device,
            total_records: history.len(),
            history,
            start_date: query.start_date.clone(),
            end_date: query.end_date.clone(),
        }))
    }

    pub fn maintenance_records(&self, id: i64, size: usize) -> Result<Sourced<Vec<MaintenanceRecord>>, AppError> {
        let device = self.get_device(id)?.data;
        Ok(Sourced::fake(self.fake_data.maintenance_records(&device, size)))
    }
}
