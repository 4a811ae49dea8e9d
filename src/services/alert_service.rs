//! 预警业务服务

use crate::errors::AppError;
use crate::fake_data::filter::{filter_alerts, paginate, AlertFilter};
use crate::fake_data::{aggregate, FakeDataService};
use crate::models::{
    Alert, AlertListQuery, AlertResolution, AlertStatistics, AlertStatusKind, AlertType,
    CreateAlertRequest, CriticalAlerts, DeletedRecord, Page, Sourced, UpdateAlertRequest, User,
};
use chrono::Utc;
use std::sync::Arc;

/// 未指定类型时创建的预警类型
const DEFAULT_ALERT_TYPE: AlertType = AlertType::DeviceError;

/// 预警业务服务
pub struct AlertService {
    fake_data: Arc<FakeDataService>,
}

fn alert_not_found() -> AppError {
    AppError::NotFound("预警".to_string())
}

impl AlertService {
    pub fn new(fake_data: Arc<FakeDataService>) -> Self {
        Self { fake_data }
    }

    /// 按条件分页查询预警
    pub fn list_alerts(&self, query: &AlertListQuery) -> Sourced<Page<Alert>> {
        let filter = AlertFilter {
            level: query.level.clone(),
            status: query.status.clone(),
            alert_type: query.alert_type.clone(),
            device_id: query.device_id,
            resolved: query.resolved,
        };

        let alerts = filter_alerts(&self.fake_data.snapshot().alerts, &filter);
        Sourced::fake(paginate(&alerts, query.page, query.size))
    }

    pub fn get_alert(&self, id: i64) -> Result<Sourced<Alert>, AppError> {
        self.fake_data
            .snapshot()
            .alert(id)
            .cloned()
            .map(Sourced::fake)
            .ok_or_else(alert_not_found)
    }

    /// 模拟创建预警
    ///
    /// 设备必须指定；级别与状态缺省时取目录中的第一项（LOW / NEW）。
    pub fn create_alert(&self, request: &CreateAlertRequest) -> Result<Sourced<Alert>, AppError> {
        let snapshot = self.fake_data.snapshot();

        let device_id = request
            .device_id
            .ok_or_else(|| AppError::ValidationError("必须指定设备".to_string()))?;
        let device = snapshot
            .device(device_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("设备".to_string()))?;

        let alert_level = match request.alert_level_id {
            Some(id) => snapshot.alert_levels.iter().find(|l| l.id == id),
            None => snapshot.alert_levels.first(),
        }
        .cloned()
        .ok_or_else(|| AppError::NotFound("预警级别".to_string()))?;

        let alert_status = match request.alert_status_id {
            Some(id) => snapshot.alert_statuses.iter().find(|s| s.id == id),
            None => snapshot.alert_statuses.first(),
        }
        .cloned()
        .ok_or_else(|| AppError::NotFound("预警状态".to_string()))?;

        let alert_type = match request.alert_type.as_deref() {
            Some(name) => name
                .parse::<AlertType>()
                .map_err(|e| AppError::ValidationError(e.to_string()))?,
            None => DEFAULT_ALERT_TYPE,
        };

        let alert = Alert {
            id: snapshot.generated_at.timestamp_millis(),
            device,
            alert_level,
            alert_status,
            title: request.title.trim().to_string(),
            description: request.description.clone(),
            alert_type,
            threshold_value: request.threshold_value.unwrap_or_default(),
            actual_value: request.actual_value.unwrap_or_default(),
            created_at: snapshot.generated_at,
            resolution: None,
        };

        tracing::info!(alert_id = alert.id, alert_type = %alert.alert_type, "模拟创建预警");

        Ok(Sourced::fake(alert))
    }

    /// 模拟修改预警，缺省字段保持不变
    pub fn update_alert(&self, id: i64, request: &UpdateAlertRequest) -> Result<Sourced<Alert>, AppError> {
        let snapshot = self.fake_data.snapshot();
        let mut alert = snapshot.alert(id).cloned().ok_or_else(alert_not_found)?;

        if let Some(level_id) = request.alert_level_id {
            alert.alert_level = snapshot
                .alert_levels
                .iter()
                .find(|l| l.id == level_id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("预警级别".to_string()))?;
        }
        if let Some(status_id) = request.alert_status_id {
            alert.alert_status = snapshot
                .alert_statuses
                .iter()
                .find(|s| s.id == status_id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("预警状态".to_string()))?;
        }
        if let Some(title) = &request.title {
            alert.title = title.trim().to_string();
        }
        if let Some(description) = &request.description {
            alert.description = description.clone();
        }

        tracing::info!(alert_id = id, "模拟修改预警");

        Ok(Sourced::fake(alert))
    }

    /// 模拟删除预警
    pub fn delete_alert(&self, id: i64) -> Result<Sourced<DeletedRecord>, AppError> {
        self.get_alert(id)?;
        tracing::info!(alert_id = id, "模拟删除预警");
        Ok(Sourced::fake(DeletedRecord { id }))
    }

    /// 预警统计，可按周期（day / week / month）限定时间窗口
    pub fn statistics(&self, period: Option<&str>) -> Sourced<AlertStatistics> {
        let snapshot = self.fake_data.snapshot();
        Sourced::fake(aggregate::alert_statistics(
            &snapshot.alerts,
            period,
            snapshot.generated_at,
        ))
    }

    /// 未解决的预警
    pub fn unresolved_alerts(&self, page: usize, size: usize) -> Sourced<Page<Alert>> {
        let filter = AlertFilter {
            resolved: Some(false),
            ..AlertFilter::default()
        };
        let alerts = filter_alerts(&self.fake_data.snapshot().alerts, &filter);
        Sourced::fake(paginate(&alerts, page, size))
    }

    /// 未解决的 CRITICAL 级别预警
    pub fn critical_alerts(&self) -> Sourced<CriticalAlerts> {
        let snapshot = self.fake_data.snapshot();
        let critical_alerts: Vec<Alert> = snapshot
            .alerts
            .into_iter()
            .filter(Alert::is_unresolved_critical)
            .collect();

        Sourced::fake(CriticalAlerts {
            count: critical_alerts.len(),
            critical_alerts,
            last_updated: snapshot.generated_at,
        })
    }

    /// 模拟处理预警：状态置为 RESOLVED，处理人为当前用户
    pub fn resolve_alert(&self, id: i64, resolver: User) -> Result<Sourced<Alert>, AppError> {
        let snapshot = self.fake_data.snapshot();
        let mut alert = snapshot.alert(id).cloned().ok_or_else(alert_not_found)?;

        if let Some(resolved) = snapshot
            .alert_statuses
            .iter()
            .find(|s| s.kind() == Some(AlertStatusKind::Resolved))
        {
            alert.alert_status = resolved.clone();
        }
        alert.resolution = Some(AlertResolution {
            resolved_at: Utc::now(),
            resolved_by_user: resolver,
        });

        tracing::info!(alert_id = id, "模拟处理预警");

        Ok(Sourced::fake(alert))
    }
}
