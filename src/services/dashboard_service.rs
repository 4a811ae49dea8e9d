//! 仪表盘业务服务

use crate::fake_data::{aggregate, FakeDataService};
use crate::models::{AlertSummary, DashboardOverview, Sourced, SystemStatistics};
use std::sync::Arc;

/// 仪表盘业务服务
pub struct DashboardService {
    fake_data: Arc<FakeDataService>,
}

impl DashboardService {
    pub fn new(fake_data: Arc<FakeDataService>) -> Self {
        Self { fake_data }
    }

    /// 总览：设备状态、功率、电压与图表序列
    pub fn overview(&self) -> Sourced<DashboardOverview> {
        Sourced::fake(self.fake_data.dashboard_overview())
    }

    pub fn statistics(&self) -> Sourced<SystemStatistics> {
        Sourced::fake(aggregate::system_statistics(&self.fake_data.snapshot()))
    }

    pub fn alert_summary(&self) -> Sourced<AlertSummary> {
        Sourced::fake(aggregate::summarize_alerts(&self.fake_data.snapshot().alerts))
    }
}
