//! 电网地图业务服务

use crate::fake_data::{aggregate, grid_map};
use crate::models::{GridMapData, GridStatistics, PowerFacility, PowerLine, Sourced};

/// 电网地图业务服务，数据来自固定目录
#[derive(Debug, Clone, Default)]
pub struct GridMapService;

impl GridMapService {
    pub fn new() -> Self {
        Self
    }

    pub fn map_data(&self) -> Sourced<GridMapData> {
        let facilities = grid_map::power_facilities();
        let power_lines = grid_map::power_lines();

        Sourced::fake(GridMapData {
            total_facilities: facilities.len(),
            total_lines: power_lines.len(),
            facilities,
            power_lines,
        })
    }

    pub fn facilities(&self) -> Sourced<Vec<PowerFacility>> {
        Sourced::fake(grid_map::power_facilities())
    }

    pub fn power_lines(&self) -> Sourced<Vec<PowerLine>> {
        Sourced::fake(grid_map::power_lines())
    }

    pub fn statistics(&self) -> Sourced<GridStatistics> {
        Sourced::fake(aggregate::grid_statistics(
            &grid_map::power_facilities(),
            &grid_map::power_lines(),
        ))
    }
}
