//! 电网地图叠加层目录（设施与线路）

use crate::models::{FacilityKind, FacilityStatus, LineKind, LineStatus, PowerFacility, PowerLine};

/// (ID, 名称, 类别, 纬度, 经度, 电压 kV, 容量 MW, 状态, 运营方, 投运年份, 说明)
type FacilityRow = (
    &'static str,
    &'static str,
    FacilityKind,
    f64,
    f64,
    u32,
    u32,
    FacilityStatus,
    &'static str,
    &'static str,
    &'static str,
);

const FACILITIES: [FacilityRow; 13] = [
    ("1", "Nhiệt điện Phả Lại", FacilityKind::PowerPlant, 20.8561, 106.6197, 500, 1200, FacilityStatus::Online, "EVN", "2018", "Nhà máy nhiệt điện than công suất lớn phục vụ khu vực miền Bắc"),
    ("2", "Thủy điện Sơn La", FacilityKind::PowerPlant, 21.3272, 103.9143, 500, 2400, FacilityStatus::Online, "EVN", "2012", "Nhà máy thủy điện lớn nhất Việt Nam"),
    ("3", "Trạm biến áp 500kV Thăng Long", FacilityKind::Substation, 21.0037, 105.8270, 500, 1500, FacilityStatus::Online, "EVN", "2015", "Trạm biến áp trung tâm khu vực Hà Nội"),
    ("4", "Trạm biến áp 220kV Gia Lâm", FacilityKind::Substation, 21.0405, 105.8719, 220, 400, FacilityStatus::Online, "EVNHANOI", "2010", "Trạm biến áp phụ tải khu vực Gia Lâm - Long Biên"),
    ("5", "Cột điện 500kV Vĩnh Yên", FacilityKind::TransmissionTower, 21.3089, 105.6047, 500, 1000, FacilityStatus::Online, "NPT", "2016", "Cột truyền tải 500kV tuyến Sơn La - Thăng Long"),
    ("6", "Nhà máy điện mặt trời Đak Lak", FacilityKind::Renewable, 12.7100, 108.2378, 22, 50, FacilityStatus::Online, "Tư nhân", "2020", "Nhà máy điện mặt trời công suất 50MW"),
    ("7", "Trung tâm phân phối Cầu Giấy", FacilityKind::DistributionCenter, 21.0324, 105.7969, 22, 200, FacilityStatus::Online, "EVNHANOI", "2008", "Trung tâm phân phối điện khu vực Cầu Giấy"),
    ("8", "Máy biến áp 110kV Đống Đa", FacilityKind::Transformer, 21.0167, 105.8274, 110, 150, FacilityStatus::Maintenance, "EVNHANOI", "2005", "Máy biến áp trung tâm quận Đống Đa"),
    ("9", "Nhiệt điện Nghi Sơn", FacilityKind::PowerPlant, 19.8667, 105.8833, 500, 1200, FacilityStatus::Online, "EVN", "2022", "Nhà máy nhiệt điện hiện đại tại Thanh Hóa"),
    ("10", "Điện gió Bạc Liêu", FacilityKind::Renewable, 9.2947, 105.4703, 110, 99, FacilityStatus::Online, "Tư nhân", "2021", "Trang trại điện gió lớn nhất miền Tây"),
    ("11", "Thủy điện Hòa Bình", FacilityKind::PowerPlant, 20.8133, 105.3383, 500, 1920, FacilityStatus::Online, "EVN", "1994", "Nhà máy thủy điện lớn thứ hai Việt Nam"),
    ("12", "Trạm biến áp 500kV Nho Quan", FacilityKind::Substation, 20.3167, 105.7500, 500, 1200, FacilityStatus::Online, "EVN", "2017", "Trạm biến áp 500kV khu vực Ninh Bình"),
    ("13", "Nhà máy điện sinh khối Bình Phước", FacilityKind::Renewable, 11.7500, 106.7500, 22, 30, FacilityStatus::Online, "Tư nhân", "2019", "Nhà máy điện sinh khối từ bã mía"),
];

const SON_LA: [f64; 2] = [21.3272, 103.9143];
const VINH_YEN: [f64; 2] = [21.3089, 105.6047];
const THANG_LONG: [f64; 2] = [21.0037, 105.8270];
const PHA_LAI: [f64; 2] = [20.8561, 106.6197];
const GIA_LAM: [f64; 2] = [21.0405, 105.8719];
const CAU_GIAY: [f64; 2] = [21.0324, 105.7969];
const HOA_BINH: [f64; 2] = [20.8133, 105.3383];
const NHO_QUAN: [f64; 2] = [20.3167, 105.7500];

/// (ID, 名称, 起点, 终点, 折线, 电压 kV, 容量 MW, 类别)
type LineRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [[f64; 2]],
    u32,
    u32,
    LineKind,
);

const LINES: [LineRow; 5] = [
    ("line1", "Đường dây 500kV Sơn La - Thăng Long", "2", "3", &[SON_LA, VINH_YEN, THANG_LONG], 500, 2000, LineKind::Transmission),
    ("line2", "Đường dây 500kV Phả Lại - Thăng Long", "1", "3", &[PHA_LAI, THANG_LONG], 500, 1200, LineKind::Transmission),
    ("line3", "Đường dây 220kV Thăng Long - Gia Lâm", "3", "4", &[THANG_LONG, GIA_LAM], 220, 400, LineKind::Transmission),
    ("line4", "Đường dây phân phối Gia Lâm - Cầu Giấy", "4", "7", &[GIA_LAM, CAU_GIAY], 22, 200, LineKind::Distribution),
    ("line5", "Đường dây 500kV Hòa Bình - Nho Quan", "11", "12", &[HOA_BINH, NHO_QUAN], 500, 1500, LineKind::Transmission),
];

pub fn power_facilities() -> Vec<PowerFacility> {
    FACILITIES
        .iter()
        .map(
            |&(id, name, kind, latitude, longitude, voltage, capacity, status, operator, commissioned, description)| {
                PowerFacility {
                    id: id.to_string(),
                    name: name.to_string(),
                    kind,
                    latitude,
                    longitude,
                    voltage,
                    capacity,
                    status,
                    operator: operator.to_string(),
                    commissioned: commissioned.to_string(),
                    description: description.to_string(),
                }
            },
        )
        .collect()
}

pub fn power_lines() -> Vec<PowerLine> {
    LINES
        .iter()
        .map(|&(id, name, from, to, positions, voltage, capacity, kind)| PowerLine {
            id: id.to_string(),
            name: name.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            positions: positions.to_vec(),
            voltage,
            capacity,
            status: LineStatus::Active,
            kind,
        })
        .collect()
}
