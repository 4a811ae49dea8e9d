//! 固定目录表
//!
//! 所有目录每次调用都从字面量表重新构建，ID 从 1 开始顺序编号。
//! 随机部分（创建时间、设备引用、安装日期）由调用方传入的随机源决定。

use crate::models::{
    AlertLevel, AlertSeverity, AlertStatus, ConfigDataType, Device, DeviceStatus, DeviceType,
    Manufacturer, Station, SystemConfig, User, UserRole,
};
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// (邮箱, 姓名, 角色, 部门, 职位, 电话)
const USERS: [(&str, &str, UserRole, &str, &str, &str); 8] = [
    ("admin@powergrid.com", "System Administrator", UserRole::Admin, "IT Department", "System Administrator", "+84-901-234-567"),
    ("operator@powergrid.com", "Grid Operator", UserRole::Operator, "Operations", "Senior Operator", "+84-901-234-568"),
    ("user@powergrid.com", "Regular User", UserRole::User, "Engineering", "Electrical Engineer", "+84-901-234-569"),
    ("viewer@powergrid.com", "Data Viewer", UserRole::Viewer, "Management", "Supervisor", "+84-901-234-570"),
    ("john.doe@powergrid.com", "John Doe", UserRole::User, "Maintenance", "Technician", "+84-901-234-571"),
    ("jane.smith@powergrid.com", "Jane Smith", UserRole::Operator, "Operations", "Control Room Operator", "+84-901-234-572"),
    ("mike.wilson@powergrid.com", "Mike Wilson", UserRole::User, "Engineering", "Field Engineer", "+84-901-234-573"),
    ("sarah.johnson@powergrid.com", "Sarah Johnson", UserRole::Viewer, "Management", "Manager", "+84-901-234-574"),
];

/// (名称, 描述, 图标, 规格)
const DEVICE_TYPES: [(&str, &str, &str, &str); 8] = [
    ("Transformer", "Power transformers for voltage conversion", "🔄", "Voltage: 22kV/400V, Power: 100-2000kVA"),
    ("Generator", "Power generation equipment", "⚡", "Fuel: Diesel/Gas, Power: 50-5000kW"),
    ("Circuit Breaker", "Protection and switching equipment", "🔌", "Voltage: 1-35kV, Current: 100-4000A"),
    ("Motor", "Electric motors for various applications", "🔧", "Power: 1-1000kW, Speed: 1000-3000RPM"),
    ("Capacitor Bank", "Power factor correction equipment", "🔋", "Voltage: 400V-35kV, Capacity: 10-1000kVAR"),
    ("Relay", "Protection and control relays", "📡", "Type: Digital/Analog, Functions: Protection/Control"),
    ("Meter", "Energy and power measurement devices", "📊", "Type: Digital, Accuracy: 0.5S Class"),
    ("Switch", "Manual switching equipment", "🔄", "Voltage: 1-35kV, Current: 100-2000A"),
];

/// (名称, 描述, 国家, 网站, 联系方式)
const MANUFACTURERS: [(&str, &str, &str, &str, &str); 8] = [
    ("ABB", "Leading power and automation technologies", "Switzerland", "https://www.abb.com", "Contact: +41-43-317-7111"),
    ("Siemens", "Engineering and technology solutions", "Germany", "https://www.siemens.com", "Contact: +49-89-636-00"),
    ("Schneider Electric", "Energy management and automation", "France", "https://www.schneider-electric.com", "Contact: +33-1-41-29-70-00"),
    ("General Electric", "Power generation and distribution", "USA", "https://www.ge.com", "Contact: +1-617-443-3000"),
    ("Mitsubishi Electric", "Industrial automation and power systems", "Japan", "https://www.mitsubishielectric.com", "Contact: +81-3-3218-2111"),
    ("Toshiba", "Power systems and industrial equipment", "Japan", "https://www.toshiba.com", "Contact: +81-3-3457-4511"),
    ("Eaton", "Power management solutions", "Ireland", "https://www.eaton.com", "Contact: +353-21-4805000"),
    ("Hitachi", "Power and industrial systems", "Japan", "https://www.hitachi.com", "Contact: +81-3-3258-1111"),
];

/// (名称, 位置说明, 纬度, 经度, 地址)
const STATIONS: [(&str, &str, f64, f64, &str); 6] = [
    ("Central Power Station", "Main power distribution center", 10.7769, 106.7009, "123 Nguyen Hue, District 1, Ho Chi Minh City"),
    ("North Substation", "Northern distribution substation", 10.8231, 106.6297, "456 Le Loi, District 3, Ho Chi Minh City"),
    ("South Substation", "Southern distribution substation", 10.7467, 106.6943, "789 Hai Ba Trung, District 1, Ho Chi Minh City"),
    ("East Distribution Center", "Eastern area distribution", 10.7851, 106.7448, "321 Vo Thi Sau, District 3, Ho Chi Minh City"),
    ("West Power Hub", "Western area power hub", 10.7644, 106.6620, "654 Nam Ky Khoi Nghia, District 1, Ho Chi Minh City"),
    ("Industrial Zone Station", "Industrial area power supply", 10.8543, 106.7234, "987 Truong Chinh, Tan Binh District, Ho Chi Minh City"),
];

/// 设备数量
pub const DEVICE_COUNT: usize = 55;

/// (名称, 型号, 序列号, 状态, 规格)
const DEVICES: [(&str, &str, &str, DeviceStatus, &str); DEVICE_COUNT] = [
    // 变压器
    ("Primary Transformer T1", "Model-TF-1000", "SN100001", DeviceStatus::Online, "Rated Power: 1000kVA, Voltage: 22kV/400V, Cooling: Oil-immersed"),
    ("Secondary Transformer T2", "Model-TF-800", "SN100002", DeviceStatus::Online, "Rated Power: 800kVA, Voltage: 22kV/400V, Cooling: Oil-immersed"),
    ("Distribution Transformer DT1", "Model-TF-500", "SN100003", DeviceStatus::Online, "Rated Power: 500kVA, Voltage: 22kV/400V, Cooling: Oil-immersed"),
    ("Step-up Transformer SU1", "Model-TF-2000", "SN100004", DeviceStatus::Maintenance, "Rated Power: 2000kVA, Voltage: 11kV/22kV, Cooling: Oil-immersed"),
    ("Emergency Transformer ET1", "Model-TF-300", "SN100005", DeviceStatus::Offline, "Rated Power: 300kVA, Voltage: 22kV/400V, Cooling: Oil-immersed"),
    // 发电机
    ("Main Generator G1", "Model-GEN-5000", "SN200001", DeviceStatus::Online, "Fuel: Diesel, Power: 5000kW, Speed: 1500RPM, Cooling: Water"),
    ("Backup Generator G2", "Model-GEN-3000", "SN200002", DeviceStatus::Online, "Fuel: Diesel, Power: 3000kW, Speed: 1500RPM, Cooling: Water"),
    ("Emergency Generator EG1", "Model-GEN-1000", "SN200003", DeviceStatus::Offline, "Fuel: Diesel, Power: 1000kW, Speed: 1500RPM, Cooling: Water"),
    ("Gas Generator GG1", "Model-GEN-2000", "SN200004", DeviceStatus::Maintenance, "Fuel: Natural Gas, Power: 2000kW, Speed: 1800RPM, Cooling: Air"),
    ("Solar Generator SG1", "Model-GEN-500", "SN200005", DeviceStatus::Online, "Fuel: Solar, Power: 500kW, Inverter: 500kVA, Battery: 1000kWh"),
    // 断路器
    ("Main Circuit Breaker CB1", "Model-CB-4000", "SN300001", DeviceStatus::Online, "Voltage: 22kV, Current: 4000A, Type: SF6, Operation: Spring"),
    ("Secondary Circuit Breaker CB2", "Model-CB-2000", "SN300002", DeviceStatus::Online, "Voltage: 22kV, Current: 2000A, Type: SF6, Operation: Spring"),
    ("Distribution Circuit Breaker CB3", "Model-CB-1000", "SN300003", DeviceStatus::Maintenance, "Voltage: 11kV, Current: 1000A, Type: Vacuum, Operation: Spring"),
    ("Emergency Circuit Breaker CB4", "Model-CB-500", "SN300004", DeviceStatus::Offline, "Voltage: 11kV, Current: 500A, Type: Vacuum, Operation: Manual"),
    ("High Voltage Circuit Breaker CB5", "Model-CB-6000", "SN300005", DeviceStatus::Online, "Voltage: 35kV, Current: 6000A, Type: SF6, Operation: Hydraulic"),
    // 电动机
    ("Main Pump Motor M1", "Model-MOT-1000", "SN400001", DeviceStatus::Online, "Power: 1000kW, Speed: 1500RPM, Voltage: 400V, Type: Induction"),
    ("Cooling Fan Motor M2", "Model-MOT-100", "SN400002", DeviceStatus::Online, "Power: 100kW, Speed: 3000RPM, Voltage: 400V, Type: Induction"),
    ("Compressor Motor M3", "Model-MOT-500", "SN400003", DeviceStatus::Maintenance, "Power: 500kW, Speed: 1800RPM, Voltage: 400V, Type: Synchronous"),
    ("Conveyor Motor M4", "Model-MOT-200", "SN400004", DeviceStatus::Online, "Power: 200kW, Speed: 1200RPM, Voltage: 400V, Type: Induction"),
    ("Emergency Motor M5", "Model-MOT-50", "SN400005", DeviceStatus::Offline, "Power: 50kW, Speed: 1500RPM, Voltage: 400V, Type: Induction"),
    // 电容器组
    ("Main Capacitor Bank C1", "Model-CAP-1000", "SN500001", DeviceStatus::Online, "Voltage: 400V, Capacity: 1000kVAR, Type: Fixed, Cooling: Air"),
    ("Power Factor Correction PFC1", "Model-CAP-500", "SN500002", DeviceStatus::Online, "Voltage: 400V, Capacity: 500kVAR, Type: Automatic, Cooling: Air"),
    ("Harmonic Filter HF1", "Model-CAP-300", "SN500003", DeviceStatus::Maintenance, "Voltage: 400V, Capacity: 300kVAR, Type: Tuned, Cooling: Air"),
    ("Reactive Compensation RC1", "Model-CAP-800", "SN500004", DeviceStatus::Online, "Voltage: 400V, Capacity: 800kVAR, Type: Switched, Cooling: Air"),
    ("Emergency Capacitor EC1", "Model-CAP-200", "SN500005", DeviceStatus::Offline, "Voltage: 400V, Capacity: 200kVAR, Type: Fixed, Cooling: Air"),
    // 继电器
    ("Protection Relay R1", "Model-REL-100", "SN600001", DeviceStatus::Online, "Type: Digital, Functions: Overcurrent, Earth Fault, Voltage Protection"),
    ("Control Relay R2", "Model-REL-50", "SN600002", DeviceStatus::Online, "Type: Digital, Functions: Control, Monitoring, Communication"),
    ("Distance Relay R3", "Model-REL-200", "SN600003", DeviceStatus::Maintenance, "Type: Digital, Functions: Distance Protection, Fault Location"),
    ("Differential Relay R4", "Model-REL-150", "SN600004", DeviceStatus::Online, "Type: Digital, Functions: Differential Protection, Transformer Protection"),
    ("Backup Relay R5", "Model-REL-75", "SN600005", DeviceStatus::Offline, "Type: Electromechanical, Functions: Backup Protection, Time Delay"),
    // 电表
    ("Energy Meter EM1", "Model-MET-100", "SN700001", DeviceStatus::Online, "Type: Digital, Accuracy: 0.5S Class, Communication: Modbus RTU"),
    ("Power Meter PM1", "Model-MET-200", "SN700002", DeviceStatus::Online, "Type: Digital, Accuracy: 0.2S Class, Communication: Modbus TCP"),
    ("Power Quality Meter PQM1", "Model-MET-300", "SN700003", DeviceStatus::Maintenance, "Type: Digital, Accuracy: 0.1S Class, Functions: Harmonics, Flicker"),
    ("Revenue Meter RM1", "Model-MET-400", "SN700004", DeviceStatus::Online, "Type: Digital, Accuracy: 0.2S Class, Certified: Revenue Grade"),
    ("Test Meter TM1", "Model-MET-500", "SN700005", DeviceStatus::Offline, "Type: Portable, Accuracy: 0.5S Class, Functions: Testing, Calibration"),
    // 开关
    ("Main Switch S1", "Model-SW-4000", "SN800001", DeviceStatus::Online, "Voltage: 22kV, Current: 4000A, Type: Load Break, Operation: Motor"),
    ("Isolation Switch S2", "Model-SW-2000", "SN800002", DeviceStatus::Online, "Voltage: 22kV, Current: 2000A, Type: Isolator, Operation: Manual"),
    ("Load Break Switch LBS1", "Model-SW-1000", "SN800003", DeviceStatus::Maintenance, "Voltage: 11kV, Current: 1000A, Type: Load Break, Operation: Manual"),
    ("Disconnector DS1", "Model-SW-500", "SN800004", DeviceStatus::Offline, "Voltage: 11kV, Current: 500A, Type: Disconnector, Operation: Manual"),
    ("Emergency Switch ES1", "Model-SW-300", "SN800005", DeviceStatus::Online, "Voltage: 400V, Current: 300A, Type: Emergency Stop, Operation: Manual"),
    // 电流互感器
    ("Main Current Transformer CT1", "Model-CT-4000", "SN900001", DeviceStatus::Online, "Ratio: 4000/5A, Accuracy: 0.5S Class, Burden: 15VA"),
    ("Secondary Current Transformer CT2", "Model-CT-2000", "SN900002", DeviceStatus::Online, "Ratio: 2000/5A, Accuracy: 0.5S Class, Burden: 15VA"),
    ("Protection Current Transformer CT3", "Model-CT-1000", "SN900003", DeviceStatus::Maintenance, "Ratio: 1000/5A, Accuracy: 5P Class, Burden: 30VA"),
    ("Measurement Current Transformer CT4", "Model-CT-500", "SN900004", DeviceStatus::Online, "Ratio: 500/5A, Accuracy: 0.2S Class, Burden: 10VA"),
    ("Test Current Transformer CT5", "Model-CT-100", "SN900005", DeviceStatus::Offline, "Ratio: 100/5A, Accuracy: 0.1S Class, Burden: 5VA"),
    // 电压互感器（序列号与变压器段重复，保留原表）
    ("Main Voltage Transformer VT1", "Model-VT-22000", "SN100001", DeviceStatus::Online, "Ratio: 22000/110V, Accuracy: 0.5S Class, Burden: 50VA"),
    ("Secondary Voltage Transformer VT2", "Model-VT-11000", "SN100002", DeviceStatus::Online, "Ratio: 11000/110V, Accuracy: 0.5S Class, Burden: 50VA"),
    ("Protection Voltage Transformer VT3", "Model-VT-11000", "SN100003", DeviceStatus::Maintenance, "Ratio: 11000/110V, Accuracy: 3P Class, Burden: 100VA"),
    ("Measurement Voltage Transformer VT4", "Model-VT-400", "SN100004", DeviceStatus::Online, "Ratio: 400/110V, Accuracy: 0.2S Class, Burden: 25VA"),
    ("Test Voltage Transformer VT5", "Model-VT-110", "SN100005", DeviceStatus::Offline, "Ratio: 110/110V, Accuracy: 0.1S Class, Burden: 10VA"),
    // 避雷器
    ("Main Surge Arrester SA1", "Model-SA-22000", "SN110001", DeviceStatus::Online, "Voltage: 22kV, Type: Metal Oxide, Protection Level: 60kV"),
    ("Secondary Surge Arrester SA2", "Model-SA-11000", "SN110002", DeviceStatus::Online, "Voltage: 11kV, Type: Metal Oxide, Protection Level: 30kV"),
    ("Distribution Surge Arrester SA3", "Model-SA-400", "SN110003", DeviceStatus::Maintenance, "Voltage: 400V, Type: Metal Oxide, Protection Level: 2.5kV"),
    ("Communication Surge Arrester SA4", "Model-SA-24", "SN110004", DeviceStatus::Online, "Voltage: 24V, Type: Gas Discharge, Protection Level: 100V"),
    ("Emergency Surge Arrester SA5", "Model-SA-220", "SN110005", DeviceStatus::Offline, "Voltage: 220V, Type: Metal Oxide, Protection Level: 1.5kV"),
];

/// (名称, 描述, 严重程度, 阈值, 颜色)
const ALERT_LEVELS: [(&str, &str, AlertSeverity, f64, &str); 4] = [
    ("LOW", "Low priority alert", AlertSeverity::Low, 10.0, "#17a2b8"),
    ("MEDIUM", "Medium priority alert", AlertSeverity::Medium, 25.0, "#ffc107"),
    ("HIGH", "High priority alert", AlertSeverity::High, 50.0, "#fd7e14"),
    ("CRITICAL", "Critical level alert", AlertSeverity::Critical, 75.0, "#dc3545"),
];

/// (名称, 描述, 颜色)，优先级按顺序 1..=6
const ALERT_STATUSES: [(&str, &str, &str); 6] = [
    ("NEW", "Newly created alert", "#007bff"),
    ("ACKNOWLEDGED", "Alert has been acknowledged", "#6c757d"),
    ("IN_PROGRESS", "Alert is being investigated", "#ffc107"),
    ("RESOLVED", "Alert has been resolved", "#28a745"),
    ("CLOSED", "Alert has been closed", "#6f42c1"),
    ("ESCALATED", "Alert has been escalated", "#dc3545"),
];

/// (键, 值, 描述, 类型)
const SYSTEM_CONFIGS: [(&str, &str, &str, ConfigDataType); 8] = [
    ("system.name", "Power Grid Management System", "System display name", ConfigDataType::String),
    ("system.version", "1.0.0", "System version", ConfigDataType::String),
    ("monitoring.interval", "30", "Monitoring interval in seconds", ConfigDataType::Integer),
    ("alert.retention.days", "365", "Alert retention period in days", ConfigDataType::Integer),
    ("maintenance.reminder.enabled", "true", "Enable maintenance reminders", ConfigDataType::Boolean),
    ("email.notifications.enabled", "false", "Enable email notifications", ConfigDataType::Boolean),
    ("data.backup.enabled", "true", "Enable automatic data backup", ConfigDataType::Boolean),
    ("security.session.timeout", "3600", "Session timeout in seconds", ConfigDataType::Integer),
];

/// 过去一年内的随机创建时间
fn created_within_year<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(rng.gen_range(0..365))
}

fn to_id(index: usize) -> i64 {
    index as i64 + 1
}

pub fn build_users<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<User> {
    USERS
        .iter()
        .enumerate()
        .map(|(i, &(email, name, role, department, position, phone))| User {
            id: to_id(i),
            email: email.to_string(),
            name: name.to_string(),
            role,
            department: department.to_string(),
            position: position.to_string(),
            phone: phone.to_string(),
            is_active: true,
            created_at: created_within_year(rng, now),
        })
        .collect()
}

pub fn build_device_types<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<DeviceType> {
    DEVICE_TYPES
        .iter()
        .enumerate()
        .map(|(i, &(name, description, icon, specifications))| DeviceType {
            id: to_id(i),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            specifications: specifications.to_string(),
            is_active: true,
            created_at: created_within_year(rng, now),
        })
        .collect()
}

pub fn build_manufacturers<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<Manufacturer> {
    MANUFACTURERS
        .iter()
        .enumerate()
        .map(|(i, &(name, description, country, website, contact_info))| Manufacturer {
            id: to_id(i),
            name: name.to_string(),
            description: description.to_string(),
            country: country.to_string(),
            website: website.to_string(),
            contact_info: contact_info.to_string(),
            is_active: true,
            created_at: created_within_year(rng, now),
        })
        .collect()
}

pub fn build_stations<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<Station> {
    STATIONS
        .iter()
        .enumerate()
        .map(|(i, &(name, location, latitude, longitude, address))| Station {
            id: to_id(i),
            name: name.to_string(),
            location: location.to_string(),
            latitude,
            longitude,
            address: address.to_string(),
            is_active: true,
            created_at: created_within_year(rng, now),
        })
        .collect()
}

/// 构建设备目录
///
/// 任一前置目录为空时返回空列表；否则按字面量顺序生成 55 台设备，
/// 类型、制造商、站点各自独立、有放回地均匀抽取。
pub fn build_devices<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    device_types: &[DeviceType],
    manufacturers: &[Manufacturer],
    stations: &[Station],
) -> Vec<Device> {
    if device_types.is_empty() || manufacturers.is_empty() || stations.is_empty() {
        return Vec::new();
    }

    let today = now.date_naive();

    DEVICES
        .iter()
        .enumerate()
        .map(|(i, &(name, model, serial_number, status, specifications))| {
            let device_type = device_types.choose(rng).cloned();
            let manufacturer = manufacturers.choose(rng).cloned();
            let station = stations.choose(rng).cloned();
            let installation_date = today - Duration::days(rng.gen_range(0..1000));
            let last_maintenance = today - Duration::days(rng.gen_range(0..90));

            Device {
                id: to_id(i),
                device_type,
                manufacturer,
                station,
                name: name.to_string(),
                model: model.to_string(),
                serial_number: serial_number.to_string(),
                status,
                installation_date: Some(installation_date),
                last_maintenance: Some(last_maintenance),
                specifications: specifications.to_string(),
                is_active: true,
                created_at: created_within_year(rng, now),
            }
        })
        .collect()
}

pub fn build_alert_levels<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<AlertLevel> {
    ALERT_LEVELS
        .iter()
        .enumerate()
        .map(|(i, &(name, description, severity, threshold, color))| AlertLevel {
            id: to_id(i),
            name: name.to_string(),
            description: description.to_string(),
            severity,
            threshold,
            color: color.to_string(),
            is_active: true,
            created_at: created_within_year(rng, now),
        })
        .collect()
}

pub fn build_alert_statuses<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<AlertStatus> {
    ALERT_STATUSES
        .iter()
        .enumerate()
        .map(|(i, &(name, description, color))| AlertStatus {
            id: to_id(i),
            name: name.to_string(),
            description: description.to_string(),
            color: color.to_string(),
            priority: i as i32 + 1,
            is_active: true,
            created_at: created_within_year(rng, now),
        })
        .collect()
}

pub fn build_system_configs(now: DateTime<Utc>) -> Vec<SystemConfig> {
    SYSTEM_CONFIGS
        .iter()
        .enumerate()
        .map(|(i, &(key, value, description, data_type))| SystemConfig {
            id: to_id(i),
            config_key: key.to_string(),
            config_value: value.to_string(),
            description: description.to_string(),
            data_type,
            created_at: now,
        })
        .collect()
}
