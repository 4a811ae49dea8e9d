//! 时间处理工具

use crate::errors::AppError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// 解析日期查询参数，支持 `YYYY-MM-DD` 与 RFC 3339
///
/// 纯日期按当天 UTC 零点处理。
pub fn parse_date_param(value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::default()).and_utc())
        .map_err(|_| AppError::ValidationError(format!("日期格式无效: {}", value)))
}

/// 校验可选的起止日期，两者都提供时起始不得晚于结束
pub fn validate_date_range(start: Option<&str>, end: Option<&str>) -> Result<(), AppError> {
    let start = start.map(parse_date_param).transpose()?;
    let end = end.map(parse_date_param).transpose()?;

    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(AppError::ValidationError(
                "开始日期不能晚于结束日期".to_string(),
            ));
        }
    }

    Ok(())
}
