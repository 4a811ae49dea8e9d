//! 数据验证工具

use crate::errors::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::ValidationError;

/// 搜索关键字最大长度
pub const MAX_SEARCH_LENGTH: usize = 100;

static SERIAL_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]{3,31}$").expect("序列号正则无效"));

/// 验证设备序列号（字母数字开头，4-32 位字母、数字或连字符）
pub fn validate_serial_number(serial: &str) -> Result<(), ValidationError> {
    if SERIAL_NUMBER_REGEX.is_match(serial) {
        Ok(())
    } else {
        let mut error = ValidationError::new("serial_number");
        error.message = Some(Cow::Borrowed("序列号格式无效"));
        Err(error)
    }
}

/// 规范化搜索关键字：去除首尾空白，空串视为未提供
pub fn normalize_search(search: Option<&str>) -> Result<Option<String>, AppError> {
    let Some(query) = search.map(str::trim).filter(|q| !q.is_empty()) else {
        return Ok(None);
    };

    if query.chars().count() > MAX_SEARCH_LENGTH {
        return Err(AppError::ValidationError(format!(
            "搜索关键字不能超过 {} 个字符",
            MAX_SEARCH_LENGTH
        )));
    }

    Ok(Some(query.to_string()))
}
