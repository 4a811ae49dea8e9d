//! 用户登录记录生成

use crate::models::LoginHistoryEntry;
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// 登录时间回溯窗口（小时）
pub const LOGIN_WINDOW_HOURS: i64 = 168;

const LOGIN_LOCATION: &str = "Ho Chi Minh City, Vietnam";
const DEVICES: [&str; 2] = ["Desktop", "Mobile"];
const BROWSERS: [&str; 2] = ["Chrome", "Firefox"];

/// 登录成功的概率
const SUCCESS_RATE: f64 = 0.9;

/// 生成最近一周内的登录记录，按时间倒序
pub fn generate_login_history<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    user_id: i64,
    count: usize,
) -> Vec<LoginHistoryEntry> {
    let mut entries: Vec<LoginHistoryEntry> = (0..count)
        .map(|i| LoginHistoryEntry {
            id: i as i64 + 1,
            user_id,
            login_time: now - Duration::minutes(rng.gen_range(0..LOGIN_WINDOW_HOURS * 60)),
            ip_address: format!("192.168.{}.{}", rng.gen_range(0..=255), rng.gen_range(1..=254)),
            location: LOGIN_LOCATION.to_string(),
            device: DEVICES.choose(rng).copied().unwrap_or("Desktop").to_string(),
            browser: BROWSERS.choose(rng).copied().unwrap_or("Chrome").to_string(),
            success: rng.gen_bool(SUCCESS_RATE),
        })
        .collect();

    entries.sort_by(|a, b| b.login_time.cmp(&a.login_time));
    entries
}
