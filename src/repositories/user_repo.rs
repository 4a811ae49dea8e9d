//! 用户数据仓库

use super::{unique_violation_as_conflict, UserStore};
use crate::db::PostgresPool;
use crate::errors::AppError;
use crate::fake_data::filter::UserFilter;
use crate::models::{NewUser, Page, User, UserChanges, UserCredentials, UserRole, UserStatistics};

const USER_COLUMNS: &str =
    "id, email, name, role, department, position, phone, is_active, created_at";

/// 用户数据仓库
#[derive(Clone)]
pub struct UserRepository {
    pool: PostgresPool,
}

impl UserRepository {
    pub fn new(pool: PostgresPool) -> Self {
        Self { pool }
    }
}

/// 转义 LIKE 通配符后包装为包含匹配模式
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait::async_trait]
impl UserStore for UserRepository {
    async fn list_users(&self, filter: &UserFilter, page: usize, size: usize) -> Result<Page<User>, AppError> {
        let role = match filter.role.as_deref() {
            Some(name) => match name.parse::<UserRole>() {
                Ok(role) => Some(role.as_str()),
                Err(_) => return Ok(Page::empty(page, size)),
            },
            None => None,
        };
        let search = filter
            .search
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(like_pattern);
        let active = filter.active.filter(|active| *active);

        let where_clause = r#"
            WHERE ($1::text IS NULL OR name ILIKE $1 OR email ILIKE $1 OR department ILIKE $1)
              AND ($2::text IS NULL OR role = $2)
              AND ($3::bool IS NULL OR is_active = $3)
        "#;

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM users {}", where_clause))
            .bind(&search)
            .bind(role)
            .bind(active)
            .fetch_one(self.pool.pool())
            .await?;

        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users {} ORDER BY id LIMIT $4 OFFSET $5",
            USER_COLUMNS, where_clause
        ))
        .bind(&search)
        .bind(role)
        .bind(active)
        .bind(i64::try_from(size).unwrap_or(i64::MAX))
        .bind(i64::try_from(page.saturating_mul(size)).unwrap_or(i64::MAX))
        .fetch_all(self.pool.pool())
        .await?;

        Ok(Page::from_parts(users, page, size, usize::try_from(total).unwrap_or(0)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id)
            .fetch_optional(self.pool.pool())
            .await?;

        Ok(user)
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>, AppError> {
        let credentials = sqlx::query_as::<_, UserCredentials>(&format!(
            "SELECT {}, password_hash FROM users WHERE LOWER(email) = LOWER($1)",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(credentials)
    }

    async fn email_taken(&self, email: &str) -> Result<bool, AppError> {
        let taken: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))")
            .bind(email.trim())
            .fetch_one(self.pool.pool())
            .await?;

        Ok(taken)
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, name, password_hash, role, department, position, phone)
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&user.department)
        .bind(&user.position)
        .bind(&user.phone)
        .fetch_one(self.pool.pool())
        .await
        .map_err(|e| unique_violation_as_conflict(e, "邮箱"))
    }

    async fn update_user(&self, id: i64, changes: &UserChanges) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                phone = COALESCE($4, phone),
                department = COALESCE($5, department),
                position = COALESCE($6, position),
                is_active = COALESCE($7, is_active),
                password_hash = COALESCE($8, password_hash)
             WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(id)
        .bind(&changes.name)
        .bind(changes.role.map(|role| role.as_str()))
        .bind(&changes.phone)
        .bind(&changes.department)
        .bind(&changes.position)
        .bind(changes.is_active)
        .bind(&changes.password_hash)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(user)
    }

    async fn deactivate_user(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(self.pool.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn user_statistics(&self) -> Result<UserStatistics, AppError> {
        let rows: Vec<(String, bool, i64)> =
            sqlx::query_as("SELECT role, is_active, COUNT(*) FROM users GROUP BY role, is_active")
                .fetch_all(self.pool.pool())
                .await?;

        let mut stats = UserStatistics::from_users(&[]);
        for (role, is_active, count) in rows {
            let count = usize::try_from(count).unwrap_or(0);
            stats.total_users += count;
            if is_active {
                stats.active_users += count;
            }
            *stats.role_distribution.entry(role.to_lowercase()).or_default() += count;
        }

        Ok(stats)
    }
}
