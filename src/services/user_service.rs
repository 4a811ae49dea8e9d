//! 用户业务服务

use super::{simulated_id, with_fallback, write_or_simulate};
use crate::errors::AppError;
use crate::fake_data::filter::{filter_users, paginate, UserFilter};
use crate::fake_data::FakeDataService;
use crate::models::{
    DeletedRecord, LoginHistoryResponse, NewUser, Page, RegisterRequest, Sourced, UpdateProfileRequest,
    UpdateUserRequest, User, UserChanges, UserListQuery, UserStatistics,
};
use crate::repositories::UserStore;
use crate::security::hash_password;
use crate::utils::normalize_search;
use std::sync::Arc;

/// 登录记录条数
const LOGIN_HISTORY_SIZE: usize = 10;

fn user_not_found() -> AppError {
    AppError::NotFound("用户".to_string())
}

fn email_taken() -> AppError {
    AppError::ValidationError("邮箱已被注册".to_string())
}

/// 校验通过的请求转为待写入用户，密码在此处哈希
fn new_user(request: &RegisterRequest) -> Result<NewUser, AppError> {
    Ok(NewUser {
        email: request.email.trim().to_lowercase(),
        name: request.name.trim().to_string(),
        role: request.role,
        department: request.department.clone(),
        position: request.position.clone(),
        phone: request.phone.clone(),
        password_hash: hash_password(&request.password)?,
    })
}

fn user_changes(request: &UpdateUserRequest) -> Result<UserChanges, AppError> {
    Ok(UserChanges {
        name: request.name.as_ref().map(|n| n.trim().to_string()),
        role: request.role,
        phone: request.phone.clone(),
        department: request.department.clone(),
        position: request.position.clone(),
        is_active: request.is_active,
        password_hash: request.password.as_deref().map(hash_password).transpose()?,
    })
}

/// 用户业务服务
pub struct UserService {
    user_store: Option<Arc<dyn UserStore>>,
    fake_data: Arc<FakeDataService>,
}

impl UserService {
    pub fn new(user_store: Option<Arc<dyn UserStore>>, fake_data: Arc<FakeDataService>) -> Self {
        Self {
            user_store,
            fake_data,
        }
    }

    /// 分页查询用户列表
    pub async fn list_users(&self, query: &UserListQuery) -> Result<Sourced<Page<User>>, AppError> {
        let filter = UserFilter {
            search: normalize_search(query.search.as_deref())?,
            role: query.role.clone(),
            active: query.active,
        };

        let page = with_fallback(
            "users",
            self.user_store
                .as_ref()
                .map(|store| store.list_users(&filter, query.page, query.size)),
            || {
                let users = filter_users(&self.fake_data.snapshot().users, &filter);
                paginate(&users, query.page, query.size)
            },
        )
        .await;

        Ok(page)
    }

    /// 获取用户详情
    pub async fn get_user(&self, id: i64) -> Result<Sourced<User>, AppError> {
        with_fallback(
            "user",
            self.user_store.as_ref().map(|store| store.find_by_id(id)),
            || self.fake_data.snapshot().user(id).cloned(),
        )
        .await
        .ok_or_else(|| AppError::NotFound("用户".to_string()))
    }

    /// 创建用户，邮箱不可重复
    pub async fn create_user(&self, request: &RegisterRequest) -> Result<Sourced<User>, AppError> {
        let new_user = new_user(request)?;

        let created = write_or_simulate(
            "users",
            self.user_store.as_ref().map(|store| {
                let new_user = &new_user;
                async move {
                    if store.email_taken(&new_user.email).await? {
                        return Err(email_taken());
                    }
                    store.create_user(new_user).await
                }
            }),
            || {
                let snapshot = self.fake_data.snapshot();
                if snapshot.user_by_email(&new_user.email).is_some() {
                    return Err(email_taken());
                }
                Ok(new_user.to_user(simulated_id(), snapshot.generated_at))
            },
        )
        .await?;

        tracing::info!(user_id = created.data.id, role = %created.data.role, source = ?created.source, "用户已创建");

        Ok(created)
    }

    /// 修改用户，邮箱不可修改
    pub async fn update_user(&self, id: i64, request: &UpdateUserRequest) -> Result<Sourced<User>, AppError> {
        let changes = user_changes(request)?;
        self.apply_changes(id, changes).await
    }

    /// 停用用户（软删除）
    pub async fn delete_user(&self, id: i64) -> Result<Sourced<DeletedRecord>, AppError> {
        let deleted = write_or_simulate(
            "users",
            self.user_store.as_ref().map(|store| async move {
                if store.deactivate_user(id).await? {
                    Ok(DeletedRecord { id })
                } else {
                    Err(user_not_found())
                }
            }),
            || {
                self.fake_data.snapshot().user(id).ok_or_else(user_not_found)?;
                Ok(DeletedRecord { id })
            },
        )
        .await?;

        tracing::info!(user_id = id, source = ?deleted.source, "用户已停用");

        Ok(deleted)
    }

    /// 当前用户修改个人资料
    pub async fn update_profile(&self, user_id: i64, request: &UpdateProfileRequest) -> Result<Sourced<User>, AppError> {
        self.apply_changes(user_id, UserChanges::from(request)).await
    }

    async fn apply_changes(&self, id: i64, changes: UserChanges) -> Result<Sourced<User>, AppError> {
        write_or_simulate(
            "users",
            self.user_store.as_ref().map(|store| {
                let changes = &changes;
                async move { store.update_user(id, changes).await?.ok_or_else(user_not_found) }
            }),
            || {
                let mut user = self.fake_data.snapshot().user(id).cloned().ok_or_else(user_not_found)?;
                changes.apply(&mut user);
                Ok(user)
            },
        )
        .await
    }

    /// 登录记录（演示数据）
    pub async fn login_history(&self, id: i64) -> Result<Sourced<LoginHistoryResponse>, AppError> {
        self.get_user(id).await?;

        let login_history = self.fake_data.login_history(id, LOGIN_HISTORY_SIZE);
        Ok(Sourced::fake(LoginHistoryResponse {
            total_records: login_history.len(),
            login_history,
        }))
    }

    pub async fn statistics(&self) -> Sourced<UserStatistics> {
        with_fallback(
            "user_statistics",
            self.user_store.as_ref().map(|store| store.user_statistics()),
            || UserStatistics::from_users(&self.fake_data.snapshot().users),
        )
        .await
    }
}
