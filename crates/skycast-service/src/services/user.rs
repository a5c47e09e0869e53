//! User management service
//!
//! Current-user lookup plus the admin-only CRUD surface.

use skycast_common::auth::{hash_password, validate_password_strength};
use skycast_core::traits::UserChanges;
use tracing::{info, instrument};

use crate::dto::{UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user's own account
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// List all users (admin)
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Apply a partial update to a user (admin); only supplied fields change
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: i64,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let password_hash = match request.password.as_deref() {
            Some(password) => {
                validate_password_strength(password).map_err(ServiceError::from)?;
                Some(hash_password(password).map_err(|e| ServiceError::internal(e.to_string()))?)
            }
            None => None,
        };

        let changes = UserChanges {
            email: request.email,
            password_hash,
            is_admin: request.is_admin,
        };

        let user = self.ctx.user_repo().update(user_id, &changes).await?;

        info!(user_id, "User updated");

        Ok(UserResponse::from(&user))
    }

    /// Delete a user (admin); refresh tokens cascade in the database
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: i64) -> ServiceResult<()> {
        self.ctx.user_repo().delete(user_id).await?;

        info!(user_id, "User deleted");

        Ok(())
    }
}
