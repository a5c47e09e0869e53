//! PostgreSQL implementation of RefreshTokenRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use skycast_core::entities::RefreshToken;
use skycast_core::traits::{NewRefreshToken, RefreshTokenRepository, RepoResult};

use crate::models::RefreshTokenModel;

use super::error::{map_db_error, refresh_token_not_found};

/// PostgreSQL implementation of RefreshTokenRepository
#[derive(Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    /// Create a new PgRefreshTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    #[instrument(skip(self, token), fields(user_id = token.user_id))]
    async fn create(&self, token: &NewRefreshToken) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO auth_refresh_token (uuid, user_id, token, expires_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(token.uuid)
        .bind(token.user_id)
        .bind(&token.token)
        .bind(token.expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<RefreshToken>> {
        let result = sqlx::query_as::<_, RefreshTokenModel>(
            r"
            SELECT uuid, user_id, token, expires_at, created_at, updated_at
            FROM auth_refresh_token
            WHERE token = $1
            ",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RefreshToken::from))
    }

    #[instrument(skip(self))]
    async fn expire(&self, uuid: Uuid) -> RepoResult<()> {
        // Soft revocation: move the expiry into the past, keep the row
        let result = sqlx::query(
            r"
            UPDATE auth_refresh_token
            SET expires_at = NOW() - INTERVAL '1 day',
                updated_at = NOW()
            WHERE uuid = $1
            ",
        )
        .bind(uuid)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(refresh_token_not_found(uuid));
        }

        Ok(())
    }
}
