//! Refresh token entity <-> model mapper

use skycast_core::entities::RefreshToken;

use crate::models::RefreshTokenModel;

/// Convert RefreshTokenModel to RefreshToken entity
impl From<RefreshTokenModel> for RefreshToken {
    fn from(model: RefreshTokenModel) -> Self {
        RefreshToken {
            uuid: model.uuid,
            user_id: model.user_id,
            token: model.token,
            expires_at: model.expires_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
