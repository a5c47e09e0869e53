//! Repository traits (ports)

mod repositories;

pub use repositories::{
    NewRefreshToken, RefreshTokenRepository, RepoResult, UserChanges, UserRepository,
};
