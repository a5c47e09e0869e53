//! Repository implementations

mod error;
mod refresh_token;
mod user;

pub use refresh_token::PgRefreshTokenRepository;
pub use user::PgUserRepository;
