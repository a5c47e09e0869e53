//! Data transfer objects for the API layer

pub mod mappers;
mod requests;
mod responses;

pub use requests::{
    CoordinatesQuery, LocationQuery, LoginRequest, RegisterRequest, UpdateUserRequest,
};
pub use responses::{
    AccessTokenResponse, GeocodingResponse, SunTimes, TokenInfoResponse, UserResponse,
    WeatherListResponse, WeatherReport,
};
