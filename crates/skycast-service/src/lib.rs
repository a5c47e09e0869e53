//! # skycast-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AccessTokenResponse, CoordinatesQuery, GeocodingResponse, LocationQuery, LoginRequest,
    RegisterRequest, SunTimes, TokenInfoResponse, UpdateUserRequest, UserResponse,
    WeatherListResponse, WeatherReport,
};
pub use services::{
    AuthService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
    WeatherService,
};
