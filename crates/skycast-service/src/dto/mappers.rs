//! Conversions from entities and upstream records to response DTOs

use chrono::{DateTime, FixedOffset, Utc};
use skycast_common::Claims;
use skycast_core::entities::User;
use skycast_weather::CurrentWeather;

use super::responses::{SunTimes, TokenInfoResponse, UserResponse, WeatherReport};

/// Timestamp format used throughout responses (`%z` renders as `+0300`)
const LOCAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            is_admin: user.is_admin,
            created_at: Some(user.created_at),
        }
    }
}

/// Render verified claims for the tokeninfo endpoint
pub fn token_info(claims: &Claims) -> Result<TokenInfoResponse, skycast_common::AppError> {
    let expired_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
        .unwrap_or_default()
        .format(LOCAL_TIME_FORMAT)
        .to_string();

    Ok(TokenInfoResponse {
        user_id: claims.user_id()?,
        is_admin: claims.is_admin,
        expired_at,
    })
}

/// Convert an upstream weather record into the response shape, rendering
/// `dt`/`sunrise`/`sunset` in the location's own UTC offset
pub fn weather_report(weather: CurrentWeather) -> WeatherReport {
    let offset = FixedOffset::east_opt(weather.timezone as i32)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));

    WeatherReport {
        coord: weather.coord,
        base: weather.base,
        main: weather.main,
        visibility: weather.visibility,
        wind: weather.wind,
        clouds: weather.clouds,
        rain: weather.rain,
        snow: weather.snow,
        dt: format_local(weather.dt, offset),
        sys: SunTimes {
            kind: weather.sys.kind,
            id: weather.sys.id,
            country: weather.sys.country,
            sunrise: format_local(weather.sys.sunrise, offset),
            sunset: format_local(weather.sys.sunset, offset),
        },
        offset_seconds: weather.timezone,
        offset_utc: format_offset_utc(weather.timezone),
        id: weather.id,
        name: weather.name,
        cod: weather.cod,
    }
}

/// Render a unix timestamp in the given offset
fn format_local(timestamp: i64, offset: FixedOffset) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .with_timezone(&offset)
        .format(LOCAL_TIME_FORMAT)
        .to_string()
}

/// Human form of a UTC shift: `UTC`, `UTC+03:00`, `UTC-04:30`
fn format_offset_utc(offset_seconds: i64) -> String {
    if offset_seconds == 0 {
        return "UTC".to_string();
    }
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let abs = offset_seconds.abs();
    format!("UTC{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
}
