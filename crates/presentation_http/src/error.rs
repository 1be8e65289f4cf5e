//! API error handling
//!
//! Every failure leaves the server as `{error, code, details?}` with a fixed,
//! client-safe `error` message. Provider text only ever appears in `details`,
//! and only while internal error exposure is enabled (development).

use std::sync::atomic::{AtomicBool, Ordering};

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Client message when the weather lookup fails upstream
pub const WEATHER_UPSTREAM_MESSAGE: &str = "Failed to fetch weather data";

/// Client message when the suggestion lookup fails upstream
pub const GEOCODING_UPSTREAM_MESSAGE: &str = "Failed to fetch location suggestions";

const NOT_CONFIGURED_MESSAGE: &str = "Weather API is not configured";
const REJECTED_KEY_MESSAGE: &str = "Invalid API key";
const LOCATION_NOT_FOUND_MESSAGE: &str = "Location not found";
const GENERIC_MESSAGE: &str = "An error occurred processing your request";

static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details are included in responses
///
/// Production deployments turn this off so provider messages and transport
/// errors never reach clients.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// Replace messages that look like they carry URLs, paths or transport detail
fn sanitize_error_message(msg: &str) -> String {
    if should_expose_details() {
        return msg.to_string();
    }

    let sensitive_patterns = [
        "/home/",
        "/var/",
        "/etc/",
        "C:\\",
        "appid=",
        "panicked at",
        ".rs:",
        "connection refused",
        "timed out",
    ];
    let lower = msg.to_lowercase();
    if msg.contains("://")
        || sensitive_patterns
            .iter()
            .any(|pattern| lower.contains(&pattern.to_lowercase()))
    {
        return GENERIC_MESSAGE.to_string();
    }

    msg.to_string()
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty request parameter
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Provider credential absent or rejected; a server-side problem
    #[error("Misconfigured: {detail}")]
    Misconfigured {
        message: &'static str,
        detail: String,
    },

    /// Provider failed or answered with something unusable
    #[error("Upstream failure: {detail}")]
    Upstream {
        message: &'static str,
        detail: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Client-facing message
    pub error: String,
    /// Stable machine-readable code
    pub code: String,
    /// Underlying cause, development only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Map an application error, naming the upstream failure for this endpoint
    pub fn from_application(err: ApplicationError, upstream_message: &'static str) -> Self {
        match err {
            ApplicationError::InvalidInput(msg) => Self::BadRequest(msg),
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::NotFound(_) => Self::NotFound(LOCATION_NOT_FOUND_MESSAGE.to_string()),
            ApplicationError::Configuration(detail) => Self::Misconfigured {
                message: NOT_CONFIGURED_MESSAGE,
                detail,
            },
            ApplicationError::NotAuthorized(detail) => Self::Misconfigured {
                message: REJECTED_KEY_MESSAGE,
                detail,
            },
            ApplicationError::ExternalService(detail)
            | ApplicationError::MalformedPayload(detail) => Self::Upstream {
                message: upstream_message,
                detail,
            },
            ApplicationError::Internal(detail) => Self::Internal(detail),
        }
    }

    /// Map a failure of the weather endpoint
    pub fn from_weather(err: ApplicationError) -> Self {
        Self::from_application(err, WEATHER_UPSTREAM_MESSAGE)
    }

    /// Map a failure of the location suggestion endpoint
    pub fn from_geocoding(err: ApplicationError) -> Self {
        Self::from_application(err, GEOCODING_UPSTREAM_MESSAGE)
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Misconfigured { .. } | Self::Upstream { .. } | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    fn body(&self) -> ErrorResponse {
        let exposed = |detail: &String| should_expose_details().then(|| detail.clone());
        let (code, error, details) = match self {
            Self::BadRequest(msg) => ("bad_request", sanitize_error_message(msg), None),
            Self::NotFound(msg) => ("not_found", sanitize_error_message(msg), None),
            Self::Misconfigured { message, detail } => {
                ("configuration_error", (*message).to_string(), exposed(detail))
            },
            Self::Upstream { message, detail } => {
                ("upstream_error", (*message).to_string(), exposed(detail))
            },
            Self::Internal(detail) => (
                "internal_error",
                "An internal error occurred".to_string(),
                exposed(detail),
            ),
        };

        ErrorResponse {
            error,
            code: code.to_string(),
            details,
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self::from_weather(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
