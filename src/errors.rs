use crate::cursor::CalendarCursor;
use crate::mood::UnknownMood;
use axum::http::StatusCode;
use tracing::error;

/// Error returned by handlers. Rendered as a plain-text body with `status`.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }

    /// The cursor names a month chrono cannot represent, or one whose
    /// neighbours fall outside the supported date range.
    pub fn unsupported_month(cursor: CalendarCursor) -> Self {
        Self::bad_request(format!(
            "no calendar for month {} of year {}",
            cursor.month, cursor.year
        ))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err)
    }
}

impl From<UnknownMood> for AppError {
    fn from(err: UnknownMood) -> Self {
        Self::bad_request(format!(
            "{err}; expected one of happy, sad, angry, anxious, calm, excited"
        ))
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), "request failed: {}", self.message);
        }
        (self.status, self.message).into_response()
    }
}
