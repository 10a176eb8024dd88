use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use axum::http::StatusCode;
use axum::Json;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Serialize;
use snafu::Snafu;

/// Rejections of the autocomplete query parameters. The display text is sent back verbatim.
#[derive(Debug, Snafu, PartialEq)]
#[snafu(visibility(pub(crate)))]
pub enum ValidationError {
    #[snafu(display("Missing required parameter: '{key}'"))]
    MissingParameter { key: &'static str },

    #[snafu(display("Invalid \"limit\" parameter, must be a positive integer"))]
    InvalidLimit {},

    #[snafu(display("Invalid \"type\" parameter. Supported types: users"))]
    UnsupportedType {},

    // an empty q would match every user
    #[snafu(display("Invalid \"q\" parameter. It cannot be empty"))]
    EmptyQuery {},
}

#[derive(Serialize)]
pub struct ErrorResponse {
    timestamp: String,
    status: u16,
    error: String,
    message: String,
    path: Option<String>,
    #[serde(rename = "errorCode")]
    error_code: ErrorCode,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ServiceUnavailable,
}

#[derive(Debug)]
pub struct HttpError {
    pub status_code: StatusCode,
    pub error_code: ErrorCode,
    pub message: String,
}

impl HttpError {

    pub fn new(status_code: StatusCode, error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code,
            error_code,
            message: message.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {

        tracing::error!("An error occurred: status={}, code={:?}, msg='{}'", self.status_code, self.error_code, self.message);

        let status = self.status_code;

        let error_response = ErrorResponse {
            timestamp: Utc::now().to_rfc3339(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            message: self.message,
            path: None,
            error_code: self.error_code,
        };

        (status, Json(error_response)).into_response()
    }
}

pub type AppResponse<T> = Result<T, AppError>;

pub enum AppError {
    /// The client sent parameters that do not pass validation.
    Validation(ValidationError),

    /// The user directory could not be queried. Wraps the original error.
    DatabaseError(Box<dyn Error + Send + Sync>),
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "Validation: {:?}", err),
            Self::DatabaseError(err) => write!(f, "DatabaseError: {:?}", err),
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(err) => write!(f, "Invalid input: {}", err),
            AppError::DatabaseError(err) => write!(f, "A database error occurred: {}", err),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> AppError {
        AppError::Validation(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> AppError {
        AppError::DatabaseError(Box::new(err))
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Validation(err) => Some(err),
            AppError::DatabaseError(err) => Some(err.as_ref()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                tracing::debug!("Rejected autocomplete request: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            AppError::DatabaseError(internal_err) => {
                tracing::error!("Database error: {:?}", internal_err);
                HttpError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::ServiceUnavailable,
                    "Internal service outage."
                ).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use http::header::CONTENT_TYPE;

    #[tokio::test]
    async fn validation_errors_are_plain_text_bad_requests() {
        let response = AppError::from(ValidationError::MissingParameter { key: "limit" }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Missing required parameter: 'limit'");
    }

    #[tokio::test]
    async fn database_errors_hide_the_cause() {
        let response = AppError::from(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], 500);
        assert_eq!(json["errorCode"], "SERVICE_UNAVAILABLE");
        assert_eq!(json["message"], "Internal service outage.");
    }

    #[test]
    fn validation_messages_name_the_violated_rule() {
        assert_eq!(ValidationError::InvalidLimit {}.to_string(), r#"Invalid "limit" parameter, must be a positive integer"#);
        assert_eq!(ValidationError::UnsupportedType {}.to_string(), r#"Invalid "type" parameter. Supported types: users"#);
        assert_eq!(ValidationError::EmptyQuery {}.to_string(), r#"Invalid "q" parameter. It cannot be empty"#);
    }
}
