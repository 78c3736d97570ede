use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Gate service error variants.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Invalid type")]
    InvalidRole,
    #[error("Invalid PIN format")]
    MalformedPin,
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("unauthorized admin PIN")]
    Unauthorized,
    #[error("Invalid or expired PIN")]
    PinNotFound,
    #[error("hardware gateway error")]
    Gateway(#[source] anyhow::Error),
    #[error("not found")]
    RouteNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl GateError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRole => "INVALID_TYPE",
            Self::MalformedPin => "INVALID_PIN_FORMAT",
            Self::MalformedBody(_) => "MALFORMED_BODY",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::PinNotFound => "INVALID_PIN",
            Self::Gateway(_) => "GATEWAY_ERROR",
            Self::RouteNotFound => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRole | Self::MalformedPin | Self::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized | Self::PinNotFound => StatusCode::FORBIDDEN,
            Self::Gateway(_) => StatusCode::BAD_GATEWAY,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for GateError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        // 4xx are already visible through the TraceLayer. Upstream and internal
        // failures need the error chain logged.
        match &self {
            Self::Gateway(e) => {
                tracing::error!(error = %format!("{e:#}"), kind = "GATEWAY_ERROR", "hardware gateway error")
            }
            Self::Internal(e) => {
                tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error")
            }
            _ => {}
        }
        let body = serde_json::json!({
            "success": false,
            "kind": self.kind(),
            "reason": self.to_string(),
        });
        (self.status(), axum::Json(body)).into_response()
    }
}
