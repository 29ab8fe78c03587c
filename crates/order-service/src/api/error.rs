use crate::order_actor::OrderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// An [`OrderError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub OrderError);

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            OrderError::NotFound(_) => StatusCode::NOT_FOUND,
            OrderError::CreationFailed | OrderError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self.0, "Request failed");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
