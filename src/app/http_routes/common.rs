use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;

// ==========================================
// 公共工具：错误映射、通用响应体
// ==========================================

/// 错误响应（返回给调用方）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub error: String,
}

/// 简单成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// HTTP 层错误（ApiError + 状态码映射）
#[derive(Debug)]
pub struct HttpError(pub ApiError);

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ApiError::ValidationError(format!(
            "请求体不是合法 JSON: {}",
            rejection.body_text()
        )))
    }
}

/// ApiError → (状态码, 错误代码)
fn classify(err: &ApiError) -> (StatusCode, &'static str) {
    match err {
        ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ApiError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ApiError::ParseError(_) => (StatusCode::BAD_REQUEST, "PARSE_ERROR"),
        ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
        ApiError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
        ApiError::DatabaseConnectionError(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "DATABASE_CONNECTION_ERROR",
        ),
        ApiError::DatabaseTransactionError(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "DATABASE_TRANSACTION_ERROR",
        ),
        ApiError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        ApiError::Other(_) => (StatusCode::INTERNAL_SERVER_ERROR, "OTHER_ERROR"),
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, code) = classify(&self.0);
        if status.is_server_error() {
            tracing::error!(code, error = %self.0, "请求处理失败");
        } else {
            tracing::debug!(code, error = %self.0, "请求被拒绝");
        }

        let body = ErrorResponse {
            code: code.to_string(),
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// 存活检查
pub(super) async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
    }))
}
