use axum::extract::{Multipart, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::ImportApiResponse;
use crate::app::state::AppState;

use super::common::HttpError;

// ==========================================
// 文件导入路由
// ==========================================

/// 上传表单中的文件字段名
const FILE_FIELD: &str = "file";

/// POST /v1/swift-codes/import（multipart 表单,字段 file）
pub(super) async fn import_swift_codes(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportApiResponse>, HttpError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::ValidationError(format!("上传表单读取失败: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::ValidationError(format!("上传文件读取失败: {}", e)))?;

        tracing::info!(file_name = %file_name, size = bytes.len(), "收到导入文件");

        let response = state.import_api.import_upload(&bytes, &file_name).await?;
        return Ok(Json(response));
    }

    Err(ApiError::ValidationError(format!("缺少上传文件字段: {}", FILE_FIELD)).into())
}
