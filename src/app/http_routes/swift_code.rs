use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::api::{CreateSwiftCodeRequest, DeleteSwiftCodeRequest};
use crate::app::state::AppState;
use crate::domain::swift_code::{CountrySwiftCodes, SwiftCodeDetail};

use super::common::{HttpError, MessageResponse};

// ==========================================
// SWIFT 代码查询/维护路由
// ==========================================

/// GET /v1/swift-codes/:swift_code
pub(super) async fn get_swift_code(
    State(state): State<AppState>,
    Path(swift_code): Path<String>,
) -> Result<Json<SwiftCodeDetail>, HttpError> {
    let detail = state.swift_code_api.get_swift_code(&swift_code).await?;
    Ok(Json(detail))
}

/// GET /v1/swift-codes/country/:country_iso2
pub(super) async fn get_by_country(
    State(state): State<AppState>,
    Path(country_iso2): Path<String>,
) -> Result<Json<CountrySwiftCodes>, HttpError> {
    let result = state.swift_code_api.get_by_country(&country_iso2).await?;
    Ok(Json(result))
}

/// POST /v1/swift-codes
pub(super) async fn create_swift_code(
    State(state): State<AppState>,
    payload: Result<Json<CreateSwiftCodeRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, HttpError> {
    let Json(request) = payload?;
    let record = state.swift_code_api.create_swift_code(request).await?;
    Ok(Json(MessageResponse::new(format!(
        "SWIFT 代码 {} 创建成功",
        record.swift_code
    ))))
}

/// DELETE /v1/swift-codes/:swift_code
///
/// 请求体携带 bankName 与 countryISO2,三者同时匹配才删除
pub(super) async fn delete_swift_code(
    State(state): State<AppState>,
    Path(swift_code): Path<String>,
    payload: Result<Json<DeleteSwiftCodeRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, HttpError> {
    let Json(request) = payload?;
    state
        .swift_code_api
        .delete_swift_code(&swift_code, request)
        .await?;
    Ok(Json(MessageResponse::new(format!(
        "SWIFT 代码 {} 删除成功",
        swift_code
    ))))
}
