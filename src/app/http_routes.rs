// ==========================================
// SWIFT 代码登记服务 - HTTP 路由（按域拆分）
// ==========================================
// 职责: axum 路由定义,连接 HTTP 请求与后端 API
// ==========================================

mod common;
mod import;
mod swift_code;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app::state::AppState;

pub use common::{ErrorResponse, HttpError, MessageResponse};

/// 构建全部路由
///
/// 静态段（country、import）优先于 `:swift_code` 参数段匹配
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/v1/health", get(common::health))
        .route("/v1/swift-codes", post(swift_code::create_swift_code))
        .route("/v1/swift-codes/", post(swift_code::create_swift_code))
        .route("/v1/swift-codes/import", post(import::import_swift_codes))
        .route(
            "/v1/swift-codes/country/:country_iso2",
            get(swift_code::get_by_country),
        )
        .route(
            "/v1/swift-codes/:swift_code",
            get(swift_code::get_swift_code).delete(swift_code::delete_swift_code),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
