// ==========================================
// SWIFT 代码登记服务 - 应用层
// ==========================================
// 职责: 依赖装配 + HTTP 路由,连接外部请求与后端 API
// ==========================================

pub mod http_routes;
pub mod state;

// 重导出
pub use http_routes::build_router;
pub use state::AppState;
