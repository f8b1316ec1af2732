// ==========================================
// SWIFT 代码登记服务 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 HTTP 路由与命令行调用
// ==========================================

pub mod error;
pub mod import_api;
pub mod swift_code_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use import_api::{ImportApi, ImportApiResponse};
pub use swift_code_api::{CreateSwiftCodeRequest, DeleteSwiftCodeRequest, SwiftCodeApi};
