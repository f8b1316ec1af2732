// ==========================================
// SWIFT 代码登记服务 - 领域模型层
// ==========================================
// 职责: 定义登记记录、查询返回体与领域规则
// 红线: 不含数据访问逻辑
// ==========================================

pub mod import_report;
pub mod swift_code;
pub mod types;

// 重导出核心类型
pub use import_report::ImportReport;
pub use swift_code::{
    code_prefix, is_headquarters_code, CountrySwiftCodes, SwiftCode, SwiftCodeDetail,
    HEADQUARTERS_SUFFIX, PREFIX_LEN,
};
pub use types::HeadquartersPolicy;
