// ==========================================
// SWIFT 代码登记服务 - 导入层
// ==========================================
// 职责: 外部表格 → 规范化登记记录 → 批量落库
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod error;
pub mod file_parser;
pub mod row_normalizer;
pub mod swift_code_importer;
pub mod swift_code_importer_trait;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use row_normalizer::{SwiftRowNormalizer, MIN_POPULATED_CELLS};
pub use swift_code_importer::{NormalizedBatch, SwiftCodeImporterImpl};

// 重导出 Trait 接口
pub use swift_code_importer_trait::{FileParser, RawRow, RowNormalizer, SwiftCodeImporter};
