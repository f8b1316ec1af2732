// ==========================================
// SWIFT 代码登记服务 - 导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// ==========================================

use crate::domain::import_report::ImportReport;
use crate::domain::swift_code::SwiftCode;
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// RawRow - 表格原始行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub row_number: usize,  // 表格内行号（1-based）
    pub cells: Vec<String>, // 按列位置排列的单元格文本
}

// ==========================================
// SwiftCodeImporter Trait
// ==========================================
// 用途: 导入主接口
// 实现者: SwiftCodeImporterImpl
#[async_trait]
pub trait SwiftCodeImporter: Send + Sync {
    /// 从文件路径导入
    ///
    /// # 导入流程
    /// 1. 文件读取与解析（首个工作表）
    /// 2. 跳过表头
    /// 3. 逐行规范化（列数不足的行静默丢弃）
    /// 4. 单事务批量落库（代码重复的行静默跳过）
    async fn import_from_file(&self, file_path: &Path) -> ImportResult<ImportReport>;

    /// 从内存字节导入（上传文件）
    ///
    /// # 参数
    /// - bytes: 文件内容
    /// - file_name: 原始文件名（用于按扩展名选择解析器）
    async fn import_from_bytes(&self, bytes: &[u8], file_name: &str)
        -> ImportResult<ImportReport>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 1）
// 实现者: ExcelParser, CsvParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// 读取文件全部行（含表头）
    fn parse_file(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;

    /// 读取内存中的文件内容（含表头）
    fn parse_bytes(&self, bytes: &[u8], file_name: &str) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// RowNormalizer Trait
// ==========================================
// 用途: 行规范化接口（阶段 3）
// 实现者: SwiftRowNormalizer
// 约束: 纯函数，不报错；不合格的行返回 None
pub trait RowNormalizer: Send + Sync {
    fn normalize(&self, cells: &[String]) -> Option<SwiftCode>;
}
