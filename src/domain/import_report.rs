// ==========================================
// SWIFT 代码登记服务 - 导入批次报告
// ==========================================
// 用途: 记录一次导入的行数统计与被拒行号
// 说明: 被拒行不报错，只体现在 rejected / rejected_rows 中
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub batch_id: String,              // 批次ID（UUID v4）
    pub source: String,                // 来源（文件路径或上传文件名）
    pub total_rows: usize,             // 数据行数（不含表头）
    pub accepted: usize,               // 规范化成功的行数
    pub rejected: usize,               // 被拒行数（列数不足/空行）
    pub rejected_rows: Vec<usize>,     // 被拒行号（表格内 1-based 行号）
    pub inserted: usize,               // 实际新增行数
    pub skipped_duplicates: usize,     // 因代码已存在而跳过的行数
    pub elapsed_ms: i64,               // 耗时（毫秒）
    pub imported_at: DateTime<Utc>,    // 导入完成时间
}
