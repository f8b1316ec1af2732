// ==========================================
// SWIFT 代码导入API
// ==========================================
// 职责: 封装导入管道，供 HTTP 上传与命令行调用
// ==========================================

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::import_report::ImportReport;
use crate::importer::SwiftCodeImporter;

/// 导入API响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportApiResponse {
    /// 结果说明
    pub message: String,
    /// 批次报告（行数统计、被拒行号等）
    #[serde(flatten)]
    pub report: ImportReport,
}

impl From<ImportReport> for ImportApiResponse {
    fn from(report: ImportReport) -> Self {
        Self {
            message: format!(
                "导入成功: 新增 {} 条，跳过重复 {} 条，丢弃不完整行 {} 条",
                report.inserted, report.skipped_duplicates, report.rejected
            ),
            report,
        }
    }
}

/// 导入API
pub struct ImportApi {
    importer: Arc<dyn SwiftCodeImporter>,
}

impl ImportApi {
    /// 创建新的ImportApi实例
    pub fn new(importer: Arc<dyn SwiftCodeImporter>) -> Self {
        Self { importer }
    }

    /// 从文件路径导入
    ///
    /// # 返回
    /// - Ok(ImportApiResponse): 导入结果
    /// - Err(ApiError::ParseError): 文件不可读或格式错误
    /// - Err(ApiError::Database*): 落库失败（整批回滚）
    pub async fn import_file(&self, file_path: &str) -> ApiResult<ImportApiResponse> {
        if file_path.trim().is_empty() {
            return Err(ApiError::ValidationError("文件路径不能为空".to_string()));
        }

        let report = self.importer.import_from_file(Path::new(file_path)).await?;
        Ok(report.into())
    }

    /// 导入上传的文件内容
    ///
    /// # 参数
    /// - bytes: 文件内容
    /// - file_name: 上传文件名（决定解析格式）
    pub async fn import_upload(&self, bytes: &[u8], file_name: &str) -> ApiResult<ImportApiResponse> {
        if bytes.is_empty() {
            return Err(ApiError::ValidationError("上传文件为空".to_string()));
        }

        let report = self.importer.import_from_bytes(bytes, file_name).await?;
        Ok(report.into())
    }
}
