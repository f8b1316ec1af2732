// ==========================================
// SWIFT 代码登记服务 - SWIFT 代码导入器实现
// ==========================================
// 职责: 整合导入流程，从文件到数据库
// 流程: 解析 → 跳过表头 → 规范化 → 单事务落库
// 约束: 整批要么全部提交，要么全部回滚
// ==========================================

use crate::domain::import_report::ImportReport;
use crate::domain::swift_code::SwiftCode;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::row_normalizer::SwiftRowNormalizer;
use crate::importer::swift_code_importer_trait::{
    FileParser, RawRow, RowNormalizer, SwiftCodeImporter,
};
use crate::repository::SwiftCodeRepository;
use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

// ==========================================
// NormalizedBatch - 规范化结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedBatch {
    pub records: Vec<SwiftCode>,  // 合格记录（保持文件顺序）
    pub total_rows: usize,        // 数据行数（不含表头）
    pub rejected_rows: Vec<usize>, // 被拒行号
}

impl NormalizedBatch {
    pub fn rejected(&self) -> usize {
        self.rejected_rows.len()
    }
}

// ==========================================
// SwiftCodeImporterImpl - 导入器实现
// ==========================================
pub struct SwiftCodeImporterImpl<R>
where
    R: SwiftCodeRepository + ?Sized,
{
    // 数据访问层
    repo: Arc<R>,

    // 导入组件
    file_parser: Box<dyn FileParser>,
    row_normalizer: Box<dyn RowNormalizer>,
}

impl<R> SwiftCodeImporterImpl<R>
where
    R: SwiftCodeRepository + ?Sized,
{
    /// 创建新的导入器实例
    ///
    /// # 参数
    /// - repo: 登记表仓储
    /// - file_parser: 文件解析器
    /// - row_normalizer: 行规范化器
    pub fn new(
        repo: Arc<R>,
        file_parser: Box<dyn FileParser>,
        row_normalizer: Box<dyn RowNormalizer>,
    ) -> Self {
        Self {
            repo,
            file_parser,
            row_normalizer,
        }
    }

    /// 使用默认组件（按扩展名选择解析器 + 标准规范化器）
    pub fn with_defaults(repo: Arc<R>) -> Self {
        Self::new(
            repo,
            Box::new(UniversalFileParser),
            Box::new(SwiftRowNormalizer),
        )
    }

    /// 跳过表头并逐行规范化
    ///
    /// 第一行无条件视为表头；不合格行只记录行号，不中断
    pub fn normalize_rows(&self, rows: Vec<RawRow>) -> NormalizedBatch {
        let mut batch = NormalizedBatch::default();

        for row in rows.into_iter().skip(1) {
            batch.total_rows += 1;
            match self.row_normalizer.normalize(&row.cells) {
                Some(record) => batch.records.push(record),
                None => {
                    debug!(row_number = row.row_number, "列数不足，跳过该行");
                    batch.rejected_rows.push(row.row_number);
                }
            }
        }

        batch
    }

    /// 读取并规范化文件（不落库）
    pub fn read_file(&self, file_path: &Path) -> ImportResult<NormalizedBatch> {
        let rows = self.file_parser.parse_file(file_path).map_err(|e| {
            error!(error = %e, file_path = %file_path.display(), "文件解析失败");
            e
        })?;
        Ok(self.normalize_rows(rows))
    }

    /// 读取并规范化内存中的文件内容（不落库）
    pub fn read_bytes(&self, bytes: &[u8], file_name: &str) -> ImportResult<NormalizedBatch> {
        let rows = self.file_parser.parse_bytes(bytes, file_name).map_err(|e| {
            error!(error = %e, file_name = %file_name, "文件解析失败");
            e
        })?;
        Ok(self.normalize_rows(rows))
    }

    /// 整批落库并生成报告
    async fn store(
        &self,
        batch: NormalizedBatch,
        source: &str,
        started: Instant,
    ) -> ImportResult<ImportReport> {
        let batch_id = Uuid::new_v4().to_string();

        let inserted = self.repo.insert_batch(&batch.records).await.map_err(|e| {
            error!(batch_id = %batch_id, error = %e, "批量写入失败，整批回滚");
            e
        })?;

        let accepted = batch.records.len();
        let report = ImportReport {
            batch_id,
            source: source.to_string(),
            total_rows: batch.total_rows,
            accepted,
            rejected: batch.rejected(),
            rejected_rows: batch.rejected_rows,
            inserted,
            skipped_duplicates: accepted.saturating_sub(inserted),
            elapsed_ms: started.elapsed().as_millis() as i64,
            imported_at: Utc::now(),
        };

        info!(
            batch_id = %report.batch_id,
            source = %report.source,
            total_rows = report.total_rows,
            accepted = report.accepted,
            rejected = report.rejected,
            inserted = report.inserted,
            skipped_duplicates = report.skipped_duplicates,
            elapsed_ms = report.elapsed_ms,
            "SWIFT 代码导入完成"
        );

        Ok(report)
    }
}

#[async_trait::async_trait]
impl<R> SwiftCodeImporter for SwiftCodeImporterImpl<R>
where
    R: SwiftCodeRepository + ?Sized,
{
    #[instrument(skip(self, file_path), fields(file_path = %file_path.display()))]
    async fn import_from_file(&self, file_path: &Path) -> ImportResult<ImportReport> {
        let started = Instant::now();
        info!("开始导入 SWIFT 代码文件");

        let batch = self.read_file(file_path)?;
        self.store(batch, &file_path.display().to_string(), started)
            .await
    }

    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn import_from_bytes(
        &self,
        bytes: &[u8],
        file_name: &str,
    ) -> ImportResult<ImportReport> {
        let started = Instant::now();
        info!("开始导入上传的 SWIFT 代码文件");

        let batch = self.read_bytes(bytes, file_name)?;
        self.store(batch, file_name, started).await
    }
}
