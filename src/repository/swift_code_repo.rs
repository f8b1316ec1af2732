// ==========================================
// SWIFT 代码登记服务 - SWIFT 代码 Repository Trait
// ==========================================
// 职责: 定义登记表数据访问接口（不包含业务逻辑）
// 红线: Repository 不含业务规则，只做数据 CRUD
// ==========================================

use crate::domain::swift_code::SwiftCode;
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// SwiftCodeRepository Trait
// ==========================================
// 用途: swift_codes 表数据访问
// 实现者: SwiftCodeRepositoryImpl（使用 rusqlite）
#[async_trait]
pub trait SwiftCodeRepository: Send + Sync {
    // ===== 写入 =====

    /// 批量插入（单事务，代码已存在的行静默跳过）
    ///
    /// # 返回
    /// - Ok(usize): 实际新增的记录数
    /// - Err: 非唯一性错误（整个事务回滚）
    async fn insert_batch(&self, records: &[SwiftCode]) -> RepositoryResult<usize>;

    /// 插入单条记录
    ///
    /// # 返回
    /// - Err(UniqueConstraintViolation): 代码已存在
    async fn insert_one(&self, record: &SwiftCode) -> RepositoryResult<()>;

    /// 删除单条记录（代码、银行名、国家三者同时匹配）
    ///
    /// # 返回
    /// - Err(NotFound): 没有匹配行
    async fn delete_one(
        &self,
        swift_code: &str,
        bank_name: &str,
        country_iso2: &str,
    ) -> RepositoryResult<()>;

    // ===== 查询 =====

    /// 按代码精确查询
    ///
    /// # 返回
    /// - Err(NotFound): 代码不存在
    async fn find_by_code(&self, swift_code: &str) -> RepositoryResult<SwiftCode>;

    /// 查询与总行代码前 8 位相同的其他记录（不含总行自身）
    async fn find_branches(&self, hq_code: &str) -> RepositoryResult<Vec<SwiftCode>>;

    /// 按国家代码查询（入参应已大写）
    async fn find_by_country(&self, country_iso2: &str) -> RepositoryResult<Vec<SwiftCode>>;

    /// 统计记录总数
    async fn count(&self) -> RepositoryResult<usize>;
}
