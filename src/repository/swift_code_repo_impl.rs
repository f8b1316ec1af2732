// ==========================================
// SWIFT 代码登记服务 - SWIFT 代码 Repository 实现
// ==========================================
// 职责: 实现 swift_codes 表数据访问（使用 rusqlite）
// 红线: Repository 不含业务规则，只做数据 CRUD
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

use crate::db::open_and_prepare;
use crate::domain::swift_code::{code_prefix, SwiftCode};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::swift_code_repo::SwiftCodeRepository;
use async_trait::async_trait;
use rusqlite::{params, Connection, Result as SqliteResult, Row, Transaction};
use std::sync::{Arc, Mutex, MutexGuard};

const SELECT_COLUMNS: &str = r#"
    SELECT swift_code, bank_name, address, country_iso2, country_name, is_headquarter
    FROM swift_codes
"#;

fn map_swift_code_row(row: &Row<'_>) -> SqliteResult<SwiftCode> {
    Ok(SwiftCode {
        swift_code: row.get(0)?,
        bank_name: row.get(1)?,
        address: row.get(2)?,
        country_iso2: row.get(3)?,
        country_name: row.get(4)?,
        is_headquarter: row.get(5)?,
    })
}

// ==========================================
// SwiftCodeRepositoryImpl
// ==========================================
pub struct SwiftCodeRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl SwiftCodeRepositoryImpl {
    /// 创建新的 Repository 实例（打开连接并确保表结构存在）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_and_prepare(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 在事务中批量插入（ON CONFLICT (swift_code) DO NOTHING）
    ///
    /// 返回实际新增行数；只有 swift_code 重复的行被吸收（changes = 0），
    /// 其他约束冲突（含同前缀第二条总行）直接报错，整批回滚
    fn insert_batch_tx(tx: &Transaction, records: &[SwiftCode]) -> RepositoryResult<usize> {
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO swift_codes (
                swift_code, bank_name, address, country_iso2, country_name, is_headquarter
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT (swift_code) DO NOTHING
            "#,
        )?;

        let mut inserted = 0;
        for record in records {
            inserted += stmt.execute(params![
                record.swift_code,
                record.bank_name,
                record.address,
                record.country_iso2,
                record.country_name,
                record.is_headquarter,
            ])?;
        }

        Ok(inserted)
    }

    fn insert_batch_sync(&self, records: &[SwiftCode]) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        // 出错时 tx 被 drop，自动回滚
        let inserted = Self::insert_batch_tx(&tx, records)?;

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tracing::debug!(
            total = records.len(),
            inserted,
            "swift_codes 批量写入完成"
        );
        Ok(inserted)
    }

    fn insert_one_sync(&self, record: &SwiftCode) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO swift_codes (
                swift_code, bank_name, address, country_iso2, country_name, is_headquarter
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                record.swift_code,
                record.bank_name,
                record.address,
                record.country_iso2,
                record.country_name,
                record.is_headquarter,
            ],
        )?;
        Ok(())
    }

    fn delete_one_sync(
        &self,
        swift_code: &str,
        bank_name: &str,
        country_iso2: &str,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            r#"
            DELETE FROM swift_codes
            WHERE swift_code = ?1 AND bank_name = ?2 AND country_iso2 = ?3
            "#,
            params![swift_code, bank_name, country_iso2],
        )?;

        if affected == 0 {
            return Err(RepositoryError::swift_code_not_found(swift_code));
        }
        Ok(())
    }

    fn find_by_code_sync(&self, swift_code: &str) -> RepositoryResult<SwiftCode> {
        let conn = self.get_conn()?;
        let sql = format!("{} WHERE swift_code = ?1 LIMIT 1", SELECT_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;

        match stmt.query_row(params![swift_code], map_swift_code_row) {
            Ok(record) => Ok(record),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                Err(RepositoryError::swift_code_not_found(swift_code))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn find_branches_sync(&self, hq_code: &str) -> RepositoryResult<Vec<SwiftCode>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "{} WHERE substr(swift_code, 1, 8) = ?1 AND swift_code != ?2 ORDER BY id ASC",
            SELECT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;

        let branches = stmt
            .query_map(params![code_prefix(hq_code), hq_code], map_swift_code_row)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(branches)
    }

    fn find_by_country_sync(&self, country_iso2: &str) -> RepositoryResult<Vec<SwiftCode>> {
        let conn = self.get_conn()?;
        let sql = format!("{} WHERE country_iso2 = ?1 ORDER BY id ASC", SELECT_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;

        let records = stmt
            .query_map(params![country_iso2], map_swift_code_row)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(records)
    }

    fn count_sync(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM swift_codes", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[async_trait]
impl SwiftCodeRepository for SwiftCodeRepositoryImpl {
    async fn insert_batch(&self, records: &[SwiftCode]) -> RepositoryResult<usize> {
        self.insert_batch_sync(records)
    }

    async fn insert_one(&self, record: &SwiftCode) -> RepositoryResult<()> {
        self.insert_one_sync(record)
    }

    async fn delete_one(
        &self,
        swift_code: &str,
        bank_name: &str,
        country_iso2: &str,
    ) -> RepositoryResult<()> {
        self.delete_one_sync(swift_code, bank_name, country_iso2)
    }

    async fn find_by_code(&self, swift_code: &str) -> RepositoryResult<SwiftCode> {
        self.find_by_code_sync(swift_code)
    }

    async fn find_branches(&self, hq_code: &str) -> RepositoryResult<Vec<SwiftCode>> {
        self.find_branches_sync(hq_code)
    }

    async fn find_by_country(&self, country_iso2: &str) -> RepositoryResult<Vec<SwiftCode>> {
        self.find_by_country_sync(country_iso2)
    }

    async fn count(&self) -> RepositoryResult<usize> {
        self.count_sync()
    }
}
