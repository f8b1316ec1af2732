// ==========================================
// SWIFT 代码登记服务 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 启动时幂等建表（CREATE TABLE IF NOT EXISTS），不做版本迁移
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// swift_codes 表及索引
///
/// 说明：
/// - SQLite 不校验 VARCHAR(N)，列宽用 CHECK 约束表达
/// - ux_swift_codes_hq_prefix: 同一 8 位前缀最多一条总行记录
pub const SWIFT_CODES_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS swift_codes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    swift_code TEXT NOT NULL UNIQUE CHECK (length(swift_code) <= 11),
    bank_name TEXT NOT NULL CHECK (length(bank_name) <= 255),
    address TEXT NOT NULL CHECK (length(address) <= 255),
    country_iso2 TEXT NOT NULL CHECK (length(country_iso2) <= 2),
    country_name TEXT NOT NULL CHECK (length(country_name) <= 100),
    is_headquarter INTEGER NOT NULL CHECK (is_headquarter IN (0, 1))
);

CREATE INDEX IF NOT EXISTS idx_swift_codes_prefix
    ON swift_codes (substr(swift_code, 1, 8));

CREATE INDEX IF NOT EXISTS idx_swift_codes_country
    ON swift_codes (country_iso2);

CREATE UNIQUE INDEX IF NOT EXISTS ux_swift_codes_hq_prefix
    ON swift_codes (substr(swift_code, 1, 8))
    WHERE is_headquarter = 1;
"#;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 建表（幂等）
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SWIFT_CODES_SCHEMA)?;
    tracing::debug!("swift_codes 表结构已就绪");
    Ok(())
}

/// 打开连接 + 统一 PRAGMA + 建表
pub fn open_and_prepare(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = open_sqlite_connection(db_path)?;
    ensure_schema(&conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();
        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='swift_codes'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test]
    fn test_column_width_is_enforced() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO swift_codes (swift_code, bank_name, address, country_iso2, country_name, is_headquarter)
             VALUES ('ABCDPLPWXXXTOOLONG', 'B', 'A', 'PL', 'POLAND', 0)",
            [],
        );
        assert!(result.is_err());
    }
}
