// ==========================================
// SWIFT 代码登记服务 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 生命周期: 进程启动时打开唯一连接,随进程退出释放
// ==========================================

use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use tracing::info;

use crate::api::{ImportApi, SwiftCodeApi};
use crate::config::AppConfig;
use crate::importer::{SwiftCodeImporter, SwiftCodeImporterImpl};
use crate::repository::{
    RepositoryError, RepositoryResult, SwiftCodeRepository, SwiftCodeRepositoryImpl,
};

/// 应用状态
///
/// 包含所有API实例和共享资源,作为 axum 路由状态克隆到各个请求
#[derive(Clone)]
pub struct AppState {
    /// 启动配置
    pub config: Arc<AppConfig>,

    /// SWIFT 代码API
    pub swift_code_api: Arc<SwiftCodeApi>,

    /// 导入API
    pub import_api: Arc<ImportApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - config: 启动配置（数据库路径取自 config.db_path）
    ///
    /// # 返回
    /// - Ok(AppState): 成功创建
    /// - Err(RepositoryError): 数据库打开或建表失败
    pub fn new(config: AppConfig) -> RepositoryResult<Self> {
        info!(db_path = %config.db_path, "初始化应用状态");

        let conn = crate::db::open_and_prepare(&config.db_path).map_err(|e| {
            RepositoryError::DatabaseConnectionError(format!(
                "无法打开数据库 {}: {}",
                config.db_path, e
            ))
        })?;

        Ok(Self::with_connection(config, Arc::new(Mutex::new(conn))))
    }

    /// 使用已准备好的连接创建（表结构须已存在）
    pub fn with_connection(config: AppConfig, conn: Arc<Mutex<Connection>>) -> Self {
        // 仓储与导入器共享同一连接
        let repo: Arc<dyn SwiftCodeRepository> =
            Arc::new(SwiftCodeRepositoryImpl::from_connection(conn));

        let importer: Arc<dyn SwiftCodeImporter> =
            Arc::new(SwiftCodeImporterImpl::with_defaults(repo.clone()));

        let swift_code_api = Arc::new(SwiftCodeApi::new(repo, config.headquarters_policy));
        let import_api = Arc::new(ImportApi::new(importer));

        info!(
            headquarters_policy = %config.headquarters_policy,
            max_upload_bytes = config.max_upload_bytes,
            "应用状态初始化完成"
        );

        Self {
            config: Arc::new(config),
            swift_code_api,
            import_api,
        }
    }
}
