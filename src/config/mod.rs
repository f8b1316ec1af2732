// ==========================================
// SWIFT 代码登记服务 - 配置层
// ==========================================
// 职责: 启动配置加载（数据库路径、监听地址、上传上限、总行标志策略）
// 存储: 环境变量
// ==========================================

pub mod app_config;

// 重导出核心配置
pub use app_config::{config_keys, get_default_db_path, AppConfig, ConfigError};
