// ==========================================
// SWIFT 代码登记服务 - 应用配置
// ==========================================
// 来源: 环境变量（启动时一次性读取）
// ==========================================

use crate::domain::types::HeadquartersPolicy;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// 配置键（环境变量名）
pub mod config_keys {
    pub const DB_PATH: &str = "SWIFT_REGISTRY_DB_PATH";
    pub const BIND_ADDR: &str = "SWIFT_REGISTRY_BIND_ADDR";
    pub const MAX_UPLOAD_BYTES: &str = "SWIFT_REGISTRY_MAX_UPLOAD_BYTES";
    pub const HQ_POLICY: &str = "SWIFT_REGISTRY_HQ_POLICY";
}

/// 默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 默认上传大小上限（20 MiB）
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub db_path: String,
    pub bind_addr: SocketAddr,
    pub max_upload_bytes: usize,
    pub headquarters_policy: HeadquartersPolicy,
}

impl AppConfig {
    /// 从进程环境变量加载
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意 key → value 查找函数加载（空白值视为未设置）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let db_path = get(config_keys::DB_PATH).unwrap_or_else(get_default_db_path);

        let bind_raw = get(config_keys::BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                key: config_keys::BIND_ADDR.to_string(),
                value: bind_raw.clone(),
                message: e.to_string(),
            })?;

        let max_upload_bytes = match get(config_keys::MAX_UPLOAD_BYTES) {
            None => DEFAULT_MAX_UPLOAD_BYTES,
            Some(raw) => raw.parse::<usize>().map_err(|e| ConfigError::InvalidValue {
                key: config_keys::MAX_UPLOAD_BYTES.to_string(),
                value: raw.clone(),
                message: e.to_string(),
            })?,
        };

        let headquarters_policy = match get(config_keys::HQ_POLICY) {
            None => HeadquartersPolicy::default(),
            Some(raw) => HeadquartersPolicy::parse(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: config_keys::HQ_POLICY.to_string(),
                value: raw.clone(),
                message: "应为 derive 或 caller".to_string(),
            })?,
        };

        Ok(Self {
            db_path,
            bind_addr,
            max_upload_bytes,
            headquarters_policy,
        })
    }
}

/// 获取默认数据库路径
///
/// # 返回
/// - 用户数据目录/swift-code-registry/swift_codes.db
/// - 拿不到用户数据目录时: ./swift_codes.db
pub fn get_default_db_path() -> String {
    let mut path = PathBuf::from("./swift_codes.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("swift-code-registry");
        // best-effort: 目录创建失败时回退到当前目录
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("swift_codes.db");
        }
    }

    path.to_string_lossy().to_string()
}
