// ==========================================
// SWIFT 代码登记服务 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 总行标志策略 (Headquarters Policy)
// ==========================================
// 导入路径: 始终由代码后缀派生
// 创建路径: 由本策略决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeadquartersPolicy {
    /// 忽略调用方传入的标志，按 "XXX" 后缀派生
    #[default]
    DeriveFromCode,
    /// 原样采用调用方传入的标志
    TrustCaller,
}

impl HeadquartersPolicy {
    /// 从配置字符串解析（derive / caller）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "derive" | "derive_from_code" => Some(HeadquartersPolicy::DeriveFromCode),
            "caller" | "trust_caller" => Some(HeadquartersPolicy::TrustCaller),
            _ => None,
        }
    }

    /// 决定最终写入的总行标志
    pub fn resolve(&self, swift_code: &str, caller_flag: bool) -> bool {
        match self {
            HeadquartersPolicy::DeriveFromCode => {
                crate::domain::swift_code::is_headquarters_code(swift_code)
            }
            HeadquartersPolicy::TrustCaller => caller_flag,
        }
    }
}

impl fmt::Display for HeadquartersPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadquartersPolicy::DeriveFromCode => write!(f, "derive"),
            HeadquartersPolicy::TrustCaller => write!(f, "caller"),
        }
    }
}
