// ==========================================
// SWIFT 代码登记服务 - SWIFT 代码领域模型
// ==========================================
// 对齐: swift_codes 表（单表，swift_code 唯一）
// 红线: 总行/分行关系不落库，查询时按前 8 位派生
// ==========================================

use serde::{Deserialize, Serialize};

/// 总行代码后缀（末 3 位）
pub const HEADQUARTERS_SUFFIX: &str = "XXX";

/// 机构+地区前缀长度（前 8 位）
pub const PREFIX_LEN: usize = 8;

// ==========================================
// SwiftCode - 登记记录
// ==========================================
// 用途: 导入层/创建接口写入，查询接口只读
// 约束: country_iso2 / country_name 一律大写存储
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwiftCode {
    #[serde(rename = "address")]
    pub address: String, // 地址（导入时为 "街道, 城市"）

    #[serde(rename = "bankName")]
    pub bank_name: String, // 银行名称

    #[serde(rename = "countryISO2")]
    pub country_iso2: String, // 国家代码（2 位，大写）

    #[serde(rename = "countryName")]
    pub country_name: String, // 国家名称（大写）

    #[serde(rename = "isHeadquarter")]
    pub is_headquarter: bool, // 是否总行

    #[serde(rename = "swiftCode")]
    pub swift_code: String, // SWIFT/BIC 代码（原样保存）
}

impl SwiftCode {
    /// 该记录的 8 位机构前缀
    pub fn prefix(&self) -> &str {
        code_prefix(&self.swift_code)
    }
}

// ==========================================
// SwiftCodeDetail - 按代码查询的返回体
// ==========================================
// 总行: 附带 branches（可能为空数组）
// 分行: 不输出 branches 字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwiftCodeDetail {
    #[serde(flatten)]
    pub record: SwiftCode,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub branches: Option<Vec<SwiftCode>>,
}

impl SwiftCodeDetail {
    /// 总行详情（带分行列表）
    pub fn headquarters(record: SwiftCode, branches: Vec<SwiftCode>) -> Self {
        Self {
            record,
            branches: Some(branches),
        }
    }

    /// 分行详情（无分行列表）
    pub fn branch(record: SwiftCode) -> Self {
        Self {
            record,
            branches: None,
        }
    }
}

// ==========================================
// CountrySwiftCodes - 按国家查询的返回体
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySwiftCodes {
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,

    /// 取第一条匹配记录的国家名称
    #[serde(rename = "countryName")]
    pub country_name: String,

    #[serde(rename = "swiftCodes")]
    pub swift_codes: Vec<SwiftCode>,
}

// ==========================================
// 代码结构辅助函数
// ==========================================

/// 取代码的前 8 位（不足 8 位时返回整个代码）
///
/// 按字符边界截取，非 ASCII 输入不会 panic。
pub fn code_prefix(code: &str) -> &str {
    match code.char_indices().nth(PREFIX_LEN) {
        Some((idx, _)) => &code[..idx],
        None => code,
    }
}

/// 总行判定: 代码大写后以 "XXX" 结尾
pub fn is_headquarters_code(code: &str) -> bool {
    code.to_uppercase().ends_with(HEADQUARTERS_SUFFIX)
}
