// ==========================================
// SWIFT 代码登记服务 - SWIFT 代码 API
// ==========================================
// 职责: 按代码查询（含分行展开）、按国家查询、单条创建、单条删除
// 约束: 国家代码/国家名称统一大写；总行/分行关系查询时按前缀派生
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::swift_code::{CountrySwiftCodes, SwiftCode, SwiftCodeDetail};
use crate::domain::types::HeadquartersPolicy;
use crate::repository::SwiftCodeRepository;

// ==========================================
// 请求体
// ==========================================

/// 创建请求
///
/// 字段全部可选，缺失由 validate 统一报 ValidationError
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSwiftCodeRequest {
    #[serde(rename = "address")]
    pub address: Option<String>,

    #[serde(rename = "bankName")]
    pub bank_name: Option<String>,

    #[serde(rename = "countryISO2")]
    pub country_iso2: Option<String>,

    #[serde(rename = "countryName")]
    pub country_name: Option<String>,

    #[serde(rename = "isHeadquarter")]
    pub is_headquarter: Option<bool>,

    #[serde(rename = "swiftCode")]
    pub swift_code: Option<String>,
}

/// 删除请求（代码取自路径）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteSwiftCodeRequest {
    #[serde(rename = "bankName")]
    pub bank_name: Option<String>,

    #[serde(rename = "countryISO2")]
    pub country_iso2: Option<String>,
}

fn required(field: &str, value: Option<String>) -> ApiResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::ValidationError(format!("缺少必填字段: {}", field))),
    }
}

// ==========================================
// SwiftCodeApi
// ==========================================

/// SWIFT 代码 API
///
/// 职责：
/// 1. 按代码查询（总行附带分行列表）
/// 2. 按国家查询（空结果视为未找到）
/// 3. 单条创建 / 单条删除
pub struct SwiftCodeApi {
    repo: Arc<dyn SwiftCodeRepository>,
    headquarters_policy: HeadquartersPolicy,
}

impl SwiftCodeApi {
    /// 创建新的SwiftCodeApi实例
    ///
    /// # 参数
    /// - repo: 登记表仓储
    /// - headquarters_policy: 创建时总行标志的取值策略
    pub fn new(repo: Arc<dyn SwiftCodeRepository>, headquarters_policy: HeadquartersPolicy) -> Self {
        Self {
            repo,
            headquarters_policy,
        }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 按代码查询
    ///
    /// # 返回
    /// - 总行: 记录 + branches（可能为空）
    /// - 分行: 仅记录本身
    /// - Err(NotFound): 代码不存在
    pub async fn get_swift_code(&self, swift_code: &str) -> ApiResult<SwiftCodeDetail> {
        if swift_code.trim().is_empty() {
            return Err(ApiError::ValidationError("SWIFT 代码不能为空".to_string()));
        }

        let record = self.repo.find_by_code(swift_code).await?;

        if !record.is_headquarter {
            return Ok(SwiftCodeDetail::branch(record));
        }

        let branches = self.repo.find_branches(&record.swift_code).await?;
        debug!(
            swift_code = %record.swift_code,
            branches = branches.len(),
            "总行分行展开完成"
        );
        Ok(SwiftCodeDetail::headquarters(record, branches))
    }

    /// 按国家查询
    ///
    /// # 返回
    /// - Err(NotFound): 该国家没有任何记录
    pub async fn get_by_country(&self, country_iso2: &str) -> ApiResult<CountrySwiftCodes> {
        let iso2 = country_iso2.trim().to_uppercase();
        if iso2.is_empty() {
            return Err(ApiError::ValidationError("国家代码不能为空".to_string()));
        }

        let swift_codes = self.repo.find_by_country(&iso2).await?;

        let country_name = match swift_codes.first() {
            Some(first) => first.country_name.clone(),
            None => {
                return Err(ApiError::NotFound(format!("国家 {} 没有 SWIFT 代码记录", iso2)));
            }
        };

        Ok(CountrySwiftCodes {
            country_iso2: iso2,
            country_name,
            swift_codes,
        })
    }

    // ==========================================
    // 写入接口
    // ==========================================

    /// 创建单条记录
    ///
    /// # 返回
    /// - Ok(SwiftCode): 实际落库的记录
    /// - Err(ValidationError): 缺少必填字段
    /// - Err(Conflict): 代码已存在
    pub async fn create_swift_code(&self, request: CreateSwiftCodeRequest) -> ApiResult<SwiftCode> {
        let swift_code = required("swiftCode", request.swift_code)?;
        let bank_name = required("bankName", request.bank_name)?;
        let address = required("address", request.address)?;
        let country_iso2 = required("countryISO2", request.country_iso2)?;
        let country_name = required("countryName", request.country_name)?;

        let caller_flag = request.is_headquarter.unwrap_or(false);
        let is_headquarter = self.headquarters_policy.resolve(&swift_code, caller_flag);
        if request.is_headquarter.is_some() && caller_flag != is_headquarter {
            warn!(
                swift_code = %swift_code,
                caller_flag,
                derived = is_headquarter,
                "调用方总行标志与代码后缀不一致，按代码后缀处理"
            );
        }

        let record = SwiftCode {
            address,
            bank_name,
            country_iso2: country_iso2.to_uppercase(),
            country_name: country_name.to_uppercase(),
            is_headquarter,
            swift_code,
        };

        self.repo.insert_one(&record).await?;
        info!(swift_code = %record.swift_code, "SWIFT 代码已创建");
        Ok(record)
    }

    /// 删除单条记录
    ///
    /// 代码、银行名称、国家代码三者同时匹配才删除
    ///
    /// # 返回
    /// - Err(NotFound): 没有匹配记录（三者任一不符都是同一错误）
    pub async fn delete_swift_code(
        &self,
        swift_code: &str,
        request: DeleteSwiftCodeRequest,
    ) -> ApiResult<()> {
        let bank_name = required("bankName", request.bank_name)?;
        let country_iso2 = required("countryISO2", request.country_iso2)?.to_uppercase();

        self.repo
            .delete_one(swift_code, &bank_name, &country_iso2)
            .await?;
        info!(swift_code = %swift_code, "SWIFT 代码已删除");
        Ok(())
    }
}
