// ==========================================
// SWIFT 代码登记服务 - 行规范化器
// ==========================================
// 职责: 原始行 → SwiftCode（纯函数，无 I/O）
// 列位置（0-based）:
//   0 国家代码 | 1 SWIFT 代码 | 2 (未使用) | 3 银行名称
//   4 地址     | 5 城市      | 6 国家名称 | 7 (未使用)
// ==========================================

use crate::domain::swift_code::{is_headquarters_code, SwiftCode};
use crate::importer::swift_code_importer_trait::RowNormalizer;

/// 一行至少需要的已填充列数
pub const MIN_POPULATED_CELLS: usize = 8;

const COL_COUNTRY_ISO2: usize = 0;
const COL_SWIFT_CODE: usize = 1;
const COL_BANK_NAME: usize = 3;
const COL_ADDRESS: usize = 4;
const COL_TOWN: usize = 5;
const COL_COUNTRY_NAME: usize = 6;

/// 地址与城市的连接符
pub const ADDRESS_SEPARATOR: &str = ", ";

/// 已填充列数（忽略行尾空单元格）
pub fn populated_len(cells: &[String]) -> usize {
    cells
        .iter()
        .rposition(|c| !c.is_empty())
        .map(|idx| idx + 1)
        .unwrap_or(0)
}

pub struct SwiftRowNormalizer;

impl RowNormalizer for SwiftRowNormalizer {
    fn normalize(&self, cells: &[String]) -> Option<SwiftCode> {
        if populated_len(cells) < MIN_POPULATED_CELLS {
            return None;
        }

        let swift_code = cells[COL_SWIFT_CODE].clone();
        let is_headquarter = is_headquarters_code(&swift_code);

        Some(SwiftCode {
            address: format!(
                "{}{}{}",
                cells[COL_ADDRESS], ADDRESS_SEPARATOR, cells[COL_TOWN]
            ),
            bank_name: cells[COL_BANK_NAME].clone(),
            country_iso2: cells[COL_COUNTRY_ISO2].to_uppercase(),
            country_name: cells[COL_COUNTRY_NAME].to_uppercase(),
            is_headquarter,
            swift_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_branch_row() {
        let cells = row(&["PL", "ABCDPLW1", "-", "BankOne", "ADDRESS1", "CITY1", "POLAND", "-"]);
        let record = SwiftRowNormalizer.normalize(&cells).unwrap();

        assert_eq!(record.swift_code, "ABCDPLW1");
        assert!(!record.is_headquarter);
        assert_eq!(record.country_iso2, "PL");
        assert_eq!(record.country_name, "POLAND");
        assert_eq!(record.bank_name, "BankOne");
        assert_eq!(record.address, "ADDRESS1, CITY1");
    }

    #[test]
    fn test_headquarters_suffix_any_case() {
        let cells = row(&["bg", "abiebgs1xXx", "", "ABV", "STREET", "VARNA", "Bulgaria", "tz"]);
        let record = SwiftRowNormalizer.normalize(&cells).unwrap();

        assert!(record.is_headquarter);
        // 代码原样保存，只有国家字段大写
        assert_eq!(record.swift_code, "abiebgs1xXx");
        assert_eq!(record.country_iso2, "BG");
        assert_eq!(record.country_name, "BULGARIA");
    }

    #[test]
    fn test_short_row_rejected() {
        let cells = row(&["PL", "ABCDPLW1", "-", "BankOne", "ADDRESS1", "CITY1", "POLAND"]);
        assert!(SwiftRowNormalizer.normalize(&cells).is_none());
        assert!(SwiftRowNormalizer.normalize(&[]).is_none());
    }

    #[test]
    fn test_trailing_empty_cells_do_not_count() {
        let cells = row(&["PL", "ABCDPLW1", "-", "BankOne", "ADDRESS1", "CITY1", "POLAND", "", ""]);
        assert_eq!(populated_len(&cells), 7);
        assert!(SwiftRowNormalizer.normalize(&cells).is_none());
    }

    #[test]
    fn test_text_fields_kept_verbatim() {
        let cells = row(&["pl", "ABCDPLW1", "", " Bank One ", " ADDRESS1", "CITY1 ", "poland", " "]);
        let record = SwiftRowNormalizer.normalize(&cells).unwrap();

        assert_eq!(record.bank_name, " Bank One ");
        assert_eq!(record.address, " ADDRESS1, CITY1 ");
        assert_eq!(record.country_iso2, "PL");
    }

    #[test]
    fn test_whitespace_only_last_cell_counts_as_populated() {
        let cells = row(&["PL", "ABCDPLW1", "", "BankOne", "ADDRESS1", "CITY1", "POLAND", " "]);
        assert_eq!(populated_len(&cells), 8);
        assert!(SwiftRowNormalizer.normalize(&cells).is_some());
    }

    #[test]
    fn test_interior_empty_cells_are_allowed() {
        let cells = row(&["PL", "ABCDPLW1", "", "BankOne", "", "CITY1", "POLAND", "tz"]);
        let record = SwiftRowNormalizer.normalize(&cells).unwrap();
        assert_eq!(record.address, ", CITY1");
    }

    #[test]
    fn test_special_characters_preserved() {
        let cells = row(&["pl", "SPECPLPWXXX", "", "BANK ŁÓDŹ", "ZAŻÓŁĆ GĘŚLĄ 7", "ŁÓDŹ", "polska", "tz"]);
        let record = SwiftRowNormalizer.normalize(&cells).unwrap();
        assert_eq!(record.address, "ZAŻÓŁĆ GĘŚLĄ 7, ŁÓDŹ");
        assert_eq!(record.bank_name, "BANK ŁÓDŹ");
        assert_eq!(record.country_name, "POLSKA");
    }
}
