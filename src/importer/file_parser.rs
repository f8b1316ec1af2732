// ==========================================
// SWIFT 代码登记服务 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xlsm/.xls/.ods) / CSV (.csv)
// 输出: 按列位置排列的原始行（含表头，由导入器跳过）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::swift_code_importer_trait::{FileParser, RawRow};
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// 工作簿扩展名
const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    fn read_rows<R: Read>(&self, reader: R) -> ImportResult<Vec<RawRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false) // 表头由导入器按位置跳过
            .flexible(true) // 允许行长度不一致
            .from_reader(reader);

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            rows.push(RawRow {
                row_number: idx + 1,
                cells: record.iter().map(|v| v.to_string()).collect(),
            });
        }

        Ok(rows)
    }
}

impl FileParser for CsvParser {
    fn parse_file(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;
        let file = File::open(file_path)?;
        self.read_rows(file)
    }

    fn parse_bytes(&self, bytes: &[u8], _file_name: &str) -> ImportResult<Vec<RawRow>> {
        self.read_rows(bytes)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    /// 读取第一个 sheet
    fn read_first_sheet<RS: Read + Seek>(workbook: &mut Sheets<RS>) -> ImportResult<Vec<RawRow>> {
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;
        Ok(Self::range_to_rows(&range))
    }

    /// Range → RawRow
    ///
    /// calamine 的 Range 从首个非空单元格开始，左侧空列需补齐，
    /// 保证单元格下标与表格列位置一致。
    fn range_to_rows(range: &Range<Data>) -> Vec<RawRow> {
        let (start_row, start_col) = match range.start() {
            Some((r, c)) => (r as usize, c as usize),
            None => return Vec::new(),
        };

        range
            .rows()
            .enumerate()
            .map(|(idx, row)| {
                let mut cells = vec![String::new(); start_col];
                cells.extend(row.iter().map(|cell| cell.to_string()));
                RawRow {
                    row_number: start_row + idx + 1,
                    cells,
                }
            })
            .collect()
    }
}

impl FileParser for ExcelParser {
    fn parse_file(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;

        let mut workbook = open_workbook_auto(file_path)?;
        Self::read_first_sheet(&mut workbook)
    }

    fn parse_bytes(&self, bytes: &[u8], _file_name: &str) -> ImportResult<Vec<RawRow>> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        Self::read_first_sheet(&mut workbook)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_file(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        let ext = extension_of(&file_path.to_string_lossy());

        match ext.as_str() {
            "csv" => CsvParser.parse_file(file_path),
            e if WORKBOOK_EXTENSIONS.contains(&e) => ExcelParser.parse_file(file_path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }

    fn parse_bytes(&self, bytes: &[u8], file_name: &str) -> ImportResult<Vec<RawRow>> {
        let ext = extension_of(file_name);

        match ext.as_str() {
            "csv" => CsvParser.parse_bytes(bytes, file_name),
            // 上传文件名可能缺少扩展名，按工作簿格式探测
            "" => ExcelParser.parse_bytes(bytes, file_name),
            e if WORKBOOK_EXTENSIONS.contains(&e) => ExcelParser.parse_bytes(bytes, file_name),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_csv_parser_positional_rows() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(temp_file, "COUNTRY ISO2 CODE,SWIFT CODE,CODE TYPE,NAME").unwrap();
        writeln!(temp_file, "PL, ABCDPLW1 ,BIC8,BankOne,ADDRESS1,CITY1,POLAND,Europe/Warsaw").unwrap();
        writeln!(temp_file, "PL,SHORT").unwrap();

        let rows = CsvParser.parse_file(temp_file.path()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].row_number, 2);
        // 单元格原样保留，不去除空白
        assert_eq!(rows[1].cells[1], " ABCDPLW1 ");
        assert_eq!(rows[1].cells.len(), 8);
        assert_eq!(rows[2].cells.len(), 2);
    }

    #[test]
    fn test_csv_parser_keeps_whitespace_only_cells() {
        let data = "h\nPL,ABCDPLW1,, Bank One ,ADDRESS1,CITY1,POLAND, \n".as_bytes();
        let rows = CsvParser.parse_bytes(data, "codes.csv").unwrap();

        assert_eq!(rows[1].cells.len(), 8);
        assert_eq!(rows[1].cells[3], " Bank One ");
        assert_eq!(rows[1].cells[7], " ");
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_file(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let result = UniversalFileParser.parse_bytes(b"hello", "codes.txt");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_excel_parser_rejects_plain_text() {
        let result = ExcelParser.parse_bytes(b"definitely not a workbook", "codes.xlsx");
        assert!(matches!(result, Err(ImportError::ExcelParseError(_))));
    }

    #[test]
    fn test_universal_parser_csv_bytes_keep_non_ascii() {
        let data = "h1,h2\nPL,ZAŻÓŁĆ GĘŚLĄ\n".as_bytes();
        let rows = UniversalFileParser.parse_bytes(data, "upload.CSV").unwrap();
        assert_eq!(rows[1].cells[1], "ZAŻÓŁĆ GĘŚLĄ");
    }
}
