//! 核心解析函数
//!
//! 包含了把分节正文解析为每日记录的函数：数据行判断、字段拆分、整数解析。

use crate::error::ParseError;
use crate::parser::constants::{ROW_FIELD_COUNT, ROW_FIELD_NAMES};
use crate::parser::section::Section;
use crate::record::DailyRecord;
use crate::tools::is_data_row;

/// 从一个分节中提取所有每日记录
///
/// 不满足数据行模式的行（标题行、空行、脚注、列标题行）会被静默跳过，
/// 这是有意的过滤而不是错误。
///
/// # 参数
///
/// * `section` - 月份分节
///
/// # 返回
///
/// * `Ok(Vec<DailyRecord>)` - 按行顺序排列的记录，分节为空时返回空列表
/// * `Err(ParseError)` - 某行通过了模式检查，但字段无法解析为整数
///
/// # 示例
///
/// ```
/// use daily_report_parser::{Section, extract_records};
///
/// let section = Section::new("JAN", "\n1 10 20 -5\nfootnote text\n2 11 21 6\n");
/// let records = extract_records(&section).unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].month, "JAN");
/// assert_eq!(records[0].value_c, -5);
/// ```
pub fn extract_records(section: &Section<'_>) -> Result<Vec<DailyRecord>, ParseError> {
    let mut records = Vec::new();
    for line in section.lines() {
        if let Some(record) = parse_row(section.label, line)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// 解析单行文本
///
/// # 返回
///
/// * `Ok(Some(DailyRecord))` - 数据行解析成功
/// * `Ok(None)` - 该行不是数据行，应当跳过
/// * `Err(ParseError::IntParseError)` - 该行通过了模式检查但字段解析失败
pub fn parse_row(month: &str, line: &str) -> Result<Option<DailyRecord>, ParseError> {
    if !is_data_row(line) {
        return Ok(None);
    }

    let trimmed = line.trim();
    let mut fields = trimmed.split_ascii_whitespace();
    let mut values = [0i64; ROW_FIELD_COUNT];

    // 只消费前四个字段，多余字段忽略
    for (slot, name) in values.iter_mut().zip(ROW_FIELD_NAMES) {
        let raw = fields.next().unwrap_or_default();
        *slot = parse_field(name, raw, trimmed)?;
    }

    let [day, value_a, value_b, value_c] = values;
    Ok(Some(DailyRecord::new(month, day, value_a, value_b, value_c)))
}

/// 解析单个整数字段
///
/// 不做任何宽松转换：`4x`、超出 `i64` 范围的数字都会返回错误。
pub(crate) fn parse_field(field: &str, value: &str, line: &str) -> Result<i64, ParseError> {
    value.parse::<i64>().map_err(|_| ParseError::IntParseError {
        field: field.to_string(),
        value: value.to_string(),
        line: line.to_string(),
    })
}
