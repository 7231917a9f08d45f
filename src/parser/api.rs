//! 便捷 API 函数
//!
//! 提供了一组使用默认报表布局的高层 API，用于快速解析每日计数报表。

use once_cell::sync::Lazy;
use std::path::Path;

use crate::error::ParseError;
use crate::parser::report_parser::ReportParser;
use crate::parser::section::Sections;
use crate::record::DailyRecord;

static DEFAULT_PARSER: Lazy<ReportParser> = Lazy::new(ReportParser::default);

/// 使用默认布局按分节头切分文档
///
/// # 示例
///
/// ```
/// use daily_report_parser::split_sections;
///
/// let text = "preamble\nJAN Y2015 Y2016 Y2017*\n1 5 6 7\nFEB Y2015 Y2016 Y2017*\n";
/// let sections: Vec<_> = split_sections(text).collect();
///
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[0].label, "JAN");
/// assert_eq!(sections[0].body, "\n1 5 6 7\n");
/// assert_eq!(sections[1].body, "\n");
/// ```
pub fn split_sections(text: &str) -> Sections<'static, '_> {
    DEFAULT_PARSER.sections(text)
}

/// 使用默认布局解析报表文本
///
/// # 示例
///
/// ```
/// use daily_report_parser::parse_report_from_string;
///
/// let text = "JAN Y2015 Y2016 Y2017*\n1 10 20 -5\nfootnote text\n2 11 21 6\n";
/// let records = parse_report_from_string(text)?;
///
/// assert_eq!(records.len(), 2);
/// assert_eq!((records[0].day, records[0].value_c), (1, -5));
/// assert_eq!((records[1].day, records[1].value_c), (2, 6));
/// # Ok::<(), daily_report_parser::ParseError>(())
/// ```
pub fn parse_report_from_string(text: &str) -> Result<Vec<DailyRecord>, ParseError> {
    DEFAULT_PARSER.parse_str(text)
}

/// 使用默认布局并行解析报表文本
///
/// 结果与 [`parse_report_from_string`] 相同，适合分节很多的大报表。
pub fn parse_report_from_string_parallel(text: &str) -> Result<Vec<DailyRecord>, ParseError> {
    DEFAULT_PARSER.parse_str_parallel(text)
}

/// 使用默认布局读取并解析报表文件
///
/// # 返回
///
/// * `Ok(Vec<DailyRecord>)` - 按文档顺序排列的记录
/// * `Err(ParseError::FileNotFound)` - 文件不存在、无法读取或不是合法 UTF-8
/// * `Err(ParseError::IntParseError)` - 数据行字段无法解析
///
/// # 示例
///
/// ```no_run
/// use daily_report_parser::parse_report_from_file;
///
/// let records = parse_report_from_file("nytdata.txt")?;
/// for record in records.iter().take(10) {
///     println!("{} {}: {:?}", record.month, record.day, record.values());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_report_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<DailyRecord>, ParseError> {
    DEFAULT_PARSER.parse_file(path)
}

