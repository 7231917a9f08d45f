//! ReportParser - 按布局配置把报表文本解析为每日记录
//!
//! 持有布局配置与预编译的分节头正则，先切分分节，再逐节提取数据行。

use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::ParseError;
use crate::parser::constants::DEFAULT_HEADER_RE;
use crate::parser::parse_functions::extract_records;
use crate::parser::section::{Section, Sections};
use crate::parser_config::LayoutConfig;
use crate::record::DailyRecord;

/// 报表解析器
///
/// # 示例
///
/// ```
/// use daily_report_parser::ReportParser;
///
/// let parser = ReportParser::default();
/// let text = "JAN Y2015 Y2016 Y2017*\n1 5 6 7\nFEB Y2015 Y2016 Y2017*\n1 8 9 10\n";
/// let records = parser.parse_str(text).unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].month, "FEB");
/// assert_eq!(records[1].value_c, 10);
/// ```
#[derive(Debug, Clone)]
pub struct ReportParser {
    layout: LayoutConfig,
    header_re: Regex,
}

impl ReportParser {
    /// 按给定布局创建解析器
    ///
    /// # 错误
    ///
    /// 布局不自洽或分节头正则无法编译时返回 `ParseError::InvalidLayout`。
    pub fn new(layout: LayoutConfig) -> Result<Self, ParseError> {
        layout.validate()?;
        let header_re = Regex::new(&layout.header_pattern())
            .map_err(|e| ParseError::InvalidLayout(e.to_string()))?;
        Ok(Self { layout, header_re })
    }

    /// 当前使用的布局配置
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// 按分节头切分文档
    pub fn sections<'r, 'h>(&'r self, text: &'h str) -> Sections<'r, 'h> {
        Sections::new(&self.header_re, text)
    }

    /// 解析整篇报表文本
    ///
    /// 记录按文档顺序返回：先按月份出现的顺序，再按分节内的行顺序。
    /// 任一数据行解析失败都会中止整个解析，不返回部分结果。
    pub fn parse_str(&self, text: &str) -> Result<Vec<DailyRecord>, ParseError> {
        self.sections(text)
            .try_fold(Vec::new(), |mut records, section| {
                records.extend(extract_section(&section)?);
                Ok(records)
            })
    }

    /// 并行解析整篇报表文本
    ///
    /// 各分节之间没有共享状态，因此在 rayon 线程池上逐节提取，
    /// 再按分节原顺序拼接。结果与 [`parse_str`](Self::parse_str) 完全一致；
    /// 多个分节出错时返回文档中最靠前的那个错误。
    pub fn parse_str_parallel(&self, text: &str) -> Result<Vec<DailyRecord>, ParseError> {
        let sections: Vec<Section<'_>> = self.sections(text).collect();

        let per_section: Vec<Result<Vec<DailyRecord>, ParseError>> =
            sections.par_iter().map(extract_section).collect();

        let mut records = Vec::new();
        for result in per_section {
            records.extend(result?);
        }
        Ok(records)
    }

    /// 读取整个文件并解析
    ///
    /// 文件内容一次性读入内存，按 UTF-8 解码。
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<DailyRecord>, ParseError> {
        let text = read_report(path.as_ref())?;
        self.parse_str(&text)
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::nyt_default(),
            header_re: DEFAULT_HEADER_RE.clone(),
        }
    }
}

/// 提取单个分节并记录调试事件
fn extract_section(section: &Section<'_>) -> Result<Vec<DailyRecord>, ParseError> {
    let records = extract_records(section)?;
    debug!(
        month = section.label,
        body_len = section.body.len(),
        records = records.len(),
        skipped = section.lines().count().saturating_sub(records.len()),
        "section parsed"
    );
    Ok(records)
}

/// 读取报表文件全文
pub(crate) fn read_report(path: &Path) -> Result<String, ParseError> {
    fs::read_to_string(path)
        .map_err(|e| ParseError::FileNotFound(format!("{}: {}", path.display(), e)))
}
