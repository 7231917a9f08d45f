//! 端到端转换：读取报表文件，解析为每日记录，写出表格文件。

use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::ParseError;
use crate::parser::ReportParser;
use crate::parser::report_parser::read_report;
use crate::writer::write_table_to_file;

/// 一次转换的结果摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// 识别出的月份分节数
    pub sections: usize,

    /// 写出的记录数（不含表头）
    pub records: usize,

    /// 输出文件路径
    pub output: PathBuf,
}

/// 把报表文件转换为表格文件
///
/// 先完整读取并解析输入，全部成功后才写输出文件；
/// 读取或解析出错时输出文件不会被创建或改动。
///
/// # 参数
///
/// * `input` - 报表文本文件路径
/// * `output` - 输出表格文件路径
/// * `parser` - 解析器（决定报表布局与输出分隔符）
/// * `parallel` - 是否按分节并行提取
pub fn convert_file<P, Q>(
    input: P,
    output: Q,
    parser: &ReportParser,
    parallel: bool,
) -> Result<ConversionSummary, ParseError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    let text = read_report(input)?;
    let sections = parser.sections(&text).count();
    let records = if parallel {
        parser.parse_str_parallel(&text)?
    } else {
        parser.parse_str(&text)?
    };

    write_table_to_file(&records, parser.layout(), output)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        sections,
        records = records.len(),
        "report converted"
    );

    Ok(ConversionSummary {
        sections,
        records: records.len(),
        output: output.to_path_buf(),
    })
}
