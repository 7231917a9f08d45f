//! # Daily Report Parser
//!
//! 把半结构化的每日计数文本报表（按月份分节、按年份分列）解析为规范化的表格记录，
//! 并输出为 CSV。
//!
//! ## 功能特性
//!
//! - **零拷贝分节**: 分节直接借用原始文档，分节头正则只编译一次
//! - **严格的数据行过滤**: 标题行、空行、脚注自动跳过，不当作错误
//! - **确定性输出**: 记录按文档顺序排列，同样的输入总是得到逐字节相同的表格
//! - **可选并行**: 分节之间没有共享状态，可以在 rayon 线程池上逐节提取
//!
//! ## 快速开始
//!
//! ### 解析字符串
//!
//! ```rust
//! use daily_report_parser::parse_report_from_string;
//!
//! let report = "JAN Y2015 Y2016 Y2017*\n1 10 20 -5\nfootnote text\n2 11 21 6\n";
//! let records = parse_report_from_string(report).unwrap();
//!
//! for record in &records {
//!     println!("{} {}: {:?}", record.month, record.day, record.values());
//! }
//! assert_eq!(records.len(), 2);
//! ```
//!
//! ### 文件到文件
//!
//! ```rust,no_run
//! use daily_report_parser::{ReportParser, convert_file};
//!
//! let parser = ReportParser::default();
//! let summary = convert_file("nytdata.txt", "nytdata_converted.csv", &parser, false).unwrap();
//! println!("写出 {} 条记录", summary.records);
//! ```
//!
//! ## 报表格式
//!
//! 每个月份分节以分节头开始，之后是若干数据行：
//!
//! ```text
//! JAN     Y2015   Y2016   Y2017*
//! Day
//! 1       10      20      -5
//! 2       11      21      6
//! * provisional
//! ```
//!
//! 输出表格：
//!
//! ```text
//! Month,Day,Y2015,Y2016,Y2017
//! JAN,1,10,20,-5
//! JAN,2,11,21,6
//! ```

pub mod error;
pub mod parser;
pub mod parser_config;
pub mod pipeline;
pub mod record;
pub mod tools;
pub mod writer;

pub use error::ParseError;
pub use parser::{
    ReportParser,
    Section,
    Sections,
    extract_records,
    parse_report_from_file,
    parse_report_from_string,
    parse_report_from_string_parallel,
    parse_row,
    split_sections,
};
pub use parser_config::LayoutConfig;
pub use pipeline::{ConversionSummary, convert_file};
pub use record::DailyRecord;
pub use tools::is_data_row;
pub use writer::{render_table, write_table, write_table_to_file};
