//! Parser 模块 - 解析按月分节的每日计数报表
//!
//! 此模块提供了完整的报表解析功能,包括:
//! - Section 结构与分节迭代器
//! - 数据行判断与记录提取
//! - 便捷 API 函数

mod api;
pub(crate) mod constants;
pub(crate) mod parse_functions;
pub mod report_parser;
pub mod section;

pub use api::{
    parse_report_from_file, parse_report_from_string, parse_report_from_string_parallel,
    split_sections,
};
pub use parse_functions::{extract_records, parse_row};
pub use report_parser::ReportParser;
pub use section::{Section, Sections};
