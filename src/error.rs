//! 错误类型定义
//!
//! 定义了报表解析与表格输出过程中可能出现的所有错误类型。

use thiserror::Error;

/// 解析错误类型
///
/// 包含了读取报表、解析数据行以及写出表格时可能遇到的所有错误情况。
/// 所有载荷都是拥有所有权的 `String`，因此错误本身可以 `Clone` 和比较。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// 文件未找到或无法访问
    #[error("file not found or inaccessible: {0}")]
    FileNotFound(String),

    /// 整数解析失败
    ///
    /// 数据行已经通过行模式检查，但某个字段仍无法解析为整数
    /// （例如 `4x` 或超出 `i64` 范围的数字）。
    #[error("failed to parse {field} as integer: {value} (line: '{line}')")]
    IntParseError {
        /// 字段名
        field: String,
        /// 字段值
        value: String,
        /// 原始数据行
        line: String,
    },

    /// 报表布局配置无效
    #[error("invalid report layout: {0}")]
    InvalidLayout(String),

    /// 输出表格写入失败
    #[error("failed to write output table: {0}")]
    WriteError(String),
}

impl From<csv::Error> for ParseError {
    fn from(err: csv::Error) -> Self {
        ParseError::WriteError(err.to_string())
    }
}
