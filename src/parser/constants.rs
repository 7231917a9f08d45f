//! 解析器使用的常量定义
//!
//! 定义了默认报表布局、输出列名以及行模式相关的常量。

use once_cell::sync::Lazy;
use regex::Regex;

// 默认布局相关常量

/// 月份标记的最小长度（如 "JAN"）
pub const DEFAULT_MIN_MONTH_LEN: usize = 3;

/// 月份标记的最大长度（如 "SEPT"）
pub const DEFAULT_MAX_MONTH_LEN: usize = 4;

/// 默认的三个年份标记，最后一个带有表示临时数据的星号
pub const DEFAULT_YEAR_MARKERS: [&str; 3] = ["Y2015", "Y2016", "Y2017*"];

/// 默认输出分隔符
pub const DEFAULT_DELIMITER: u8 = b',';

/// 年份标记上表示临时数据的后缀，输出列名中会去掉
pub const PROVISIONAL_SUFFIX: char = '*';

/// 默认分节头正则
///
/// 必须与 `LayoutConfig::nyt_default().header_pattern()` 保持一致。
pub const DEFAULT_HEADER_PATTERN: &str = r"\b[A-Z]{3,4}\s+Y2015\s+Y2016\s+Y2017\*";

// 使用 Lazy 静态初始化默认分节头正则，避免每次解析时重新编译

/// 预编译的默认分节头正则
pub static DEFAULT_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_HEADER_PATTERN).expect("default header pattern is valid"));

// 输出列相关常量

/// 月份列名
pub const MONTH_COLUMN: &str = "Month";

/// 日期列名
pub const DAY_COLUMN: &str = "Day";

// 数据行相关常量

/// 数据行中被消费的字段数量（日期 + 三个年份值）
pub const ROW_FIELD_COUNT: usize = 4;

/// 数据行字段名（用于错误信息）
pub static ROW_FIELD_NAMES: [&str; ROW_FIELD_COUNT] = ["day", "value_a", "value_b", "value_c"];
