//! 报表布局配置模块
//!
//! 描述分节头的形状（月份标记长度、三个年份标记）以及输出表格的分隔符，
//! 使得年份列变化时只需更新配置，而不需要修改核心解析逻辑。

use crate::error::ParseError;
use crate::parser::constants::{
    DAY_COLUMN, DEFAULT_DELIMITER, DEFAULT_MAX_MONTH_LEN, DEFAULT_MIN_MONTH_LEN,
    DEFAULT_YEAR_MARKERS, MONTH_COLUMN, PROVISIONAL_SUFFIX,
};

/// 报表布局配置
///
/// 默认值对应的分节头形如 `JAN  Y2015  Y2016  Y2017*`，
/// 输出列为 `Month,Day,Y2015,Y2016,Y2017`。
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// 月份标记（大写字母）的最小长度
    pub min_month_len: usize,

    /// 月份标记（大写字母）的最大长度
    pub max_month_len: usize,

    /// 分节头中紧跟月份标记的三个年份标记，按列顺序排列
    pub year_markers: [String; 3],

    /// 输出表格的字段分隔符
    pub delimiter: u8,
}

impl LayoutConfig {
    /// 每日计数报表的默认布局
    pub fn nyt_default() -> Self {
        Self {
            min_month_len: DEFAULT_MIN_MONTH_LEN,
            max_month_len: DEFAULT_MAX_MONTH_LEN,
            year_markers: DEFAULT_YEAR_MARKERS.map(String::from),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// 替换三个年份标记
    pub fn with_year_markers<S: Into<String>>(mut self, markers: [S; 3]) -> Self {
        self.year_markers = markers.map(Into::into);
        self
    }

    /// 设置输出分隔符
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// 生成分节头正则
    ///
    /// 年份标记会被转义，因此 `Y2017*` 中的星号按字面匹配。
    pub fn header_pattern(&self) -> String {
        let [first, second, third] = &self.year_markers;
        format!(
            r"\b[A-Z]{{{},{}}}\s+{}\s+{}\s+{}",
            self.min_month_len,
            self.max_month_len,
            regex::escape(first),
            regex::escape(second),
            regex::escape(third),
        )
    }

    /// 输出表格的列名：`Month`、`Day`，再加上去掉星号后缀的年份标记
    pub fn columns(&self) -> [String; 5] {
        let [first, second, third] = &self.year_markers;
        let column = |marker: &String| marker.trim_end_matches(PROVISIONAL_SUFFIX).to_string();
        [
            MONTH_COLUMN.to_string(),
            DAY_COLUMN.to_string(),
            column(first),
            column(second),
            column(third),
        ]
    }

    /// 检查布局是否自洽
    ///
    /// # 错误
    ///
    /// 以下情况返回 `ParseError::InvalidLayout`：
    /// - 月份标记最小长度为 0，或最小长度大于最大长度
    /// - 年份标记为空或包含空白字符
    /// - 分隔符会与字段内容、CSV 引号或换行冲突
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.min_month_len == 0 {
            return Err(ParseError::InvalidLayout(
                "month token length must be at least 1".to_string(),
            ));
        }
        if self.min_month_len > self.max_month_len {
            return Err(ParseError::InvalidLayout(format!(
                "month token length range is empty: {}..={}",
                self.min_month_len, self.max_month_len
            )));
        }

        for marker in &self.year_markers {
            if marker.is_empty() {
                return Err(ParseError::InvalidLayout("empty year marker".to_string()));
            }
            if marker.chars().any(char::is_whitespace) {
                return Err(ParseError::InvalidLayout(format!(
                    "year marker contains whitespace: '{}'",
                    marker
                )));
            }
        }

        let d = self.delimiter;
        if !d.is_ascii()
            || d.is_ascii_alphanumeric()
            || matches!(d, b'-' | b'"' | b'\n' | b'\r')
        {
            return Err(ParseError::InvalidLayout(format!(
                "unusable delimiter: {:?}",
                char::from(d)
            )));
        }

        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::nyt_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::constants::DEFAULT_HEADER_PATTERN;

    #[test]
    fn test_default_layout() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.min_month_len, 3);
        assert_eq!(layout.max_month_len, 4);
        assert_eq!(layout.year_markers[2], "Y2017*");
        assert_eq!(layout.delimiter, b',');
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_default_header_pattern_matches_constant() {
        assert_eq!(LayoutConfig::nyt_default().header_pattern(), DEFAULT_HEADER_PATTERN);
    }

    #[test]
    fn test_columns_strip_provisional_suffix() {
        let columns = LayoutConfig::default().columns();
        assert_eq!(columns, ["Month", "Day", "Y2015", "Y2016", "Y2017"].map(String::from));

        let custom = LayoutConfig::default().with_year_markers(["Y2018", "Y2019*", "Y2020**"]);
        assert_eq!(custom.columns()[3], "Y2019");
        assert_eq!(custom.columns()[4], "Y2020");
    }

    #[test]
    fn test_custom_markers_are_escaped() {
        let layout = LayoutConfig::default().with_year_markers(["A.1", "B+2", "C?3"]);
        assert_eq!(layout.header_pattern(), r"\b[A-Z]{3,4}\s+A\.1\s+B\+2\s+C\?3");
    }

    #[test]
    fn test_invalid_layouts() {
        let cases = [
            LayoutConfig {
                min_month_len: 0,
                ..LayoutConfig::default()
            },
            LayoutConfig {
                min_month_len: 5,
                max_month_len: 4,
                ..LayoutConfig::default()
            },
            LayoutConfig::default().with_year_markers(["Y2015", "", "Y2017"]),
            LayoutConfig::default().with_year_markers(["Y2015", "Y 2016", "Y2017"]),
            LayoutConfig::default().with_delimiter(b'\n'),
            LayoutConfig::default().with_delimiter(b'7'),
            LayoutConfig::default().with_delimiter(b'-'),
            LayoutConfig::default().with_delimiter(b'"'),
        ];
        for layout in &cases {
            assert!(
                matches!(layout.validate(), Err(ParseError::InvalidLayout(_))),
                "Should reject: {:?}",
                layout
            );
        }
    }

    #[test]
    fn test_alternative_delimiters_accepted() {
        for d in [b';', b'\t', b'|'] {
            assert!(LayoutConfig::default().with_delimiter(d).validate().is_ok());
        }
    }
}
