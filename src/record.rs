/// 每日计数记录
///
/// 表示输出表格中的一行：某个月份中某一天在三个年份列上的取值。
/// 记录在构造后不再修改，并按文档顺序累积（先按月份出现顺序，再按分节内的行顺序）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyRecord {
    /// 月份标签，如 "JAN"、"SEPT"
    pub month: String,

    /// 日期（当月第几天）
    pub day: i64,

    /// 第一个年份列的计数
    pub value_a: i64,

    /// 第二个年份列的计数
    pub value_b: i64,

    /// 第三个年份列的计数，可能为负数
    pub value_c: i64,
}

impl DailyRecord {
    pub fn new(month: impl Into<String>, day: i64, value_a: i64, value_b: i64, value_c: i64) -> Self {
        Self {
            month: month.into(),
            day,
            value_a,
            value_b,
            value_c,
        }
    }

    /// 按列顺序返回三个年份列的取值
    pub fn values(&self) -> [i64; 3] {
        [self.value_a, self.value_b, self.value_c]
    }
}
