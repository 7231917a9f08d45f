//! 表格输出
//!
//! 把每日记录写成带表头的分隔符文本表格：一行表头，每条记录一行，
//! 字段顺序与记录一致，不带行索引列。

use csv::{Terminator, WriterBuilder};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::ParseError;
use crate::parser_config::LayoutConfig;
use crate::record::DailyRecord;

/// 把记录写入任意 `Write`
///
/// 行结束符固定为 `\n`，同样的输入总是产生逐字节相同的输出。
pub fn write_table<W: Write>(
    records: &[DailyRecord],
    layout: &LayoutConfig,
    writer: W,
) -> Result<(), ParseError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(layout.delimiter)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(layout.columns())?;
    for record in records {
        wtr.write_record([
            record.month.clone(),
            record.day.to_string(),
            record.value_a.to_string(),
            record.value_b.to_string(),
            record.value_c.to_string(),
        ])?;
    }

    wtr.flush()
        .map_err(|e| ParseError::WriteError(e.to_string()))
}

/// 在内存中渲染完整表格
pub fn render_table(records: &[DailyRecord], layout: &LayoutConfig) -> Result<Vec<u8>, ParseError> {
    let mut buf = Vec::with_capacity(32 * (records.len() + 1));
    write_table(records, layout, &mut buf)?;
    Ok(buf)
}

/// 把表格写入文件
///
/// 表格先在内存中完整渲染，再一次性写入，渲染失败时不会留下半个文件。
pub fn write_table_to_file<P: AsRef<Path>>(
    records: &[DailyRecord],
    layout: &LayoutConfig,
    path: P,
) -> Result<(), ParseError> {
    let path = path.as_ref();
    let table = render_table(records, layout)?;
    fs::write(path, table)
        .map_err(|e| ParseError::WriteError(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DailyRecord> {
        vec![
            DailyRecord::new("JAN", 1, 10, 20, -5),
            DailyRecord::new("JAN", 2, 11, 21, 6),
        ]
    }

    #[test]
    fn test_header_and_rows() {
        let out = render_table(&sample(), &LayoutConfig::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Month,Day,Y2015,Y2016,Y2017\nJAN,1,10,20,-5\nJAN,2,11,21,6\n"
        );
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let out = render_table(&[], &LayoutConfig::default()).unwrap();
        assert_eq!(out, b"Month,Day,Y2015,Y2016,Y2017\n");
    }

    #[test]
    fn test_custom_delimiter_and_years() {
        let layout = LayoutConfig::default()
            .with_year_markers(["Y2018", "Y2019", "Y2020*"])
            .with_delimiter(b';');
        let out = render_table(&sample()[..1], &layout).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Month;Day;Y2018;Y2019;Y2020\nJAN;1;10;20;-5\n"
        );
    }
}
