use memchr::memchr_iter;

use crate::parser::constants::ROW_FIELD_COUNT;

// 预定义的字节常量，避免重复创建
const MINUS_BYTE: u8 = b'-';
const NEWLINE_BYTE: u8 = b'\n';
const CR_BYTE: u8 = b'\r';

/// 返回 `bytes` 开头连续 ASCII 数字的个数
#[inline(always)]
fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// 返回 `bytes` 开头连续 ASCII 空白的个数
#[inline(always)]
fn leading_whitespace(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_whitespace()).count()
}

///
/// 判断一行文本是否为数据行。
///
/// 判断标准
/// 1. 行首尾空白不参与判断。
/// 2. 行首依次为：非负整数、空白、非负整数、空白、非负整数、空白、可带负号的整数。
/// 3. 只有第四个整数允许带 `-` 号，前三个不允许任何符号。
/// 4. 第四个整数之后的内容不参与判断（前缀匹配），多余字段在解析时被忽略。
///
/// 标题行、空行、脚注、列标题行都不满足该模式，会被静默跳过。
pub fn is_data_row(line: &str) -> bool {
    let bytes = line.trim().as_bytes();
    let mut pos = 0;

    for field in 0..ROW_FIELD_COUNT {
        let is_last = field + 1 == ROW_FIELD_COUNT;

        if is_last && bytes.get(pos) == Some(&MINUS_BYTE) {
            pos += 1;
        }

        let digits = leading_digits(&bytes[pos..]);
        if digits == 0 {
            return false;
        }
        pos += digits;

        if !is_last {
            let spaces = leading_whitespace(&bytes[pos..]);
            if spaces == 0 {
                return false;
            }
            pos += spaces;
        }
    }

    true
}

/// 按 `\n` 切分文本，并去掉每行末尾的 `\r`
///
/// 与 `str::split('\n')` 一样，末尾换行之后会产生一个空行；
/// 空行不是数据行，对结果没有影响。
pub fn lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut start = 0;
    memchr_iter(NEWLINE_BYTE, text.as_bytes())
        .map(Some)
        .chain(std::iter::once(None))
        .map(move |newline| {
            let end = newline.unwrap_or(text.len());
            let line = &text[start..end];
            start = end + 1;
            line.strip_suffix(CR_BYTE as char).unwrap_or(line)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    mod data_row_tests {
        use super::*;

        #[test]
        fn valid_rows() {
            let valid_cases = [
                "1 10 20 -5",
                "2 11 21 6",
                "31   1234   5678   90",
                "1\t2\t3\t4",
                "  7 8 9 10  ",
                "0 0 0 0",
                "15 100 200 -300",
            ];
            for line in &valid_cases {
                assert!(is_data_row(line), "Failed for: {:?}", line);
            }
        }

        #[test]
        fn trailing_content_is_allowed() {
            // 第四个整数之后的内容不影响判断
            let cases = ["1 2 3 4 5", "1 2 3 4 extra text", "1 2 3 -4 *", "1 2 3 4x"];
            for line in &cases {
                assert!(is_data_row(line), "Failed for: {:?}", line);
            }
        }

        #[test]
        fn too_few_fields() {
            let invalid_cases = ["", "   ", "1", "1 2", "1 2 3", "1 2 3 ", "1 2 3 -"];
            for line in &invalid_cases {
                assert!(!is_data_row(line), "Should fail for: {:?}", line);
            }
        }

        #[test]
        fn non_numeric_fields() {
            let invalid_cases = [
                "1 10 twenty -5",
                "one 10 20 -5",
                "1 ten 20 -5",
                "1 10 20 five",
                "JAN Y2015 Y2016 Y2017*",
                "Day 2015 2016 2017",
                "footnote text",
            ];
            for line in &invalid_cases {
                assert!(!is_data_row(line), "Should fail for: {:?}", line);
            }
        }

        #[test]
        fn sign_only_allowed_on_last_field() {
            let invalid_cases = ["-1 2 3 4", "1 -2 3 4", "1 2 -3 4", "+1 2 3 4", "1 2 3 +4", "1 2 3 --4"];
            for line in &invalid_cases {
                assert!(!is_data_row(line), "Should fail for: {:?}", line);
            }
        }

        #[test]
        fn fields_must_be_separated() {
            let invalid_cases = ["1,2,3,4", "1-2 3 4", "12 3 4-5", "1 2 3-4"];
            for line in &invalid_cases {
                assert!(!is_data_row(line), "Should fail for: {:?}", line);
            }
        }
    }

    mod lines_tests {
        use super::*;

        #[test]
        fn splits_on_newline() {
            let v: Vec<_> = lines("a\nb\nc").collect();
            assert_eq!(v, ["a", "b", "c"]);
        }

        #[test]
        fn trailing_newline_yields_empty_line() {
            let v: Vec<_> = lines("a\nb\n").collect();
            assert_eq!(v, ["a", "b", ""]);
        }

        #[test]
        fn strips_carriage_return() {
            let v: Vec<_> = lines("1 2 3 4\r\n5 6 7 8\r\n").collect();
            assert_eq!(v, ["1 2 3 4", "5 6 7 8", ""]);
        }

        #[test]
        fn empty_text() {
            let v: Vec<_> = lines("").collect();
            assert_eq!(v, [""]);
        }
    }
}
