//! Section 结构定义与分节迭代器
//!
//! Section 表示一个月份的文本分节：分节头中的月份标记，以及分节头之后、
//! 下一个分节头之前的全部文本。

use regex::{Matches, Regex};
use std::iter::Peekable;

use crate::tools;

/// 一个月份分节
///
/// `label` 与 `body` 都借用自原始文档，不做任何拷贝。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// 月份标记，如 "JAN"
    pub label: &'a str,

    /// 分节头之后直到下一个分节头（或文档结尾）的文本
    pub body: &'a str,
}

impl<'a> Section<'a> {
    pub fn new(label: &'a str, body: &'a str) -> Self {
        Self { label, body }
    }

    /// 分节正文的所有行
    pub fn lines(&self) -> impl Iterator<Item = &'a str> + 'a {
        tools::lines(self.body)
    }

    /// 判断分节正文是否为空（只含空白也算空）
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// 按分节头切分文档的迭代器
///
/// 第一个分节头之前的文本不属于任何月份，会被丢弃；
/// 文档中没有分节头时迭代器直接结束。
pub struct Sections<'r, 'h> {
    haystack: &'h str,
    headers: Peekable<Matches<'r, 'h>>,
}

impl<'r, 'h> Sections<'r, 'h> {
    pub fn new(header_re: &'r Regex, haystack: &'h str) -> Self {
        Self {
            haystack,
            headers: header_re.find_iter(haystack).peekable(),
        }
    }
}

impl<'r, 'h> Iterator for Sections<'r, 'h> {
    type Item = Section<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = self.headers.next()?;

        // 正文截止到下一个分节头的起点
        let body_end = self
            .headers
            .peek()
            .map_or(self.haystack.len(), |next| next.start());

        // 分节头的第一个空白分隔的词就是月份标记，其余是年份标记
        let label = header.as_str().split_whitespace().next().unwrap_or_default();

        Some(Section::new(label, &self.haystack[header.end()..body_end]))
    }
}
