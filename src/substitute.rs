//! 占位符替换：把模板中的 `:name` 换成对应的字面量文本。
//!
//! 所有模式在一次从左到右的扫描中同时匹配：同一位置按排序后的顺序取第一个命中的模式，
//! 已插入的文本不会被再次扫描。没有对应条目的占位符原样保留。

use crate::order::{SortOrder, default_sort_order};

/// 占位符前缀。
pub const PLACEHOLDER_MARKER: char = ':';

/// 按默认顺序替换。
pub fn substitute_default<K, V>(template: &str, entries: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    substitute(template, entries, default_sort_order())
}

/// 用 `entries`（名字不带 `:`）替换 `template` 中的占位符。
pub fn substitute<K, V>(template: &str, entries: &[(K, V)], order: SortOrder) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let patterns = sorted_patterns(entries, order);
    if patterns.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len() + entries.len() * 8);
    let mut rest = template;
    while let Some(pos) = rest.find(PLACEHOLDER_MARKER) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match patterns.iter().find(|(p, _)| rest.starts_with(p.as_str())) {
            Some((p, literal)) => {
                out.push_str(literal);
                rest = &rest[p.len()..];
            }
            None => {
                out.push(PLACEHOLDER_MARKER);
                rest = &rest[PLACEHOLDER_MARKER.len_utf8()..];
            }
        }
    }
    out.push_str(rest);

    tracing::debug!(
        patterns = patterns.len(),
        order = %order,
        "debug.substitute"
    );
    out
}

/// 去掉名字前的 `:`（允许调用方传 `":id"` 或 `"id"`）。
pub fn strip_marker(name: &str) -> &str {
    name.strip_prefix(PLACEHOLDER_MARKER).unwrap_or(name)
}

/// 给名字加上 `:` 前缀并按 `order` 稳定排序；空名字会被跳过（否则会替换掉每个冒号）。
fn sorted_patterns<K, V>(entries: &[(K, V)], order: SortOrder) -> Vec<(String, &str)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut patterns: Vec<(String, &str)> = entries
        .iter()
        .map(|(name, literal)| (strip_marker(name.as_ref()), literal.as_ref()))
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, literal)| {
            let mut p = String::with_capacity(name.len() + 1);
            p.push(PLACEHOLDER_MARKER);
            p.push_str(name);
            (p, literal)
        })
        .collect();

    match order {
        SortOrder::ValueLength => patterns.sort_by_key(|(_, literal)| literal.len()),
        SortOrder::LongestName => {
            patterns.sort_by_key(|(p, _)| std::cmp::Reverse(p.len()));
        }
    }
    patterns
}
