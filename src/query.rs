//! 没有活动语句对象时的还原入口：SQL 文本 + 显式参数表，或者自带参数的 ORM 查询对象。

use crate::format::format_inferred;
use crate::notice::Notice;
use crate::order::{SortOrder, default_sort_order};
use crate::substitute::substitute;
use crate::value::SqlValue;
use std::borrow::Cow;

/// 能提供 SQL 文本（以及可选的自带参数）的查询来源。
pub trait QuerySource {
    fn sql(&self) -> Cow<'_, str>;

    /// 查询对象自己声明的参数；返回 `Some` 时调用方传入的参数表会被忽略。
    fn parameters(&self) -> Option<Vec<(String, SqlValue)>> {
        None
    }
}

impl QuerySource for str {
    fn sql(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl QuerySource for String {
    fn sql(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: QuerySource + ?Sized> QuerySource for &T {
    fn sql(&self) -> Cow<'_, str> {
        (**self).sql()
    }

    fn parameters(&self) -> Option<Vec<(String, SqlValue)>> {
        (**self).parameters()
    }
}

/// 一个最小的"原生 SQL + 命名参数"查询对象。
#[derive(Debug, Clone, Default)]
pub struct NativeQuery {
    sql: String,
    params: Vec<(String, SqlValue)>,
}

impl NativeQuery {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// 设置参数；同名参数会被覆盖。
    pub fn set_parameter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<SqlValue>,
    ) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.params.push((name, value)),
        }
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.set_parameter(name, value);
        self
    }
}

impl QuerySource for NativeQuery {
    fn sql(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.sql.as_str())
    }

    fn parameters(&self) -> Option<Vec<(String, SqlValue)>> {
        Some(self.params.clone())
    }
}

/// 还原结果：SQL 文本 + 过程中产生的提示。
#[derive(Debug, Clone, PartialEq)]
pub struct DebugQuery {
    pub sql: String,
    pub notices: Vec<Notice>,
}

/// 按默认替换顺序还原。
pub fn debug_query<Q, K, V>(source: &Q, params: impl IntoIterator<Item = (K, V)>) -> String
where
    Q: QuerySource + ?Sized,
    K: Into<String>,
    V: Into<SqlValue>,
{
    debug_query_with_order(source, params, default_sort_order()).sql
}

/// 按指定替换顺序还原，并返回提示。
pub fn debug_query_with_order<Q, K, V>(
    source: &Q,
    params: impl IntoIterator<Item = (K, V)>,
    order: SortOrder,
) -> DebugQuery
where
    Q: QuerySource + ?Sized,
    K: Into<String>,
    V: Into<SqlValue>,
{
    let params: Vec<(String, SqlValue)> = match source.parameters() {
        Some(own) => own,
        None => params
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    };

    let mut entries: Vec<(String, String)> = Vec::with_capacity(params.len());
    let mut notices = Vec::new();
    for (name, value) in params {
        match format_inferred(&value) {
            Ok(literal) => entries.push((name, literal)),
            Err(error) => {
                let notice = Notice::Unformattable {
                    name,
                    source: error,
                };
                notice.emit();
                notices.push(notice);
            }
        }
    }

    DebugQuery {
        sql: substitute(&source.sql(), &entries, order),
        notices,
    }
}
