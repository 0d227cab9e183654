//! DebugStatement：包装任意预编译语句，在绑定参数时顺手记录一份格式化后的字面量，
//! 之后（通常是执行失败后）可以把模板还原成"带值"的 SQL。
//!
//! 包装层只记录，不改变任何行为：绑定、执行、错误信息全部原样委托给内部语句，
//! 内部语句返回的错误也原样返回。

use crate::bound::BoundParameters;
use crate::format::format_bound;
use crate::kind::ParamKind;
use crate::notice::Notice;
use crate::order::{SortOrder, default_sort_order};
use crate::report::{ErrorInfo, ErrorReport};
use crate::substitute::substitute;
use crate::value::{SharedValue, SqlValue};
use std::cell::RefCell;

/// 被包装的数据库语句需要提供的能力。
pub trait StatementBinder {
    type Error;

    /// 按值绑定。
    fn bind_value(
        &mut self,
        name: &str,
        value: &SqlValue,
        kind: ParamKind,
    ) -> Result<(), Self::Error>;

    /// 按引用绑定：实际值在执行时才从 `value` 读取。
    fn bind_param(
        &mut self,
        name: &str,
        value: SharedValue,
        kind: ParamKind,
    ) -> Result<(), Self::Error>;

    /// 执行；`params` 为执行时直接传入的参数（名字不带 `:`）。
    fn execute(&mut self, params: Option<&[(String, SqlValue)]>) -> Result<(), Self::Error>;

    fn error_info(&self) -> ErrorInfo;

    /// 预编译时的 SQL 模板。
    fn query_string(&self) -> &str;
}

/// 记录绑定参数的语句包装。
#[derive(Debug)]
pub struct DebugStatement<S> {
    inner: S,
    bound: BoundParameters,
    order: Option<SortOrder>,
    notices: RefCell<Vec<Notice>>,
}

impl<S: StatementBinder> DebugStatement<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            bound: BoundParameters::new(),
            order: None,
            notices: RefCell::new(Vec::new()),
        }
    }

    /// 为这条语句单独指定替换顺序（不设置时使用全局默认）。
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn bind_value(
        &mut self,
        name: &str,
        value: impl Into<SqlValue>,
        kind: ParamKind,
    ) -> Result<(), S::Error> {
        let value = value.into();
        self.record(name, &value, kind);
        self.inner.bind_value(name, &value, kind)
    }

    /// 按引用绑定；记录的是绑定这一刻的值。
    pub fn bind_param(
        &mut self,
        name: &str,
        value: SharedValue,
        kind: ParamKind,
    ) -> Result<(), S::Error> {
        {
            let current = value.borrow();
            self.record(name, &current, kind);
        }
        self.inner.bind_param(name, value, kind)
    }

    /// 执行前把直接传入的参数按字符串类型记录下来。
    pub fn execute(&mut self, params: Option<&[(String, SqlValue)]>) -> Result<(), S::Error> {
        if let Some(params) = params {
            for (name, value) in params {
                self.record(name, value, ParamKind::String);
            }
        }
        self.inner.execute(params)
    }

    pub fn error_info(&self) -> ErrorInfo {
        self.inner.error_info()
    }

    pub fn query_string(&self) -> &str {
        self.inner.query_string()
    }

    /// 用当前已记录的参数还原 SQL；一个参数都没有时记一条提示并原样返回模板。
    pub fn query(&self) -> String {
        if self.bound.is_empty() {
            self.notify(Notice::NoBoundParameters);
        }
        let order = self.order.unwrap_or_else(default_sort_order);
        substitute(self.inner.query_string(), self.bound.as_slice(), order)
    }

    /// 结合 `error_info()` 和还原后的 SQL 生成诊断报告。
    pub fn formatted_error_info(&self) -> ErrorReport {
        let info = self.inner.error_info();
        if info.is_success() {
            return ErrorReport::NoError;
        }
        ErrorReport::build(&info, &self.query())
    }

    pub fn bound_parameters(&self) -> &BoundParameters {
        &self.bound
    }

    /// 至今产生的所有提示。
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// 取出并清空提示。
    pub fn take_notices(&self) -> Vec<Notice> {
        self.notices.take()
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn record(&mut self, name: &str, value: &SqlValue, kind: ParamKind) {
        match format_bound(value, kind) {
            Ok(literal) => {
                self.bound.insert(name, literal);
            }
            Err(source) => self.notify(Notice::Unformattable {
                name: name.to_string(),
                source,
            }),
        }
    }

    fn notify(&self, notice: Notice) {
        notice.emit();
        self.notices.borrow_mut().push(notice);
    }
}
