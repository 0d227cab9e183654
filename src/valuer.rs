//! SqlValuer：渲染时才计算实际值的参数（比如 ORM 里的延迟参数、自定义类型）。
//!
//! 绑定时只保存 trait object，到格式化阶段才调用 `value()`。

use crate::value::SqlValue;

/// Valuer 求值失败。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("debug sql valuer error: {0}")]
pub struct ValuerError(pub String);

/// 可在格式化阶段动态计算实际值的 trait。
pub trait SqlValuer: dyn_clone::DynClone + std::fmt::Debug {
    fn value(&self) -> Result<SqlValue, ValuerError>;
}

dyn_clone::clone_trait_object!(SqlValuer);
