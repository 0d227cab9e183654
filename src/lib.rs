//! halo-sql-debug：把预编译语句模板与已绑定的参数还原成可读 SQL，用于日志与错误信息。
//!
//! 安全警告：还原过程只是"尽力而为"的文本替换，字符串不做任何转义，结果**不是**注入安全的 SQL，
//! 绝不能拿去执行；需要拼接真正执行的 SQL 请使用参数化查询。

pub mod bound;
pub mod format;
pub mod kind;
pub mod notice;
pub mod order;
pub mod query;
pub mod report;
pub mod statement;
pub mod substitute;
#[cfg(test)]
mod substitute_tests;
pub mod value;
pub mod valuer;

pub use crate::bound::BoundParameters;
pub use crate::format::{FormatError, NULL_LITERAL, format_bound, format_inferred};
pub use crate::kind::ParamKind;
pub use crate::notice::Notice;
pub use crate::order::{
    SortOrder, default_sort_order, set_default_sort_order, set_default_sort_order_scoped,
};
pub use crate::query::{DebugQuery, NativeQuery, QuerySource, debug_query, debug_query_with_order};
pub use crate::report::{ErrorInfo, ErrorReport, Hint, NO_ERROR_MESSAGE, SQLSTATE_SUCCESS};
pub use crate::statement::{DebugStatement, StatementBinder};
pub use crate::substitute::{PLACEHOLDER_MARKER, substitute, substitute_default};
pub use crate::value::{SharedValue, SqlValue};
pub use crate::valuer::{SqlValuer, ValuerError};
