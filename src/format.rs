//! 参数值 → SQL 字面量文本。
//!
//! 警告：这里的格式化只求"看得懂"，**不做任何转义**，结果不是注入安全的 SQL，
//! 只能出现在日志和错误信息里，绝不能拿去执行。

use crate::kind::ParamKind;
use crate::valuer::ValuerError;
use crate::value::SqlValue;
use std::borrow::Cow;
use time::macros::format_description;

pub const NULL_LITERAL: &str = "NULL";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("debug the data type \"{0}\" is not supported")]
    UnsupportedKind(ParamKind),
    #[error("{0}")]
    Valuer(#[from] ValuerError),
    #[error("debug failed to format datetime: {0}")]
    DateTime(String),
}

impl From<time::error::Format> for FormatError {
    fn from(e: time::error::Format) -> Self {
        Self::DateTime(e.to_string())
    }
}

/// 按声明类型格式化一个绑定值。
///
/// - `Boolean`/`Integer`：空值（NULL、false、0、""、"0"）输出 `NULL`，否则输出整数；
/// - `Null` 类型，或任何类型下的 NULL 值：输出 `NULL`；
/// - `String`：原样包进双引号，不转义内部引号；
/// - `Unspecified`：拒绝格式化。
pub fn format_bound(value: &SqlValue, kind: ParamKind) -> Result<String, FormatError> {
    let value = resolve(value)?;
    let value = value.as_ref();

    match kind {
        ParamKind::Boolean | ParamKind::Integer => {
            if is_empty(value) {
                Ok(NULL_LITERAL.to_string())
            } else {
                Ok(integer_text(value))
            }
        }
        ParamKind::Null => Ok(NULL_LITERAL.to_string()),
        _ if value.is_null() => Ok(NULL_LITERAL.to_string()),
        ParamKind::String => Ok(quote(&string_text(value)?)),
        ParamKind::Unspecified => Err(FormatError::UnsupportedKind(kind)),
    }
}

/// 没有声明类型时按值本身推断（ORM 查询对象、显式参数表使用）。
///
/// 字符串加双引号，布尔转 `1`/`0`，NULL 输出 `NULL`，数字原样输出。
pub fn format_inferred(value: &SqlValue) -> Result<String, FormatError> {
    let value = resolve(value)?;
    let s = match value.as_ref() {
        SqlValue::Null => NULL_LITERAL.to_string(),
        SqlValue::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
        SqlValue::I64(n) => n.to_string(),
        SqlValue::U64(n) => n.to_string(),
        SqlValue::F64(n) => n.to_string(),
        v @ (SqlValue::String(_) | SqlValue::DateTime(_) | SqlValue::Valuer(_)) => {
            quote(&string_text(v)?)
        }
    };
    Ok(s)
}

/// 只展开一层 Valuer；求值结果仍是 Valuer 时视为错误。
fn resolve(value: &SqlValue) -> Result<Cow<'_, SqlValue>, FormatError> {
    let SqlValue::Valuer(v) = value else {
        return Ok(Cow::Borrowed(value));
    };
    match v.value()? {
        SqlValue::Valuer(_) => Err(FormatError::Valuer(ValuerError(
            "valuer resolved to another valuer".to_string(),
        ))),
        resolved => Ok(Cow::Owned(resolved)),
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    out.push_str(s);
    out.push('"');
    out
}

fn is_empty(value: &SqlValue) -> bool {
    match value {
        SqlValue::Null => true,
        SqlValue::Bool(b) => !b,
        SqlValue::I64(n) => *n == 0,
        SqlValue::U64(n) => *n == 0,
        SqlValue::F64(n) => *n == 0.0,
        SqlValue::String(s) => s.is_empty() || s == "0",
        SqlValue::DateTime(_) | SqlValue::Valuer(_) => false,
    }
}

fn integer_text(value: &SqlValue) -> String {
    match value {
        SqlValue::Null | SqlValue::Valuer(_) => "0".to_string(),
        SqlValue::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
        SqlValue::I64(n) => n.to_string(),
        SqlValue::U64(n) => n.to_string(),
        // `as` 向零截断，NaN 为 0，越界饱和。
        SqlValue::F64(n) => (*n as i64).to_string(),
        SqlValue::String(s) => leading_integer(s).to_string(),
        SqlValue::DateTime(dt) => dt.unix_timestamp().to_string(),
    }
}

/// 取字符串开头的整数部分（可带符号，允许前导空白），没有数字时为 0。
fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut n: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = (b - b'0') as i64;
        n = if negative {
            n.saturating_mul(10).saturating_sub(d)
        } else {
            n.saturating_mul(10).saturating_add(d)
        };
    }
    n
}

fn string_text(value: &SqlValue) -> Result<String, FormatError> {
    let s = match value {
        SqlValue::Null | SqlValue::Valuer(_) => String::new(),
        SqlValue::Bool(b) => (if *b { "1" } else { "" }).to_string(),
        SqlValue::I64(n) => n.to_string(),
        SqlValue::U64(n) => n.to_string(),
        SqlValue::F64(n) => n.to_string(),
        SqlValue::String(s) => s.to_string(),
        SqlValue::DateTime(dt) => {
            dt.format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))?
        }
    };
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::leading_integer;

    #[test]
    fn leading_integer_cases() {
        assert_eq!(leading_integer("42"), 42);
        assert_eq!(leading_integer("  12abc"), 12);
        assert_eq!(leading_integer("-7 apples"), -7);
        assert_eq!(leading_integer("+3"), 3);
        assert_eq!(leading_integer("abc"), 0);
        assert_eq!(leading_integer(""), 0);
        assert_eq!(leading_integer("99999999999999999999"), i64::MAX);
    }
}
