//! 参数声明类型。

use std::fmt;

/// 绑定参数时声明的数据类型。
///
/// 对应驱动常量（`PARAM_STR`、`PARAM_INT` 等），这里用封闭枚举显式传入。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamKind {
    #[default]
    String,
    Integer,
    Boolean,
    Null,
    /// 格式化器不支持的类型（LOB、语句句柄、驱动私有类型码等）。
    Unspecified,
}

impl ParamKind {
    /// 按常见驱动类型码映射：0 = NULL，1 = INT，2 = STR，5 = BOOL，其余为 `Unspecified`。
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Null,
            1 => Self::Integer,
            2 => Self::String,
            5 => Self::Boolean,
            _ => Self::Unspecified,
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Unspecified => "unspecified",
        };
        f.write_str(s)
    }
}
