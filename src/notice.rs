//! 非致命提示：调试层自己遇到的问题只记录、打日志，从不阻断底层数据库操作。

use crate::format::FormatError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Notice {
    /// 参数无法格式化，不会产生替换条目，占位符原样留在输出里。
    #[error("debug parameter \"{name}\" was not recorded: {source}")]
    Unformattable { name: String, source: FormatError },
    /// 渲染时还没有任何已绑定参数。
    #[error("debug no named parameters are bound yet, the query is returned unchanged")]
    NoBoundParameters,
}

impl Notice {
    /// 通过 `tracing` 输出一条 warn 日志。
    pub(crate) fn emit(&self) {
        match self {
            Self::Unformattable { name, source } => {
                tracing::warn!(parameter = %name, error = %source, "debug.notice");
            }
            Self::NoBoundParameters => {
                tracing::warn!("{self}");
            }
        }
    }
}
