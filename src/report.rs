//! 语句执行失败后的诊断信息：错误码、驱动消息、还原后的 SQL，以及一条"可能原因"提示。
//!
//! 提示部分是纯启发式的：从驱动消息里找 `at line N`（从 1 开始计数），取还原 SQL 中
//! 第 `N - 4` 行，也就是报错行往前数 4 行（固定偏移），猜测是否漏了逗号。结果经常不准，只作参考。

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// 表示成功的 SQLSTATE。
pub const SQLSTATE_SUCCESS: &str = "00000";

/// 无错误时的固定文案。
pub const NO_ERROR_MESSAGE: &str = "No errors occurred";

/// 提示行相对 `at line N` 的固定偏移。
const LINE_OFFSET: usize = 4;

static AT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"at line (?P<line>\d+)").expect("invalid at-line pattern")
});

/// 驱动返回的错误三元组（SQLSTATE、驱动错误码、驱动消息）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorInfo {
    pub sqlstate: String,
    pub driver_code: Option<i64>,
    pub message: Option<String>,
}

impl ErrorInfo {
    pub fn new(
        sqlstate: impl Into<String>,
        driver_code: Option<i64>,
        message: Option<String>,
    ) -> Self {
        Self {
            sqlstate: sqlstate.into(),
            driver_code,
            message,
        }
    }

    /// 成功状态（`00000`）。
    pub fn success() -> Self {
        Self {
            sqlstate: SQLSTATE_SUCCESS.to_string(),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.sqlstate == SQLSTATE_SUCCESS
    }
}

/// 对可能原因的猜测。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// 建议在这一行末尾加上逗号。
    MissingComma { line: String },
    /// 没法定位到具体行，请检查整条 SQL。
    WholeQuery { query: String },
}

/// 格式化后的错误报告。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorReport {
    NoError,
    Failed {
        sqlstate: String,
        driver_code: Option<i64>,
        message: String,
        query: String,
        hint: Option<Hint>,
    },
}

impl ErrorReport {
    /// 根据错误信息和已还原的 SQL 生成报告。
    pub fn build(info: &ErrorInfo, query: &str) -> Self {
        if info.is_success() {
            return Self::NoError;
        }

        let message = info.message.clone().unwrap_or_default();
        let hint = guess_hint(&message, query);
        Self::Failed {
            sqlstate: info.sqlstate.clone(),
            driver_code: info.driver_code,
            message,
            query: query.to_string(),
            hint,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// 旧版的 HTML 片段格式（`<strong>` 标题 + `<pre>` 内容）。
    pub fn to_html(&self) -> String {
        let Self::Failed {
            sqlstate,
            message,
            query,
            hint,
            ..
        } = self
        else {
            return NO_ERROR_MESSAGE.to_string();
        };

        let mut out = format!(
            "<strong>Error code {sqlstate}:</strong><pre> {message}</pre>\
             <strong>Executed query:</strong><pre>{query}</pre>"
        );
        match hint {
            Some(Hint::MissingComma { line }) => {
                out.push_str(&format!(
                    "<strong>Possible solution:</strong><pre>Add a \",\" at the end of line: \"{line}\"</pre>"
                ));
            }
            Some(Hint::WholeQuery { query }) => {
                out.push_str(&format!(
                    "<strong>The error should exist in this query:</strong><pre>{query}</pre>"
                ));
            }
            None => {}
        }
        out
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self::Failed {
            sqlstate,
            driver_code,
            message,
            query,
            hint,
        } = self
        else {
            return f.write_str(NO_ERROR_MESSAGE);
        };

        write!(f, "Error code {sqlstate}")?;
        if let Some(code) = driver_code {
            write!(f, " (driver code {code})")?;
        }
        writeln!(f, ": {message}")?;
        write!(f, "Executed query:\n{query}")?;
        match hint {
            Some(Hint::MissingComma { line }) => {
                write!(f, "\nPossible solution: add a \",\" at the end of line: \"{line}\"")
            }
            Some(Hint::WholeQuery { query }) => {
                write!(f, "\nThe error should exist in this query:\n{query}")
            }
            None => Ok(()),
        }
    }
}

/// 驱动消息里第一个 `at line N` 的 N。
pub(crate) fn reported_line(message: &str) -> Option<usize> {
    AT_LINE
        .captures(message)
        .and_then(|c| c.name("line"))
        .and_then(|m| m.as_str().parse().ok())
}

fn guess_hint(message: &str, query: &str) -> Option<Hint> {
    let n = reported_line(message)?;
    // 驱动行号从 1 开始。
    let index = n.saturating_sub(1).saturating_sub(LINE_OFFSET);
    let suspect = query.lines().nth(index);

    let hint = match suspect.map(str::trim) {
        Some(line) if !line.is_empty() && !line.ends_with(',') => Hint::MissingComma {
            line: line.to_string(),
        },
        _ => Hint::WholeQuery {
            query: query.to_string(),
        },
    };
    Some(hint)
}
